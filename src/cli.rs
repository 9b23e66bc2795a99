use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: stacker [--seed <n>] [--no-hard-mode]

Stack the moving line on top of the tower. Space, Enter or Up commits,
q or Esc quits.

options:
  --seed <n>       seed the line spawner (also STACKER_SEED)
  --no-hard-mode   never rotate the display
  -h, --help       print this message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<u32>,
    pub no_hard_mode: bool,
    pub help: bool,
}

/// Parse arguments, not including the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                out.seed = Some(seed);
            }
            "--no-hard-mode" => out.no_hard_mode = true,
            "-h" | "--help" => out.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(out)
}
