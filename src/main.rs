//! Stacker runner (default binary).
//!
//! Plays the game on an emulated 8x8 LED panel in the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing::{error, info};

use stacker::cli::{parse_args, USAGE};
use stacker::core::{EngineConfig, GameEngine, SimpleRng};
use stacker::engine::{Display, RunSummary, RuntimeConfig, Session, SystemClock};
use stacker::input::TerminalInput;
use stacker::logging;
use stacker::term::TerminalDisplay;

const INTRO: &str = "Stacker";
const FAREWELL: &str = "Thank you for playing!";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    logging::init()?;

    let mut engine_config = EngineConfig::from_env();
    if cli.no_hard_mode {
        engine_config.hard_mode = false;
    }
    let runtime_config = RuntimeConfig::from_env();
    let seed = cli.seed.or_else(seed_from_env).unwrap_or_else(clock_seed);
    info!(seed, ?engine_config, "starting");

    let engine = GameEngine::with_rng(engine_config, SimpleRng::new(seed))?;

    let mut display = TerminalDisplay::new();
    display.enter()?;

    let result = play(&mut display, engine, runtime_config);

    // Always try to restore terminal state.
    let _ = display.exit();

    match result {
        Ok(summary) => {
            info!(score = summary.score, quit = summary.quit, "finished");
            println!("Final score: {}", summary.score);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "game aborted");
            Err(e)
        }
    }
}

fn play(
    display: &mut TerminalDisplay,
    engine: GameEngine,
    config: RuntimeConfig,
) -> Result<RunSummary> {
    display.show_message(INTRO)?;

    let mut session = Session::new(engine, &mut *display, SystemClock, config);
    let summary = session.run(TerminalInput::new())?;
    drop(session);

    if summary.quit {
        display.show_message(FAREWELL)?;
    }
    Ok(summary)
}

fn seed_from_env() -> Option<u32> {
    std::env::var("STACKER_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
