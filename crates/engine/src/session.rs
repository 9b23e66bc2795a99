//! Game session: the render loop and the input thread
//!
//! ```text
//!   input thread                        render loop (caller's thread)
//!   ────────────                        ──────────────────────────────
//!   poll_action ──Commit{reply}──▶ channel ──▶ GameEngine::commit
//!        ▲                                     │  compaction animation
//!        └──────── resulting PlayState ◀───────┘  set_orientation
//!                                              tick + present every interval
//! ```
//!
//! The render loop is the only owner of the [`GameEngine`]. Waiting for the next
//! tick and waiting for commands are the same `recv_deadline` call, so a commit
//! always lands between two frames and never inside one.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::core::{Advance, CommitOutcome, GameEngine, RandomSource, SimpleRng};
use crate::debounce::Debounce;
use crate::device::{Clock, Display, InputSource, SystemClock};
use crate::types::{GameAction, PlayState};

/// Message from the input thread to the render loop.
#[derive(Debug)]
pub enum Command {
    /// Commit the moving line; the resulting state is sent back on `reply`.
    Commit { reply: Sender<PlayState> },
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub state: PlayState,
    /// The player left before the game was over.
    pub quit: bool,
}

enum TickControl {
    Continue,
    Exit,
}

/// Banner shown once the game is lost.
pub fn game_over_message(score: u32) -> String {
    format!("Game Over  Score {}", score)
}

/// A game wired to its display and clock.
pub struct Session<D: Display, C: Clock = SystemClock, R: RandomSource = SimpleRng> {
    engine: GameEngine<R>,
    display: D,
    clock: C,
    config: RuntimeConfig,
}

impl<D: Display, C: Clock, R: RandomSource> Session<D, C, R> {
    pub fn new(engine: GameEngine<R>, display: D, clock: C, config: RuntimeConfig) -> Self {
        Self {
            engine,
            display,
            clock,
            config,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Present the current stack.
    pub fn present(&mut self) -> Result<()> {
        let frame = self.engine.frame();
        self.display.present(&frame)
    }

    /// One render-loop step: advance every line and present the frame.
    pub fn step(&mut self) -> Result<()> {
        if self.engine.state() == PlayState::Play {
            self.engine.tick();
            self.present()?;
        }
        Ok(())
    }

    /// Apply a commit, including any compaction animation and rotation request.
    /// Returns the state the game is left in.
    pub fn handle_commit(&mut self) -> Result<PlayState> {
        match self.engine.commit()? {
            CommitOutcome::Stacked(advance) => self.apply_advance(advance)?,
            CommitOutcome::NeedsCompaction { rows } => {
                self.compact(rows)?;
                let advance = self.engine.finish_compaction()?;
                self.apply_advance(advance)?;
            }
            CommitOutcome::GameOver { score } => info!(score, "game over"),
            CommitOutcome::Ignored => debug!("commit after game over ignored"),
        }
        Ok(self.engine.state())
    }

    fn compact(&mut self, rows: u8) -> Result<()> {
        let step = self.engine.config().compaction_step;
        info!(rows, "compacting tower");
        for _ in 0..rows {
            let left = self.engine.compact_step()?;
            self.present()?;
            debug!(left, "removed bottom row");
            self.clock.sleep(step);
        }
        Ok(())
    }

    fn apply_advance(&mut self, advance: Advance) -> Result<()> {
        debug!(score = advance.score, length = advance.length, "line stacked");
        if let Some(steps) = advance.rotation {
            info!(steps, score = advance.score, "rotating display");
            self.display.set_orientation(steps)?;
        }
        Ok(())
    }

    /// Play until the game is lost or the player quits.
    ///
    /// Spawns the input thread, runs the render loop on the calling thread and
    /// joins the input thread before returning. On game over the final banner is
    /// shown exactly once.
    pub fn run<I>(&mut self, input: I) -> Result<RunSummary>
    where
        I: InputSource + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = bounded::<Command>(self.config.channel_capacity);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        let input_config = self.config.clone();
        let handle = thread::Builder::new()
            .name("stacker-input".to_string())
            .spawn(move || input_loop(input, cmd_tx, shutdown_rx, &input_config))
            .context("failed to spawn input thread")?;
        info!("input thread spawned");

        let outcome = self.render_loop(&cmd_rx);

        // Both disconnects wake the input thread: the shutdown channel on its next
        // poll, the command channel if it is waiting for a reply.
        drop(shutdown_tx);
        drop(cmd_rx);
        let joined = handle
            .join()
            .map_err(|_| anyhow!("input thread panicked"))?;

        let quit = outcome?;
        joined?;
        info!("input thread joined");

        if self.engine.is_over() {
            self.display
                .show_message(&game_over_message(self.engine.score()))?;
        }

        Ok(RunSummary {
            score: self.engine.score(),
            state: self.engine.state(),
            quit,
        })
    }

    /// Returns `true` when the loop ended because the player quit.
    fn render_loop(&mut self, commands: &Receiver<Command>) -> Result<bool> {
        info!(
            interval_ms = self.engine.interval().as_millis() as u64,
            "render loop started"
        );
        while self.engine.state().is_running() {
            self.step()?;
            let deadline = Instant::now() + self.engine.interval();
            if let TickControl::Exit = self.wait_for_tick(commands, deadline)? {
                return Ok(true);
            }
        }
        info!(score = self.engine.score(), "render loop finished");
        Ok(false)
    }

    /// Handle commands until `deadline`, or until the game ends.
    fn wait_for_tick(
        &mut self,
        commands: &Receiver<Command>,
        deadline: Instant,
    ) -> Result<TickControl> {
        loop {
            match commands.recv_deadline(deadline) {
                Ok(Command::Commit { reply }) => {
                    let state = self.handle_commit()?;
                    if reply.send(state).is_err() {
                        warn!("input thread dropped before commit reply");
                    }
                    if !state.is_running() {
                        return Ok(TickControl::Continue);
                    }
                }
                Ok(Command::Quit) => {
                    info!("quit received");
                    return Ok(TickControl::Exit);
                }
                Err(RecvTimeoutError::Timeout) => return Ok(TickControl::Continue),
                Err(RecvTimeoutError::Disconnected) => {
                    info!("input closed");
                    return Ok(TickControl::Exit);
                }
            }
        }
    }
}

fn millis_since(origin: Instant) -> u64 {
    origin.elapsed().as_millis().min(u64::MAX as u128) as u64
}

fn input_loop<I: InputSource>(
    mut input: I,
    commands: Sender<Command>,
    shutdown: Receiver<()>,
    config: &RuntimeConfig,
) -> Result<()> {
    let origin = Instant::now();
    let mut debounce = Debounce::new(config.debounce.as_millis() as u64);
    let poll = config.input_poll.max(Duration::from_millis(1));

    loop {
        if let Err(TryRecvError::Disconnected) = shutdown.try_recv() {
            debug!("input thread shutting down");
            return Ok(());
        }

        let Some(action) = input.poll_action(poll)? else {
            continue;
        };

        match action {
            GameAction::Quit => {
                info!("quit requested");
                let _ = commands.send(Command::Quit);
                return Ok(());
            }
            GameAction::Commit => {
                if !debounce.accepts(millis_since(origin)) {
                    debug!(window_ms = debounce.window_ms(), "press ignored while debouncing");
                    continue;
                }

                let (reply_tx, reply_rx) = bounded(1);
                if commands.send(Command::Commit { reply: reply_tx }).is_err() {
                    return Ok(());
                }
                let Ok(state) = reply_rx.recv() else {
                    return Ok(());
                };
                debounce.arm(millis_since(origin));

                if state != PlayState::Play {
                    info!(state = state.as_str(), "input thread stopping");
                    return Ok(());
                }
            }
        }
    }
}
