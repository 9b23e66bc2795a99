//! Runtime tests: the render loop and input thread wired to fake devices.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use stacker::core::{EngineConfig, GameEngine, Line, Matrix, RandomSource};
use stacker::engine::{game_over_message, Clock, Display, InputSource, RuntimeConfig, Session};
use stacker::types::{Direction, GameAction, PlayState};

/// `u32::MAX` makes every spawn come from the right edge.
struct Constant(u32);

impl RandomSource for Constant {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
struct RecordingDisplay {
    frames: Vec<Matrix>,
    orientations: Vec<u8>,
    messages: Vec<String>,
}

impl Display for RecordingDisplay {
    fn present(&mut self, frame: &Matrix) -> Result<()> {
        self.frames.push(*frame);
        Ok(())
    }

    fn set_orientation(&mut self, steps: u8) -> Result<()> {
        self.orientations.push(steps);
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ManualClock {
    slept: Vec<Duration>,
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}

/// Hands out a fixed list of actions, then stays idle.
struct ScriptedInput {
    actions: VecDeque<GameAction>,
}

impl ScriptedInput {
    fn new(actions: &[GameAction]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        match self.actions.pop_front() {
            Some(action) => Ok(Some(action)),
            None => {
                thread::sleep(timeout.min(Duration::from_millis(1)));
                Ok(None)
            }
        }
    }
}

/// Ticks slow enough that every scripted command lands between the first two
/// frames.
fn slow_config() -> EngineConfig {
    EngineConfig {
        initial_interval: 10.0,
        min_interval: 10.0,
        ..EngineConfig::default()
    }
}

fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        debounce: Duration::ZERO,
        input_poll: Duration::from_millis(5),
        ..RuntimeConfig::default()
    }
}

#[test]
fn test_game_over_shows_final_message_once() {
    let engine = GameEngine::with_rng(slow_config(), Constant(u32::MAX)).unwrap();
    let mut session = Session::new(
        engine,
        RecordingDisplay::default(),
        ManualClock::default(),
        runtime_config(),
    );

    // First commit lands at cols 0..=3 and the next line enters at cols 5..=8;
    // committing it straight away misses.
    let input = ScriptedInput::new(&[GameAction::Commit, GameAction::Commit, GameAction::Commit]);
    let summary = session.run(input).unwrap();

    assert_eq!(summary.state, PlayState::GameOver);
    assert_eq!(summary.score, 1);
    assert!(!summary.quit);

    let display = session.display();
    assert_eq!(display.messages, vec![game_over_message(1)]);
    assert_eq!(display.frames.len(), 1);
    assert!(display.orientations.is_empty());

    // The failing line is left where it was committed.
    let lines = session.engine().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].x(), 5);
    assert_eq!(lines[1].direction(), Direction::Stopped);
}

#[test]
fn test_quit_ends_without_banner() {
    let engine = GameEngine::with_rng(slow_config(), Constant(0)).unwrap();
    let mut session = Session::new(
        engine,
        RecordingDisplay::default(),
        ManualClock::default(),
        runtime_config(),
    );

    let summary = session.run(ScriptedInput::new(&[GameAction::Quit])).unwrap();

    assert!(summary.quit);
    assert_eq!(summary.state, PlayState::Play);
    assert_eq!(summary.score, 0);
    assert!(session.display().messages.is_empty());
}

#[test]
fn test_input_error_is_fatal() {
    struct Broken;

    impl InputSource for Broken {
        fn poll_action(&mut self, _timeout: Duration) -> Result<Option<GameAction>> {
            Err(anyhow::anyhow!("input device unplugged"))
        }
    }

    let engine = GameEngine::with_rng(slow_config(), Constant(0)).unwrap();
    let mut session = Session::new(
        engine,
        RecordingDisplay::default(),
        ManualClock::default(),
        runtime_config(),
    );

    let err = session.run(Broken).unwrap_err();
    assert!(err.to_string().contains("unplugged"));
}

#[test]
fn test_compaction_animates_one_frame_per_row() {
    let mut lines: Vec<Line> = (0..7).map(|_| Line::stopped(0, 8)).collect();
    lines.push(Line::new(0, 8, Direction::MovingRight));
    let engine = GameEngine::with_stack(EngineConfig::default(), Constant(0), lines).unwrap();
    let mut session = Session::new(
        engine,
        RecordingDisplay::default(),
        ManualClock::default(),
        runtime_config(),
    );

    let state = session.handle_commit().unwrap();
    assert_eq!(state, PlayState::Play);

    let frames = &session.display().frames;
    assert_eq!(frames.len(), 5);
    let lit: Vec<u32> = frames.iter().map(|f| f.lit_count()).collect();
    assert_eq!(lit, vec![56, 48, 40, 32, 24]);

    assert_eq!(session.clock().slept, vec![Duration::from_millis(100); 5]);
    assert_eq!(session.engine().lines().len(), 4);
}

#[test]
fn test_hard_mode_commit_sets_orientation() {
    let config = EngineConfig {
        hard_mode_score: 0,
        ..EngineConfig::default()
    };
    let engine = GameEngine::with_rng(config, Constant(u32::MAX)).unwrap();
    let mut session = Session::new(
        engine,
        RecordingDisplay::default(),
        ManualClock::default(),
        runtime_config(),
    );

    session.step().unwrap();
    assert_eq!(session.handle_commit().unwrap(), PlayState::Play);
    assert_eq!(session.display().orientations, vec![3]);
}
