//! Game engine module - the stack of lines and the commit rules
//!
//! `GameEngine` owns every line on the board and the play state. It is a plain
//! state machine with no clocks or I/O: the caller decides when to
//! [`tick`](GameEngine::tick) and when to [`commit`](GameEngine::commit), and
//! drives the overflow compaction one row at a time so it can animate it.
//!
//! ```text
//!   Play ──commit, no overlap──────────────▶ GameOver
//!    │ ▲
//!    │ └──finish_compaction── Pause ◀──┐
//!    │                                  │
//!    └──commit, stack full──────────────┘
//! ```

use std::time::Duration;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineFault;
use crate::line::Line;
use crate::matrix::{Matrix, Surface};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Direction, PlayState, BOARD_HEIGHT, BOARD_WIDTH, ORIENTATIONS};

const STACK_CAPACITY: usize = BOARD_HEIGHT as usize;

/// Columns shared by two lines, clipped to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub start: i8,
    pub end: i8,
}

impl Overlap {
    /// Surviving span (`end - start`); a single shared column has width 0.
    pub fn width(&self) -> u8 {
        (self.end - self.start) as u8
    }
}

/// Intersect two lines' columns within the board.
///
/// Returns `None` when they share no on-board column. Symmetric in its
/// arguments.
pub fn overlap(a: &Line, b: &Line) -> Option<Overlap> {
    let start = a.x().max(b.x()).max(0);
    let end = a.end().min(b.end()).min(BOARD_WIDTH as i8 - 1);
    if end < start {
        None
    } else {
        Some(Overlap { start, end })
    }
}

/// What a successful commit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Length of the freshly spawned line.
    pub length: u8,
    pub score: u32,
    /// Orientation to request from the display (hard mode only).
    pub rotation: Option<u8>,
}

/// Result of [`GameEngine::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The line missed the one below it.
    GameOver { score: u32 },
    /// The line was trimmed and a new one is moving.
    Stacked(Advance),
    /// The board is full; the engine is paused until the caller has run
    /// [`GameEngine::compact_step`] and [`GameEngine::finish_compaction`].
    NeedsCompaction { rows: u8 },
    /// The game is already over; nothing happened.
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R: RandomSource = SimpleRng> {
    config: EngineConfig,
    lines: ArrayVec<Line, STACK_CAPACITY>,
    state: PlayState,
    /// Seconds between ticks.
    interval: f64,
    score: u32,
    /// Length of the next line while a compaction is pending.
    pending_length: Option<u8>,
    rng: R,
}

impl GameEngine<SimpleRng> {
    /// Create a new game with default tuning and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            config: EngineConfig::default(),
            lines: ArrayVec::new(),
            state: PlayState::Play,
            interval: EngineConfig::default().initial_interval,
            score: 0,
            pending_length: None,
            rng: SimpleRng::new(seed),
        }
        .with_first_line()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a game with explicit tuning and random source.
    ///
    /// The first line enters from the left edge.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, EngineFault> {
        config.validate()?;
        let engine = Self {
            interval: config.initial_interval,
            config,
            lines: ArrayVec::new(),
            state: PlayState::Play,
            score: 0,
            pending_length: None,
            rng,
        };
        Ok(engine.with_first_line())
    }

    /// Start from a prepared stack, bottom row first. The last line is the one
    /// in play; every other line is frozen.
    pub fn with_stack<I>(config: EngineConfig, rng: R, lines: I) -> Result<Self, EngineFault>
    where
        I: IntoIterator<Item = Line>,
    {
        config.validate()?;
        let mut stack = ArrayVec::<Line, STACK_CAPACITY>::new();
        let mut count = 0usize;
        for line in lines {
            count += 1;
            if stack.try_push(line).is_err() {
                return Err(EngineFault::StackOverflow(count));
            }
        }
        if stack.is_empty() {
            return Err(EngineFault::EmptyStack);
        }
        let top = stack.len() - 1;
        for line in &mut stack[..top] {
            line.stop();
        }
        Ok(Self {
            interval: config.initial_interval,
            config,
            lines: stack,
            state: PlayState::Play,
            score: 0,
            pending_length: None,
            rng,
        })
    }

    fn with_first_line(mut self) -> Self {
        self.lines.push(Line::new(
            -1,
            self.config.initial_length,
            Direction::MovingRight,
        ));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lines from the bottom of the stack up.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line currently in play (the top of the stack).
    pub fn current(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == PlayState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds between ticks.
    pub fn interval_secs(&self) -> f64 {
        self.interval
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    /// Advance every line by one step. Does nothing unless playing.
    pub fn tick(&mut self) {
        if self.state != PlayState::Play {
            return;
        }
        for line in &mut self.lines {
            line.advance();
        }
    }

    /// Draw the stack, bottom line on the bottom row.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (index, line) in self.lines.iter().enumerate() {
            line.render(surface, BOARD_HEIGHT - 1 - index as u8);
        }
    }

    /// Render into a fresh frame.
    pub fn frame(&self) -> Matrix {
        let mut matrix = Matrix::new();
        self.render(&mut matrix);
        matrix
    }

    /// Freeze the moving line and trim it against the one below.
    pub fn commit(&mut self) -> Result<CommitOutcome, EngineFault> {
        match self.state {
            PlayState::Play => {}
            PlayState::GameOver => return Ok(CommitOutcome::Ignored),
            PlayState::Pause => {
                return Err(EngineFault::WrongState {
                    action: "commit",
                    state: self.state,
                })
            }
        }

        let top = self.lines.len().checked_sub(1).ok_or(EngineFault::EmptyStack)?;
        self.lines[top].stop();

        let below = if top > 0 { top - 1 } else { top };
        let moving = self.lines[top];
        let Some(shared) = overlap(&moving, &self.lines[below]) else {
            debug!(x = moving.x(), span = moving.span(), score = self.score, "line missed the stack");
            self.state = PlayState::GameOver;
            return Ok(CommitOutcome::GameOver { score: self.score });
        };

        let width = shared.width();
        self.lines[top].trim(shared.start, width);
        debug!(
            from_x = moving.x(),
            from_span = moving.span(),
            x = shared.start,
            span = width,
            "trimmed committed line"
        );

        if self.lines.len() == STACK_CAPACITY {
            self.state = PlayState::Pause;
            self.pending_length = Some(width + 1);
            debug!(rows = self.config.compaction_rows, "stack full, compacting");
            return Ok(CommitOutcome::NeedsCompaction {
                rows: self.config.compaction_rows,
            });
        }

        Ok(CommitOutcome::Stacked(self.level_up(width + 1)))
    }

    /// Remove the bottom row during compaction. Returns the rows left.
    pub fn compact_step(&mut self) -> Result<usize, EngineFault> {
        if self.state != PlayState::Pause {
            return Err(EngineFault::WrongState {
                action: "compact",
                state: self.state,
            });
        }
        if !self.lines.is_empty() {
            self.lines.remove(0);
        }
        Ok(self.lines.len())
    }

    /// End the compaction: spawn the next line and resume play.
    pub fn finish_compaction(&mut self) -> Result<Advance, EngineFault> {
        let pending = match self.state {
            PlayState::Pause => self.pending_length.take(),
            _ => None,
        };
        let Some(length) = pending else {
            return Err(EngineFault::WrongState {
                action: "finish compaction",
                state: self.state,
            });
        };
        self.state = PlayState::Play;
        Ok(self.level_up(length))
    }

    fn level_up(&mut self, length: u8) -> Advance {
        let rotation = if self.config.rotates_at(self.score) {
            Some(self.rng.next_range(ORIENTATIONS as u32) as u8)
        } else {
            None
        };

        let edge = self.rng.next_edge();
        self.lines.push(Line::spawn(length, edge));

        self.score += 1;
        self.interval = self.config.interval_after(self.score);
        debug!(
            score = self.score,
            length,
            edge = ?edge,
            interval = self.interval,
            "spawned next line"
        );

        Advance {
            length,
            score: self.score,
            rotation,
        }
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    /// Always returns the same value.
    struct Constant(u32);

    impl RandomSource for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    fn always_left() -> Constant {
        Constant(0)
    }

    fn engine_with(lines: Vec<Line>) -> GameEngine<Constant> {
        GameEngine::with_stack(EngineConfig::default(), always_left(), lines).unwrap()
    }

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new(1);
        assert_eq!(engine.state(), PlayState::Play);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lines().len(), 1);

        let first = engine.current().unwrap();
        assert_eq!(first.x(), -1);
        assert_eq!(first.length(), 4);
        assert_eq!(first.direction(), Direction::MovingRight);
    }

    #[test]
    fn test_tick_moves_only_the_top_line() {
        let mut engine = engine_with(vec![
            Line::stopped(2, 4),
            Line::new(0, 4, Direction::MovingRight),
        ]);
        engine.tick();
        assert_eq!(engine.lines()[0].x(), 2);
        assert_eq!(engine.lines()[1].x(), 1);
    }

    #[test]
    fn test_first_commit_clips_to_board() {
        let mut engine = GameEngine::with_rng(EngineConfig::default(), always_left()).unwrap();
        // Line sits at x=-1, columns -1..=2.
        let outcome = engine.commit().unwrap();
        let trimmed = engine.lines()[0];
        assert_eq!(trimmed.x(), 0);
        assert_eq!(trimmed.span(), 2);
        assert_eq!(
            outcome,
            CommitOutcome::Stacked(Advance {
                length: 3,
                score: 1,
                rotation: None
            })
        );
        assert_eq!(engine.current().unwrap().x(), -1);
    }

    #[test]
    fn test_commit_trims_against_line_below() {
        let mut engine = engine_with(vec![
            Line::stopped(2, 4),
            Line::new(3, 4, Direction::MovingRight),
        ]);
        engine.commit().unwrap();

        let trimmed = engine.lines()[1];
        assert_eq!(trimmed.x(), 3);
        assert_eq!(trimmed.span(), 2);
        assert_eq!(trimmed.direction(), Direction::Stopped);
        assert_eq!(engine.lines().len(), 3);
        assert_eq!(engine.current().unwrap().length(), 3);
    }

    #[test]
    fn test_commit_miss_is_game_over() {
        let mut engine = engine_with(vec![
            Line::stopped(5, 3),
            Line::new(0, 3, Direction::MovingLeft),
        ]);
        let outcome = engine.commit().unwrap();
        assert_eq!(outcome, CommitOutcome::GameOver { score: 0 });
        assert!(engine.is_over());
        assert_eq!(engine.lines().len(), 2);

        // Terminal: nothing moves, further commits are ignored.
        engine.tick();
        assert_eq!(engine.lines()[1].x(), 0);
        assert_eq!(engine.commit().unwrap(), CommitOutcome::Ignored);
    }

    #[test]
    fn test_single_column_overlap_survives() {
        let mut engine = engine_with(vec![
            Line::stopped(0, 4),
            Line::new(3, 4, Direction::MovingRight),
        ]);
        let outcome = engine.commit().unwrap();
        assert!(matches!(outcome, CommitOutcome::Stacked(Advance { length: 1, .. })));
        assert_eq!(engine.lines()[1].span(), 0);
    }

    #[test]
    fn test_full_stack_requests_compaction() {
        let mut lines: Vec<Line> = (0..7).map(|_| Line::stopped(2, 3)).collect();
        lines.push(Line::new(2, 3, Direction::MovingLeft));
        let mut engine = engine_with(lines);

        let outcome = engine.commit().unwrap();
        assert_eq!(outcome, CommitOutcome::NeedsCompaction { rows: 5 });
        assert_eq!(engine.state(), PlayState::Pause);
        assert_eq!(engine.score(), 0);

        // Paused: ticks and commits are refused or ignored.
        engine.tick();
        assert!(engine.commit().is_err());

        for expected in (3..8).rev() {
            assert_eq!(engine.compact_step().unwrap(), expected);
        }
        let advance = engine.finish_compaction().unwrap();
        assert_eq!(advance.length, 3);
        assert_eq!(advance.score, 1);
        assert_eq!(engine.state(), PlayState::Play);
        assert_eq!(engine.lines().len(), 4);
        assert_eq!(engine.current().unwrap().x(), -1);
    }

    #[test]
    fn test_compaction_outside_pause_is_a_fault() {
        let mut engine = GameEngine::new(5);
        assert!(matches!(
            engine.compact_step(),
            Err(EngineFault::WrongState { .. })
        ));
        assert!(engine.finish_compaction().is_err());
    }

    #[test]
    fn test_with_stack_validation() {
        assert_eq!(
            GameEngine::with_stack(EngineConfig::default(), always_left(), Vec::new()).err(),
            Some(EngineFault::EmptyStack)
        );
        let too_many: Vec<Line> = (0..9).map(|_| Line::stopped(0, 8)).collect();
        assert_eq!(
            GameEngine::with_stack(EngineConfig::default(), always_left(), too_many).err(),
            Some(EngineFault::StackOverflow(9))
        );
    }

    #[test]
    fn test_with_stack_freezes_lower_lines() {
        let engine = engine_with(vec![
            Line::new(0, 3, Direction::MovingRight),
            Line::new(0, 3, Direction::MovingRight),
        ]);
        assert!(!engine.lines()[0].is_moving());
        assert!(engine.lines()[1].is_moving());
    }

    #[test]
    fn test_render_places_bottom_line_on_last_row() {
        let engine = engine_with(vec![
            Line::stopped(0, 2),
            Line::new(4, 3, Direction::MovingRight),
        ]);
        let frame = engine.frame();
        assert_eq!(frame.row(7), 0b0000_0011);
        assert_eq!(frame.row(6), 0b0111_0000);
        assert_eq!(frame.lit_count(), 5);
    }

    #[test]
    fn test_spawn_edge_follows_rng() {
        let mut engine = GameEngine::with_stack(
            EngineConfig::default(),
            Constant(u32::MAX),
            vec![Line::new(1, 4, Direction::MovingRight)],
        )
        .unwrap();
        engine.commit().unwrap();
        let next = engine.current().unwrap();
        assert_eq!(next.direction(), Edge::Right.inward());
        assert_eq!(next.end(), 8);
    }

    #[test]
    fn test_overlap_helper() {
        let a = Line::stopped(0, 3);
        let b = Line::stopped(5, 3);
        assert_eq!(overlap(&a, &b), None);

        let c = Line::stopped(2, 4);
        assert_eq!(overlap(&a, &c), Some(Overlap { start: 2, end: 2 }));
        assert_eq!(overlap(&c, &a), overlap(&a, &c));
    }
}
