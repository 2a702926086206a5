//! Game state module - the controller driving one game session
//!
//! The controller owns the pile, the active/guide/next pieces, the score and
//! the gravity timer. Each public transition runs to completion before it
//! returns:
//!
//! ```text
//! spawn -> falling --(blocked tick / hard drop)--> merge -> clear? -> spawn
//!                                                    \-> game over (terminal)
//! ```
//!
//! Moves never mutate the active piece in place. A candidate is built, tested
//! with [`place::fits`], and swapped in only when legal. Rejected input is not
//! an error; the transition just reports `false`.

use crate::config::GameConfig;
use crate::pieces::Piece;
use crate::pile::Pile;
use crate::place;
use crate::rng::PieceSpawner;
use crate::scoring::{drop_interval_ms, line_clear_reward};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, LockEvent, BOARD_HEIGHT};

/// Periodic gravity timer.
///
/// Time is fed in by the caller; the timer only counts. Cancelling is
/// permanent for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl GravityTimer {
    fn start(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: true,
        }
    }

    /// Cancel and start again with a new interval. Partial progress towards
    /// the next tick is dropped, so that tick fires late rather than early.
    fn restart(&mut self, interval_ms: u32) {
        if self.running {
            *self = Self::start(interval_ms);
        }
    }

    fn cancel(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pile: Pile,
    active: Piece,
    guide: Piece,
    next: Piece,
    spawner: PieceSpawner,
    score: u32,
    /// Highest row known to hold settled cells (`BOARD_HEIGHT` when empty)
    top: usize,
    timer: GravityTimer,
    start_interval_ms: u32,
    game_over: bool,
    rows_cleared: u32,
    pieces_locked: u32,
    /// Last merge event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and default settings
    pub fn new(seed: u32) -> Self {
        Self::with_config(&GameConfig::default().with_seed(seed))
    }

    /// Create a new game: empty pile, first piece falling, gravity running.
    pub fn with_config(config: &GameConfig) -> Self {
        Self::with_pile(Pile::new(), config)
    }

    /// Start a game on a prepared pile.
    ///
    /// The top boundary is taken from the pile contents.
    pub fn with_pile(pile: Pile, config: &GameConfig) -> Self {
        let mut spawner = PieceSpawner::new(config.seed);
        let active = spawner.spawn();
        let next = spawner.spawn();
        let guide = place::resting_position(&pile, &active);
        let top = pile.highest_row().unwrap_or(BOARD_HEIGHT);

        Self {
            pile,
            active,
            guide,
            next,
            spawner,
            score: 0,
            top,
            timer: GravityTimer::start(config.start_interval_ms),
            start_interval_ms: config.start_interval_ms,
            game_over: false,
            rows_cleared: 0,
            pieces_locked: 0,
            last_event: None,
        }
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Where the active piece would land if hard dropped now
    pub fn guide(&self) -> Piece {
        self.guide
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval
    pub fn interval_ms(&self) -> u32 {
        self.timer.interval_ms
    }

    pub fn timer_running(&self) -> bool {
        self.timer.running
    }

    /// Total rows cleared this session
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Total pieces merged into the pile this session
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    /// Take and clear the last merge event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the active piece (test setup hook).
    ///
    /// Returns false and changes nothing when the piece does not fit.
    pub fn set_active(&mut self, piece: Piece) -> bool {
        !self.game_over && self.try_replace(piece)
    }

    /// Apply a player command. Returns whether it was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::ShiftLeft => self.try_replace(self.active.moved(-1, 0)),
            GameAction::ShiftRight => self.try_replace(self.active.moved(1, 0)),
            GameAction::RotateLeft => self.try_replace(self.active.rotated_ccw()),
            GameAction::RotateRight => self.try_replace(self.active.rotated_cw()),
            GameAction::SoftDrop => {
                self.tick();
                true
            }
            GameAction::HardDrop => {
                self.active = self.guide;
                self.merge_active();
                true
            }
        }
    }

    /// One gravity step: move the active piece down a row, or merge it if
    /// it cannot move.
    ///
    /// Returns true if the piece moved. Does nothing after game over.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = self.active.moved(0, 1);
        if place::fits(&self.pile, &candidate) {
            self.active = candidate;
            true
        } else {
            self.merge_active();
            false
        }
    }

    /// Feed elapsed time to the gravity timer, firing [`GameState::tick`]
    /// once per full interval.
    ///
    /// Returns the number of ticks fired. A merge that cancels or restarts
    /// the timer also discards the time left over in this call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.timer.running {
            return 0;
        }

        self.timer.elapsed_ms = self.timer.elapsed_ms.saturating_add(elapsed_ms);
        let mut fired = 0;

        while self.timer.running && self.timer.elapsed_ms >= self.timer.interval_ms {
            self.timer.elapsed_ms -= self.timer.interval_ms;
            self.tick();
            fired += 1;
        }

        fired
    }

    fn try_replace(&mut self, candidate: Piece) -> bool {
        if !place::fits(&self.pile, &candidate) {
            return false;
        }
        self.guide = place::resting_position(&self.pile, &candidate);
        self.active = candidate;
        true
    }

    /// Merge the active piece, clear rows, score, and bring in the next piece.
    fn merge_active(&mut self) {
        let top_row = place::merge(&mut self.pile, &self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        if place::is_topped_out(top_row) {
            self.game_over = true;
            self.timer.cancel();
            self.last_event = Some(LockEvent {
                top_row,
                rows_cleared: 0,
                score_delta: 0,
                cleared: None,
                game_over: true,
            });
            return;
        }

        self.top = self.top.min(top_row.unwrap_or(BOARD_HEIGHT));
        let report = place::scan_and_clear_rows(&mut self.pile, self.top);
        let count = report.count();

        let mut score_delta = 0;
        if count > 0 {
            score_delta = line_clear_reward(count);
            self.score = self.score.saturating_add(score_delta);
            self.rows_cleared += count as u32;
            self.top = (self.top + count).min(BOARD_HEIGHT);
            self.timer
                .restart(drop_interval_ms(self.start_interval_ms, self.score));
        }

        self.active = self.next;
        self.guide = place::resting_position(&self.pile, &self.active);
        self.next = self.spawner.spawn();

        self.last_event = Some(LockEvent {
            top_row,
            rows_cleared: count as u32,
            score_delta,
            cleared: report.range,
            game_over: false,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.pile.write_u8_grid(&mut out.board);

        let live = !self.game_over;
        out.active = live.then(|| PieceSnapshot::from(self.active));
        out.guide = live.then(|| PieceSnapshot::from(self.guide));
        out.next = self.next.kind;
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.interval_ms = self.timer.interval_ms;
        out.game_over = self.game_over;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
