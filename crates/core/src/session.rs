//! Session module - the driver half of a game
//!
//! A [`Board`] only knows how to perform single transitions. A [`Session`]
//! adds what a live game needs around it:
//!
//! - a gravity timer that turns elapsed milliseconds into `advance_tick` calls,
//! - pause (no ticks, no movement),
//! - game-over gating (nothing reaches the board once it has topped out),
//! - restart with a fresh, reseeded board.

use crate::board::Board;
use crate::config::SessionConfig;
use crate::rng::Randomizer;
use crate::snapshot::BoardSnapshot;
use crate::types::{GameAction, GameStatus, TickOutcome};

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board<Randomizer>,
    paused: bool,
    drop_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode: u32,
}

impl Session {
    /// Build the board described by `config` and start it.
    pub fn new(config: SessionConfig) -> Self {
        let board = build_board(&config, config.seed);
        Self {
            config,
            board,
            paused: false,
            drop_timer_ms: 0,
            episode: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board<Randomizer> {
        &self.board
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.board.status() == GameStatus::GameOver
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Seed used for the current episode
    pub fn seed(&self) -> u32 {
        self.config.seed.wrapping_add(self.episode)
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Runs one `advance_tick` per full gravity interval and returns the last
    /// outcome, or `None` if no gravity step was due. Stops at game over.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        if self.paused || self.game_over() {
            return None;
        }

        let interval = self.config.gravity_ms.max(1);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        let mut outcome = None;
        while self.drop_timer_ms >= interval {
            self.drop_timer_ms -= interval;
            let step = self.board.advance_tick();
            outcome = Some(step);
            if step == TickOutcome::GameOver {
                self.drop_timer_ms = 0;
                break;
            }
        }
        outcome
    }

    /// Apply a player action.
    ///
    /// Movement is ignored while paused or after game over. `Pause` toggles
    /// pause unless the game is over; `Restart` always starts a new episode.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over() {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.paused || self.game_over() => false,
            GameAction::SoftDrop => {
                let moved = self.board.apply_action(action);
                if moved {
                    // The player just did gravity's job.
                    self.drop_timer_ms = 0;
                }
                moved
            }
            _ => self.board.apply_action(action),
        }
    }

    /// Replace the board with a fresh one for the next episode
    pub fn restart(&mut self) {
        self.episode = self.episode.wrapping_add(1);
        self.board = build_board(&self.config, self.seed());
        self.paused = false;
        self.drop_timer_ms = 0;
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.board.snapshot_into(out);
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn build_board(config: &SessionConfig, seed: u32) -> Board<Randomizer> {
    let source = Randomizer::new(config.randomizer, seed);
    let mut board = if config.random_fill {
        // Keep the filler independent from the piece sequence.
        Board::with_random_fill(config.width, config.height, source, seed.rotate_left(16))
    } else {
        Board::new(config.width, config.height, source)
    };
    board.start();
    board
}
