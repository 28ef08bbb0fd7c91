//! Mini-game sessions.
//!
//! Each game is a self-contained state machine driven by discrete actions.
//! Randomness is supplied by the caller so rounds can be reproduced from a
//! seed, and the memory game receives the current time explicitly.

mod memory;
mod pattern;
mod scramble;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::models::GameKind;
use crate::quiz::rounded_percentage;

pub use memory::{MemoryCard, MemoryGame, GRID_SIDE, SYMBOLS};
pub use pattern::{NumberPattern, PatternGame, PATTERNS};
pub use scramble::{ScrambleGame, ScrambleWord, WORDS};

/// Delay before a face-up pair of memory cards is resolved.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Running score shared by the answer-checking games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub score: u32,
    pub attempts: u32,
}

impl RoundStats {
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.score += 1;
        }
    }

    /// Percentage of correct attempts, 0 before the first attempt.
    pub fn accuracy(&self) -> u32 {
        rounded_percentage(self.score as usize, self.attempts as usize)
    }
}

/// The game currently being played.
pub enum GameSession {
    Pattern(PatternGame),
    Memory(MemoryGame),
    Scramble(ScrambleGame),
}

impl GameSession {
    /// Start the game that plays a catalog entry of the given kind.
    ///
    /// Quiz-type entries have no dedicated game and open the pattern game.
    pub fn for_kind<R: Rng + ?Sized>(kind: GameKind, reveal_delay: Duration, rng: &mut R) -> Self {
        let mut session = match kind {
            GameKind::Memory => GameSession::Memory(MemoryGame::new(reveal_delay)),
            GameKind::Word => GameSession::Scramble(ScrambleGame::new()),
            GameKind::Puzzle | GameKind::Quiz => GameSession::Pattern(PatternGame::new()),
        };
        session.new_round(rng);
        session
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameSession::Pattern(_) => "Number Patterns",
            GameSession::Memory(_) => "Memory Match",
            GameSession::Scramble(_) => "Word Scramble",
        }
    }

    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            GameSession::Pattern(game) => game.new_round(rng),
            GameSession::Memory(game) => game.new_round(rng),
            GameSession::Scramble(game) => game.new_round(rng),
        }
    }

    /// Advance time-dependent state; only the memory game has any.
    pub fn tick(&mut self, now: Instant) {
        if let GameSession::Memory(game) = self {
            game.tick(now);
        }
    }
}
