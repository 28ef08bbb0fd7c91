use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use super::RoundStats;

const INPUT_MAX_LENGTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub sequence: [i64; 4],
    pub answer: i64,
    pub rule: &'static str,
}

pub static PATTERNS: [NumberPattern; 6] = [
    NumberPattern {
        sequence: [2, 4, 6, 8],
        answer: 10,
        rule: "Add 2 each time",
    },
    NumberPattern {
        sequence: [1, 3, 5, 7],
        answer: 9,
        rule: "Add 2 each time (odd numbers)",
    },
    NumberPattern {
        sequence: [5, 10, 15, 20],
        answer: 25,
        rule: "Add 5 each time",
    },
    NumberPattern {
        sequence: [1, 4, 7, 10],
        answer: 13,
        rule: "Add 3 each time",
    },
    NumberPattern {
        sequence: [2, 6, 18, 54],
        answer: 162,
        rule: "Multiply by 3 each time",
    },
    NumberPattern {
        sequence: [100, 90, 80, 70],
        answer: 60,
        rule: "Subtract 10 each time",
    },
];

/// Guess the next number of a sequence.
pub struct PatternGame {
    id: Uuid,
    current: Option<&'static NumberPattern>,
    input: String,
    /// Verdict of the last submission; `Some` while the answer is revealed.
    outcome: Option<bool>,
    stats: RoundStats,
}

impl Default for PatternGame {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternGame {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current: None,
            input: String::new(),
            outcome: None,
            stats: RoundStats::default(),
        }
    }

    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current = PATTERNS.choose(rng);
        self.input.clear();
        self.outcome = None;
        debug!(session = %self.id, rule = ?self.current.map(|p| p.rule), "new pattern round");
    }

    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.new_round(rng);
    }

    pub fn current(&self) -> Option<&'static NumberPattern> {
        self.current
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    /// Whether the rule and answer are on display.
    pub fn is_revealed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    /// Accepts digits, and a minus sign as the first character.
    pub fn push_char(&mut self, c: char) {
        if self.is_revealed() || self.input.len() >= INPUT_MAX_LENGTH {
            return;
        }
        if c.is_ascii_digit() || (c == '-' && self.input.is_empty()) {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Submit the typed input. Text that is not a number counts as no input.
    pub fn submit_input(&mut self) -> Option<bool> {
        let value = self.input.parse().ok();
        self.submit(value)
    }

    /// Check a guess against the current pattern.
    ///
    /// Ignored without a round, without a value, or while the previous
    /// answer is still revealed.
    pub fn submit(&mut self, value: Option<i64>) -> Option<bool> {
        let pattern = self.current?;
        let value = value?;
        if self.is_revealed() {
            return None;
        }

        let correct = value == pattern.answer;
        self.stats.record(correct);
        self.outcome = Some(correct);
        debug!(
            session = %self.id,
            value,
            correct,
            score = self.stats.score,
            attempts = self.stats.attempts,
            "pattern answer"
        );
        Some(correct)
    }
}
