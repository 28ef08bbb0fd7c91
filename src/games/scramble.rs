use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use super::RoundStats;

const INPUT_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleWord {
    pub word: &'static str,
    pub hint: &'static str,
    pub category: &'static str,
}

pub static WORDS: [ScrambleWord; 6] = [
    ScrambleWord {
        word: "PHOTOSYNTHESIS",
        hint: "Process by which plants make food using sunlight",
        category: "Biology",
    },
    ScrambleWord {
        word: "GRAVITY",
        hint: "Force that pulls objects toward Earth",
        category: "Physics",
    },
    ScrambleWord {
        word: "MOLECULE",
        hint: "Smallest unit of a chemical compound",
        category: "Chemistry",
    },
    ScrambleWord {
        word: "TRIANGLE",
        hint: "Shape with three sides and three angles",
        category: "Mathematics",
    },
    ScrambleWord {
        word: "ELECTRON",
        hint: "Negatively charged particle in an atom",
        category: "Chemistry",
    },
    ScrambleWord {
        word: "FRACTION",
        hint: "Part of a whole number",
        category: "Mathematics",
    },
];

/// Unscramble a science or maths term.
pub struct ScrambleGame {
    id: Uuid,
    current: Option<&'static ScrambleWord>,
    scrambled: String,
    input: String,
    hint_visible: bool,
    outcome: Option<bool>,
    stats: RoundStats,
}

impl Default for ScrambleGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrambleGame {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current: None,
            scrambled: String::new(),
            input: String::new(),
            hint_visible: false,
            outcome: None,
            stats: RoundStats::default(),
        }
    }

    /// Pick a word and shuffle its letters. The shuffle may leave the word
    /// unchanged.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current = WORDS.choose(rng);
        self.scrambled = self
            .current
            .map(|entry| scramble(entry.word, rng))
            .unwrap_or_default();
        self.input.clear();
        self.hint_visible = false;
        self.outcome = None;
        debug!(session = %self.id, scrambled = %self.scrambled, "new scramble round");
    }

    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.new_round(rng);
    }

    pub fn current(&self) -> Option<&'static ScrambleWord> {
        self.current
    }

    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    pub fn is_revealed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_revealed() && c.is_alphabetic() && self.input.chars().count() < INPUT_MAX_LENGTH {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn submit_input(&mut self) -> Option<bool> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Compare a guess with the word, ignoring case and surrounding spaces.
    pub fn submit(&mut self, text: &str) -> Option<bool> {
        let entry = self.current?;
        let guess = text.trim();
        if guess.is_empty() || self.is_revealed() {
            return None;
        }

        let correct = guess.to_uppercase() == entry.word.to_uppercase();
        self.stats.record(correct);
        self.outcome = Some(correct);
        debug!(
            session = %self.id,
            correct,
            score = self.stats.score,
            attempts = self.stats.attempts,
            "scramble answer"
        );
        Some(correct)
    }
}

fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn game_with(entry: &'static ScrambleWord) -> ScrambleGame {
        let mut game = ScrambleGame::new();
        game.current = Some(entry);
        game.scrambled = entry.word.chars().rev().collect();
        game
    }

    fn sorted(word: &str) -> Vec<char> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn test_scramble_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut game = ScrambleGame::new();
        for _ in 0..20 {
            game.new_round(&mut rng);
            let entry = game.current().unwrap();
            assert_eq!(sorted(game.scrambled()), sorted(entry.word));
        }
    }

    #[test]
    fn test_comparison_ignores_case() {
        let mut game = game_with(&WORDS[0]);
        assert_eq!(game.submit("photosynthesis"), Some(true));
        assert_eq!(game.stats().score, 1);

        let mut game = game_with(&WORDS[0]);
        assert_eq!(game.submit("  PhotoSynthesis "), Some(true));
    }

    #[test]
    fn test_wrong_guess() {
        let mut game = game_with(&WORDS[1]);
        assert_eq!(game.submit("gravitas"), Some(false));
        assert_eq!(game.stats().score, 0);
        assert_eq!(game.stats().attempts, 1);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut game = game_with(&WORDS[2]);
        assert_eq!(game.submit(""), None);
        assert_eq!(game.submit("   "), None);
        assert_eq!(game.submit_input(), None);
        assert_eq!(game.stats().attempts, 0);
    }

    #[test]
    fn test_hint_never_touches_score() {
        let mut game = game_with(&WORDS[3]);
        game.submit("triangle");
        let before = game.stats();

        game.toggle_hint();
        assert!(game.hint_visible());
        game.toggle_hint();
        assert!(!game.hint_visible());
        assert_eq!(game.stats(), before);
    }

    #[test]
    fn test_typed_input_letters_only() {
        let mut game = game_with(&WORDS[4]);
        for c in "elec-tron1".chars() {
            game.push_char(c);
        }
        assert_eq!(game.input(), "electron");
        assert_eq!(game.submit_input(), Some(true));
    }

    #[test]
    fn test_new_round_resets_hint_and_input() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = ScrambleGame::new();
        game.new_round(&mut rng);
        game.toggle_hint();
        game.push_char('x');
        game.submit_input();

        game.next(&mut rng);
        assert!(!game.hint_visible());
        assert!(!game.is_revealed());
        assert_eq!(game.input(), "");
        assert_eq!(game.stats().attempts, 1);
    }
}
