use serde::{Deserialize, Serialize};

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
    pub explanation: String,
    pub topic_id: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}
