use serde::{Deserialize, Serialize};

use super::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Puzzle,
    Memory,
    Quiz,
    Word,
}

impl GameKind {
    pub fn label(self) -> &'static str {
        match self {
            GameKind::Puzzle => "puzzle",
            GameKind::Memory => "memory",
            GameKind::Quiz => "quiz",
            GameKind::Word => "word",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: GameKind,
    pub difficulty: Difficulty,
    /// Games without a subject are offered for every subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

impl Game {
    pub fn is_generic(&self) -> bool {
        self.subject_id.is_none()
    }
}
