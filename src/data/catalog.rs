//! The read-only content catalog: subjects, topics, questions and games.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClassBand, Game, Question, Subject, Topic, CLASS_LEVELS, OPTION_COUNT};

use super::loader::{parse_catalog, LoadError};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    subjects: Vec<Subject>,
    topics: Vec<Topic>,
    questions: Vec<Question>,
    games: Vec<Game>,
    /// Extra questions appended to a subject's quiz, keyed by subject id.
    #[serde(default)]
    supplemental_questions: HashMap<String, Vec<Question>>,
    /// Extra games offered for a subject, keyed by subject id.
    #[serde(default)]
    bonus_games: HashMap<String, Vec<Game>>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, LoadError> {
        parse_catalog(EMBEDDED_CATALOG, "embedded catalog")
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        parse_catalog(json, "catalog string")
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn supplemental_questions(&self, subject_id: &str) -> &[Question] {
        self.supplemental_questions
            .get(subject_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn bonus_games(&self, subject_id: &str) -> &[Game] {
        self.bonus_games
            .get(subject_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn subject(&self, band: ClassBand, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.band == band && s.id == id)
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Check the invariants the sessions rely on.
    pub fn validate(&self) -> Result<(), LoadError> {
        for subject in &self.subjects {
            require_id("subject", &subject.id)?;
        }

        for topic in &self.topics {
            require_id("topic", &topic.id)?;
            if !CLASS_LEVELS.contains(&topic.class_level) {
                return Err(LoadError::Invalid(format!(
                    "topic {} has class level {} outside 6..=12",
                    topic.id, topic.class_level
                )));
            }
        }

        let supplemental = self.supplemental_questions.values().flatten();
        for question in self.questions.iter().chain(supplemental) {
            require_id("question", &question.id)?;
            if question.correct_answer >= OPTION_COUNT {
                return Err(LoadError::Invalid(format!(
                    "question {} has correct answer index {} but only {} options",
                    question.id, question.correct_answer, OPTION_COUNT
                )));
            }
        }

        for game in self.games.iter().chain(self.bonus_games.values().flatten()) {
            require_id("game", &game.id)?;
        }

        Ok(())
    }
}

fn require_id(kind: &str, id: &str) -> Result<(), LoadError> {
    if id.trim().is_empty() {
        Err(LoadError::Invalid(format!("{} with empty id", kind)))
    } else {
        Ok(())
    }
}
