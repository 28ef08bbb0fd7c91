//! Derives what a learner sees for a subject: topics, quiz questions and games.

use std::collections::HashSet;

use tracing::debug;

use crate::data::Catalog;
use crate::models::{ClassBand, Game, Question, Subject, Topic};

/// Default number of questions in a quiz.
pub const QUIZ_LENGTH: usize = 5;

/// Read-only view over the catalog that builds session content.
#[derive(Debug, Clone, Copy)]
pub struct SessionSelector<'a> {
    catalog: &'a Catalog,
    quiz_length: usize,
}

impl<'a> SessionSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            quiz_length: QUIZ_LENGTH,
        }
    }

    pub fn with_quiz_length(mut self, quiz_length: usize) -> Self {
        self.quiz_length = quiz_length;
        self
    }

    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    /// Subjects offered to a learner of the given class.
    pub fn select_subjects(&self, class_level: u8) -> Vec<&'a Subject> {
        let band = ClassBand::for_class(class_level);
        self.catalog
            .subjects()
            .iter()
            .filter(|s| s.band == band)
            .collect()
    }

    pub fn select_topics(&self, subject_id: &str, class_level: u8) -> Vec<&'a Topic> {
        self.catalog
            .topics()
            .iter()
            .filter(|t| t.subject_id == subject_id && t.class_level == class_level)
            .collect()
    }

    /// Questions for a subject's quiz, at most `quiz_length` of them.
    ///
    /// Catalog questions for the subject's topics come first. Supplemental
    /// questions only fill the capacity that remains, so they never displace
    /// a catalog question. Unlike a plain append, a supplemental entry whose
    /// id is already present is skipped, so one question is never asked twice
    /// in a quiz.
    pub fn select_questions(&self, subject_id: &str, class_level: u8) -> Vec<Question> {
        let topic_ids: HashSet<&str> = self
            .select_topics(subject_id, class_level)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();

        let base = self
            .catalog
            .questions()
            .iter()
            .filter(|q| topic_ids.contains(q.topic_id.as_str()));

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for question in base.chain(self.catalog.supplemental_questions(subject_id)) {
            if seen.insert(question.id.as_str()) {
                candidates.push(question);
            }
        }

        if candidates.len() > self.quiz_length {
            debug!(
                subject = subject_id,
                class_level,
                dropped = candidates.len() - self.quiz_length,
                "quiz capped"
            );
        }

        let questions: Vec<Question> = candidates
            .into_iter()
            .take(self.quiz_length)
            .cloned()
            .collect();

        debug!(
            subject = subject_id,
            class_level,
            topics = topic_ids.len(),
            questions = questions.len(),
            "selected quiz questions"
        );
        questions
    }

    /// Games for the subject: its own games, every generic game, then bonus games.
    pub fn select_games(&self, subject_id: &str) -> Vec<&'a Game> {
        self.catalog
            .games()
            .iter()
            .filter(|g| g.subject_id.as_deref().is_none_or(|id| id == subject_id))
            .chain(self.catalog.bonus_games(subject_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn test_subjects_follow_class_band() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog);

        let middle: Vec<_> = selector.select_subjects(7).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(middle, ["math", "science", "english"]);

        let senior: Vec<_> = selector.select_subjects(12).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(senior, ["math", "physics", "chemistry", "biology"]);
    }

    #[test]
    fn test_topics_exact_lookup() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog);

        let topics = selector.select_topics("math", 6);
        assert!(!topics.is_empty());
        assert!(topics.iter().all(|t| t.subject_id == "math" && t.class_level == 6));
        assert_eq!(topics[0].id, "fractions-decimals");

        assert!(selector.select_topics("physics", 6).is_empty());
        assert!(selector.select_topics("unknown", 9).is_empty());
    }

    #[test]
    fn test_math_class_nine_uses_supplemental_questions() {
        let catalog = catalog();
        let questions = SessionSelector::new(&catalog).select_questions("math", 9);

        assert_eq!(ids(&questions), ["math-generic-1", "math-generic-2"]);
        assert_eq!(questions[0].text, "What is 15% of 200?");
        assert!(questions[0].is_correct(1));
        assert_eq!(questions[1].text, "If x + 5 = 12, what is the value of x?");
        assert!(questions[1].is_correct(2));
    }

    #[test]
    fn test_supplemental_with_known_id_is_skipped() {
        let catalog = Catalog::from_json_str(
            r#"{
                "subjects": [],
                "topics": [{"id": "t", "title": "T", "description": "", "notes": "", "subject_id": "art", "class_level": 7}],
                "questions": [{"id": "a1", "text": "Base", "options": ["1", "2", "3", "4"], "correct_answer": 0, "explanation": "", "topic_id": "t", "difficulty": "easy"}],
                "games": [],
                "supplemental_questions": {"art": [
                    {"id": "a1", "text": "Copy", "options": ["1", "2", "3", "4"], "correct_answer": 0, "explanation": "", "topic_id": "", "difficulty": "easy"},
                    {"id": "a2", "text": "Extra", "options": ["1", "2", "3", "4"], "correct_answer": 0, "explanation": "", "topic_id": "", "difficulty": "easy"}
                ]}
            }"#,
        )
        .unwrap();

        let questions = SessionSelector::new(&catalog).select_questions("art", 7);
        assert_eq!(ids(&questions), ["a1", "a2"]);
        assert_eq!(questions[0].text, "Base");
    }

    #[test]
    fn test_base_questions_come_before_supplemental() {
        let catalog = catalog();
        let questions = SessionSelector::new(&catalog).select_questions("math", 6);
        assert_eq!(ids(&questions), ["q1", "math-generic-1", "math-generic-2"]);

        let questions = SessionSelector::new(&catalog).select_questions("physics", 9);
        assert_eq!(ids(&questions), ["q3", "physics-generic-1"]);
    }

    #[test]
    fn test_cap_keeps_catalog_questions() {
        let catalog = catalog();
        let questions = SessionSelector::new(&catalog).select_questions("science", 6);
        assert_eq!(ids(&questions), ["q2", "q5", "q6", "q7", "q8"]);
    }

    #[test]
    fn test_custom_quiz_length() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog).with_quiz_length(2);
        assert_eq!(selector.select_questions("science", 6).len(), 2);
    }

    #[test]
    fn test_questions_bounded_for_every_pair() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog);

        for subject in catalog.subjects() {
            for class_level in 6..=12 {
                let topic_ids: Vec<_> = selector
                    .select_topics(&subject.id, class_level)
                    .iter()
                    .map(|t| t.id.clone())
                    .collect();
                let supplemental = catalog.supplemental_questions(&subject.id);

                let questions = selector.select_questions(&subject.id, class_level);
                assert!(questions.len() <= QUIZ_LENGTH);
                for q in &questions {
                    assert!(
                        topic_ids.contains(&q.topic_id) || supplemental.contains(q),
                        "{} leaked into {} class {}",
                        q.id,
                        subject.id,
                        class_level
                    );
                }
            }
        }
    }

    #[test]
    fn test_english_has_no_questions() {
        let catalog = catalog();
        assert!(SessionSelector::new(&catalog).select_questions("english", 7).is_empty());
    }

    #[test]
    fn test_games_include_generic_and_bonus() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog);

        let math: Vec<_> = selector.select_games("math").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            math,
            ["math-puzzle", "math-memory", "general-quiz", "math-calculator", "geometry-shapes"]
        );

        let science: Vec<_> = selector.select_games("science").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            science,
            ["word-scramble", "general-quiz", "periodic-table", "body-systems"]
        );
    }

    #[test]
    fn test_generic_games_offered_everywhere() {
        let catalog = catalog();
        let selector = SessionSelector::new(&catalog);
        let generic: Vec<_> = catalog.games().iter().filter(|g| g.is_generic()).collect();
        assert!(!generic.is_empty());

        for subject in ["math", "english", "chemistry", "history"] {
            let games = selector.select_games(subject);
            for game in &generic {
                assert!(games.contains(game));
            }
        }
    }
}
