//! End-to-end checks of catalog loading, session selection and quiz scoring.

use std::io::Write;

use class_quest::quiz::{Grade, QuizPhase, QuizSession};
use class_quest::selector::SessionSelector;
use class_quest::{load_catalog_from_json, Catalog, LoadError};
use tempfile::NamedTempFile;

const SMALL_CATALOG: &str = r#"{
    "subjects": [
        {"id": "art", "name": "Art", "icon": "A", "description": "Drawing", "band": "6-8"},
        {"id": "art", "name": "Art", "icon": "A", "description": "Painting", "band": "9-12"}
    ],
    "topics": [
        {"id": "colours", "title": "Colours", "description": "Mixing", "notes": "Red and blue make purple.", "subject_id": "art", "class_level": 7},
        {"id": "perspective", "title": "Perspective", "description": "Depth", "notes": "Lines meet.", "subject_id": "art", "class_level": 10}
    ],
    "questions": [
        {"id": "a1", "text": "Red + blue?", "options": ["Green", "Purple", "Orange", "Brown"], "correct_answer": 1, "explanation": "Purple.", "topic_id": "colours", "difficulty": "easy"},
        {"id": "a2", "text": "Primary colour?", "options": ["Green", "Purple", "Red", "Brown"], "correct_answer": 2, "explanation": "Red.", "topic_id": "colours", "difficulty": "easy"},
        {"id": "a3", "text": "Lines meet at the?", "options": ["Horizon", "Vanishing point", "Frame", "Edge"], "correct_answer": 1, "explanation": "Vanishing point.", "topic_id": "perspective", "difficulty": "medium"}
    ],
    "games": [
        {"id": "shared-word", "title": "Words", "description": "Unscramble", "kind": "word", "difficulty": "easy"},
        {"id": "art-memory", "title": "Palette", "description": "Match", "kind": "memory", "difficulty": "easy", "subject_id": "art"}
    ],
    "supplemental_questions": {
        "art": [
            {"id": "a1", "text": "Duplicate", "options": ["1", "2", "3", "4"], "correct_answer": 0, "explanation": "", "topic_id": "", "difficulty": "easy"},
            {"id": "art-generic", "text": "Tool for painting?", "options": ["Brush", "Hammer", "Saw", "Drill"], "correct_answer": 0, "explanation": "Brush.", "topic_id": "", "difficulty": "easy"}
        ]
    }
}"#;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn ids(questions: &[class_quest::Question]) -> Vec<&str> {
    questions.iter().map(|q| q.id.as_str()).collect()
}

#[test]
fn custom_catalog_drives_selection() {
    let file = write_catalog(SMALL_CATALOG);
    let catalog = load_catalog_from_json(file.path()).unwrap();
    let selector = SessionSelector::new(&catalog);

    let middle = selector.select_subjects(7);
    assert_eq!(middle.len(), 1);
    assert_eq!(middle[0].description, "Drawing");

    let topics = selector.select_topics("art", 7);
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].id, "colours");

    let questions = selector.select_questions("art", 7);
    assert_eq!(ids(&questions), ["a1", "a2", "art-generic"]);
    assert_eq!(questions[0].text, "Red + blue?");

    let senior = selector.select_questions("art", 10);
    assert_eq!(ids(&senior), ["a3", "art-generic"]);

    let games: Vec<&str> = selector.select_games("art").iter().map(|g| g.id.as_str()).collect();
    assert_eq!(games, ["shared-word", "art-memory"]);
}

#[test]
fn quiz_length_caps_selection_in_order() {
    let file = write_catalog(SMALL_CATALOG);
    let catalog = load_catalog_from_json(file.path()).unwrap();
    let selector = SessionSelector::new(&catalog).with_quiz_length(2);

    assert_eq!(ids(&selector.select_questions("art", 7)), ["a1", "a2"]);
}

#[test]
fn unknown_subject_or_class_is_empty() {
    let catalog = Catalog::embedded().unwrap();
    let selector = SessionSelector::new(&catalog);

    assert!(selector.select_topics("astronomy", 7).is_empty());
    assert!(selector.select_questions("astronomy", 7).is_empty());
    assert!(selector.select_topics("math", 5).is_empty());
}

#[test]
fn invalid_answer_index_is_rejected() {
    let broken = SMALL_CATALOG.replace("\"correct_answer\": 2", "\"correct_answer\": 7");
    let file = write_catalog(&broken);

    let err = load_catalog_from_json(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Invalid(_)));
}

#[test]
fn full_quiz_from_embedded_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let questions = SessionSelector::new(&catalog).select_questions("science", 6);
    assert_eq!(questions.len(), 5);

    let answers: Vec<usize> = questions.iter().map(|q| q.correct_answer).collect();
    let mut session = QuizSession::new(questions);

    // Miss the first question, answer the rest correctly.
    for (i, answer) in answers.iter().enumerate() {
        assert_eq!(session.phase(), QuizPhase::Answering(i));
        let choice = if i == 0 { (answer + 1) % 4 } else { *answer };
        let result = session.submit_answer(Some(choice)).unwrap();
        assert_eq!(result.is_correct, i != 0);
        session.next();
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.correct, 4);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage, 80);
    assert_eq!(summary.grade, Grade::Excellent);
}

#[test]
fn empty_quiz_has_no_summary() {
    let catalog = Catalog::embedded().unwrap();
    let questions = SessionSelector::new(&catalog).select_questions("chemistry", 12);
    let session = QuizSession::new(questions);

    assert!(session.is_empty());
    assert_eq!(session.phase(), QuizPhase::Empty);
    assert!(session.summary().is_none());
}
