//! Quiz session: question sequencing, answer review and scoring.

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Question, OPTION_COUNT};

/// Where the learner is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No questions exist for this subject and class.
    Empty,
    /// Choosing an answer for the question at the index.
    Answering(usize),
    /// Looking at the verdict and explanation for the question at the index.
    Reviewing(usize),
    /// Every question has a recorded result.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question_id: String,
    pub selected: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    GoodJob,
    KeepLearning,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80..=u32::MAX => Grade::Excellent,
            60..=79 => Grade::GoodJob,
            _ => Grade::KeepLearning,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::GoodJob => "Good Job!",
            Grade::KeepLearning => "Keep Learning!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    phase: QuizPhase,
    selected: Option<usize>,
    results: Vec<QuestionResult>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            questions: Vec::new(),
            phase: QuizPhase::Empty,
            selected: None,
            results: Vec::new(),
        };
        session.start(questions);
        session
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn start(&mut self, questions: Vec<Question>) {
        self.phase = if questions.is_empty() {
            QuizPhase::Empty
        } else {
            QuizPhase::Answering(0)
        };
        self.questions = questions;
        self.selected = None;
        self.results.clear();
        info!(session = %self.id, questions = self.questions.len(), "quiz started");
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn results(&self) -> &[QuestionResult] {
        &self.results
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Answering(i) | QuizPhase::Reviewing(i) => Some(i),
            QuizPhase::Empty | QuizPhase::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.current_index().map_or(self.questions.len(), |i| i + 1)
    }

    pub fn progress(&self) -> u16 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.question_number() * 100 / self.questions.len()) as u16
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The verdict for the question under review.
    pub fn last_result(&self) -> Option<&QuestionResult> {
        match self.phase {
            QuizPhase::Reviewing(_) => self.results.last(),
            _ => None,
        }
    }

    pub fn select_option(&mut self, index: usize) {
        if matches!(self.phase, QuizPhase::Answering(_)) && index < OPTION_COUNT {
            self.selected = Some(index);
        }
    }

    pub fn select_next_option(&mut self) {
        let next = self.selected.map_or(0, |i| (i + 1) % OPTION_COUNT);
        self.select_option(next);
    }

    pub fn select_previous_option(&mut self) {
        let previous = self
            .selected
            .map_or(OPTION_COUNT - 1, |i| (i + OPTION_COUNT - 1) % OPTION_COUNT);
        self.select_option(previous);
    }

    /// Record an answer for the current question and move to review.
    ///
    /// Ignored without a selection or outside the answering phase.
    pub fn submit_answer(&mut self, selected: Option<usize>) -> Option<&QuestionResult> {
        let QuizPhase::Answering(index) = self.phase else {
            return None;
        };
        let selected = selected.filter(|&s| s < OPTION_COUNT)?;
        let question = self.questions.get(index)?;

        let is_correct = question.is_correct(selected);
        debug!(
            session = %self.id,
            question = %question.id,
            selected,
            is_correct,
            "answer submitted"
        );
        self.results.push(QuestionResult {
            question_id: question.id.clone(),
            selected,
            is_correct,
        });
        self.selected = Some(selected);
        self.phase = QuizPhase::Reviewing(index);
        self.results.last()
    }

    /// Submit whatever option is currently highlighted.
    pub fn submit_selected(&mut self) -> Option<&QuestionResult> {
        self.submit_answer(self.selected)
    }

    pub fn next(&mut self) {
        let QuizPhase::Reviewing(index) = self.phase else {
            return;
        };

        self.selected = None;
        if index + 1 < self.questions.len() {
            self.phase = QuizPhase::Answering(index + 1);
        } else {
            self.phase = QuizPhase::Completed;
            let summary = self.score();
            info!(
                session = %self.id,
                correct = summary.correct,
                total = summary.total,
                percentage = summary.percentage,
                "quiz completed"
            );
        }
    }

    /// Start over with a freshly selected question list.
    pub fn restart(&mut self, questions: Vec<Question>) {
        self.start(questions);
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_correct).count()
    }

    pub fn score_percentage(&self) -> u32 {
        rounded_percentage(self.correct_count(), self.questions.len())
    }

    fn score(&self) -> QuizSummary {
        let percentage = self.score_percentage();
        QuizSummary {
            correct: self.correct_count(),
            total: self.questions.len(),
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }

    /// Final score, available once the quiz is completed.
    pub fn summary(&self) -> Option<QuizSummary> {
        self.is_completed().then(|| self.score())
    }
}

/// `round(100 * part / whole)`, zero when `whole` is zero.
pub(crate) fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}
