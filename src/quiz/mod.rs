//! Quiz engine
//!
//! Owns an ordered question catalog and a single quiz session: the current
//! position, the answers submitted so far and whether the quiz has finished.
//! Every operation is infallible. Out-of-range input and navigation past
//! either end are ignored rather than reported.

pub mod catalog;
pub mod error;
pub mod question;

use std::collections::BTreeMap;

pub use error::QuizError;
pub use question::Question;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizStatus {
    #[default]
    InProgress,
    /// Reached by advancing past the last question; only `reset` leaves it
    Completed,
}

/// Aggregate result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// Percentage of correct answers (0.0 to 100.0)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Whether every question was answered correctly
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Per-question outcome for the results breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionResult {
    pub index: usize,
    pub selected: Option<usize>,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// The quiz engine and its session state
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
    answers: BTreeMap<usize, usize>,
    status: QuizStatus,
}

impl QuizEngine {
    /// Create an engine over a validated catalog
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        catalog::validate(&questions)?;
        Ok(Self {
            questions,
            current_index: 0,
            answers: BTreeMap::new(),
            status: QuizStatus::InProgress,
        })
    }

    /// Engine over the built-in F# catalog
    pub fn builtin() -> Self {
        Self {
            questions: catalog::builtin(),
            current_index: 0,
            answers: BTreeMap::new(),
            status: QuizStatus::InProgress,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuizStatus::Completed
    }

    /// The answer recorded for question `index`, if any
    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    /// Record `option` as the answer to the current question.
    ///
    /// Ignored when the option is out of range or the quiz is completed.
    pub fn record_answer(&mut self, option: usize) {
        if self.is_completed() || !self.current_question().has_option(option) {
            tracing::debug!("Ignoring answer {} for question {}", option, self.current_index);
            return;
        }
        self.answers.insert(self.current_index, option);
    }

    /// Move to the next question, or complete the quiz from the last one
    pub fn advance(&mut self) -> QuizStatus {
        if self.is_completed() {
            return self.status;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.status = QuizStatus::Completed;
            let score = self.score();
            tracing::info!("Quiz completed: {}/{}", score.correct, score.total);
        }
        self.status
    }

    /// Move to the previous question
    pub fn retreat(&mut self) {
        if !self.is_completed() && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Count correct answers; unanswered questions count as wrong
    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answer(*i) == Some(q.correct_index))
            .count();
        Score { correct, total: self.questions.len() }
    }

    /// Per-question results in catalog order
    pub fn breakdown(&self) -> Vec<QuestionResult> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let selected = self.answer(index);
                QuestionResult {
                    index,
                    selected,
                    correct_index: q.correct_index,
                    is_correct: selected == Some(q.correct_index),
                }
            })
            .collect()
    }

    /// Position as a fraction in `[0, 1]`.
    ///
    /// A single-question catalog reports 1.0.
    pub fn progress(&self) -> f64 {
        let last = self.questions.len().saturating_sub(1);
        if last == 0 {
            return 1.0;
        }
        (self.current_index as f64 / last as f64).clamp(0.0, 1.0)
    }

    /// Discard the session and start over
    pub fn reset(&mut self) {
        self.answers.clear();
        self.current_index = 0;
        self.status = QuizStatus::InProgress;
        tracing::info!("Quiz reset");
    }

    /// Answer questions in order, one entry per question, then finish.
    ///
    /// Extra answers are ignored; questions without an entry stay unanswered.
    pub fn play(&mut self, answers: &[usize]) -> Score {
        for &answer in answers {
            if self.is_completed() {
                break;
            }
            self.record_answer(answer);
            self.advance();
        }
        while !self.is_completed() {
            self.advance();
        }
        self.score()
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
