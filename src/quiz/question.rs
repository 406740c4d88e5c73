//! Quiz question model

use serde::{Deserialize, Serialize};

use super::error::QuizError;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question shown above the snippet
    pub prompt: String,
    /// F# source the question is about
    pub code: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Zero-based index of the correct option
    pub correct_index: usize,
    /// Shown once the question has been answered
    pub explanation: String,
}

impl Question {
    /// Minimum number of options a question must offer
    pub const MIN_OPTIONS: usize = 2;

    pub fn new(
        prompt: impl Into<String>,
        code: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            code: code.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
            explanation: explanation.into(),
        }
    }

    /// Whether `option` is a valid index into this question's options
    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }

    /// Whether `option` is the correct answer
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Check the structural constraints of the question.
    ///
    /// `index` is the question's position in its catalog and is only used
    /// for error reporting.
    pub fn validate(&self, index: usize) -> Result<(), QuizError> {
        if self.options.len() < Self::MIN_OPTIONS {
            return Err(QuizError::TooFewOptions { index, count: self.options.len() });
        }
        if !self.has_option(self.correct_index) {
            return Err(QuizError::CorrectIndexOutOfRange {
                index,
                correct_index: self.correct_index,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    /// Letter label for an option (A, B, C, ...)
    pub fn option_label(option: usize) -> char {
        char::from(b'A' + (option % 26) as u8)
    }
}
