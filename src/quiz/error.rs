//! Error types for quiz catalogs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a question catalog.
///
/// A running quiz never produces errors; invalid input at that stage is
/// ignored. These only guard the catalog before a session exists.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The catalog has no questions
    #[error("Question catalog is empty")]
    EmptyCatalog,

    /// A question offers fewer than two options
    #[error("Question {index} has {count} option(s), at least 2 are required")]
    TooFewOptions {
        /// Position of the question in the catalog
        index: usize,
        /// Number of options it has
        count: usize,
    },

    /// The correct answer does not point at an option
    #[error("Question {index} marks option {correct_index} as correct but only has {options}")]
    CorrectIndexOutOfRange {
        /// Position of the question in the catalog
        index: usize,
        /// The offending correct index
        correct_index: usize,
        /// Number of options
        options: usize,
    },

    /// Failed to read a catalog file
    #[error("Failed to read questions from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON
    #[error("Failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}
