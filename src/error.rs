//! Error types for `wordle_daily`

use crate::core::{FeedbackParseError, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Invalid word: {0}")]
    Word(#[from] WordError),

    #[error("Invalid word list entry {index} ('{entry}'): {source}")]
    InvalidEntry {
        index: usize,
        entry: String,
        #[source]
        source: WordError,
    },

    #[error("{0}")]
    Feedback(#[from] FeedbackParseError),

    #[error("No candidate matches guess '{guess}' with feedback {feedback}; the word list doesn't contain the true word")]
    NoCandidates { guess: String, feedback: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WordleError {
    /// Errors caused by bad user-supplied input rather than the environment
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::EmptyWordList
                | Self::Word(_)
                | Self::InvalidEntry { .. }
                | Self::Feedback(_)
        )
    }

    /// Get the exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            _ if self.is_invalid_input() => 3,
            Self::NoCandidates { .. } => 4,
            _ => 1,
        }
    }
}

/// Result type using `WordleError`
pub type Result<T> = std::result::Result<T, WordleError>;
