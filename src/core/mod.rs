//! Core domain types for Wordle
//!
//! Pure value types: validated words and the feedback a guess earns.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackParseError, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
