//! Word lists
//!
//! The default list is embedded in the binary; custom lists are loaded from
//! JSON or plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
