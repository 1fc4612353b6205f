//! Wordle Daily
//!
//! Picks a word of the day from a fixed list by counting days since an epoch,
//! and ships an entropy-based solver for the same list.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_daily::daily::DailyWordSelector;
//! use wordle_daily::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["apple", "bravo", "crazy"]);
//! let selector = DailyWordSelector::new(&words).unwrap();
//!
//! // Day 0 is 2021-06-19
//! let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
//! assert_eq!(selector.select(date).word.text(), "bravo");
//! ```

// Core domain types
pub mod core;

// Word of the day selection
pub mod daily;

// Entropy solver
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Configuration file
pub mod config;

// Error types
pub mod error;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Result, WordleError};
