//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_daily_report, print_rank_entry, print_rank_result, print_simulation};
