//! Interactive TUI interface for the daily word widget

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
