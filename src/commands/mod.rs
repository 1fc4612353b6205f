//! Command implementations

pub mod daily;
pub mod rank;
pub mod simulate;
pub mod solve;
pub mod test_all;

pub use daily::{DailyConfig, DailyReport, run_daily};
pub use rank::{RankEntry, RankResult, rank_words, score_word};
pub use simulate::{SimulateConfig, simulate_word};
pub use solve::{SessionEnd, SolveOptions, run_interactive};
pub use test_all::{TestAllConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
