//! Word of the day command

use crate::core::Word;
use crate::daily::{DailyWordSelector, DateInput, Timezone};
use crate::error::Result;
use chrono::NaiveDate;

/// Options for the daily command
pub struct DailyConfig {
    /// `YYYY-MM-DD`, `today`, `yesterday` or `tomorrow`; today when `None`
    pub date: Option<String>,
    pub epoch: NaiveDate,
    pub timezone: Timezone,
    pub reveal: bool,
}

/// The word of the day for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub epoch: NaiveDate,
    pub day_index: usize,
    pub list_len: usize,
    pub word: Word,
    pub revealed: bool,
}

/// Resolve the requested date and pick its word
///
/// # Errors
///
/// Returns `WordleError::InvalidDate` if the date does not parse and
/// `WordleError::EmptyWordList` if `words` is empty.
pub fn run_daily(config: &DailyConfig, words: &[Word]) -> Result<DailyReport> {
    let selector = DailyWordSelector::new(words)?.with_epoch(config.epoch);

    let input = match config.date.as_deref() {
        Some(text) => DateInput::parse(text)?,
        None => DateInput::Today,
    };
    let date = input.resolve(config.timezone.today());
    let selection = selector.select(date);

    Ok(DailyReport {
        date,
        epoch: selector.epoch(),
        day_index: selection.day_index,
        list_len: selector.len(),
        word: selection.word.clone(),
        revealed: config.reveal,
    })
}
