//! Date to word-of-the-day mapping
//!
//! Day zero is the epoch date; every later (or earlier) day moves one step
//! through the word list, wrapping around at both ends.

use super::date::parse_date;
use crate::core::Word;
use crate::error::{Result, WordleError};
use chrono::NaiveDate;

/// Day zero of the rotation: 2021-06-19
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("epoch is a valid calendar date")
}

/// Index into a list of `len` words for `date`, counting from `epoch`
///
/// Dates before the epoch wrap backwards, so the result is always in
/// `0..len`.
///
/// # Errors
/// Returns `WordleError::EmptyWordList` if `len` is zero.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::daily::{day_index, default_epoch};
///
/// let before = NaiveDate::from_ymd_opt(2021, 6, 18).unwrap();
/// assert_eq!(day_index(before, default_epoch(), 3).unwrap(), 2);
/// ```
pub fn day_index(date: NaiveDate, epoch: NaiveDate, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(WordleError::EmptyWordList);
    }

    let days = date.signed_duration_since(epoch).num_days();
    Ok(days.rem_euclid(len as i64) as usize)
}

/// Word of the day for `date` using the default epoch
///
/// # Errors
/// Returns `WordleError::EmptyWordList` if `words` is empty.
pub fn select_word(date: NaiveDate, words: &[Word]) -> Result<&Word> {
    let index = day_index(date, default_epoch(), words.len())?;
    Ok(&words[index])
}

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub date: NaiveDate,
    pub day_index: usize,
    pub word: &'a Word,
}

/// Picks the word of the day from a fixed, non-empty word list
#[derive(Debug, Clone, Copy)]
pub struct DailyWordSelector<'a> {
    words: &'a [Word],
    epoch: NaiveDate,
}

impl<'a> DailyWordSelector<'a> {
    /// Create a selector over `words` with the default epoch
    ///
    /// # Errors
    /// Returns `WordleError::EmptyWordList` if `words` is empty.
    pub fn new(words: &'a [Word]) -> Result<Self> {
        if words.is_empty() {
            return Err(WordleError::EmptyWordList);
        }

        Ok(Self {
            words,
            epoch: default_epoch(),
        })
    }

    /// Use a different day zero
    #[must_use]
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Select the word for a calendar date
    #[must_use]
    pub fn select(&self, date: NaiveDate) -> Selection<'a> {
        let days = date.signed_duration_since(self.epoch).num_days();
        // The word list is non-empty, checked in `new`
        let day_index = days.rem_euclid(self.words.len() as i64) as usize;

        Selection {
            date,
            day_index,
            word: &self.words[day_index],
        }
    }

    /// Parse a `YYYY-MM-DD` string and select its word
    ///
    /// # Errors
    /// Returns `WordleError::InvalidDate` if the string does not parse.
    pub fn select_str(&self, input: &str) -> Result<Selection<'a>> {
        parse_date(input).map(|date| self.select(date))
    }
}
