//! Date input parsing and "today" resolution

use crate::error::{Result, WordleError};
use chrono::{Days, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format produced by date pickers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timezone in which "today" is resolved
///
/// Day differences are taken between calendar dates, so the timezone only
/// matters for deciding which date it is right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

impl Timezone {
    /// Current calendar date in this timezone
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Utc => Utc::now().date_naive(),
        }
    }
}

impl FromStr for Timezone {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            other => Err(WordleError::Config(format!(
                "Invalid timezone '{other}' (expected 'local' or 'utc')"
            ))),
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Utc => "utc",
        })
    }
}

/// A date as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Yesterday,
    Tomorrow,
    Specific(NaiveDate),
}

impl DateInput {
    /// Parse `today`, `yesterday`, `tomorrow` or a `YYYY-MM-DD` date
    ///
    /// # Errors
    /// Returns `WordleError::InvalidDate` for anything else, including
    /// impossible dates such as `2021-02-30`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "tomorrow" => Ok(Self::Tomorrow),
            _ => parse_date(&normalized).map(Self::Specific),
        }
    }

    /// Resolve to a calendar date relative to `today`
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::Yesterday => today.checked_sub_days(Days::new(1)).unwrap_or(today),
            Self::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
            Self::Specific(date) => date,
        }
    }
}

/// Parse a strict `YYYY-MM-DD` date string
///
/// # Errors
/// Returns `WordleError::InvalidDate` if the string is not a valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| WordleError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_specific_date() {
        assert_eq!(parse_date("2021-06-19").unwrap(), date(2021, 6, 19));
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn parse_rejects_bad_dates() {
        for bad in ["", "2021-02-30", "19-06-2021", "2021/06/19", "not a date", "2023-02-29"] {
            let err = parse_date(bad).unwrap_err();
            assert!(matches!(err, WordleError::InvalidDate(_)), "{bad}");
        }
    }

    #[test]
    fn date_input_keywords() {
        let today = date(2021, 6, 20);
        assert_eq!(DateInput::parse("Today").unwrap().resolve(today), today);
        assert_eq!(
            DateInput::parse("yesterday").unwrap().resolve(today),
            date(2021, 6, 19)
        );
        assert_eq!(
            DateInput::parse("TOMORROW").unwrap().resolve(today),
            date(2021, 6, 21)
        );
        assert_eq!(
            DateInput::parse("2021-06-18").unwrap().resolve(today),
            date(2021, 6, 18)
        );
        assert!(DateInput::parse("last monday").is_err());
    }

    #[test]
    fn timezone_from_str() {
        assert_eq!("UTC".parse::<Timezone>().unwrap(), Timezone::Utc);
        assert_eq!("local".parse::<Timezone>().unwrap(), Timezone::Local);
        assert!("mars".parse::<Timezone>().is_err());
        assert_eq!(Timezone::default(), Timezone::Local);
    }

    #[test]
    fn timezones_agree_within_a_day() {
        let local = Timezone::Local.today();
        let utc = Timezone::Utc.today();
        assert!((local - utc).num_days().abs() <= 1);
    }
}
