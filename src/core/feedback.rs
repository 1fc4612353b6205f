//! Guess feedback
//!
//! Each letter of a guess is scored against the answer:
//! - `Yes`   (0): same letter at the same position
//! - `Exist` (1): letter occurs somewhere in the answer
//! - `No`    (2): letter does not occur in the answer
//!
//! `Exist` does not count duplicates: a repeated guess letter is marked
//! `Exist` every time the answer contains it at least once.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Yes,
    Exist,
    No,
}

impl LetterStatus {
    /// Digit used for keyboard entry
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Yes => 0,
            Self::Exist => 1,
            Self::No => 2,
        }
    }

    const fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Yes),
            '1' => Some(Self::Exist),
            '2' => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Exist => "Exist",
            Self::No => "No",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Yes => '🟩',
            Self::Exist => '🟨',
            Self::No => '⬜',
        }
    }
}

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid feedback '{0}': expected 5 digits (Yes = 0, Exist = 1, No = 2)")]
pub struct FeedbackParseError(pub String);

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Feedback of a correct guess
    pub const SOLVED: Self = Self([LetterStatus::Yes; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// assert_eq!(Feedback::compute(&guess, &answer).to_string(), "Exist No Exist Exist No");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let truth = answer.letters();
        let mut statuses = [LetterStatus::No; WORD_LENGTH];

        for (i, (&letter, status)) in guess.letters().iter().zip(&mut statuses).enumerate() {
            *status = if letter == truth[i] {
                LetterStatus::Yes
            } else if answer.has_letter(letter) {
                LetterStatus::Exist
            } else {
                LetterStatus::No
            };
        }

        Self(statuses)
    }

    /// Parse feedback typed as digits, e.g. `"01220"`
    ///
    /// # Errors
    /// Returns `FeedbackParseError` unless the input is exactly five of `0`, `1`, `2`.
    pub fn parse_digits(input: &str) -> Result<Self, FeedbackParseError> {
        let input = input.trim();
        let err = || FeedbackParseError(input.to_string());

        let mut statuses = [LetterStatus::No; WORD_LENGTH];
        let mut chars = input.chars();
        for status in &mut statuses {
            *status = chars
                .next()
                .and_then(LetterStatus::from_digit)
                .ok_or_else(err)?;
        }

        if chars.next().is_some() {
            return Err(err());
        }

        Ok(Self(statuses))
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// True when every letter is `Yes`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Yes)
    }

    /// Base-3 code of the feedback (0-242), used as a grouping key
    #[must_use]
    pub fn code(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, status| acc * 3 + status.digit())
    }

    /// Feedback rendered as colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Feedback rendered as digits, the inverse of `parse_digits`
    #[must_use]
    pub fn to_digits(&self) -> String {
        self.0.iter().map(|s| char::from(b'0' + s.digit())).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|s| s.name()).collect();
        f.write_str(&names.join(" "))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_digits(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Exist, No, Yes};

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::compute(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn identical_words_are_solved() {
        for word in ["crane", "slate", "aaaaa", "sissy"] {
            assert_eq!(feedback(word, word), Feedback::SOLVED);
            assert!(feedback(word, word).is_solved());
        }
    }

    #[test]
    fn disjoint_words_are_all_no() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.statuses(), &[No; 5]);
        assert!(!fb.is_solved());
    }

    #[test]
    fn crane_against_slate() {
        assert_eq!(
            feedback("crane", "slate").statuses(),
            &[No, No, Yes, No, Yes]
        );
    }

    #[test]
    fn duplicate_letters_all_marked_exist() {
        // ERROR has a single O, yet both O's of ROBOT are scored
        assert_eq!(
            feedback("robot", "error").statuses(),
            &[Exist, Exist, No, Yes, No]
        );
        assert_eq!(
            feedback("eerie", "crane").statuses(),
            &[Exist, Exist, Exist, No, Yes]
        );
    }

    #[test]
    fn parse_digits_valid() {
        let fb = Feedback::parse_digits("01220").unwrap();
        assert_eq!(fb.statuses(), &[Yes, Exist, No, No, Yes]);
        assert_eq!(fb.to_digits(), "01220");
        assert_eq!(Feedback::parse_digits(" 00000\n").unwrap(), Feedback::SOLVED);
    }

    #[test]
    fn parse_digits_invalid() {
        assert!(Feedback::parse_digits("0122").is_err());
        assert!(Feedback::parse_digits("012201").is_err());
        assert!(Feedback::parse_digits("01320").is_err());
        assert!(Feedback::parse_digits("GY-GY").is_err());
        assert!(Feedback::parse_digits("").is_err());
    }

    #[test]
    fn parse_error_message_and_source() {
        let err = Feedback::parse_digits("GY-GY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid feedback 'GY-GY': expected 5 digits (Yes = 0, Exist = 1, No = 2)"
        );

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn code_is_unique_and_bounded() {
        let mut seen = std::collections::HashSet::new();
        for n in 0..243u32 {
            let mut v = n;
            let mut statuses = [Yes; 5];
            for s in &mut statuses {
                *s = match v % 3 {
                    0 => Yes,
                    1 => Exist,
                    _ => No,
                };
                v /= 3;
            }
            let code = Feedback::new(statuses).code();
            assert_eq!(u32::from(code), n);
            assert!(seen.insert(code));
        }
        assert_eq!(Feedback::SOLVED.code(), 0);
    }

    #[test]
    fn text_and_emoji_forms() {
        let fb = Feedback::new([Yes, Exist, No, No, Yes]);
        assert_eq!(fb.to_string(), "Yes Exist No No Yes");
        assert_eq!(fb.to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
