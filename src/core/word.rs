//! Five-letter word representation
//!
//! A `Word` keeps its letters as bytes plus a 26-bit letter set, so the
//! "does this letter occur anywhere" question used by feedback is one AND.

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated, lowercase five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    letter_set: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();
        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_set = letters
            .iter()
            .fold(0u32, |set, &ch| set | (1 << (ch - b'a')));

        Ok(Self {
            text,
            letters,
            letter_set,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Check if the word contains a letter at any position
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letter_set & (1 << (letter - b'a')) != 0
    }

    /// Letters as uppercase chars, one per display slot
    #[must_use]
    pub fn slots(&self) -> [char; WORD_LENGTH] {
        self.letters.map(|b| char::from(b.to_ascii_uppercase()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn has_letter_uses_letter_set() {
        let word = Word::new("speed").unwrap();
        assert!(word.has_letter(b'e'));
        assert!(word.has_letter(b'd'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'E'));
    }

    #[test]
    fn slots_are_uppercase() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.slots(), ['A', 'P', 'P', 'L', 'E']);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Bravo".parse().unwrap();
        assert_eq!(format!("{word}"), "bravo");
    }
}
