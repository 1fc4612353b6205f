//! Word list loading utilities
//!
//! Lists can come from the embedded constant, a JSON array of strings, or a
//! text file with one word per line.

use super::WORDS;
use crate::core::Word;
use crate::error::{Result, WordleError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded,
    File(std::path::PathBuf),
}

impl WordSource {
    /// `"embedded"` (or `"default"`) selects the built-in list, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(path.into()),
        }
    }

    /// Load the words, failing if none are valid
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the list is empty.
    pub fn load(&self) -> Result<Vec<Word>> {
        let words = match self {
            Self::Embedded => words_from_slice(WORDS),
            Self::File(path) => load_from_file(path)?,
        };

        if words.is_empty() {
            return Err(WordleError::EmptyWordList);
        }

        Ok(words)
    }
}

/// Load words from a file
///
/// Files ending in `.json`, or whose content starts with `[`, are read as a
/// JSON array of strings. Anything else is read line by line, ignoring blank
/// lines and `#` comments.
///
/// Every entry must be a valid word. A list's positions are its day indices,
/// so a bad entry fails the whole load instead of shifting later words.
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read,
/// `WordleError::Json` if a JSON file is malformed, and
/// `WordleError::InvalidEntry` for the first entry that is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json")
        || content.trim_start().starts_with('[');

    let entries: Vec<String> = if is_json {
        serde_json::from_str(&content)?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    };

    let words = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Word::new(entry).map_err(|source| WordleError::InvalidEntry {
                index,
                entry: entry.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Convert embedded string slice to Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::words_from_slice;
/// use wordle_daily::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .copied()
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping word list entry '{entry}': {e}");
                None
            }
        })
        .collect()
}
