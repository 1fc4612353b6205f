//! Configuration file support
//!
//! Settings are read from `--config <path>` or `./wordle_daily.toml` when
//! present. Command-line flags override file values.

use crate::core::Word;
use crate::daily::{Timezone, default_epoch};
use crate::error::{Result, WordleError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wordle_daily.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Day zero of the daily rotation, `"YYYY-MM-DD"`
    pub epoch: NaiveDate,
    /// Word list file; the embedded list when unset
    pub wordlist: Option<PathBuf>,
    /// Timezone used to decide what "today" is
    pub timezone: Timezone,
    /// Opening guess for simulations
    pub first_guess: String,
    /// Guess limit for simulations and interactive solving
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            wordlist: None,
            timezone: Timezone::Local,
            first_guess: "raise".to_string(),
            max_steps: 10,
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default file if it exists
    ///
    /// # Errors
    /// Returns an error if an explicit path is missing, or if the file does
    /// not parse or holds invalid values.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a TOML config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| WordleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| {
            WordleError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check values serde cannot
    ///
    /// # Errors
    /// Returns `WordleError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        Word::new(&self.first_guess).map_err(|e| {
            WordleError::Config(format!("Invalid first_guess '{}': {e}", self.first_guess))
        })?;

        if self.max_steps == 0 {
            return Err(WordleError::Config(
                "max_steps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Opening guess as a word; validated on load
    ///
    /// # Errors
    /// Returns `WordleError::Word` if `first_guess` was set to an invalid word.
    pub fn first_guess_word(&self) -> Result<Word> {
        Ok(Word::new(&self.first_guess)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.epoch, default_epoch());
        assert_eq!(config.timezone, Timezone::Local);
        assert_eq!(config.first_guess, "raise");
        assert_eq!(config.max_steps, 10);
        assert!(config.wordlist.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("timezone = \"utc\"\nmax_steps = 6\n");
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.timezone, Timezone::Utc);
        assert_eq!(config.max_steps, 6);
        assert_eq!(config.first_guess, "raise");
        assert_eq!(config.epoch, default_epoch());
    }

    #[test]
    fn full_file() {
        let file = write_config(
            "epoch = \"2022-01-01\"\nwordlist = \"words.json\"\ntimezone = \"local\"\nfirst_guess = \"SLATE\"\nmax_steps = 8\n",
        );
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(config.wordlist, Some(PathBuf::from("words.json")));
        assert_eq!(config.first_guess_word().unwrap().text(), "slate");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("colour = \"blue\"\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(WordleError::Config(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for content in [
            "first_guess = \"toolong\"\n",
            "max_steps = 0\n",
            "epoch = \"2021-13-01\"\n",
            "timezone = \"mars\"\n",
        ] {
            let file = write_config(content);
            assert!(
                matches!(Config::load(Some(file.path())), Err(WordleError::Config(_))),
                "{content}"
            );
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, WordleError::Io { .. }));
    }
}
