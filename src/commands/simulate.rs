//! Simulation command
//!
//! Solves a known target word and returns the solution path.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{SimulationOutcome, Solver};

/// Configuration for simulating one word
pub struct SimulateConfig {
    pub target: String,
    pub max_steps: usize,
    pub first_guess: Option<String>,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_steps: 10,
            first_guess: None,
        }
    }
}

/// Solve `config.target` with the given solver
///
/// # Errors
///
/// Returns an error if the target or first guess is not a valid word, or if
/// the target is not reachable from the solver's word list.
pub fn simulate_word(config: &SimulateConfig, solver: &Solver<'_>) -> Result<SimulationOutcome> {
    let target = Word::new(&config.target)?;
    let first_guess = config.first_guess.as_deref().map(Word::new).transpose()?;

    solver.simulate(&target, config.max_steps, first_guess.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordleError;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn simulate_embedded_word() {
        let words = words_from_slice(&WORDS[..60]);
        let solver = Solver::new(&words).unwrap();

        let outcome = simulate_word(&SimulateConfig::new(WORDS[10].to_string()), &solver).unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.answer.text(), WORDS[10]);
    }

    #[test]
    fn simulate_with_first_guess() {
        let words = words_from_slice(&WORDS[..60]);
        let solver = Solver::new(&words).unwrap();

        let mut config = SimulateConfig::new(WORDS[3].to_string());
        config.first_guess = Some("raise".to_string());

        let outcome = simulate_word(&config, &solver).unwrap();
        assert_eq!(outcome.steps[0].guess.text(), "raise");
    }

    #[test]
    fn invalid_target_returns_error() {
        let words = words_from_slice(&WORDS[..60]);
        let solver = Solver::new(&words).unwrap();

        let result = simulate_word(&SimulateConfig::new("abc".to_string()), &solver);
        assert!(matches!(result, Err(WordleError::Word(_))));
    }

    #[test]
    fn max_steps_limit() {
        let words = words_from_slice(&WORDS[..60]);
        let solver = Solver::new(&words).unwrap();

        let mut config = SimulateConfig::new(WORDS[20].to_string());
        config.max_steps = 1;
        config.first_guess = Some(WORDS[21].to_string());

        let outcome = simulate_word(&config, &solver).unwrap();
        assert_eq!(outcome.steps.len(), 1);
        assert!(!outcome.solved);
    }
}
