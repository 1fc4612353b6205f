//! Main Wordle solver interface

use super::entropy::{RankedWord, best_candidate, word_score};
use crate::core::{Feedback, Word};
use crate::error::{Result, WordleError};
use tracing::{debug, info};

/// Keep the candidates that would have produced `feedback` for `guess`
///
/// # Errors
/// Returns `WordleError::NoCandidates` if nothing survives, which means the
/// feedback is inconsistent or the true word is not in the list.
pub fn prune<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    feedback: Feedback,
) -> Result<Vec<&'a Word>> {
    let remaining: Vec<&'a Word> = candidates
        .iter()
        .copied()
        .filter(|&candidate| Feedback::compute(guess, candidate) == feedback)
        .collect();

    if remaining.is_empty() {
        return Err(WordleError::NoCandidates {
            guess: guess.text().to_string(),
            feedback: feedback.to_string(),
        });
    }

    Ok(remaining)
}

/// One guess made during a simulation
#[derive(Debug, Clone)]
pub struct SimulationStep {
    pub guess: Word,
    /// Entropy of the guess, `None` when it was forced rather than ranked
    pub score: Option<f64>,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving for a known answer
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub answer: Word,
    pub steps: Vec<SimulationStep>,
    pub solved: bool,
}

impl SimulationOutcome {
    /// Number of guesses needed, or `None` if not solved within the step limit
    #[must_use]
    pub fn guesses(&self) -> Option<usize> {
        self.solved.then_some(self.steps.len())
    }
}

/// Entropy-based Wordle solver over a fixed word list
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    words: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a solver; the list must not be empty
    ///
    /// # Errors
    /// Returns `WordleError::EmptyWordList` if `words` is empty.
    pub fn new(words: &'a [Word]) -> Result<Self> {
        if words.is_empty() {
            return Err(WordleError::EmptyWordList);
        }

        info!("Initializing wordle solver with {} words", words.len());
        Ok(Self { words })
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Every word in the list, as the starting candidate set
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        self.words.iter().collect()
    }

    /// Best next guess among `candidates`
    #[must_use]
    pub fn suggest(&self, candidates: &[&'a Word]) -> Option<RankedWord<'a>> {
        best_candidate(candidates)
    }

    /// Solve for `answer`, making at most `max_steps` guesses
    ///
    /// `first_guess` replaces the ranked opening when given; it need not be
    /// in the word list.
    ///
    /// # Errors
    /// Returns `WordleError::NoCandidates` if `answer` is not in the word list.
    pub fn simulate(
        &self,
        answer: &Word,
        max_steps: usize,
        first_guess: Option<&Word>,
    ) -> Result<SimulationOutcome> {
        let mut candidates = self.candidates();
        let mut steps = Vec::new();

        for step in 0..max_steps {
            let (guess, score) = match (step, first_guess) {
                (0, Some(forced)) => (forced.clone(), None),
                _ => match self.suggest(&candidates) {
                    Some(ranked) => (ranked.word.clone(), Some(ranked.score)),
                    None => break,
                },
            };

            let feedback = Feedback::compute(&guess, answer);
            debug!(
                step,
                guess = %guess,
                score = ?score,
                feedback = %feedback,
                "solver guess"
            );

            let candidates_before = candidates.len();
            let solved = feedback.is_solved();
            if !solved {
                candidates = prune(&candidates, &guess, feedback)?;
            }

            steps.push(SimulationStep {
                guess,
                score,
                feedback,
                candidates_before,
                candidates_after: if solved { 1 } else { candidates.len() },
            });

            if solved {
                return Ok(SimulationOutcome {
                    answer: answer.clone(),
                    steps,
                    solved: true,
                });
            }
        }

        Ok(SimulationOutcome {
            answer: answer.clone(),
            steps,
            solved: false,
        })
    }

    /// Score an arbitrary guess against the current candidates
    #[must_use]
    pub fn score(&self, guess: &Word, candidates: &[&'a Word]) -> f64 {
        word_score(guess, candidates)
    }
}
