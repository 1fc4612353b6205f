//! Entropy-based Wordle solving
//!
//! Guesses are ranked by the Shannon entropy of the feedback they would
//! produce over the remaining candidates.

mod engine;
pub mod entropy;

pub use engine::{SimulationOutcome, SimulationStep, Solver, prune};
pub use entropy::{
    RankedWord, best_candidate, feedback_distribution, rank_candidates, shannon_entropy,
    word_score,
};
