//! Word ranking command
//!
//! Scores opening guesses by the entropy of their feedback distribution.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Solver, feedback_distribution, rank_candidates};

/// One ranked word and what it is expected to leave behind
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub word: Word,
    pub score: f64,
    /// Number of distinct feedbacks the word can produce
    pub buckets: usize,
    pub expected_remaining: f64,
}

/// Result of ranking a word list
pub struct RankResult {
    pub total_candidates: usize,
    pub entries: Vec<RankEntry>,
}

/// Rank every word in the solver's list and keep the best `top`
#[must_use]
pub fn rank_words(solver: &Solver<'_>, top: usize) -> RankResult {
    let candidates = solver.candidates();
    let total = candidates.len();

    let entries = rank_candidates(&candidates)
        .into_iter()
        .take(top)
        .map(|ranked| RankEntry {
            word: ranked.word.clone(),
            score: ranked.score,
            buckets: feedback_distribution(ranked.word, &candidates).len(),
            expected_remaining: total as f64 / ranked.score.exp2(),
        })
        .collect();

    RankResult {
        total_candidates: total,
        entries,
    }
}

/// Score a single word against the solver's list
///
/// # Errors
///
/// Returns `WordleError::Word` if `text` is not a valid word.
pub fn score_word(solver: &Solver<'_>, text: &str) -> Result<RankEntry> {
    let word = Word::new(text)?;
    let candidates = solver.candidates();
    let score = solver.score(&word, &candidates);

    Ok(RankEntry {
        buckets: feedback_distribution(&word, &candidates).len(),
        expected_remaining: candidates.len() as f64 / score.exp2(),
        word,
        score,
    })
}
