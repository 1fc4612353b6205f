//! Shannon entropy scoring of guesses
//!
//! A guess splits the candidate set by the feedback each candidate would
//! produce. The more evenly it splits, the more bits it is expected to reveal.

use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// A word paired with its entropy score in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Count candidates per feedback code
#[must_use]
pub fn feedback_distribution(guess: &Word, candidates: &[&Word]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts
            .entry(Feedback::compute(guess, candidate).code())
            .or_insert(0) += 1;
    }

    counts
}

/// H = -Σ p * log₂(p) over a distribution of counts
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_daily::solver::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// for code in 0..4u8 {
///     uniform.insert(code, 25);
/// }
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information (bits) gained by guessing `guess` against `candidates`
#[must_use]
pub fn word_score(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&feedback_distribution(guess, candidates))
}

/// Score every candidate against the candidate set, best first
///
/// Ties keep the order of `candidates`.
#[must_use]
pub fn rank_candidates<'a>(candidates: &[&'a Word]) -> Vec<RankedWord<'a>> {
    let processed = AtomicUsize::new(0);
    let total = candidates.len();

    let mut ranked: Vec<RankedWord<'a>> = candidates
        .par_iter()
        .map(|&word| {
            let score = word_score(word, candidates);
            let done = processed.fetch_add(1, Ordering::Relaxed);
            if done % 100 == 0 {
                debug!("Processing {done}/{total} words...");
            }
            RankedWord { word, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Highest-scoring candidate, if any
#[must_use]
pub fn best_candidate<'a>(candidates: &[&'a Word]) -> Option<RankedWord<'a>> {
    rank_candidates(candidates).into_iter().next()
}
