//! Test all words - comprehensive solver evaluation
//!
//! Simulates the solver against every word in the list (or a subset) and
//! collects the distribution of guess counts.

use crate::core::Word;
use crate::error::WordleError;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Which words to test and how
pub struct TestAllConfig {
    /// Test only the first N words
    pub limit: Option<usize>,
    /// Test N randomly chosen words instead
    pub sample: Option<usize>,
    /// Seed for `sample`; random when unset
    pub seed: Option<u64>,
    pub first_guess: Option<Word>,
    pub max_steps: usize,
    pub show_progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            seed: None,
            first_guess: None,
            max_steps: 100,
            show_progress: true,
        }
    }
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guess count to number of words solved with that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Pick the words to test according to `config`
#[must_use]
pub fn select_targets<'a>(words: &'a [Word], config: &TestAllConfig) -> Vec<&'a Word> {
    if let Some(count) = config.sample {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("Sampling {count} words with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        return words.choose_multiple(&mut rng, count).collect();
    }

    words
        .iter()
        .take(config.limit.unwrap_or(words.len()))
        .collect()
}

/// Run the solver on every selected word
#[must_use]
pub fn run_test_all(solver: &Solver<'_>, config: &TestAllConfig) -> TestAllStatistics {
    let targets = select_targets(solver.words(), config);

    let pb = if config.show_progress {
        println!("🎯 Testing {} words...", targets.len());
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed_words = Vec::new();
    let mut solved_counts: Vec<(String, usize)> = Vec::new();
    let total_start = Instant::now();

    for (idx, &answer) in targets.iter().enumerate() {
        match solver.simulate(answer, config.max_steps, config.first_guess.as_ref()) {
            Ok(outcome) => match outcome.guesses() {
                Some(n) => {
                    *guess_distribution.entry(n).or_insert(0) += 1;
                    solved_counts.push((answer.text().to_string(), n));
                }
                None => failed_words.push(answer.text().to_string()),
            },
            Err(WordleError::NoCandidates { guess, feedback }) => {
                warn!("'{answer}' ruled out after {guess} ({feedback})");
                failed_words.push(answer.text().to_string());
            }
            Err(e) => {
                warn!("simulating '{answer}' failed: {e}");
                failed_words.push(answer.text().to_string());
            }
        }

        if idx % 10 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(String, usize)> = solved_counts
        .iter()
        .filter(|(_, n)| *n >= 5)
        .cloned()
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: targets.len(),
        solved,
        failed: failed_words.len(),
        max_guesses: guess_distribution.keys().next_back().copied().unwrap_or(0),
        min_guesses: guess_distribution.keys().next().copied().unwrap_or(0),
        guess_distribution,
        total_time,
        average_guesses,
        worst_words,
        failed_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet() -> TestAllConfig {
        TestAllConfig {
            show_progress: false,
            ..TestAllConfig::default()
        }
    }

    #[test]
    fn all_listed_words_are_solved() {
        let words = words_from_slice(&WORDS[..40]);
        let solver = Solver::new(&words).unwrap();

        let stats = run_test_all(&solver, &quiet());

        assert_eq!(stats.total_words, 40);
        assert_eq!(stats.solved, 40);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 40);
        assert!(stats.min_guesses >= 1);
        assert!(stats.max_guesses >= stats.min_guesses);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn limit_and_forced_opener() {
        let words = words_from_slice(&WORDS[..40]);
        let solver = Solver::new(&words).unwrap();
        let config = TestAllConfig {
            limit: Some(5),
            first_guess: Some(Word::new("raise").unwrap()),
            ..quiet()
        };

        let stats = run_test_all(&solver, &config);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.solved, 5);
        // RAISE is not among the first 40 words, so nothing is solved in one
        assert!(!stats.guess_distribution.contains_key(&1));
    }

    #[test]
    fn tight_step_limit_records_failures() {
        let words = words_from_slice(&WORDS[..40]);
        let solver = Solver::new(&words).unwrap();
        let config = TestAllConfig {
            max_steps: 1,
            first_guess: Some(Word::new("raise").unwrap()),
            ..quiet()
        };

        let stats = run_test_all(&solver, &config);
        assert_eq!(stats.solved, 0);
        assert_eq!(stats.failed, 40);
        assert_eq!(stats.failed_words.len(), 40);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let words = words_from_slice(WORDS);
        let config = TestAllConfig {
            sample: Some(7),
            seed: Some(42),
            ..quiet()
        };

        let first: Vec<&str> = select_targets(&words, &config)
            .iter()
            .map(|w| w.text())
            .collect();
        let second: Vec<&str> = select_targets(&words, &config)
            .iter()
            .map(|w| w.text())
            .collect();

        assert_eq!(first.len(), 7);
        assert_eq!(first, second);
    }
}
