//! Display functions for command results

use super::formatters::{entropy_bar, format_slots, word_slots};
use crate::commands::{DailyReport, RankEntry, RankResult};
use crate::daily::RevealState;
use crate::solver::SimulationOutcome;
use colored::Colorize;

/// Print the word of the day, masked unless revealed
pub fn print_daily_report(report: &DailyReport, verbose: bool) {
    let slots = word_slots(&report.word, RevealState::from_checked(report.revealed));

    println!(
        "{} {}",
        "Word of the day for".bright_cyan(),
        report.date.to_string().bright_cyan().bold()
    );
    println!("  {}", format_slots(&slots).bright_yellow().bold());

    if !report.revealed {
        println!("  {}", "(use --reveal to show the word)".bright_black());
    }

    if verbose {
        println!(
            "  Day {} since {} ({} words, index {})",
            (report.date - report.epoch).num_days(),
            report.epoch,
            report.list_len,
            report.day_index
        );
    }
}

/// Print the path taken to solve a word
pub fn print_simulation(outcome: &SimulationOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        outcome.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in outcome.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Feedback:   {}", step.feedback.to_digits());
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.score {
                Some(score) => println!("  Score:      {score:.3} bits"),
                None => println!("  Score:      (opening guess)"),
            }
        }
    }

    println!();
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", outcome.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print ranked words as a table with entropy bars
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} against {} words ",
        "TOP GUESSES".bright_cyan().bold(),
        result.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, entry) in result.entries.iter().enumerate() {
        print_rank_line(i + 1, entry, result.total_candidates);
    }
}

/// Print one scored word
pub fn print_rank_entry(entry: &RankEntry, total_candidates: usize) {
    println!(
        "\n📊 {} against {} words:",
        entry.word.text().to_uppercase().bright_yellow().bold(),
        total_candidates
    );
    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(entry.score, total_candidates, 30).green(),
        format!("{:.3} bits", entry.score).bright_yellow()
    );
    println!("   Feedbacks:   {}", entry.buckets);
    println!(
        "   Expected:    {:.1} candidates remain",
        entry.expected_remaining
    );
}

fn print_rank_line(rank: usize, entry: &RankEntry, total_candidates: usize) {
    println!(
        "  {rank:3}. {} [{}] {:.3} bits  ~{:.1} left",
        entry.word.text().to_uppercase().bright_yellow(),
        entropy_bar(entry.score, total_candidates, 20).green(),
        entry.score,
        entry.expected_remaining
    );
}
