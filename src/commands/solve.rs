//! Interactive solving
//!
//! The player types each guess and the feedback the game showed; after every
//! round the remaining candidates are re-ranked and the best one suggested.

use crate::core::{Feedback, Word};
use crate::error::Result;
use crate::solver::{Solver, prune, rank_candidates};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::info;

/// Options for an interactive session
pub struct SolveOptions {
    /// Known answer; feedback is computed instead of asked for
    pub answer: Option<Word>,
    pub max_steps: usize,
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Solved on the given guess number
    Solved(usize),
    /// Step limit reached
    OutOfSteps,
    /// Input closed or the player quit
    Quit,
}

/// Run an interactive session reading from `input` and writing prompts to `output`
///
/// # Errors
///
/// Returns `WordleError::NoCandidates` when the feedback rules out every
/// word, and `WordleError::Terminal` on terminal I/O failure.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    options: &SolveOptions,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd> {
    let mut candidates = solver.candidates();

    writeln!(
        output,
        "Enter each guess, then its feedback as digits (Yes = 0, Exist = 1, No = 2). Type 'quit' to stop."
    )?;

    for step in 0..options.max_steps {
        info!("Step {step}: {} candidates", candidates.len());

        let Some(guess) = prompt_until(&mut input, &mut output, "Enter Word", |text| {
            Word::new(text).map_err(|e| e.to_string())
        })?
        else {
            return Ok(SessionEnd::Quit);
        };

        let feedback = if let Some(answer) = &options.answer {
            let feedback = Feedback::compute(&guess, answer);
            writeln!(output, "Feedback: {} ({feedback})", feedback.to_emoji())?;
            feedback
        } else {
            let Some(feedback) = prompt_until(
                &mut input,
                &mut output,
                "Enter status (Yes = 0, Exist = 1, No = 2)",
                |text| Feedback::parse_digits(text).map_err(|e| e.to_string()),
            )?
            else {
                return Ok(SessionEnd::Quit);
            };
            feedback
        };

        if feedback.is_solved() {
            writeln!(output, "{}", "Success!".green().bold())?;
            return Ok(SessionEnd::Solved(step + 1));
        }

        candidates = prune(&candidates, &guess, feedback)?;

        let ranked = rank_candidates(&candidates);
        if let Some(top) = ranked.first() {
            writeln!(
                output,
                "Top word is <{}> with a score {:.3}. {} candidates remain.",
                top.word.text().to_uppercase().bright_yellow().bold(),
                top.score,
                candidates.len()
            )?;
        }
        if candidates.len() <= 10 {
            let list: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
            writeln!(output, "Candidates: {}", list.join(", "))?;
        }
    }

    writeln!(output, "Out of steps.")?;
    Ok(SessionEnd::OutOfSteps)
}

/// Prompt until `parse` accepts a line; `None` on end of input or `quit`
fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> std::io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            return Ok(None);
        }

        match parse(line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordleError;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn words() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "irate", "crate", "grate", "bloke"])
    }

    fn run(options: &SolveOptions, script: &str) -> (Result<SessionEnd>, String) {
        let words = words();
        let solver = Solver::new(&words).unwrap();
        let mut out = Vec::new();
        let end = run_interactive(&solver, options, Cursor::new(script), &mut out);
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn solved_with_typed_feedback() {
        let options = SolveOptions {
            answer: None,
            max_steps: 10,
        };
        // crane against grate: No Yes Yes No Yes
        let (end, out) = run(&options, "crane\n20020\ngrate\n00000\n");

        assert_eq!(end.unwrap(), SessionEnd::Solved(2));
        assert!(out.contains("Top word is"));
        assert!(out.contains("Success!"));
    }

    #[test]
    fn invalid_entries_are_reprompted() {
        let options = SolveOptions {
            answer: None,
            max_steps: 10,
        };
        let (end, out) = run(&options, "cr\ncrane\n0122\n00000\n");

        assert_eq!(end.unwrap(), SessionEnd::Solved(1));
        assert!(out.contains("Word must be exactly 5 letters"));
        assert!(out.contains("Invalid feedback"));
    }

    #[test]
    fn known_answer_computes_feedback() {
        let options = SolveOptions {
            answer: Some(Word::new("bloke").unwrap()),
            max_steps: 10,
        };
        let (end, out) = run(&options, "crane\nbloke\n");

        assert_eq!(end.unwrap(), SessionEnd::Solved(2));
        assert!(out.contains("Feedback:"));
    }

    #[test]
    fn end_of_input_quits() {
        let options = SolveOptions {
            answer: None,
            max_steps: 10,
        };
        let (end, _) = run(&options, "crane\n");
        assert_eq!(end.unwrap(), SessionEnd::Quit);

        let (end, _) = run(&options, "quit\n");
        assert_eq!(end.unwrap(), SessionEnd::Quit);
    }

    #[test]
    fn contradictory_feedback_is_an_error() {
        let options = SolveOptions {
            answer: None,
            max_steps: 10,
        };
        let (end, _) = run(&options, "zzzzz\n00002\n");
        assert!(matches!(end, Err(WordleError::NoCandidates { .. })));
    }

    #[test]
    fn step_limit_ends_session() {
        let options = SolveOptions {
            answer: Some(Word::new("bloke").unwrap()),
            max_steps: 1,
        };
        let (end, out) = run(&options, "crane\n");
        assert_eq!(end.unwrap(), SessionEnd::OutOfSteps);
        assert!(out.contains("Out of steps."));
    }
}
