//! Wordle Daily - CLI
//!
//! Word of the day picker with a terminal widget, plus an entropy-based
//! solver for the same word list.

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    WordleError,
    commands::{
        DailyConfig, SimulateConfig, SolveOptions, TestAllConfig, print_test_all_statistics,
        rank_words, run_daily, run_interactive, run_test_all, score_word, simulate_word,
    },
    config::Config,
    core::Word,
    daily::{DailyWordSelector, Timezone, parse_date},
    output::{print_daily_report, print_rank_entry, print_rank_result, print_simulation},
    solver::Solver,
    wordlists::loader::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Word of the day picker and entropy-based Wordle helper",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a JSON array / text file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Config file (default: ./wordle_daily.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Timezone used to decide what "today" is: local or utc
    #[arg(long = "tz", global = true)]
    timezone: Option<Timezone>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the word of the day (default)
    Daily {
        /// Date as YYYY-MM-DD, or today/yesterday/tomorrow
        date: Option<String>,

        /// Show the word instead of blanks
        #[arg(short, long)]
        reveal: bool,

        /// Override day zero of the rotation (YYYY-MM-DD)
        #[arg(long)]
        epoch: Option<String>,
    },

    /// Interactive word of the day widget (TUI)
    Widget,

    /// Interactive solver: enter guesses and feedback, get suggestions
    Solve {
        /// Compute feedback against this answer instead of asking
        #[arg(short, long)]
        answer: Option<String>,

        /// Maximum number of guesses
        #[arg(short, long, value_parser = positive_steps())]
        max_steps: Option<usize>,
    },

    /// Solve a known target word and show each guess
    Simulate {
        /// The target word to solve
        word: String,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Maximum number of guesses
        #[arg(short, long, value_parser = positive_steps())]
        max_steps: Option<usize>,
    },

    /// Simulate the solver against every word in the list
    TestAll {
        /// Test only the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test N randomly sampled words
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Opening guess (default: first_guess from config, 'raise')
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Maximum number of guesses per word
        #[arg(short, long, default_value = "100", value_parser = positive_steps())]
        max_steps: usize,
    },

    /// Rank words by expected information
    Rank {
        /// Score only this word
        word: Option<String>,

        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

/// Guess limits start at 1, as `max_steps` in the config file
fn positive_steps() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        let code = e.downcast_ref::<WordleError>().map_or(1, WordleError::exit_code);
        std::process::exit(code);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v` when set
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let source = match (&cli.wordlist, &config.wordlist) {
        (Some(arg), _) => WordSource::from_arg(arg),
        (None, Some(path)) => WordSource::File(path.clone()),
        (None, None) => WordSource::Embedded,
    };
    let words = source.load()?;
    let timezone = cli.timezone.unwrap_or(config.timezone);
    info!(words = words.len(), %timezone, "loaded word list");

    let command = cli.command.unwrap_or(Commands::Daily {
        date: None,
        reveal: false,
        epoch: None,
    });

    match command {
        Commands::Daily {
            date,
            reveal,
            epoch,
        } => {
            let epoch = epoch
                .as_deref()
                .map(parse_date)
                .transpose()?
                .unwrap_or(config.epoch);
            let daily = DailyConfig {
                date,
                epoch,
                timezone,
                reveal,
            };
            let report = run_daily(&daily, &words)?;
            print_daily_report(&report, cli.verbose > 0);
            Ok(())
        }
        Commands::Widget => run_widget_command(&words, config.epoch, timezone),
        Commands::Solve { answer, max_steps } => {
            let solver = Solver::new(&words)?;
            let options = SolveOptions {
                answer: answer
                    .as_deref()
                    .map(Word::new)
                    .transpose()
                    .map_err(WordleError::from)?,
                max_steps: max_steps.unwrap_or(config.max_steps),
            };
            let stdin = std::io::stdin();
            run_interactive(&solver, &options, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
        Commands::Simulate {
            word,
            first_guess,
            max_steps,
        } => {
            let solver = Solver::new(&words)?;
            let simulate = SimulateConfig {
                target: word,
                max_steps: max_steps.unwrap_or(config.max_steps),
                first_guess,
            };
            let outcome = simulate_word(&simulate, &solver)?;
            print_simulation(&outcome, cli.verbose > 0);
            Ok(())
        }
        Commands::TestAll {
            limit,
            sample,
            seed,
            first_guess,
            max_steps,
        } => {
            let first_guess = match first_guess {
                Some(text) => Word::new(text).map_err(WordleError::from)?,
                None => config.first_guess_word()?,
            };
            run_test_all_command(
                &words,
                TestAllConfig {
                    limit,
                    sample,
                    seed,
                    first_guess: Some(first_guess),
                    max_steps,
                    show_progress: true,
                },
            )
        }
        Commands::Rank { word, top } => {
            let solver = Solver::new(&words)?;
            match word {
                Some(text) => {
                    let entry = score_word(&solver, &text)?;
                    print_rank_entry(&entry, words.len());
                }
                None => print_rank_result(&rank_words(&solver, top)),
            }
            Ok(())
        }
    }
}

fn run_widget_command(words: &[Word], epoch: chrono::NaiveDate, timezone: Timezone) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let selector = DailyWordSelector::new(words)?.with_epoch(epoch);
    run_tui(App::new(selector, timezone))
}

fn run_test_all_command(words: &[Word], config: TestAllConfig) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nWord list: {} words", words.len());
    if let Some(word) = &config.first_guess {
        println!("First guess: {}", word.text().to_uppercase());
    }
    println!("Max steps: {}", config.max_steps);
    println!();

    let solver = Solver::new(words)?;
    let stats = run_test_all(&solver, &config);
    print_test_all_statistics(&stats);
    Ok(())
}
