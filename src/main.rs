//! Sutom Solver - CLI
//!
//! Entropy-driven solver for Wordle/Sutom-style games over file-based
//! dictionaries, one dictionary per word length.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sutom_solver::{
    commands::{run_interactive, run_opening, run_sample, run_solve, SampleConfig, SolveConfig},
    core::Word,
    corpus::MAX_WORDS,
    output::{print_game_report, print_opening_result, print_sample_result},
    solver::OpeningBook,
};

#[derive(Parser)]
#[command(
    name = "sutom_solver",
    about = "Wordle/Sutom solver maximizing expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the mots_<K>.txt dictionaries
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Cap on how many dictionary words are loaded
    #[arg(long, global = true, default_value_t = MAX_WORDS)]
    max_words: usize,

    /// Override the opening book with a single first word
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a known secret word automatically
    Solve {
        /// The secret word to solve
        secret: String,

        /// Reveal the first letter up front, Sutom style
        #[arg(long, conflicts_with = "mask")]
        sutom: bool,

        /// Initial mask: letters fix slots, '.' leaves them open
        #[arg(long)]
        mask: Option<String>,

        /// Show per-turn solution counts and information gains
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest guesses for a live game turn by turn
    Interactive {
        /// Initial mask; prompted for when absent
        #[arg(long)]
        mask: Option<String>,
    },

    /// Estimate average performance over randomly drawn secrets
    Sample {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length to sample
        #[arg(short = 'k', long, default_value = "5")]
        word_len: usize,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Play Sutom games instead of plain Wordle
        #[arg(long)]
        sutom: bool,
    },

    /// Search a dictionary for its best opening word
    Opening {
        /// Word length to search
        #[arg(short = 'k', long, default_value = "5")]
        word_len: usize,
    },
}

/// Build the opening book, honoring a `--first-word` override
fn opening_book(first_word: Option<&str>) -> Result<OpeningBook> {
    match first_word {
        Some(text) => {
            let word = Word::new(text).with_context(|| format!("invalid first word {text:?}"))?;
            Ok(OpeningBook::from_words([word]))
        }
        None => Ok(OpeningBook::french()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let book = opening_book(cli.first_word.as_deref())?;

    match cli.command {
        Commands::Solve {
            secret,
            sutom,
            mask,
            verbose,
        } => {
            let config = SolveConfig {
                secret,
                sutom,
                mask,
            };
            let report = run_solve(&config, &cli.data_dir, cli.max_words, &book)?;
            print_game_report(&report, verbose);
            Ok(())
        }
        Commands::Interactive { mask } => {
            run_interactive(mask.as_deref(), &cli.data_dir, cli.max_words, &book)
        }
        Commands::Sample {
            count,
            word_len,
            seed,
            sutom,
        } => {
            let config = SampleConfig {
                count,
                word_len,
                seed,
                sutom,
            };
            let result = run_sample(&config, &cli.data_dir, cli.max_words, &book)?;
            print_sample_result(&result);
            Ok(())
        }
        Commands::Opening { word_len } => {
            let result = run_opening(word_len, &cli.data_dir, cli.max_words)?;
            print_opening_result(&result);
            Ok(())
        }
    }
}
