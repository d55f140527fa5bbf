//! Sample command
//!
//! Estimates average solver performance by playing many games against
//! randomly drawn secrets.

use crate::core::{Mask, Word};
use crate::corpus::{dictionary_path, load_words};
use crate::solver::{OpeningBook, Solver};
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

/// Configuration for a sampling run
pub struct SampleConfig {
    pub count: usize,
    pub word_len: usize,
    /// Fixed RNG seed; a seeded run draws the same secrets every time
    pub seed: Option<u64>,
    /// Play Sutom games: first letter revealed, guess pool restricted
    pub sutom: bool,
}

/// Aggregate statistics from a sampling run
pub struct SampleResult {
    pub games: usize,
    pub total_score: usize,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    pub solved: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Load the dictionary and run the sampling loop
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or the
/// configuration is degenerate (zero games, empty dictionary).
pub fn run_sample(
    config: &SampleConfig,
    data_dir: &Path,
    max_words: usize,
    book: &OpeningBook,
) -> Result<SampleResult> {
    let words = load_words(data_dir, config.word_len, max_words).with_context(|| {
        format!(
            "cannot read dictionary {}",
            dictionary_path(data_dir, config.word_len).display()
        )
    })?;

    sample_games(&words, config, book)
}

/// Play `config.count` games against random secrets from `words`
///
/// Scores count a lost game as the full turn allowance, so the average
/// stays comparable across runs with different solve rates.
///
/// # Errors
///
/// Returns an error if `words` is empty or `config.count` is zero.
pub fn sample_games(
    words: &[Word],
    config: &SampleConfig,
    book: &OpeningBook,
) -> Result<SampleResult> {
    if config.count == 0 {
        bail!("sample count must be at least 1");
    }
    if words.is_empty() {
        bail!("cannot sample from an empty dictionary");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_score = 0;
    let mut min_score = usize::MAX;
    let mut max_score = 0;
    let mut solved = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for played in 1..=config.count {
        let truth = &words[rng.random_range(0..words.len())];

        let outcome = if config.sutom {
            let mask = Mask::first_letter(truth);
            let pool: Vec<Word> = words
                .iter()
                .filter(|word| mask.matches(word))
                .cloned()
                .collect();
            Solver::new(&pool, book).play(truth, &mask).outcome
        } else {
            let mask = Mask::unconstrained(config.word_len);
            Solver::new(words, book).play(truth, &mask).outcome
        };

        let score = outcome.score();
        total_score += score;
        min_score = min_score.min(score);
        max_score = max_score.max(score);
        if outcome.is_solved() {
            solved += 1;
        }
        *distribution.entry(score).or_insert(0) += 1;

        let avg = total_score as f64 / played as f64;
        pb.set_message(format!("avg {avg:.2} guesses"));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(SampleResult {
        games: config.count,
        total_score,
        average_score: total_score as f64 / config.count as f64,
        min_score,
        max_score,
        solved,
        distribution,
        duration,
        games_per_second: config.count as f64 / duration.as_secs_f64(),
    })
}
