//! Opening command
//!
//! Searches a whole dictionary for the best first guess. This is the
//! expensive pass whose results get frozen into the opening book.

use crate::core::{GameState, Word};
use crate::corpus::{dictionary_path, load_words};
use crate::solver::{possible_solutions, select_best_guess, Proposal};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a best-opening search
pub struct OpeningResult {
    pub word: String,
    /// `None` only for a single-word dictionary
    pub entropy: Option<f64>,
    pub corpus_size: usize,
    pub duration: Duration,
}

/// Best first guess over a corpus, book bypassed
#[must_use]
pub fn best_opening(words: &[Word]) -> Option<Proposal<'_>> {
    let word_len = words.first()?.len();
    let state = GameState::new(word_len);
    let solutions = possible_solutions(&state, words);
    select_best_guess(words, &solutions)
}

/// Search the dictionary of the given length for its best opener
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or holds no
/// usable word.
pub fn run_opening(word_len: usize, data_dir: &Path, max_words: usize) -> Result<OpeningResult> {
    let words = load_words(data_dir, word_len, max_words).with_context(|| {
        format!(
            "cannot read dictionary {}",
            dictionary_path(data_dir, word_len).display()
        )
    })?;

    println!(
        "Searching {} words of length {word_len} for the best opener...",
        words.len()
    );

    let start = Instant::now();
    let Some(proposal) = best_opening(&words) else {
        bail!(
            "dictionary {} holds no usable word",
            dictionary_path(data_dir, word_len).display()
        );
    };
    let duration = start.elapsed();

    Ok(OpeningResult {
        word: proposal.word.text().to_string(),
        entropy: proposal.entropy,
        corpus_size: words.len(),
        duration,
    })
}
