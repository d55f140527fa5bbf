//! Dictionary loading
//!
//! Dictionaries live as plain text files named by word length, one word
//! per line: `mots_5.txt`, `mots_6.txt` and so on under the data
//! directory. Lines are normalized to uppercase; anything that is not a
//! clean A–Z word of the requested length is skipped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default ceiling on corpus size, keeps the entropy pass bounded
pub const MAX_WORDS: usize = 4096;

/// Path of the dictionary file for a word length
#[must_use]
pub fn dictionary_path(data_dir: &Path, word_len: usize) -> PathBuf {
    data_dir.join(format!("mots_{word_len}.txt"))
}

/// Load the dictionary for a word length, capped at `cap` words
///
/// # Errors
///
/// Returns an I/O error if the dictionary file cannot be read.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use sutom_solver::corpus::{load_words, MAX_WORDS};
///
/// let words = load_words(Path::new("data"), 5, MAX_WORDS).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words(data_dir: &Path, word_len: usize, cap: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(dictionary_path(data_dir, word_len))?;
    Ok(words_from_lines(&content, word_len, cap))
}

/// Parse dictionary lines into deduplicated words of one length
///
/// Order of first appearance is preserved; it becomes the tie-break
/// order of the entropy search.
#[must_use]
pub fn words_from_lines(content: &str, word_len: usize, cap: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for line in content.lines() {
        if words.len() >= cap {
            break;
        }
        let Ok(word) = Word::new(line.trim()) else {
            continue;
        };
        if word.len() == word_len && seen.insert(word.text().to_owned()) {
            words.push(word);
        }
    }

    words
}
