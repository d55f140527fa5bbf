//! Precomputed first guesses per word length
//!
//! The first guess never depends on feedback, so searching for it every
//! game wastes the most expensive entropy pass. The book keeps one
//! opener per word length; the engine falls back to a live search when
//! the book has no entry or the entry is missing from the corpus.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Openers indexed by word length
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    openers: FxHashMap<usize, Word>,
}

impl OpeningBook {
    /// A book with no entries; every opener comes from a live search
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Openers precomputed for the French dictionaries
    ///
    /// TARIE and SORTIE maximize expected information gain over the
    /// five and six letter corpora. The `opening` command recomputes
    /// these for any dictionary.
    #[must_use]
    pub fn french() -> Self {
        Self::from_words(["TARIE", "SORTIE"].iter().filter_map(|w| Word::new(*w).ok()))
    }

    /// Build a book from explicit openers, one slot per word length
    ///
    /// A later word of the same length replaces the earlier one.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut openers = FxHashMap::default();
        for word in words {
            openers.insert(word.len(), word);
        }
        Self { openers }
    }

    /// The opener recorded for a word length, if any
    #[must_use]
    pub fn opener(&self, word_len: usize) -> Option<&Word> {
        self.openers.get(&word_len)
    }
}
