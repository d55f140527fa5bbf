//! Dictionary files and their loading rules

mod loader;

pub use loader::{dictionary_path, load_words, words_from_lines, MAX_WORDS};
