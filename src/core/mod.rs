//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod mask;
mod pattern;
mod state;
mod word;

pub use mask::Mask;
pub use pattern::Pattern;
pub use state::{GameState, GuessStep};
pub use word::{Word, WordError};
