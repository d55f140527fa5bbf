//! Sutom Solver
//!
//! An entropy-driven solver for Wordle/Sutom-style guessing games: each
//! turn it proposes the guess whose feedback is expected to carry the
//! most information about the secret word.
//!
//! # Quick Start
//!
//! ```rust
//! use sutom_solver::core::{Pattern, Word};
//!
//! let guess = Word::new("tarie").unwrap();
//! let truth = Word::new("repas").unwrap();
//!
//! let pattern = Pattern::compute(&guess, &truth);
//! assert_eq!(pattern.to_digits(truth.len()), "01101");
//! ```

// Core domain types
pub mod core;

// Guess selection and game play
pub mod solver;

// Dictionary files
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
