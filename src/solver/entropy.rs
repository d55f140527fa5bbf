//! Shannon entropy scoring for candidate guesses
//!
//! Given a guess and the set of still-possible solutions, computes the
//! expected information gain of playing that guess.

use crate::core::{GameState, Pattern, Word};
use rustc_hash::FxHashMap;

/// Expected information gain of a guess, in bits
///
/// Buckets the solutions by the pattern each would produce, then takes
/// the Shannon entropy of the bucket distribution.
///
/// # Formula
/// H = -Σ p(x) × log₂(p(x))
///
/// where p(x) is the probability of observing pattern x, solutions
/// taken as equally likely.
///
/// # Examples
/// ```
/// use sutom_solver::core::Word;
/// use sutom_solver::solver::entropy_of_guess;
///
/// let guess = Word::new("TARIE").unwrap();
/// let words = vec![Word::new("REPAS").unwrap(), Word::new("SAPIN").unwrap()];
/// let solutions: Vec<&Word> = words.iter().collect();
///
/// let entropy = entropy_of_guess(&guess, &solutions);
/// assert!(entropy >= 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn entropy_of_guess(guess: &Word, solutions: &[&Word]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_histogram(guess, solutions))
}

/// Bucket solutions by the pattern they would produce for the guess
fn pattern_histogram(guess: &Word, solutions: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &solution in solutions {
        let pattern = Pattern::compute(guess, solution);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern histogram
///
/// Zero for a certain outcome, log₂(n) for n equally likely patterns.
fn shannon_entropy(pattern_counts: &FxHashMap<Pattern, usize>) -> f64 {
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of a guess by enumerating every feedback pattern
///
/// For each of the 3^K patterns, plays the guess hypothetically on a
/// clone of the state and counts how many solutions stay compatible.
/// Only the hypothetical last step needs re-checking because every
/// solution passed the full state already.
///
/// Numerically equivalent to [`entropy_of_guess`] whenever `solutions`
/// holds exactly the words compatible with `state`; the histogram form
/// skips the empty buckets and is the one the selector uses.
#[must_use]
pub fn entropy_by_enumeration(state: &GameState, guess: &Word, solutions: &[&Word]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let total = solutions.len() as f64;
    let mut entropy = 0.0;

    for value in 0..Pattern::count(state.word_len()) {
        let mut hypothetical = state.clone();
        hypothetical.update(guess.clone(), Pattern::new(value));

        let matches = solutions
            .iter()
            .filter(|solution| hypothetical.is_compatible(solution, true))
            .count();

        if matches > 0 {
            let p = matches as f64 / total;
            entropy -= p * p.log2();
        }
    }

    entropy
}
