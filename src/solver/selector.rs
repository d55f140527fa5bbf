//! Guess selection by entropy maximization
//!
//! Scores a pool of candidate guesses against the set of possible
//! solutions and proposes the guess with the highest expected
//! information gain. Scoring runs in parallel across the pool.

use super::entropy::entropy_of_guess;
use crate::core::{GameState, Word};
use rayon::prelude::*;

/// Below this many possible solutions, guesses are drawn from the
/// solutions themselves so a correct guess can end the game, instead
/// of from the whole corpus.
pub const SHOOT_TO_KILL_BELOW: usize = 4;

/// How a proposed guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalOrigin {
    /// Looked up from the opening book, no scoring involved
    OpeningBook,
    /// The single remaining possible solution
    OnlyCandidate,
    /// Won the entropy search over the guess pool
    Search,
}

/// A proposed guess together with how and why it was chosen
#[derive(Debug, Clone, Copy)]
pub struct Proposal<'a> {
    pub word: &'a Word,
    /// Expected information gain in bits; `None` when nothing was scored
    pub entropy: Option<f64>,
    pub origin: ProposalOrigin,
    /// Size of the solution set the proposal was computed against
    pub solutions_remaining: usize,
}

/// Corpus words still compatible with the full game state
#[must_use]
pub fn possible_solutions<'a>(state: &GameState, corpus: &'a [Word]) -> Vec<&'a Word> {
    corpus
        .iter()
        .filter(|word| state.is_compatible(word, false))
        .collect()
}

/// Propose the best next guess for a solution set
///
/// Returns `None` when no solution remains. A lone remaining solution
/// is proposed directly without scoring. Otherwise every word in the
/// guess pool is scored and the highest entropy wins, with ties going
/// to the word earliest in the pool so the result never depends on
/// thread scheduling.
///
/// # Examples
/// ```
/// use sutom_solver::core::Word;
/// use sutom_solver::solver::{select_best_guess, ProposalOrigin};
///
/// let corpus: Vec<Word> = ["TARIE", "REPAS", "SAPIN", "TARTE", "RATIO"]
///     .iter()
///     .filter_map(|w| Word::new(*w).ok())
///     .collect();
/// let solutions: Vec<&Word> = corpus.iter().collect();
///
/// let proposal = select_best_guess(&corpus, &solutions).unwrap();
/// assert_eq!(proposal.origin, ProposalOrigin::Search);
/// assert!(proposal.entropy.unwrap() > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(corpus: &'a [Word], solutions: &[&'a Word]) -> Option<Proposal<'a>> {
    match solutions {
        [] => None,
        [only] => Some(Proposal {
            word: only,
            entropy: None,
            origin: ProposalOrigin::OnlyCandidate,
            solutions_remaining: 1,
        }),
        _ => {
            let pool: Vec<&Word> = if solutions.len() < SHOOT_TO_KILL_BELOW {
                solutions.to_vec()
            } else {
                corpus.iter().collect()
            };

            pool.par_iter()
                .enumerate()
                .map(|(index, &word)| (index, word, entropy_of_guess(word, solutions)))
                .max_by(|&(ia, _, ea), &(ib, _, eb)| {
                    ea.total_cmp(&eb).then_with(|| ib.cmp(&ia))
                })
                .map(|(_, word, entropy)| Proposal {
                    word,
                    entropy: Some(entropy),
                    origin: ProposalOrigin::Search,
                    solutions_remaining: solutions.len(),
                })
        }
    }
}
