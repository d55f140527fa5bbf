//! Guess selection and game play
//!
//! Entropy scoring, the guess selector, the opening book and the engine
//! that strings them into full games.

mod engine;
mod entropy;
mod opening;
mod selector;

pub use engine::{GameOutcome, GameReport, Solver, TurnRecord, LIST_SOLUTIONS_BELOW, MAX_TURNS};
pub use entropy::{entropy_by_enumeration, entropy_of_guess};
pub use opening::OpeningBook;
pub use selector::{
    possible_solutions, select_best_guess, Proposal, ProposalOrigin, SHOOT_TO_KILL_BELOW,
};
