//! Game engine: plays a full game against a known truth word
//!
//! The engine owns the turn loop. Each turn it asks the opening book or
//! the entropy search for a guess, computes the real feedback against
//! the truth, folds it into the state and records what happened. Used
//! by the `solve` command for single games and by `sample` for bulk
//! evaluation.

use super::opening::OpeningBook;
use super::selector::{possible_solutions, select_best_guess, Proposal, ProposalOrigin};
use crate::core::{GameState, Mask, Pattern, Word};

/// Turn limit, after which a game counts as lost
pub const MAX_TURNS: usize = 6;

/// Below this many possible solutions, turn records and turn displays
/// carry the solution words themselves, not just their count
pub const LIST_SOLUTIONS_BELOW: usize = 10;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved { turns: usize },
    Exhausted,
}

impl GameOutcome {
    /// Turns consumed, counting a lost game as the full allowance
    #[must_use]
    pub const fn score(self) -> usize {
        match self {
            Self::Solved { turns } => turns,
            Self::Exhausted => MAX_TURNS,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One played turn: the guess, its feedback and the scoring context
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub word: Word,
    pub pattern: Pattern,
    /// Expected information gain; `None` for book and lone-candidate guesses
    pub entropy: Option<f64>,
    pub origin: ProposalOrigin,
    /// Possible solutions before the guess was played
    pub solutions_before: usize,
    /// Possible solutions once the feedback is known
    pub solutions_after: usize,
    /// The solutions the guess was chosen from, kept when fewer than
    /// [`LIST_SOLUTIONS_BELOW`] remained
    pub remaining_solutions: Option<Vec<Word>>,
}

/// Everything that happened in one automated game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub truth: Word,
    pub outcome: GameOutcome,
    pub turns: Vec<TurnRecord>,
    /// Solution count before the first guess, mask applied
    pub initial_solutions: usize,
}

/// Entropy-driven game player over a fixed corpus
pub struct Solver<'a> {
    corpus: &'a [Word],
    book: &'a OpeningBook,
}

impl<'a> Solver<'a> {
    pub const fn new(corpus: &'a [Word], book: &'a OpeningBook) -> Self {
        Self { corpus, book }
    }

    /// Propose the next guess for a state
    ///
    /// On the very first turn of an unconstrained game the opening book
    /// short-circuits the search, provided its opener exists in the
    /// corpus. Returns `None` when no corpus word is compatible with
    /// the state, which means the feedback so far was contradictory or
    /// the secret is not in the dictionary.
    #[must_use]
    pub fn propose(&self, state: &GameState) -> Option<Proposal<'a>> {
        if state.turns_played() == 0
            && state.is_unconstrained()
            && let Some(opener) = self.book.opener(state.word_len())
            && let Some(word) = self.corpus.iter().find(|&w| w == opener)
        {
            return Some(Proposal {
                word,
                entropy: None,
                origin: ProposalOrigin::OpeningBook,
                solutions_remaining: self.corpus.len(),
            });
        }

        let solutions = possible_solutions(state, self.corpus);
        select_best_guess(self.corpus, &solutions)
    }

    /// Play a full game against a known truth word
    ///
    /// # Panics
    /// Panics if the truth and the mask disagree on word length; the
    /// commands validate user input before getting here.
    #[must_use]
    pub fn play(&self, truth: &Word, mask: &Mask) -> GameReport {
        assert_eq!(
            truth.len(),
            mask.len(),
            "truth and mask must have the same length"
        );

        let mut state = GameState::from_mask(mask);
        let initial_solutions = state.compatible_count(self.corpus);
        let mut turns = Vec::new();

        for turn in 0..MAX_TURNS {
            let Some(proposal) = self.propose(&state) else {
                break;
            };

            let pattern = Pattern::compute(proposal.word, truth);
            let solutions_before = proposal.solutions_remaining;
            let remaining_solutions: Option<Vec<Word>> =
                if solutions_before < LIST_SOLUTIONS_BELOW {
                    Some(
                        possible_solutions(&state, self.corpus)
                            .into_iter()
                            .cloned()
                            .collect(),
                    )
                } else {
                    None
                };

            if pattern.is_perfect(state.word_len()) {
                turns.push(TurnRecord {
                    word: proposal.word.clone(),
                    pattern,
                    entropy: proposal.entropy,
                    origin: proposal.origin,
                    solutions_before,
                    solutions_after: 1,
                    remaining_solutions,
                });
                return GameReport {
                    truth: truth.clone(),
                    outcome: GameOutcome::Solved { turns: turn + 1 },
                    turns,
                    initial_solutions,
                };
            }

            state.update(proposal.word.clone(), pattern);
            turns.push(TurnRecord {
                word: proposal.word.clone(),
                pattern,
                entropy: proposal.entropy,
                origin: proposal.origin,
                solutions_before,
                solutions_after: state.compatible_count(self.corpus),
                remaining_solutions,
            });
        }

        GameReport {
            truth: truth.clone(),
            outcome: GameOutcome::Exhausted,
            turns,
            initial_solutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn solves_within_turn_limit() {
        let words = corpus(&["TARIE", "REPAS", "TARTE", "SAPIN", "RATIO"]);
        let book = OpeningBook::empty();
        let solver = Solver::new(&words, &book);

        for truth in &words {
            let report = solver.play(truth, &Mask::unconstrained(5));
            assert!(report.outcome.is_solved(), "failed to solve {truth}");
            assert!(report.outcome.score() <= MAX_TURNS);
            assert_eq!(report.turns.len(), report.outcome.score());
            assert_eq!(report.truth, *truth);
        }
    }

    #[test]
    fn lone_corpus_word_solved_on_first_turn() {
        let words = corpus(&["TARIE"]);
        let book = OpeningBook::empty();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[0], &Mask::unconstrained(5));
        assert_eq!(report.outcome, GameOutcome::Solved { turns: 1 });
        assert_eq!(report.turns[0].origin, ProposalOrigin::OnlyCandidate);
        assert!(report.turns[0].entropy.is_none());
        assert_eq!(report.turns[0].solutions_after, 1);
    }

    #[test]
    fn book_opener_plays_first_when_unconstrained() {
        let words = corpus(&["REPAS", "TARIE", "SAPIN", "TARTE", "RATIO"]);
        let book = OpeningBook::french();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[0], &Mask::unconstrained(5));
        assert_eq!(report.turns[0].word.text(), "TARIE");
        assert_eq!(report.turns[0].origin, ProposalOrigin::OpeningBook);
        assert_eq!(report.turns[0].solutions_before, words.len());
        assert!(report.outcome.is_solved());
    }

    #[test]
    fn book_skipped_when_mask_constrains() {
        let words = corpus(&["SAPIN", "SALON", "TARIE"]);
        let book = OpeningBook::french();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[0], &Mask::parse("S...."));
        assert_ne!(report.turns[0].origin, ProposalOrigin::OpeningBook);
        // A constrained opening restricts guesses to compatible words
        assert!(report.turns[0].word.text().starts_with('S'));
        assert!(report.outcome.is_solved());
    }

    #[test]
    fn book_skipped_when_opener_missing_from_corpus() {
        let words = corpus(&["REPAS", "SAPIN", "TARTE", "RATIO"]);
        let book = OpeningBook::french();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[0], &Mask::unconstrained(5));
        assert_ne!(report.turns[0].origin, ProposalOrigin::OpeningBook);
        assert!(report.outcome.is_solved());
    }

    #[test]
    fn unknown_truth_exhausts_the_corpus() {
        let words = corpus(&["AAAAA", "BBBBB"]);
        let book = OpeningBook::empty();
        let solver = Solver::new(&words, &book);

        let truth = Word::new("CCCCC").unwrap();
        let report = solver.play(&truth, &Mask::unconstrained(5));
        assert_eq!(report.outcome, GameOutcome::Exhausted);
        assert_eq!(report.outcome.score(), MAX_TURNS);
        // Both corpus words get eliminated, then no proposal remains
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns[1].solutions_after, 0);
    }

    #[test]
    fn solution_counts_shrink_within_every_turn() {
        let words = corpus(&["TARIE", "REPAS", "TARTE", "SAPIN", "RATIO", "SALON"]);
        let book = OpeningBook::french();
        let solver = Solver::new(&words, &book);

        for truth in &words {
            let report = solver.play(truth, &Mask::unconstrained(5));
            assert!(report.outcome.is_solved());
            assert_eq!(report.initial_solutions, words.len());
            assert_eq!(report.turns[0].solutions_before, words.len());
            for turn in &report.turns {
                assert!(
                    turn.solutions_after <= turn.solutions_before,
                    "solutions grew within a turn against {truth}"
                );
            }
        }
    }

    #[test]
    fn small_solution_sets_recorded_on_the_turn() {
        let words = corpus(&["TARIE", "REPAS", "TARTE", "SAPIN", "RATIO"]);
        let book = OpeningBook::empty();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[2], &Mask::unconstrained(5));
        let first = &report.turns[0];
        let listed = first.remaining_solutions.as_ref().unwrap();
        assert_eq!(listed.len(), first.solutions_before);
        assert!(listed.contains(&words[2]));
    }

    #[test]
    fn large_solution_sets_keep_counts_only() {
        let words = corpus(&[
            "AAAAB", "AAABA", "AABAA", "ABAAA", "BAAAA", "AAABB", "AABBA", "ABBAA", "BBAAA",
            "AABAB", "ABABA", "BABAA",
        ]);
        let book = OpeningBook::empty();
        let solver = Solver::new(&words, &book);

        let report = solver.play(&words[0], &Mask::unconstrained(5));
        assert!(report.turns[0].remaining_solutions.is_none());
        assert_eq!(report.turns[0].solutions_before, words.len());
    }
}
