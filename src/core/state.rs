//! Accumulated game state: guesses played and feedback received
//!
//! The state is the sole filter for candidate words. A candidate is
//! compatible when it would have produced every recorded pattern, which
//! each guess verifies by recomputing the pattern against the candidate.
//! Green slots are also cached in a positional mask so most candidates
//! are rejected before any replay.

use super::{Mask, Pattern, Word};

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
}

/// Full knowledge about the secret at some point in a game
#[derive(Debug, Clone)]
pub struct GameState {
    word_len: usize,
    steps: Vec<GuessStep>,
    green_mask: Vec<Option<u8>>,
}

impl GameState {
    /// Fresh state for a game with no revealed letters
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            word_len,
            steps: Vec::new(),
            green_mask: vec![None; word_len],
        }
    }

    /// Fresh state seeded with the slots a mask fixes
    ///
    /// Sutom's revealed first letter enters the game this way.
    #[must_use]
    pub fn from_mask(mask: &Mask) -> Self {
        Self {
            word_len: mask.len(),
            steps: Vec::new(),
            green_mask: mask.slots().to_vec(),
        }
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn steps(&self) -> &[GuessStep] {
        &self.steps
    }

    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.steps.len()
    }

    /// True when no slot is known green yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.green_mask.iter().all(Option::is_none)
    }

    /// Record a played guess and its feedback
    ///
    /// Green slots from the pattern are folded into the positional mask.
    ///
    /// # Panics
    /// Panics if the guess length differs from the state's word length.
    pub fn update(&mut self, word: Word, pattern: Pattern) {
        assert_eq!(
            word.len(),
            self.word_len,
            "guess length must match the game's word length"
        );

        for (k, digit) in pattern.digits(self.word_len).enumerate() {
            if digit == 2 {
                self.green_mask[k] = Some(word.bytes()[k]);
            }
        }

        self.steps.push(GuessStep { word, pattern });
    }

    /// Check whether a candidate could still be the secret
    ///
    /// The candidate must match every green slot, then reproduce the
    /// recorded pattern of each step, replayed newest first. With
    /// `only_last_step` the replay stops after the most recent step.
    /// That is only sound when the candidate already passed a full
    /// check before that step was recorded; entropy enumeration relies
    /// on it to re-check a whole solution set after one hypothetical
    /// guess.
    #[must_use]
    pub fn is_compatible(&self, candidate: &Word, only_last_step: bool) -> bool {
        if candidate.len() != self.word_len {
            return false;
        }

        for (slot, &letter) in self.green_mask.iter().zip(candidate.bytes()) {
            if let Some(fixed) = *slot
                && fixed != letter
            {
                return false;
            }
        }

        for (index, step) in self.steps.iter().enumerate().rev() {
            if Pattern::compute(&step.word, candidate) != step.pattern {
                return false;
            }
            if only_last_step && index + 1 == self.steps.len() {
                return true;
            }
        }

        true
    }

    /// Count the corpus words still compatible with this state
    #[must_use]
    pub fn compatible_count(&self, corpus: &[Word]) -> usize {
        corpus
            .iter()
            .filter(|word| self.is_compatible(word, false))
            .count()
    }
}
