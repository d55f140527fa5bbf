//! Slot constraints known before the first guess
//!
//! Sutom reveals the first letter of the secret up front, and some
//! variants reveal more. A `Mask` captures those pre-known slots: each
//! position either fixes a letter or leaves the slot open.

use std::fmt;

use super::Word;

/// Per-slot letter constraints for a game
///
/// Parsed from notation like `"T...."`, where a letter fixes its slot
/// and any other character leaves the slot unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<Option<u8>>,
}

impl Mask {
    /// Parse a mask from its textual notation
    ///
    /// Letters (any case) fix their slot; every other character, `.`
    /// by convention, leaves it open. The mask length sets the word
    /// length it applies to.
    ///
    /// # Examples
    /// ```
    /// use sutom_solver::core::{Mask, Word};
    ///
    /// let mask = Mask::parse("T....");
    /// assert!(mask.matches(&Word::new("TARIE").unwrap()));
    /// assert!(!mask.matches(&Word::new("REPAS").unwrap()));
    /// ```
    #[must_use]
    pub fn parse(notation: &str) -> Self {
        let slots = notation
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    Some(ch.to_ascii_uppercase() as u8)
                } else {
                    None
                }
            })
            .collect();
        Self { slots }
    }

    /// A mask of the given length with every slot open
    #[must_use]
    pub fn unconstrained(word_len: usize) -> Self {
        Self {
            slots: vec![None; word_len],
        }
    }

    /// The Sutom opening mask: first letter fixed, the rest open
    #[must_use]
    pub fn first_letter(word: &Word) -> Self {
        let mut slots = vec![None; word.len()];
        slots[0] = Some(word.bytes()[0]);
        Self { slots }
    }

    /// Check whether a word satisfies every fixed slot
    ///
    /// A word of a different length never matches.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.bytes())
                .all(|(slot, &letter)| slot.is_none_or(|fixed| fixed == letter))
    }

    /// True when no slot is fixed
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length mask
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The per-slot constraints, `None` for open slots
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", char::from(*letter))?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_parse_mixed() {
        let mask = Mask::parse("T..i.");
        assert_eq!(mask.len(), 5);
        assert_eq!(mask.slots()[0], Some(b'T'));
        assert_eq!(mask.slots()[1], None);
        assert_eq!(mask.slots()[3], Some(b'I'));
        assert!(!mask.is_unconstrained());
    }

    #[test]
    fn mask_parse_accepts_any_filler() {
        // Underscores, question marks and dots all mean "open"
        assert_eq!(Mask::parse("T_?.x").slots()[1], None);
        assert_eq!(Mask::parse("T_?.x").slots()[4], Some(b'X'));
    }

    #[test]
    fn mask_parse_is_case_insensitive() {
        assert_eq!(Mask::parse("t..i."), Mask::parse("T..I."));
        assert_eq!(Mask::parse("s.rt..").slots()[2], Some(b'R'));
    }

    #[test]
    fn mask_unconstrained() {
        let mask = Mask::unconstrained(6);
        assert_eq!(mask.len(), 6);
        assert!(mask.is_unconstrained());
        assert!(mask.matches(&Word::new("SORTIE").unwrap()));
    }

    #[test]
    fn mask_first_letter() {
        let mask = Mask::first_letter(&Word::new("SORTIE").unwrap());
        assert_eq!(format!("{mask}"), "S.....");
        assert!(mask.matches(&Word::new("SALADE").unwrap()));
        assert!(!mask.matches(&Word::new("TRICOT").unwrap()));
    }

    #[test]
    fn mask_matches_requires_same_length() {
        let mask = Mask::parse("T....");
        assert!(!mask.matches(&Word::new("TRICOT").unwrap()));
        assert!(!mask.matches(&Word::new("TAS").unwrap()));
    }

    #[test]
    fn mask_matches_checks_every_fixed_slot() {
        let mask = Mask::parse("S.RT..");
        assert!(mask.matches(&Word::new("SORTIE").unwrap()));
        assert!(mask.matches(&Word::new("SARTRE").unwrap()));
        assert!(!mask.matches(&Word::new("SOLEIL").unwrap()));
    }

    #[test]
    fn mask_display_round_trip() {
        for notation in ["T....", ".....", "S.RT..", "ABCDE"] {
            assert_eq!(format!("{}", Mask::parse(notation)), *notation);
        }
    }
}
