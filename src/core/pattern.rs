//! Feedback pattern computation and representation
//!
//! A pattern encodes the feedback for one guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u32, where the slot at position k
//! contributes digit × 3^k to the total. A word length of K gives 3^K
//! distinct patterns, so lengths up to 20 fit comfortably.

use super::Word;

/// Feedback pattern for one guess against one truth word
///
/// The raw value ranges over `0..Pattern::count(word_len)`. The word
/// length is not stored in the pattern; callers carry it alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u32);

impl Pattern {
    /// Create a pattern from a raw base-3 value
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of distinct patterns for a given word length (3^len)
    #[inline]
    #[must_use]
    pub fn count(word_len: usize) -> u32 {
        debug_assert!(word_len <= 20, "pattern space exceeds u32 beyond 20 letters");
        3u32.pow(word_len as u32)
    }

    /// The all-green pattern for a given word length
    #[inline]
    #[must_use]
    pub fn perfect(word_len: usize) -> Self {
        Self(Self::count(word_len) - 1)
    }

    /// Check whether this is the all-green pattern for the given length
    #[inline]
    #[must_use]
    pub fn is_perfect(self, word_len: usize) -> bool {
        self == Self::perfect(word_len)
    }

    /// Compute the pattern when `guess` is played and `truth` is the target
    ///
    /// Implements the standard feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green; every truth letter not
    ///    consumed by a green stays available for yellows.
    /// 2. Second pass, left to right: a non-green guess letter turns
    ///    yellow if an occurrence is still available, consuming it.
    /// 3. Encode the digits as a base-3 number.
    ///
    /// # Panics
    /// Panics if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use sutom_solver::core::{Pattern, Word};
    ///
    /// let guess = Word::new("TARIE").unwrap();
    /// let truth = Word::new("REPAS").unwrap();
    /// let pattern = Pattern::compute(&guess, &truth);
    ///
    /// // T(gray) A(yellow) R(yellow) I(gray) E(yellow)
    /// // 0 + 1×3 + 1×9 + 0×27 + 1×81 = 93
    /// assert_eq!(pattern.value(), 93);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, truth: &Word) -> Self {
        assert_eq!(
            guess.len(),
            truth.len(),
            "guess and truth must have the same length"
        );

        let mut digits = vec![0u32; guess.len()];
        let mut available = [0u8; 26];

        // First pass: greens consume their truth letter, the rest feed
        // the availability counts.
        for (i, (&g, &t)) in guess.bytes().iter().zip(truth.bytes()).enumerate() {
            if g == t {
                digits[i] = 2;
            } else {
                available[(t - b'A') as usize] += 1;
            }
        }

        // Second pass: left to right, yellows consume remaining occurrences
        for (i, &g) in guess.bytes().iter().enumerate() {
            if digits[i] == 0 {
                let slot = &mut available[(g - b'A') as usize];
                if *slot > 0 {
                    digits[i] = 1;
                    *slot -= 1;
                }
            }
        }

        // Encode as base-3, position 0 least significant
        let mut pattern = 0u32;
        let mut multiplier = 1u32;
        for &digit in &digits {
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Self(pattern)
    }

    /// Parse a pattern from a digit string like "01101"
    ///
    /// Each character must be '0' (gray), '1' (yellow) or '2' (green);
    /// the first character is the leftmost slot. Returns `None` if the
    /// length differs from `word_len` or any character is not a digit.
    ///
    /// # Examples
    /// ```
    /// use sutom_solver::core::Pattern;
    ///
    /// let pattern = Pattern::from_digits("01101", 5).unwrap();
    /// assert_eq!(pattern.value(), 93);
    /// assert!(Pattern::from_digits("012", 5).is_none());
    /// ```
    #[must_use]
    pub fn from_digits(s: &str, word_len: usize) -> Option<Self> {
        if s.chars().count() != word_len {
            return None;
        }

        let mut pattern = 0u32;
        let mut multiplier = 1u32;

        for ch in s.chars() {
            let digit = match ch {
                '0' => 0,
                '1' => 1,
                '2' => 2,
                _ => return None,
            };
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Some(Self(pattern))
    }

    /// Iterate over the base-3 digits, leftmost slot first
    pub fn digits(self, word_len: usize) -> impl Iterator<Item = u32> {
        let mut value = self.0;
        (0..word_len).map(move |_| {
            let digit = value % 3;
            value /= 3;
            digit
        })
    }

    /// Render the pattern as a digit string like "01101"
    #[must_use]
    pub fn to_digits(self, word_len: usize) -> String {
        self.digits(word_len)
            .map(|digit| char::from(b'0' + digit as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_for(guess: &str, truth: &str) -> Pattern {
        Pattern::compute(&Word::new(guess).unwrap(), &Word::new(truth).unwrap())
    }

    #[test]
    fn pattern_perfect_values() {
        assert_eq!(Pattern::perfect(5).value(), 242);
        assert_eq!(Pattern::perfect(6).value(), 728);
        assert!(Pattern::perfect(5).is_perfect(5));
        assert!(!Pattern::new(0).is_perfect(5));
    }

    #[test]
    fn pattern_count_per_length() {
        assert_eq!(Pattern::count(1), 3);
        assert_eq!(Pattern::count(5), 243);
        assert_eq!(Pattern::count(6), 729);
    }

    #[test]
    fn pattern_all_gray() {
        assert_eq!(pattern_for("ABCDE", "FGHIJ").value(), 0);
    }

    #[test]
    fn pattern_all_green() {
        for word in ["TARIE", "SORTIE", "AAAAA"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::compute(&w, &w).is_perfect(w.len()));
        }
    }

    #[test]
    fn pattern_single_green() {
        // A-B-C-D-E vs AXXXX: only the A matches, in place
        assert_eq!(pattern_for("AXXXX", "ABCDE").to_digits(5), "20000");
    }

    #[test]
    fn pattern_single_yellow() {
        // A occurs in the truth but not at position 1
        assert_eq!(pattern_for("XAXXX", "ABCDE").to_digits(5), "01000");
    }

    #[test]
    fn pattern_green_and_yellow() {
        assert_eq!(pattern_for("AEXXX", "ABCDE").to_digits(5), "21000");
    }

    #[test]
    fn pattern_duplicate_guess_single_truth() {
        // Truth has one A; the first misplaced A is yellow, the second gray
        assert_eq!(pattern_for("XAAXX", "ABCDE").to_digits(5), "01000");
    }

    #[test]
    fn pattern_green_consumes_before_yellow() {
        // Truth AABCD has two As; the green at position 0 consumes one,
        // leaving one for the misplaced A at position 2
        assert_eq!(pattern_for("AXAXX", "AABCD").to_digits(5), "20100");
    }

    #[test]
    fn pattern_greens_starve_trailing_yellow() {
        // Truth AAACD has three As; two greens consume two, the third
        // feeds the yellow at position 4, and position 2 stays gray only
        // because X never matches
        assert_eq!(pattern_for("AAXXA", "AAACD").to_digits(5), "22001");
    }

    #[test]
    fn pattern_tarie_vs_repas() {
        let pattern = pattern_for("TARIE", "REPAS");
        assert_eq!(pattern.to_digits(5), "01101");
        assert_eq!(pattern.value(), 93);
    }

    #[test]
    fn pattern_crane_vs_slate() {
        // C(gray) R(gray) A(green) N(gray) E(green)
        // 2×9 + 2×81 = 180
        assert_eq!(pattern_for("CRANE", "SLATE").value(), 180);
    }

    #[test]
    fn pattern_six_letter_words() {
        let pattern = pattern_for("SORTIE", "TRICOT");
        // S(gray) O(yellow) R(yellow) T(yellow) I(yellow) E(gray)
        assert_eq!(pattern.to_digits(6), "011110");
    }

    #[test]
    fn pattern_digit_round_trip_exhaustive() {
        for value in 0..Pattern::count(3) {
            let pattern = Pattern::new(value);
            let digits = pattern.to_digits(3);
            assert_eq!(Pattern::from_digits(&digits, 3), Some(pattern));
        }
    }

    #[test]
    fn pattern_from_digits_rejects_garbage() {
        assert!(Pattern::from_digits("0110", 5).is_none());
        assert!(Pattern::from_digits("011012", 5).is_none());
        assert!(Pattern::from_digits("01103", 5).is_none());
        assert!(Pattern::from_digits("gygyg", 5).is_none());
        assert!(Pattern::from_digits("", 5).is_none());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn pattern_length_mismatch_panics() {
        let guess = Word::new("TARIE").unwrap();
        let truth = Word::new("SORTIE").unwrap();
        let _ = Pattern::compute(&guess, &truth);
    }
}
