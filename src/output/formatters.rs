//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern as colored square glyphs, leftmost slot first
#[must_use]
pub fn pattern_glyphs(pattern: Pattern, word_len: usize) -> String {
    pattern
        .digits(word_len)
        .map(|digit| match digit {
            2 => '🟩', // Green
            1 => '🟨', // Yellow
            _ => '⬛', // Gray
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_glyphs_all_gray() {
        assert_eq!(pattern_glyphs(Pattern::new(0), 5), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn pattern_glyphs_all_green() {
        assert_eq!(pattern_glyphs(Pattern::perfect(6), 6), "🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_glyphs_mixed() {
        let pattern = Pattern::from_digits("01101", 5).unwrap();
        assert_eq!(pattern_glyphs(pattern, 5), "⬛🟨🟨⬛🟨");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }
}
