//! Interactive assistant mode
//!
//! Helps play a live game: suggests a word each turn, then reads which
//! word was actually played and the feedback the game returned.

use crate::core::{GameState, Mask, Pattern, Word};
use crate::corpus::{dictionary_path, load_words};
use crate::output::formatters::pattern_glyphs;
use crate::solver::{
    possible_solutions, OpeningBook, ProposalOrigin, Solver, LIST_SOLUTIONS_BELOW, MAX_TURNS,
};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the interactive assistant
///
/// With no `initial_mask` the mask is prompted for; its length sets the
/// word length of the whole session.
///
/// # Errors
///
/// Returns an error on I/O failure, a closed input stream, or a
/// dictionary that cannot be loaded.
pub fn run_interactive(
    initial_mask: Option<&str>,
    data_dir: &Path,
    max_words: usize,
    book: &OpeningBook,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║               Sutom Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!("Enter the game's mask first: letters fix slots, '.' leaves them open.");
    println!("A plain Wordle game is '.....'; Sutom shows its first letter, 'T....'.");
    println!("After each guess, enter the feedback as digits:\n");
    println!("  - 0 for gray (letter not in the word)");
    println!("  - 1 for yellow (letter in the word, wrong position)");
    println!("  - 2 for green (letter in the correct position)\n");
    println!("Press enter alone to play the suggestion; type 'quit' to stop.\n");

    let notation = match initial_mask {
        Some(notation) => notation.to_string(),
        None => prompt("Initial mask")?,
    };
    let mask = Mask::parse(&notation);
    if mask.is_empty() {
        bail!("mask must have at least one slot");
    }
    let word_len = mask.len();

    let mut words = load_words(data_dir, word_len, max_words).with_context(|| {
        format!(
            "cannot read dictionary {}",
            dictionary_path(data_dir, word_len).display()
        )
    })?;
    if !mask.is_unconstrained() {
        words.retain(|word| mask.matches(word));
    }
    if words.is_empty() {
        bail!("no dictionary word of length {word_len} satisfies mask {mask}");
    }

    let solver = Solver::new(&words, book);
    let mut state = GameState::from_mask(&mask);

    for turn in 1..=MAX_TURNS {
        let Some(proposal) = solver.propose(&state) else {
            println!(
                "\n{}",
                "❌ No compatible word remains. Some feedback must be wrong.".red()
            );
            return Ok(());
        };

        println!("{}", "─".repeat(60));
        println!(
            "Turn {turn}: {} possible solutions",
            proposal.solutions_remaining
        );
        println!("{}", "─".repeat(60));

        match (proposal.origin, proposal.entropy) {
            (ProposalOrigin::OpeningBook, _) => {
                println!(
                    "\n📖 Suggestion: {} {}",
                    proposal.word.text().bold(),
                    "(opening book)".bright_black()
                );
            }
            (ProposalOrigin::OnlyCandidate, _) => {
                println!(
                    "\n🎯 Suggestion: {} {}",
                    proposal.word.text().bold(),
                    "(only compatible word left)".bright_black()
                );
            }
            (ProposalOrigin::Search, Some(entropy)) => {
                println!(
                    "\n📊 Suggestion: {} ({entropy:.3} bits expected)",
                    proposal.word.text().bold()
                );
            }
            (ProposalOrigin::Search, None) => {
                println!("\n📊 Suggestion: {}", proposal.word.text().bold());
            }
        }

        if proposal.solutions_remaining < LIST_SOLUTIONS_BELOW {
            println!("\nRemaining solutions:");
            for solution in possible_solutions(&state, &words) {
                println!("  • {solution}");
            }
        }
        println!();

        let Some(played) = read_played_word(proposal.word, word_len)? else {
            println!("\n👋 Good luck!\n");
            return Ok(());
        };
        let Some(pattern) = read_feedback(word_len)? else {
            println!("\n👋 Good luck!\n");
            return Ok(());
        };

        println!("{} {}\n", played.text().bold(), pattern_glyphs(pattern, word_len));

        if pattern.is_perfect(word_len) {
            let noun = if turn == 1 { "guess" } else { "guesses" };
            println!(
                "{}",
                format!("🎉 Solved in {turn} {noun}!").bright_green().bold()
            );
            return Ok(());
        }

        state.update(played, pattern);
    }

    println!(
        "{}",
        format!("Out of turns after {MAX_TURNS} guesses.").yellow()
    );
    Ok(())
}

/// Ask which word was actually played; empty input takes the suggestion
///
/// Returns `Ok(None)` when the player quits.
fn read_played_word(suggestion: &Word, word_len: usize) -> Result<Option<Word>> {
    loop {
        let input = prompt("Word played")?;

        if input.is_empty() {
            return Ok(Some(suggestion.clone()));
        }
        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        match Word::new(&input) {
            Ok(word) if word.len() == word_len => return Ok(Some(word)),
            Ok(word) => {
                println!("❌ Expected {word_len} letters, got {}\n", word.len());
            }
            Err(error) => println!("❌ {error}\n"),
        }
    }
}

/// Ask for the feedback digits, re-prompting until they parse
///
/// Returns `Ok(None)` when the player quits.
fn read_feedback(word_len: usize) -> Result<Option<Pattern>> {
    loop {
        let input = prompt("Feedback digits")?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        match Pattern::from_digits(&input, word_len) {
            Some(pattern) => return Ok(Some(pattern)),
            None => println!("❌ Expected {word_len} digits, each 0, 1 or 2\n"),
        }
    }
}

/// Read one trimmed line with a prompt
fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        bail!("input stream closed");
    }

    Ok(input.trim().to_string())
}
