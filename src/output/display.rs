//! Display functions for command results

use super::formatters::{create_progress_bar, pattern_glyphs};
use crate::commands::{OpeningResult, SampleResult};
use crate::solver::{GameOutcome, GameReport, ProposalOrigin, MAX_TURNS};
use colored::Colorize;

/// Print a played game turn by turn
pub fn print_game_report(report: &GameReport, verbose: bool) {
    let word_len = report.truth.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", report.truth.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Possible solutions: {} ({:.1} bits of uncertainty)",
        report.initial_solutions,
        (report.initial_solutions as f64).log2()
    );

    for (i, turn) in report.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.word.text().bold(),
            pattern_glyphs(turn.pattern, word_len)
        );

        match turn.origin {
            ProposalOrigin::OpeningBook => println!("  {}", "(opening book)".bright_black()),
            ProposalOrigin::OnlyCandidate => {
                println!("  {}", "(only compatible word left)".bright_black());
            }
            ProposalOrigin::Search => {}
        }

        if verbose {
            println!(
                "  Solutions:     {} → {}",
                turn.solutions_before, turn.solutions_after
            );

            if let Some(words) = &turn.remaining_solutions {
                let listed: Vec<&str> = words.iter().map(|word| word.text()).collect();
                println!("  Remaining:     {}", listed.join(", "));
            }

            if let Some(entropy) = turn.entropy {
                println!("  Expected gain: {entropy:.3} bits");
            }

            if turn.solutions_after > 0 {
                let realized =
                    (turn.solutions_before as f64 / turn.solutions_after as f64).log2();
                println!("  Realized gain: {realized:.3} bits");
            }
        }
    }

    println!();
    match report.outcome {
        GameOutcome::Solved { turns } => {
            let noun = if turns == 1 { "guess" } else { "guesses" };
            println!("{}", format!("✅ Solved in {turns} {noun}!").green().bold());
        }
        GameOutcome::Exhausted => {
            println!(
                "{}",
                format!("❌ Not solved within {MAX_TURNS} guesses").red().bold()
            );
        }
    }
}

/// Print aggregate statistics from a sampling run
pub fn print_sample_result(result: &SampleResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SAMPLING RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let solved_pct = (result.solved as f64 / result.games as f64) * 100.0;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Solved:           {}",
        format!("{}/{} ({solved_pct:.1}%)", result.solved, result.games).green()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_score).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_score).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for score in 1..=MAX_TURNS {
        if let Some(&count) = result.distribution.get(&score) {
            let pct = (count as f64 / result.games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {score}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    let unsolved = result.games - result.solved;
    if unsolved > 0 {
        println!(
            "   {}",
            format!("Unsolved games: {unsolved}").red()
        );
    }
}

/// Print the result of a best-opening search
pub fn print_opening_result(result: &OpeningResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Opener:       {}",
        result.word.bright_yellow().bold()
    );
    if let Some(entropy) = result.entropy {
        println!(
            "   Entropy:      {}",
            format!("{entropy:.3} bits").bright_yellow()
        );
    }
    println!("   Corpus size:  {}", result.corpus_size);
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}
