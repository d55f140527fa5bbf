//! Solve command
//!
//! Plays one automated game against a known secret word and reports the
//! solution path.

use crate::core::{Mask, Word};
use crate::corpus::{dictionary_path, load_words};
use crate::solver::{GameReport, OpeningBook, Solver};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Reveal the first letter up front, Sutom style
    pub sutom: bool,
    /// Explicit mask notation, wins over `sutom`
    pub mask: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            sutom: false,
            mask: None,
        }
    }
}

/// Resolve the mask a game starts from
///
/// # Errors
///
/// Returns an error if an explicit mask disagrees with the secret, by
/// length or by any fixed slot. A mask the secret cannot satisfy makes
/// the game unwinnable.
pub fn session_mask(config: &SolveConfig, secret: &Word) -> Result<Mask> {
    if let Some(notation) = &config.mask {
        let mask = Mask::parse(notation);
        if mask.len() != secret.len() {
            bail!(
                "mask {notation} has {} slots but the secret has {} letters",
                mask.len(),
                secret.len()
            );
        }
        if !mask.matches(secret) {
            bail!("secret {secret} does not satisfy mask {notation}");
        }
        return Ok(mask);
    }

    if config.sutom {
        Ok(Mask::first_letter(secret))
    } else {
        Ok(Mask::unconstrained(secret.len()))
    }
}

/// Play one automated game against `config.secret`
///
/// The dictionary for the secret's length is loaded from `data_dir`;
/// with a constraining mask, only mask-compatible words stay in the
/// guess pool, the way Sutom restricts its players.
///
/// # Errors
///
/// Returns an error if the secret is not a clean word, the mask does
/// not fit it, or the dictionary cannot be loaded.
pub fn run_solve(
    config: &SolveConfig,
    data_dir: &Path,
    max_words: usize,
    book: &OpeningBook,
) -> Result<GameReport> {
    let secret = Word::new(&config.secret)
        .with_context(|| format!("invalid secret word {:?}", config.secret))?;
    let mask = session_mask(config, &secret)?;

    let mut words = load_words(data_dir, secret.len(), max_words).with_context(|| {
        format!(
            "cannot read dictionary {}",
            dictionary_path(data_dir, secret.len()).display()
        )
    })?;
    if !mask.is_unconstrained() {
        words.retain(|word| mask.matches(word));
    }
    if words.is_empty() {
        bail!(
            "no dictionary word of length {} satisfies mask {mask}",
            secret.len()
        );
    }

    if !words.contains(&secret) {
        println!(
            "{}",
            format!("note: {secret} is not in the dictionary, the solver may not find it")
                .yellow()
        );
    }

    let solver = Solver::new(&words, book);
    Ok(solver.play(&secret, &mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn secret(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn session_mask_defaults_to_unconstrained() {
        let config = SolveConfig::new("TARIE".into());
        let mask = session_mask(&config, &secret("TARIE")).unwrap();
        assert!(mask.is_unconstrained());
        assert_eq!(mask.len(), 5);
    }

    #[test]
    fn session_mask_sutom_reveals_first_letter() {
        let mut config = SolveConfig::new("SORTIE".into());
        config.sutom = true;
        let mask = session_mask(&config, &secret("SORTIE")).unwrap();
        assert_eq!(format!("{mask}"), "S.....");
    }

    #[test]
    fn session_mask_explicit_wins_over_sutom() {
        let mut config = SolveConfig::new("TARIE".into());
        config.sutom = true;
        config.mask = Some(".A...".into());
        let mask = session_mask(&config, &secret("TARIE")).unwrap();
        assert_eq!(format!("{mask}"), ".A...");
    }

    #[test]
    fn session_mask_rejects_wrong_length() {
        let mut config = SolveConfig::new("TARIE".into());
        config.mask = Some("T...".into());
        assert!(session_mask(&config, &secret("TARIE")).is_err());
    }

    #[test]
    fn session_mask_rejects_unsatisfiable_mask() {
        let mut config = SolveConfig::new("TARIE".into());
        config.mask = Some("Z....".into());
        assert!(session_mask(&config, &secret("TARIE")).is_err());
    }

    #[test]
    fn run_solve_plays_a_full_game() {
        let dir = std::env::temp_dir().join("sutom_solver_solve_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("mots_5.txt"),
            "TARIE\nREPAS\nTARTE\nSAPIN\nRATIO\n",
        )
        .unwrap();

        let config = SolveConfig::new("TARTE".into());
        let book = OpeningBook::french();
        let report = run_solve(&config, &dir, 4096, &book).unwrap();

        assert!(report.outcome.is_solved());
        assert_eq!(report.turns[0].word.text(), "TARIE");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn run_solve_rejects_bad_secret() {
        let config = SolveConfig::new("TAR1E".into());
        let book = OpeningBook::empty();
        assert!(run_solve(&config, Path::new("data"), 4096, &book).is_err());
    }

    #[test]
    fn run_solve_missing_dictionary_is_an_error() {
        let dir = std::env::temp_dir().join("sutom_solver_solve_missing");
        let config = SolveConfig::new("TARIE".into());
        let book = OpeningBook::empty();
        assert!(run_solve(&config, &dir, 4096, &book).is_err());
    }
}
