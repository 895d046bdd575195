use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::errors::TitleError;

pub type RoundId = Uuid;

/// Every symbol a title may contain and the on-screen keyboard offers.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ-:.' ";

/// Wrong guesses allowed before a round is lost.
pub const MAX_ATTEMPTS: u32 = 5;

pub fn is_alphabet_symbol(c: char) -> bool {
    ALPHABET.contains(c)
}

/// A book title selected for a round. Uppercase, drawn entirely from the
/// game alphabet, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Title(String);

impl Title {
    /// Normalizes `raw` to uppercase and rejects titles containing symbols
    /// the keyboard cannot produce.
    pub fn new(raw: &str) -> Result<Self, TitleError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TitleError::Empty);
        }
        if let Some(bad) = normalized.chars().find(|c| !is_alphabet_symbol(*c)) {
            return Err(TitleError::UnsupportedCharacter(bad));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, spaces included.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// The guessable symbols of the title, i.e. everything but spaces.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(|c| *c != ' ')
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Won and Lost are terminal; guesses after either are no-ops.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Full state of one playthrough. Transition functions in `libro-core`
/// return fresh values instead of mutating in place; `id` doubles as the
/// round-identity token that lets late fetch results be discarded.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundState {
    pub id: RoundId,
    pub title: Title,
    pub guesses: BTreeSet<char>,
    pub wrong_count: u32,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_normalization() {
        let title = Title::new("  el libro  ").unwrap();
        assert_eq!(title.as_str(), "EL LIBRO");
        assert_eq!(title.len(), 8);
    }

    #[test]
    fn test_title_allows_punctuation_from_alphabet() {
        let title = Title::new("DON QUIJOTE: PART I.").unwrap();
        assert!(title.contains(':'));
        assert!(title.contains('.'));
    }

    #[test]
    fn test_title_rejects_foreign_symbols() {
        assert!(matches!(
            Title::new("CORAZÓN"),
            Err(TitleError::UnsupportedCharacter('Ó'))
        ));
        assert!(matches!(Title::new("A, B"), Err(TitleError::UnsupportedCharacter(','))));
        assert!(matches!(Title::new("   "), Err(TitleError::Empty)));
    }

    #[test]
    fn test_letters_skip_spaces() {
        let title = Title::new("EL LIBRO").unwrap();
        let letters: Vec<char> = title.letters().collect();
        assert_eq!(letters, vec!['E', 'L', 'L', 'I', 'B', 'R', 'O']);
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost.is_terminal());
    }
}
