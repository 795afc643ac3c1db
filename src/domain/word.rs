//! The target word and the set of letters guessed against it.

use std::collections::BTreeSet;

use crate::error::GameError;

/// The single hardcoded target word.
pub const TARGET_WORD: &str = "landon";

/// Immutable lowercase guessing target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn new(text: &str) -> Result<Self, GameError> {
        let lower = text.to_lowercase();
        if lower.is_empty() || !lower.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GameError::InvalidWord(text.to_string()));
        }
        Ok(Word(lower))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

/// Letters committed so far.
///
/// Sorted, so the word bank lays letters out in the same order on every
/// redraw. Grows only: there is no removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessedLetters(BTreeSet<char>);

impl GuessedLetters {
    pub fn new() -> Self {
        GuessedLetters(BTreeSet::new())
    }

    /// Add a letter. Returns false if it was already present.
    /// Anything other than a lowercase ASCII letter is refused.
    pub fn insert(&mut self, letter: char) -> bool {
        if !letter.is_ascii_lowercase() {
            return false;
        }
        self.0.insert(letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// The word with un-guessed letters masked: `" l a _ _ _ _ "`.
///
/// One leading and one trailing space, single spaces between cells, so the
/// result is always `2 * word.len() + 1` characters long.
pub fn masked(word: &Word, guessed: &GuessedLetters) -> String {
    let mut out = String::with_capacity(2 * word.len() + 1);
    out.push(' ');
    for c in word.letters() {
        out.push(if guessed.contains(c) { c } else { '_' });
        out.push(' ');
    }
    out
}
