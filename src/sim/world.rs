//! WorldState: everything that changes during a game.
//!
//! `word` is fixed at construction. `guessed` and `incorrect` only grow.
//! All mutation goes through `step::commit_guess`.

use crate::domain::word::{GuessedLetters, Word};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

#[derive(Clone, Debug)]
pub struct WorldState {
    pub word: Word,
    pub guessed: GuessedLetters,
    pub incorrect: usize,
    /// Incorrect count at which the game is lost (the last image key).
    pub max_incorrect: usize,
    pub phase: Phase,
}

impl WorldState {
    pub fn new(word: Word, max_incorrect: usize) -> Self {
        WorldState {
            word,
            guessed: GuessedLetters::new(),
            incorrect: 0,
            max_incorrect,
            phase: Phase::Playing,
        }
    }
}
