//! Events emitted while handling one key.
//! The entry point logs them; tests assert on them.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LetterBuffered(char),
    KeyIgnored,
    GuessHit(char),
    GuessMissed { letter: char, incorrect: usize },
    DuplicateGuess(char),
    ImageSkipped { incorrect: usize },
    Won,
    Lost,
}
