//! Guess judging and end-of-game rules.
//! Pure functions over `Word` and `GuessedLetters`; no state lives here.

use crate::domain::word::{GuessedLetters, Word};

/// How a committed letter is judged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    /// Already guessed: no effect, no redraw.
    Duplicate,
    /// New and in the word.
    Hit,
    /// New and not in the word: costs one incorrect guess.
    Miss,
}

pub fn judge(word: &Word, guessed: &GuessedLetters, letter: char) -> Verdict {
    if guessed.contains(letter) {
        Verdict::Duplicate
    } else if word.contains(letter) {
        Verdict::Hit
    } else {
        Verdict::Miss
    }
}

/// Every letter of the word has been guessed.
pub fn is_solved(word: &Word, guessed: &GuessedLetters) -> bool {
    word.letters().all(|c| guessed.contains(c))
}

/// The hangman is complete once the incorrect count reaches the last image.
pub fn is_hanged(incorrect: usize, max_incorrect: usize) -> bool {
    incorrect >= max_incorrect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> GuessedLetters {
        let mut g = GuessedLetters::new();
        for c in letters.chars() {
            g.insert(c);
        }
        g
    }

    #[test]
    fn judge_classifies_letters() {
        let w = Word::new("landon").unwrap();
        let g = guessed("n");
        assert_eq!(judge(&w, &g, 'n'), Verdict::Duplicate);
        assert_eq!(judge(&w, &g, 'l'), Verdict::Hit);
        assert_eq!(judge(&w, &g, 'z'), Verdict::Miss);
    }

    #[test]
    fn duplicate_miss_is_still_a_duplicate() {
        let w = Word::new("landon").unwrap();
        assert_eq!(judge(&w, &guessed("z"), 'z'), Verdict::Duplicate);
    }

    #[test]
    fn solved_needs_every_distinct_letter() {
        let w = Word::new("landon").unwrap();
        assert!(!is_solved(&w, &guessed("")));
        assert!(!is_solved(&w, &guessed("land")));
        assert!(is_solved(&w, &guessed("lando")));
        assert!(is_solved(&w, &guessed("landoxyz")));
    }

    #[test]
    fn hanged_at_threshold() {
        assert!(!is_hanged(0, 10));
        assert!(!is_hanged(9, 10));
        assert!(is_hanged(10, 10));
    }
}
