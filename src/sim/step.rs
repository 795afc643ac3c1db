//! Guess commitment: the only place `WorldState` is mutated.
//!
//! Processing order:
//!   1. Judge the letter (duplicate / hit / miss)
//!   2. Record it, bumping the incorrect count on a miss
//!   3. Win / lose check (only a miss can lose)

use crate::domain::rules::{self, Verdict};
use super::event::GameEvent;
use super::world::{Phase, WorldState};

/// Commit one letter. Returns the events it caused; a duplicate, or any
/// commit after the game has ended, leaves the world untouched.
pub fn commit_guess(world: &mut WorldState, letter: char) -> Vec<GameEvent> {
    if world.phase.is_over() {
        return vec![];
    }

    let mut events = Vec::with_capacity(2);
    let verdict = rules::judge(&world.word, &world.guessed, letter);
    match verdict {
        Verdict::Duplicate => {
            events.push(GameEvent::DuplicateGuess(letter));
            return events;
        }
        Verdict::Hit => {
            world.guessed.insert(letter);
            events.push(GameEvent::GuessHit(letter));
        }
        Verdict::Miss => {
            world.guessed.insert(letter);
            world.incorrect += 1;
            events.push(GameEvent::GuessMissed { letter, incorrect: world.incorrect });
        }
    }

    if rules::is_solved(&world.word, &world.guessed) {
        world.phase = Phase::Won;
        events.push(GameEvent::Won);
    } else if verdict == Verdict::Miss && rules::is_hanged(world.incorrect, world.max_incorrect) {
        world.phase = Phase::Lost;
        events.push(GameEvent::Lost);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::word::Word;

    fn world(word: &str, max_incorrect: usize) -> WorldState {
        WorldState::new(Word::new(word).unwrap(), max_incorrect)
    }

    #[test]
    fn landon_sequence_has_one_miss() {
        let mut w = world("landon", 10);
        for c in "lzandon".chars() {
            commit_guess(&mut w, c);
        }
        assert_eq!(w.incorrect, 1);
        assert_eq!(w.guessed.iter().collect::<String>(), "adlnoz");
        assert_eq!(w.phase, Phase::Won);
    }

    #[test]
    fn duplicate_changes_nothing() {
        let mut w = world("landon", 10);
        commit_guess(&mut w, 'n');
        commit_guess(&mut w, 'q');
        let before = (w.guessed.clone(), w.incorrect);
        assert_eq!(commit_guess(&mut w, 'n'), vec![GameEvent::DuplicateGuess('n')]);
        assert_eq!(commit_guess(&mut w, 'q'), vec![GameEvent::DuplicateGuess('q')]);
        assert_eq!((w.guessed.clone(), w.incorrect), before);
    }

    #[test]
    fn state_grows_monotonically() {
        let mut w = world("landon", 10);
        let mut prev_len = 0;
        let mut prev_incorrect = 0;
        for c in "qlnqzxlab".chars() {
            let was_new = !w.guessed.contains(c);
            let misses = was_new && !w.word.contains(c);
            commit_guess(&mut w, c);
            assert!(w.guessed.len() >= prev_len);
            assert_eq!(w.incorrect, prev_incorrect + usize::from(misses));
            prev_len = w.guessed.len();
            prev_incorrect = w.incorrect;
        }
    }

    #[test]
    fn miss_event_carries_new_count() {
        let mut w = world("landon", 10);
        assert_eq!(
            commit_guess(&mut w, 'z'),
            vec![GameEvent::GuessMissed { letter: 'z', incorrect: 1 }]
        );
    }

    #[test]
    fn reaching_max_incorrect_loses() {
        let mut w = world("landon", 3);
        commit_guess(&mut w, 'x');
        commit_guess(&mut w, 'y');
        assert_eq!(w.phase, Phase::Playing);
        let events = commit_guess(&mut w, 'z');
        assert_eq!(events.last(), Some(&GameEvent::Lost));
        assert_eq!(w.phase, Phase::Lost);
        assert_eq!(w.incorrect, 3);
    }

    #[test]
    fn hit_never_loses_even_with_a_single_image() {
        let mut w = world("landon", 0);
        assert_eq!(commit_guess(&mut w, 'l'), vec![GameEvent::GuessHit('l')]);
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.incorrect, 0);

        let events = commit_guess(&mut w, 'z');
        assert_eq!(events.last(), Some(&GameEvent::Lost));
        assert_eq!(w.phase, Phase::Lost);
    }

    #[test]
    fn commits_after_game_over_are_ignored() {
        let mut w = world("a", 10);
        commit_guess(&mut w, 'a');
        assert_eq!(w.phase, Phase::Won);
        assert!(commit_guess(&mut w, 'b').is_empty());
        assert_eq!(w.incorrect, 0);
        assert!(!w.guessed.contains('b'));
    }
}
