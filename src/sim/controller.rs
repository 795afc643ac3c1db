//! GameController: the input state machine and the redraw it drives.
//!
//! ## Input states
//!   - Idle     — buffer empty
//!   - Pending  — buffer holds one lowercase letter
//!
//! A lowercase a-z key moves Idle→Pending, or replaces the letter in
//! Pending. The commit key empties the buffer and, if a letter was there,
//! commits it. Every other key is a no-op.
//!
//! After any commit that is not a duplicate, the panels are redrawn in a
//! fixed order (image, word bank, reveal) and the surface flushed once.

use tracing::{debug, info, warn};

use crate::domain::word::Word;
use crate::error::GameError;
use crate::ui::input::Key;
use crate::ui::layout::Layout;
use crate::ui::panels::{ImagePanel, Panel, RevealPanel, WordBankPanel};
use crate::ui::surface::Surface;
use super::assets::AssetStore;
use super::event::GameEvent;
use super::step;
use super::world::{Phase, WorldState};

/// At most one pending guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer(Option<char>);

impl InputBuffer {
    pub fn set(&mut self, letter: char) {
        self.0 = Some(letter);
    }

    pub fn take(&mut self) -> Option<char> {
        self.0.take()
    }

    pub fn peek(&self) -> Option<char> {
        self.0
    }
}

pub struct GameController {
    world: WorldState,
    buffer: InputBuffer,
    image: ImagePanel,
    bank: WordBankPanel,
    reveal: RevealPanel,
}

impl GameController {
    /// The game is lost once the incorrect count reaches the highest image key.
    pub fn new(word: Word, assets: AssetStore, layout: Layout) -> Self {
        let max_incorrect = assets.max_key();
        GameController {
            world: WorldState::new(word, max_incorrect),
            buffer: InputBuffer::default(),
            image: ImagePanel::new(layout.image, assets),
            bank: WordBankPanel::new(layout.bank),
            reveal: RevealPanel::new(layout.reveal),
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    pub fn pending(&self) -> Option<char> {
        self.buffer.peek()
    }

    /// Draw the panel borders and the opening state.
    pub fn start(&mut self, surface: &mut dyn Surface) -> Result<Vec<GameEvent>, GameError> {
        info!(
            word_len = self.world.word.len(),
            images = self.image.assets().len(),
            max_incorrect = self.world.max_incorrect,
            "game started"
        );
        self.image.draw_frame(surface);
        self.bank.draw_frame(surface);
        self.reveal.draw_frame(surface);
        self.redraw(surface)
    }

    pub fn handle_key(&mut self, key: Key, surface: &mut dyn Surface) -> Result<Vec<GameEvent>, GameError> {
        if self.world.phase.is_over() {
            return Ok(vec![GameEvent::KeyIgnored]);
        }

        match key {
            Key::Commit => {
                let Some(letter) = self.buffer.take() else {
                    return Ok(vec![]);
                };
                let mut events = step::commit_guess(&mut self.world, letter);
                if events.iter().any(|e| matches!(e, GameEvent::DuplicateGuess(_))) {
                    debug!(%letter, "duplicate guess");
                    return Ok(events);
                }

                debug!(
                    %letter,
                    incorrect = self.world.incorrect,
                    guessed = self.world.guessed.len(),
                    "guess committed"
                );
                match self.world.phase {
                    Phase::Won => info!(incorrect = self.world.incorrect, "word solved"),
                    Phase::Lost => info!(incorrect = self.world.incorrect, "hangman complete"),
                    Phase::Playing => {}
                }

                events.extend(self.redraw(surface)?);
                Ok(events)
            }
            Key::Char(c) if c.is_ascii_lowercase() => {
                self.buffer.set(c);
                Ok(vec![GameEvent::LetterBuffered(c)])
            }
            _ => Ok(vec![GameEvent::KeyIgnored]),
        }
    }

    /// Image, word bank, reveal, then one flush. An image that does not fit
    /// is reported and skipped; a missing image is fatal.
    fn redraw(&mut self, surface: &mut dyn Surface) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();
        let w = &self.world;

        match self.image.render(surface, w.incorrect) {
            Ok(()) => {}
            Err(e @ GameError::ImageTooLarge { .. }) => {
                warn!(error = %e, "image render skipped");
                events.push(GameEvent::ImageSkipped { incorrect: w.incorrect });
            }
            Err(e) => return Err(e),
        }
        self.bank.render(surface, &w.word, &w.guessed);
        self.reveal.render(surface, &w.word, &w.guessed, w.phase);
        surface.flush()?;

        Ok(events)
    }
}
