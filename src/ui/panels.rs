//! The three game panels.
//!
//! Each panel is a small render-state struct that owns only what it needs
//! and draws through a borrowed `Surface`. None of them flush; the
//! controller flushes once after a full redraw.

use crate::domain::word::{masked, GuessedLetters, Word};
use crate::error::GameError;
use crate::sim::assets::AssetStore;
use crate::sim::world::Phase;
use super::surface::{Rect, Style, Surface};

/// A bordered panel at a fixed position.
pub trait Panel {
    fn rect(&self) -> Rect;

    fn draw_frame(&self, surface: &mut dyn Surface) {
        surface.draw_frame(self.rect());
    }
}

/// Column that centers `len` characters in a panel `width` wide.
fn centered_col(width: u16, len: usize) -> u16 {
    (width as usize).saturating_sub(len) as u16 / 2
}

// ── Image ──

pub struct ImagePanel {
    rect: Rect,
    assets: AssetStore,
    current: Option<usize>,
}

impl ImagePanel {
    pub fn new(rect: Rect, assets: AssetStore) -> Self {
        ImagePanel { rect, assets, current: None }
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Key of the image currently on screen.
    #[cfg(test)]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Draw the image for `incorrect` guesses.
    ///
    /// Fails with `AssetNotFound` if there is no such image, and with
    /// `ImageTooLarge` (drawing nothing) if it does not fit inside the
    /// border. The interior is cleared first so a smaller image never
    /// leaves pieces of the previous one behind.
    pub fn render(&mut self, surface: &mut dyn Surface, incorrect: usize) -> Result<(), GameError> {
        let rows = self.assets.image(incorrect)?;

        let widest = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if rows.len() > self.rect.inner_height() || widest > self.rect.inner_width() {
            return Err(GameError::ImageTooLarge {
                key: incorrect,
                rows: rows.len(),
                cols: widest,
                max_rows: self.rect.inner_height(),
                max_cols: self.rect.inner_width(),
            });
        }

        surface.clear_interior(self.rect);
        for (i, row) in rows.iter().enumerate() {
            surface.put_str(self.rect, i as u16 + 1, 1, row, Style::Image);
        }
        self.current = Some(incorrect);
        Ok(())
    }
}

impl Panel for ImagePanel {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Word bank ──

pub struct WordBankPanel {
    rect: Rect,
}

impl WordBankPanel {
    pub fn new(rect: Rect) -> Self {
        WordBankPanel { rect }
    }

    /// Guessed letters in sorted order along row 1, one every other column.
    pub fn render(&self, surface: &mut dyn Surface, word: &Word, guessed: &GuessedLetters) {
        surface.clear_interior(self.rect);
        for (i, letter) in guessed.iter().enumerate() {
            let style = if word.contains(letter) { Style::Hit } else { Style::Miss };
            let mut buf = [0u8; 4];
            surface.put_str(self.rect, 1, 2 * i as u16 + 1, letter.encode_utf8(&mut buf), style);
        }
    }
}

impl Panel for WordBankPanel {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Reveal ──

const REVEAL_ROW: u16 = 3;
const STATUS_ROW: u16 = 5;

pub struct RevealPanel {
    rect: Rect,
}

impl RevealPanel {
    pub fn new(rect: Rect) -> Self {
        RevealPanel { rect }
    }

    /// The masked word centered on row 3; once the game is over, a status
    /// line centered on row 5.
    pub fn render(&self, surface: &mut dyn Surface, word: &Word, guessed: &GuessedLetters, phase: Phase) {
        let text = masked(word, guessed);
        let style = if phase == Phase::Won { Style::Hit } else { Style::Masked };
        surface.put_str(self.rect, REVEAL_ROW, centered_col(self.rect.width, text.len()), &text, style);

        if let Some(status) = status_line(word, phase) {
            surface.put_str(
                self.rect,
                STATUS_ROW,
                centered_col(self.rect.width, status.chars().count()),
                &status,
                Style::Status,
            );
        }
    }
}

impl Panel for RevealPanel {
    fn rect(&self) -> Rect {
        self.rect
    }
}

fn status_line(word: &Word, phase: Phase) -> Option<String> {
    match phase {
        Phase::Playing => None,
        Phase::Won => Some("You win! Press any key.".to_string()),
        Phase::Lost => Some(format!("Hanged! The word was \"{}\". Press any key.", word.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::testing::{MemorySurface, Op};

    const PANEL: Rect = Rect { x: 0, y: 0, width: 66, height: 24 };

    fn guessed(letters: &str) -> GuessedLetters {
        let mut g = GuessedLetters::new();
        for c in letters.chars() {
            g.insert(c);
        }
        g
    }

    fn store(json: &str) -> AssetStore {
        AssetStore::from_json(json).unwrap()
    }

    // ── ImagePanel ──

    #[test]
    fn image_rows_start_inside_border() {
        let mut s = MemorySurface::new(70, 40);
        let mut p = ImagePanel::new(PANEL, store(r#"{ "images": { "0": ["ab", "cd"] } }"#));
        p.render(&mut s, 0).unwrap();
        assert_eq!(s.screen.get(1, 1).ch, 'a');
        assert_eq!(s.screen.get(2, 2).ch, 'd');
        assert_eq!(p.current(), Some(0));
    }

    #[test]
    fn smaller_image_leaves_no_leftovers() {
        let mut s = MemorySurface::new(70, 40);
        let mut p = ImagePanel::new(
            PANEL,
            store(r#"{ "images": { "0": ["xxxxxx", "xxxxxx", "xxxxxx"], "1": ["o"] } }"#),
        );
        p.render(&mut s, 0).unwrap();
        p.render(&mut s, 1).unwrap();
        assert_eq!(s.panel_row(PANEL, 1), "o");
        assert_eq!(s.panel_row(PANEL, 2), "");
        assert_eq!(s.panel_row(PANEL, 3), "");
    }

    #[test]
    fn missing_image_is_asset_not_found() {
        let mut s = MemorySurface::new(70, 40);
        let mut p = ImagePanel::new(PANEL, store(r#"{ "images": { "0": [] } }"#));
        assert!(matches!(p.render(&mut s, 1), Err(GameError::AssetNotFound(1))));
        assert!(s.ops.is_empty());
    }

    #[test]
    fn too_wide_image_is_not_drawn() {
        let small = Rect::new(0, 0, 6, 6);
        let mut s = MemorySurface::new(10, 10);
        let mut p = ImagePanel::new(small, store(r#"{ "images": { "0": ["12345"] } }"#));
        let err = p.render(&mut s, 0).unwrap_err();
        assert!(matches!(err, GameError::ImageTooLarge { cols: 5, max_cols: 4, .. }));
        assert!(s.ops.is_empty());
        assert_eq!(p.current(), None);
    }

    #[test]
    fn too_tall_image_is_not_drawn() {
        let small = Rect::new(0, 0, 6, 4);
        let mut s = MemorySurface::new(10, 10);
        let mut p = ImagePanel::new(small, store(r#"{ "images": { "0": ["a", "b", "c"] } }"#));
        assert!(matches!(
            p.render(&mut s, 0),
            Err(GameError::ImageTooLarge { rows: 3, max_rows: 2, .. })
        ));
    }

    #[test]
    fn image_exactly_filling_interior_fits() {
        let small = Rect::new(0, 0, 6, 4);
        let mut s = MemorySurface::new(10, 10);
        let mut p = ImagePanel::new(small, store(r#"{ "images": { "0": ["abcd", "efgh"] } }"#));
        p.render(&mut s, 0).unwrap();
        assert_eq!(s.panel_row(small, 2), "efgh");
    }

    // ── WordBankPanel ──

    #[test]
    fn bank_places_sorted_letters_every_other_column() {
        let mut s = MemorySurface::new(70, 12);
        let w = Word::new("landon").unwrap();
        WordBankPanel::new(PANEL).render(&mut s, &w, &guessed("zla"));
        assert_eq!(s.screen.get(1, 1).ch, 'a');
        assert_eq!(s.screen.get(3, 1).ch, 'l');
        assert_eq!(s.screen.get(5, 1).ch, 'z');
        assert_eq!(s.panel_row(PANEL, 1), "a l z");
    }

    #[test]
    fn bank_styles_hits_and_misses() {
        let mut s = MemorySurface::new(70, 12);
        let w = Word::new("landon").unwrap();
        WordBankPanel::new(PANEL).render(&mut s, &w, &guessed("lz"));
        assert_eq!(s.screen.get(1, 1).style, Style::Hit);
        assert_eq!(s.screen.get(3, 1).style, Style::Miss);
    }

    #[test]
    fn bank_order_is_stable_across_redraws() {
        let w = Word::new("landon").unwrap();
        let g = guessed("qdnxa");
        let mut first = MemorySurface::new(70, 12);
        let mut second = MemorySurface::new(70, 12);
        WordBankPanel::new(PANEL).render(&mut first, &w, &g);
        WordBankPanel::new(PANEL).render(&mut second, &w, &g.clone());
        assert_eq!(first.ops, second.ops);
    }

    // ── RevealPanel ──

    #[test]
    fn reveal_is_centered_on_row_three() {
        let mut s = MemorySurface::new(70, 30);
        let w = Word::new("landon").unwrap();
        RevealPanel::new(PANEL).render(&mut s, &w, &guessed("al"), Phase::Playing);
        // floor(66/2 - 13/2) = 26
        assert_eq!(
            s.ops,
            vec![Op::Put {
                rect: PANEL,
                row: 3,
                col: 26,
                text: " l a _ _ _ _ ".to_string(),
                style: Style::Masked,
            }]
        );
    }

    #[test]
    fn reveal_shows_status_when_over() {
        let mut s = MemorySurface::new(70, 30);
        let w = Word::new("landon").unwrap();
        RevealPanel::new(PANEL).render(&mut s, &w, &guessed("xyz"), Phase::Lost);
        assert_eq!(s.panel_row(PANEL, 5), "Hanged! The word was \"landon\". Press any key.");

        let mut s = MemorySurface::new(70, 30);
        RevealPanel::new(PANEL).render(&mut s, &w, &guessed("lando"), Phase::Won);
        assert_eq!(s.panel_row(PANEL, 3), "l a n d o n");
        assert_eq!(s.panel_row(PANEL, 5), "You win! Press any key.");
    }

    #[test]
    fn centered_col_saturates() {
        assert_eq!(centered_col(66, 13), 26);
        assert_eq!(centered_col(66, 66), 0);
        assert_eq!(centered_col(10, 30), 0);
    }
}
