//! Display surface: the capability set every panel draws through.
//!
//! Passed explicitly to panels and the controller; there is no global
//! screen. `Terminal` is the crossterm implementation, `testing::MemorySurface`
//! the in-memory one used by unit tests.

use crate::error::GameError;
use super::input::Key;

/// A bordered rectangular region in absolute screen cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect { x, y, width, height }
    }

    /// Drawable columns inside the border.
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2) as usize
    }

    /// Drawable rows inside the border.
    pub fn inner_height(&self) -> usize {
        self.height.saturating_sub(2) as usize
    }
}

/// Logical text styles; the terminal maps them to palette colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Style {
    Plain,
    Border,
    Image,
    /// Guessed letter that is in the word.
    Hit,
    /// Guessed letter that is not in the word.
    Miss,
    Masked,
    Status,
}

pub trait Surface {
    /// Draw the border of a panel.
    fn draw_frame(&mut self, rect: Rect);

    /// Write a styled string at panel-relative (`row`, `col`).
    fn put_str(&mut self, rect: Rect, row: u16, col: u16, text: &str, style: Style);

    /// Blank the panel's interior, leaving the border.
    fn clear_interior(&mut self, rect: Rect);

    /// Push pending changes to the physical display.
    fn flush(&mut self) -> Result<(), GameError>;

    /// Block until the next meaningful key press.
    fn read_key(&mut self) -> Result<Key, GameError>;
}
