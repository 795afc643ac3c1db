//! Screen geometry.
//!
//! The three panels have fixed sizes and are placed around the terminal's
//! center: the image on the left, the word bank and reveal panel stacked on
//! the right.
//!
//!   ┌──── image 66x34 ───┐┌──── word bank 66x10 ───┐
//!   │                    │└────────────────────────┘
//!   │                    │┌──── reveal 66x24 ──────┐
//!   └────────────────────┘└────────────────────────┘

use crate::error::GameError;
use super::surface::Rect;

pub const MIN_COLS: u16 = 150;
pub const MIN_ROWS: u16 = 50;

const IMAGE_W: u16 = 66;
const IMAGE_H: u16 = 34;
const BANK_W: u16 = 66;
const BANK_H: u16 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    pub image: Rect,
    pub bank: Rect,
    pub reveal: Rect,
}

impl Layout {
    /// Panel placement for a `cols` x `rows` terminal.
    /// Refuses terminals smaller than `MIN_COLS` x `MIN_ROWS`.
    pub fn compute(cols: u16, rows: u16) -> Result<Self, GameError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }

        let mid_x = cols / 2;
        let top = rows / 2 - IMAGE_H / 2;

        Ok(Layout {
            image: Rect::new(mid_x - IMAGE_W, top, IMAGE_W, IMAGE_H),
            bank: Rect::new(mid_x, top, BANK_W, BANK_H),
            reveal: Rect::new(mid_x, top + BANK_H, BANK_W, IMAGE_H - BANK_H),
        })
    }
}
