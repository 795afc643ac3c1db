//! Cell grid shared by the crossterm terminal and the test surface.
//!
//! Cells carry a logical `Style`, not a color; the terminal resolves styles
//! through the configured palette when it flushes.

use super::surface::{Rect, Style};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', style: Style::Plain };

    /// Sentinel used to invalidate a back buffer.
    /// Differs from any real cell, so every position will be diff'd.
    pub const INVALID: Cell = Cell { ch: '\0', style: Style::Plain };
}

#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            let mut next = FrameBuffer::new(w, h);
            for y in 0..h.min(self.height) {
                for x in 0..w.min(self.width) {
                    next.set(x, y, self.get(x, y));
                }
            }
            *self = next;
        }
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Box-drawing border around `rect`.
    pub fn draw_frame(&mut self, rect: Rect) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x as usize, rect.y as usize);
        let (x1, y1) = (x0 + rect.width as usize - 1, y0 + rect.height as usize - 1);
        let edge = |ch| Cell { ch, style: Style::Border };

        for x in x0 + 1..x1 {
            self.set(x, y0, edge('─'));
            self.set(x, y1, edge('─'));
        }
        for y in y0 + 1..y1 {
            self.set(x0, y, edge('│'));
            self.set(x1, y, edge('│'));
        }
        self.set(x0, y0, edge('┌'));
        self.set(x1, y0, edge('┐'));
        self.set(x0, y1, edge('└'));
        self.set(x1, y1, edge('┘'));
    }

    /// Write `text` at panel-relative (`row`, `col`) inside `rect`.
    /// Only the interior is writable: characters that would land on the
    /// border or outside the rect are dropped.
    pub fn put_str(&mut self, rect: Rect, row: u16, col: u16, text: &str, style: Style) {
        if row == 0 || row as usize > rect.inner_height() {
            return;
        }
        let y = (rect.y + row) as usize;
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c == 0 {
                continue;
            }
            if c > rect.inner_width() {
                break;
            }
            self.set(rect.x as usize + c, y, Cell { ch, style });
        }
    }

    /// Blank everything inside the border of `rect`.
    pub fn clear_interior(&mut self, rect: Rect) {
        let (x0, y0) = (rect.x as usize + 1, rect.y as usize + 1);
        for y in y0..y0 + rect.inner_height() {
            for x in x0..x0 + rect.inner_width() {
                self.set(x, y, Cell::BLANK);
            }
        }
    }

    /// Row `y` as plain text.
    #[cfg(test)]
    pub fn row_text(&self, y: usize) -> String {
        (0..self.width).map(|x| self.get(x, y).ch).collect()
    }
}
