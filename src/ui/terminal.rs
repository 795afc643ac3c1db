//! crossterm display surface: double-buffered, diff-based.
//!
//! How it works:
//!   1. Panels draw into the `front` buffer, which persists between turns
//!   2. `flush` compares every cell with `back` (what the terminal shows)
//!   3. Only changed cells are emitted, batched with `queue!`
//!   4. `back` becomes a copy of `front`
//!
//! A resize clears the screen and forces a full repaint; panel geometry
//! itself stays fixed for the game's lifetime.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use crate::config::Palette;
use crate::error::GameError;
use super::buffer::{Cell, FrameBuffer};
use super::input::{Key, KeyBindings};
use super::surface::{Rect, Style, Surface};

pub struct Terminal {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    palette: Palette,
    bindings: KeyBindings,
}

impl Terminal {
    pub fn new(palette: Palette, bindings: KeyBindings) -> Self {
        Terminal {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            palette,
            bindings,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size()?;
        self.front.resize(tw as usize, th as usize);
        self.back.resize(tw as usize, th as usize);
        // Force full repaint on first flush: back ≠ front for every cell.
        self.back.cells.fill(Cell::INVALID);
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    fn color(&self, style: Style) -> Color {
        let p = &self.palette;
        match style {
            Style::Plain => Color::Reset,
            Style::Border => p.border,
            Style::Image => p.image,
            Style::Hit => p.hit,
            Style::Miss => p.miss,
            Style::Masked => p.masked,
            Style::Status => p.status,
        }
    }

    fn repaint_after_resize(&mut self, w: u16, h: u16) -> io::Result<()> {
        debug!(cols = w, rows = h, "terminal resized");
        self.front.resize(w as usize, h as usize);
        self.back.resize(w as usize, h as usize);
        self.back.cells.fill(Cell::INVALID);
        queue!(self.writer, ResetColor, Clear(ClearType::All))?;
        self.flush_diff()
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg: Option<Color> = None;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }

                let fg = self.color(cell.style);
                if last_fg != Some(fg) {
                    queue!(self.writer, SetForegroundColor(fg))?;
                    last_fg = Some(fg);
                }

                queue!(self.writer, Print(cell.ch))?;
                last_x = x;
                last_y = y;
            }
        }

        self.back.cells.clone_from(&self.front.cells);
        self.writer.flush()
    }
}

impl Surface for Terminal {
    fn draw_frame(&mut self, rect: Rect) {
        self.front.draw_frame(rect);
    }

    fn put_str(&mut self, rect: Rect, row: u16, col: u16, text: &str, style: Style) {
        self.front.put_str(rect, row, col, text, style);
    }

    fn clear_interior(&mut self, rect: Rect) {
        self.front.clear_interior(rect);
    }

    fn flush(&mut self) -> Result<(), GameError> {
        Ok(self.flush_diff()?)
    }

    fn read_key(&mut self) -> Result<Key, GameError> {
        loop {
            match event::read()? {
                Event::Key(ev) => {
                    if let Some(key) = self.bindings.classify(ev) {
                        return Ok(key);
                    }
                }
                Event::Resize(w, h) => self.repaint_after_resize(w, h)?,
                _ => {}
            }
        }
    }
}
