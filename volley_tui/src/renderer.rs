//! Terminal rendering over crossterm.
//!
//! The simulation uses y-up coordinates in cell units; rows are flipped
//! when drawing and everything is clipped to the visible grid.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use volley_core::Rect;

/// Drawing services consumed by the frame loop.
pub trait Renderer {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_rect(&mut self, rect: &Rect, color: Color) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

pub struct TermRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
}

impl TermRenderer {
    /// Enter raw mode and the alternate screen; both are restored on drop.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        let (cols, rows) = terminal::size()?;
        Ok(Self { out, cols, rows })
    }

    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// One line of text at the top of the screen, outside the court.
    pub fn draw_status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(text),
            ResetColor
        )
    }
}

impl Renderer for TermRenderer {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color) -> io::Result<()> {
        let x0 = rect.x.floor().max(0.0) as i32;
        let x1 = (rect.x + rect.w).ceil().min(self.cols as f32) as i32;
        let y0 = rect.y.floor().max(0.0) as i32;
        let y1 = (rect.y + rect.h).ceil().min(self.rows as f32) as i32;

        queue!(self.out, SetForegroundColor(color))?;
        for y in y0..y1 {
            // Simulation y grows upward; terminal rows grow downward.
            let row = self.rows as i32 - 1 - y;
            if row < 0 || row >= self.rows as i32 {
                continue;
            }
            for x in x0..x1 {
                queue!(
                    self.out,
                    cursor::MoveTo(x as u16, row as u16),
                    Print('\u{2588}')
                )?;
            }
        }
        queue!(self.out, ResetColor)
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
