//! Rendering backend.
//!
//! Scenes draw in a logical pixel space (500×500 by default) through the
//! [`Printer`] trait; [`TerminalPrinter`] maps that space onto the terminal
//! cell grid and translates every call into queued crossterm commands,
//! flushed once per frame.  Font family and size travel with the text calls
//! for the sake of the contract but mean nothing to a terminal.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::assets::Sprite;

/// Horizontal anchoring for text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextAlign {
    /// Text starts at the given x.
    Start,
    /// Text is centered on the given x.
    Center,
}

/// A 2D drawing surface in logical coordinates.
pub trait Printer {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color)
        -> io::Result<()>;
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: Color,
        font: &str,
        size: f32,
        align: TextAlign,
    ) -> io::Result<()>;
    fn draw_image(&mut self, x: f32, y: f32, sprite: &Sprite) -> io::Result<()>;
    /// Logical width of the surface.
    fn width(&self) -> f32;
    /// Logical height of the surface.
    fn height(&self) -> f32;
    /// Push the queued frame out.
    fn flush(&mut self) -> io::Result<()>;
}

// ── Terminal implementation ──────────────────────────────────────────────────

pub struct TerminalPrinter<W: Write> {
    out: W,
    logical_width: f32,
    logical_height: f32,
    cols: u16,
    rows: u16,
}

impl TerminalPrinter<io::BufWriter<io::Stdout>> {
    /// Printer over stdout, sized from the current terminal.
    pub fn stdout(logical_width: f32, logical_height: f32) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_size(
            io::BufWriter::new(io::stdout()),
            logical_width,
            logical_height,
            cols,
            rows,
        ))
    }
}

impl<W: Write> TerminalPrinter<W> {
    pub fn with_size(
        out: W,
        logical_width: f32,
        logical_height: f32,
        cols: u16,
        rows: u16,
    ) -> Self {
        TerminalPrinter {
            out,
            logical_width,
            logical_height,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Hand back the underlying writer, e.g. to inspect a buffered frame.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Logical point → cell coordinates, clamped onto the grid.
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let cx = (x.max(0.0) * f32::from(self.cols) / self.logical_width) as u16;
        let cy = (y.max(0.0) * f32::from(self.rows) / self.logical_height) as u16;
        (cx.min(self.cols - 1), cy.min(self.rows - 1))
    }
}

impl<W: Write> Printer for TerminalPrinter<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> io::Result<()> {
        // Cleared cells are already black; a black fill has nothing to add.
        if color == Color::Black {
            return Ok(());
        }

        let (cx0, cy0) = self.cell(x, y);
        let (cx1, cy1) = self.cell(x + width, y + height);
        let span = usize::from(cx1.max(cx0) - cx0) + 1;

        self.out.queue(style::SetForegroundColor(color))?;
        for row in cy0..=cy1.max(cy0) {
            self.out.queue(cursor::MoveTo(cx0, row))?;
            self.out.queue(Print("█".repeat(span)))?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: Color,
        _font: &str,
        _size: f32,
        align: TextAlign,
    ) -> io::Result<()> {
        let (cx, cy) = self.cell(x, y);
        let col = match align {
            TextAlign::Start => cx,
            TextAlign::Center => cx.saturating_sub(text.chars().count() as u16 / 2),
        };

        self.out.queue(cursor::MoveTo(col, cy))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn draw_image(&mut self, x: f32, y: f32, sprite: &Sprite) -> io::Result<()> {
        let (cx, cy) = self.cell(x, y);

        self.out.queue(style::SetForegroundColor(sprite.color()))?;
        for (i, line) in sprite.art().iter().enumerate() {
            let row = cy + i as u16;
            if row >= self.rows {
                break;
            }
            self.out.queue(cursor::MoveTo(cx, row))?;
            self.out.queue(Print(line))?;
        }
        Ok(())
    }

    fn width(&self) -> f32 {
        self.logical_width
    }

    fn height(&self) -> f32 {
        self.logical_height
    }

    fn flush(&mut self) -> io::Result<()> {
        // Park the cursor in a harmless spot before pushing the frame.
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows - 1))?;
        self.out.flush()
    }
}
