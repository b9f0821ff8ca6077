// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The screen seam: the trait the input loop paints through, and the
//! crossterm-backed implementation that owns the real terminal.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{cursor::{Hide, MoveTo, Show},
                event,
                queue,
                style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
                terminal::{self,
                           Clear,
                           ClearType,
                           EnterAlternateScreen,
                           LeaveAlternateScreen}};
use unicode_width::UnicodeWidthChar;

use crate::{input_event::InputEvent,
            render_op::DrawOp,
            style::TextStyle,
            term::{Size, get_size}};

/// Everything the input loop needs from a terminal. Handed in explicitly as
/// `&mut dyn Surface`; there is no ambient global screen handle.
pub trait Surface {
    /// Block until the next event the tool consumes arrives.
    fn poll_event(&mut self) -> io::Result<InputEvent>;

    /// Write one styled cell. Writes outside the surface are silently
    /// dropped.
    fn set_content(&mut self, col: u16, row: u16, ch: char, style: TextStyle);

    /// Blank the whole surface.
    fn clear(&mut self);

    /// Flush pending cell writes to the display.
    fn show(&mut self) -> io::Result<()>;

    fn size(&self) -> Size;

    /// Restore the terminal for the shell prompt. Must run on every exit
    /// path.
    fn finish(&mut self) -> io::Result<()>;

    /// Lay one [`DrawOp`] out into cells: left to right from the op's start
    /// column; `'\n'` drops to the next row at the start column, `'\r'`
    /// returns to it; with wrapping on, a fragment that reaches the right
    /// edge continues on the next row at its start column.
    fn paint(&mut self, op: &DrawOp) {
        let max_col = self.size().col_count;
        let start_col = op.col;
        let mut col = op.col;
        let mut row = op.row;
        for ch in op.text.chars() {
            match ch {
                '\n' => {
                    col = start_col;
                    row += 1;
                }
                '\r' => {
                    col = start_col;
                }
                _ => {
                    self.set_content(col, row, ch, op.style);
                    #[allow(clippy::cast_possible_truncation)]
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
                    col += ch_width;
                    if col >= max_col {
                        if !op.wrap {
                            break;
                        }
                        col = start_col;
                        row += 1;
                    }
                }
            }
        }
    }
}

/// The real terminal: raw mode + alternate screen + hidden cursor while the
/// tool runs. Cell writes are queued into the stdout buffer and land on
/// [`Surface::show`].
#[derive(Debug)]
pub struct CrosstermSurface {
    out: Stdout,
    size: Size,
}

impl CrosstermSurface {
    /// Enter raw mode and the alternate screen. Pair with
    /// [`Surface::finish`].
    pub fn try_init() -> io::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        out.flush()?;
        let size = get_size()?;
        Ok(Self { out, size })
    }
}

impl Surface for CrosstermSurface {
    fn poll_event(&mut self) -> io::Result<InputEvent> {
        // Skip raw events the tool does not consume (mouse, focus, paste,
        // key release).
        loop {
            let raw_event = event::read()?;
            if let Ok(input_event) = InputEvent::try_from(raw_event) {
                if let InputEvent::Resize(new_size) = input_event {
                    self.size = new_size;
                }
                return Ok(input_event);
            }
        }
    }

    fn set_content(&mut self, col: u16, row: u16, ch: char, style: TextStyle) {
        if col >= self.size.col_count || row >= self.size.row_count {
            return;
        }
        // Queued writes only touch the stdout buffer here; real I/O errors
        // surface at flush time in `show`.
        let _ = queue!(self.out, MoveTo(col, row), ResetColor);
        if let Some(color) = style.color_fg {
            let _ = queue!(self.out, SetForegroundColor(color));
        }
        if let Some(color) = style.color_bg {
            let _ = queue!(self.out, SetBackgroundColor(color));
        }
        let _ = queue!(self.out, Print(ch));
    }

    fn clear(&mut self) {
        let _ = queue!(self.out, ResetColor, Clear(ClearType::All));
    }

    fn show(&mut self) -> io::Result<()> { self.out.flush() }

    fn size(&self) -> Size { self.size }

    fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }
}
