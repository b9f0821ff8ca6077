// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crossterm::terminal;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

/// Get the terminal size.
pub fn get_size() -> io::Result<Size> {
    let (columns, rows) = terminal::size()?;
    Ok(Size {
        col_count: columns,
        row_count: rows,
    })
}

#[derive(Debug)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] when stdin is attached to a real
/// terminal. Piped stdin (or `cargo test`) is not interactive.
#[must_use]
pub fn is_fully_interactive_terminal() -> TTYResult {
    use crossterm::tty::IsTty;
    let is_tty: bool = std::io::stdin().is_tty();
    match is_tty {
        true => TTYResult::IsInteractive,
        false => TTYResult::IsNotInteractive,
    }
}
