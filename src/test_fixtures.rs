// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! An in-memory surface for exercising painting and the input loop without a
//! real terminal.

use std::{collections::VecDeque, io};

use crate::{input_event::InputEvent, style::TextStyle, surface::Surface, term::Size};

/// A fixed-size cell grid plus a scripted event queue.
///
/// [`Surface::poll_event`] pops the script; when the script runs dry it
/// returns an error, so a test whose event sequence forgets to quit fails
/// loudly instead of hanging.
#[derive(Debug)]
pub struct OffscreenSurface {
    grid: Vec<Vec<(char, TextStyle)>>,
    scripted_events: VecDeque<InputEvent>,
    size: Size,
    pub show_count: usize,
    pub clear_count: usize,
    pub finished: bool,
}

impl OffscreenSurface {
    #[must_use]
    pub fn new(col_count: u16, row_count: u16) -> Self {
        let blank_row = vec![(' ', TextStyle::default()); usize::from(col_count)];
        Self {
            grid: vec![blank_row; usize::from(row_count)],
            scripted_events: VecDeque::new(),
            size: Size {
                col_count,
                row_count,
            },
            show_count: 0,
            clear_count: 0,
            finished: false,
        }
    }

    pub fn script_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.scripted_events.extend(events);
    }

    /// Text of one row, trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        self.grid[usize::from(row)]
            .iter()
            .map(|(ch, _)| *ch)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[must_use]
    pub fn style_at(&self, col: u16, row: u16) -> TextStyle {
        self.grid[usize::from(row)][usize::from(col)].1
    }
}

impl Surface for OffscreenSurface {
    fn poll_event(&mut self) -> io::Result<InputEvent> {
        self.scripted_events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script ran dry")
        })
    }

    fn set_content(&mut self, col: u16, row: u16, ch: char, style: TextStyle) {
        if col >= self.size.col_count || row >= self.size.row_count {
            return;
        }
        self.grid[usize::from(row)][usize::from(col)] = (ch, style);
    }

    fn clear(&mut self) {
        for cell_row in &mut self.grid {
            cell_row.fill((' ', TextStyle::default()));
        }
        self.clear_count += 1;
    }

    fn show(&mut self) -> io::Result<()> {
        self.show_count += 1;
        Ok(())
    }

    fn size(&self) -> Size { self.size }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render_op::DrawOp;

    fn op(col: u16, row: u16, text: &str, wrap: bool) -> DrawOp {
        DrawOp {
            col,
            row,
            text: text.to_string(),
            wrap,
            style: TextStyle::default(),
        }
    }

    #[test]
    fn paint_writes_cells_left_to_right() {
        let mut surface = OffscreenSurface::new(20, 5);
        surface.paint(&op(2, 1, "abc", true));
        assert_eq!(surface.row_text(1), "  abc");
    }

    #[test]
    fn paint_wraps_at_the_right_edge_back_to_the_start_column() {
        let mut surface = OffscreenSurface::new(10, 5);
        surface.paint(&op(3, 0, "abcdefghij", true));
        assert_eq!(surface.row_text(0), "   abcdefg");
        assert_eq!(surface.row_text(1), "   hij");
    }

    #[test]
    fn paint_without_wrap_truncates_at_the_right_edge() {
        let mut surface = OffscreenSurface::new(10, 5);
        surface.paint(&op(3, 0, "abcdefghij", false));
        assert_eq!(surface.row_text(0), "   abcdefg");
        assert_eq!(surface.row_text(1), "");
    }

    #[test]
    fn paint_treats_newline_as_next_row_at_start_column() {
        let mut surface = OffscreenSurface::new(20, 5);
        surface.paint(&op(2, 0, "ab\ncd", true));
        assert_eq!(surface.row_text(0), "  ab");
        assert_eq!(surface.row_text(1), "  cd");
    }

    #[test]
    fn paint_treats_carriage_return_as_back_to_start_column() {
        let mut surface = OffscreenSurface::new(20, 5);
        surface.paint(&op(0, 0, "ab\rcd", true));
        assert_eq!(surface.row_text(0), "cd");
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut surface = OffscreenSurface::new(5, 2);
        surface.set_content(10, 10, 'x', TextStyle::default());
        assert_eq!(surface.row_text(0), "");
        assert_eq!(surface.row_text(1), "");
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut surface = OffscreenSurface::new(5, 2);
        surface.paint(&op(0, 0, "abc", true));
        surface.clear();
        assert_eq!(surface.row_text(0), "");
        assert_eq!(surface.clear_count, 1);
    }
}
