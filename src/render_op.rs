// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-frame draw planning.
//!
//! A frame is an ordered list of [`DrawOp`]s. The planner is a pure function
//! of the buffer, the compile outcome, and the scan results; it holds no
//! state between frames and has no error path of its own.

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

use crate::{matcher::LineMatch,
            pattern_buffer::PatternBuffer,
            style::{StyleSheet, TextStyle}};

/// One positioned, styled piece of text for the current frame. Consumed by
/// the surface right after planning; never retained across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub wrap: bool,
    pub style: TextStyle,
}

/// Frames are small (a pattern row plus one row per matching line), so the
/// op list usually lives inline without a heap allocation.
pub type DrawOps = SmallVec<[DrawOp; 16]>;

pub const PATTERN_ROW: u16 = 0;
pub const ERROR_ROW: u16 = 1;
pub const FIRST_MATCH_ROW: u16 = 2;

const ARROW: &str = " -> ";
const GROUPS_OPEN: &str = "groups {{";
const GROUPS_CLOSE: &str = "}}";
const GROUP_SEPARATOR: &str = ", ";

/// Plan the frame for a pattern that compiled: the pattern row with its
/// caret, then one row per matching line starting at [`FIRST_MATCH_ROW`].
/// Non-matching lines consume no row.
#[must_use]
pub fn plan_frame(
    buffer: &PatternBuffer,
    matches: &[LineMatch],
    styles: &StyleSheet,
) -> DrawOps {
    let mut ops = plan_pattern_row(buffer, styles);
    let mut row = FIRST_MATCH_ROW;
    for line_match in matches {
        plan_match_row(&mut ops, row, line_match, styles);
        row += 1;
    }
    ops
}

/// Plan the frame for a pattern that failed to compile: the pattern row with
/// its caret, and the error text where match output would otherwise go.
#[must_use]
pub fn plan_error_frame(
    buffer: &PatternBuffer,
    error: &regex::Error,
    styles: &StyleSheet,
) -> DrawOps {
    let mut ops = plan_pattern_row(buffer, styles);
    push_op(&mut ops, 0, ERROR_ROW, error.to_string(), styles.plain_style);
    ops
}

/// Screen column of the caret: the display width of everything to its left
/// (wide characters occupy two columns).
#[must_use]
pub fn caret_col(buffer: &PatternBuffer) -> u16 {
    let left_of_caret: String = buffer.chars()[..buffer.caret_index()].iter().collect();
    display_width(&left_of_caret)
}

fn plan_pattern_row(buffer: &PatternBuffer, styles: &StyleSheet) -> DrawOps {
    let mut ops = DrawOps::new();
    push_op(&mut ops, 0, PATTERN_ROW, buffer.to_text(), styles.pattern_style);

    // Caret overlay: the character under the caret, or a blank placeholder
    // when the caret sits past the end of the text.
    let caret_char = buffer.char_at_caret().unwrap_or(' ');
    push_op(
        &mut ops,
        caret_col(buffer),
        PATTERN_ROW,
        caret_char.to_string(),
        styles.caret_style,
    );

    ops
}

/// One matching line: the line text, then (when the match captured anything)
/// `" -> groups {{"`, the group texts separated by `", "`, and the closing
/// `"}}"` right after the last group. Columns advance by the rendered width
/// of each preceding fragment.
fn plan_match_row(ops: &mut DrawOps, row: u16, line_match: &LineMatch, styles: &StyleSheet) {
    let mut col = 0;
    push_op(ops, col, row, line_match.line.clone(), styles.match_style);
    col += display_width(&line_match.line);

    if line_match.groups.is_empty() {
        return;
    }

    push_op(ops, col, row, ARROW, styles.plain_style);
    col += display_width(ARROW);
    push_op(ops, col, row, GROUPS_OPEN, styles.delim_style);
    col += display_width(GROUPS_OPEN);

    for (index, group) in line_match.groups.iter().enumerate() {
        if index > 0 {
            push_op(ops, col, row, GROUP_SEPARATOR, styles.pattern_style);
            col += display_width(GROUP_SEPARATOR);
        }
        push_op(ops, col, row, group.clone(), styles.pattern_style);
        col += display_width(group);
    }

    push_op(ops, col, row, GROUPS_CLOSE, styles.delim_style);
}

fn push_op(ops: &mut DrawOps, col: u16, row: u16, text: impl Into<String>, style: TextStyle) {
    ops.push(DrawOp {
        col,
        row,
        text: text.into(),
        wrap: true,
        style,
    });
}

fn display_width(text: &str) -> u16 {
    // Frames are a terminal wide; u16 is plenty.
    #[allow(clippy::cast_possible_truncation)]
    let width = UnicodeWidthStr::width(text) as u16;
    width
}
