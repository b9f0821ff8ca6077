// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

/// Colors for one styled fragment. `None` leaves the terminal default in
/// place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color_fg: Option<Color>,
    pub color_bg: Option<Color>,
}

impl TextStyle {
    #[must_use]
    pub fn fg(color: Color) -> Self {
        Self {
            color_fg: Some(color),
            ..Self::default()
        }
    }
}

/// The fixed palette for a frame: pattern text & group text in the accent
/// color, matching lines in a softer tone, group braces in their own color,
/// and the caret as an inverted cell so it is visible without blinking.
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    pub pattern_style: TextStyle,
    pub caret_style: TextStyle,
    pub match_style: TextStyle,
    pub delim_style: TextStyle,
    pub plain_style: TextStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            pattern_style: TextStyle::fg(Color::AnsiValue(142)),
            caret_style: TextStyle {
                color_fg: Some(Color::Black),
                color_bg: Some(Color::White),
            },
            match_style: TextStyle::fg(Color::AnsiValue(109)),
            delim_style: TextStyle::fg(Color::AnsiValue(66)),
            plain_style: TextStyle::default(),
        }
    }
}
