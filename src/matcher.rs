// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pattern compilation and per-line scanning.

use regex::Regex;

/// One matching line: the line's text, the first match's full text, and its
/// capture groups in definition order. Groups that did not participate in
/// the match come back as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub line: String,
    pub full_match: String,
    pub groups: Vec<String>,
}

/// Build a matcher from the current pattern text. The empty pattern is valid
/// and matches every line, which is exactly what an empty editor should show.
pub fn compile(pattern_text: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern_text)
}

/// Run the matcher over every line, in order, keeping only the lines that
/// match. Each line is scanned independently; only the first match per line
/// is reported.
#[must_use]
pub fn scan(matcher: &Regex, lines: &[String]) -> Vec<LineMatch> {
    lines
        .iter()
        .filter_map(|line| {
            matcher.captures(line).map(|captures| {
                let full_match = captures
                    .get(0)
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string();
                let groups = captures
                    .iter()
                    .skip(1)
                    .map(|maybe_group| {
                        maybe_group.map(|m| m.as_str()).unwrap_or_default().to_string()
                    })
                    .collect();
                LineMatch {
                    line: line.clone(),
                    full_match,
                    groups,
                }
            })
        })
        .collect()
}
