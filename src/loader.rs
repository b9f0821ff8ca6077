// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Loads the text corpus the patterns run against. This happens once, at
//! startup, before any screen state exists.

use std::{fs::File,
          io::{self, BufRead, BufReader, Write},
          path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("can't open input file '{path}': {source}")]
    OpenFile { path: String, source: io::Error },

    #[error("can't read input: {0}")]
    ReadInput(#[from] io::Error),
}

/// The file's lines in file order, or (when no path is given) a single line
/// entered interactively at a prompt.
pub fn load_lines(maybe_path: Option<&Path>) -> Result<Vec<String>, SourceError> {
    match maybe_path {
        Some(path) => read_file_lines(path),
        None => prompt_for_line(),
    }
}

fn read_file_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::OpenFile {
        path: path.display().to_string(),
        source,
    })?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn prompt_for_line() -> Result<Vec<String>, SourceError> {
    let mut out = io::stdout();
    write!(out, "Enter test text: ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    // Keep the entered text, not its line terminator.
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(vec![line])
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_lines_load_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();
        writeln!(file, "third").unwrap();

        let lines = load_lines(Some(file.path())).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn an_empty_file_loads_as_no_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let lines = load_lines(Some(file.path())).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn a_missing_file_is_an_open_error() {
        let result = load_lines(Some(Path::new("/definitely/not/here.txt")));
        match result {
            Err(SourceError::OpenFile { path, .. }) => {
                assert_eq!(path, "/definitely/not/here.txt");
            }
            other => panic!("expected OpenFile error, got {other:?}"),
        }
    }
}
