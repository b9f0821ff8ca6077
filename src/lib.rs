// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_rex
//!
//! Type a regular expression and watch, live, which lines of the input text
//! match it, capture groups included. Every keystroke recompiles the
//! pattern, rescans the loaded lines, and repaints the screen.
//!
//! Run it against a file:
//!
//! ```shell
//! rex -f some_file.txt
//! ```
//!
//! Or against a single line typed at a prompt:
//!
//! ```shell
//! rex
//! ```
//!
//! ## Keybindings
//!
//! | Key                    | Action                        |
//! | ---------------------- | ----------------------------- |
//! | printable characters   | edit the pattern at the caret |
//! | Left / Right           | move the caret                |
//! | Backspace              | delete before the caret       |
//! | Esc, Ctrl+C, `q`       | quit                          |
//!
//! The top row shows the pattern being edited, with the caret rendered as an
//! inverted cell. While the pattern fails to compile, the row below shows the
//! compile error. While it compiles, each matching line gets its own row, with
//! any capture groups appended as `-> groups {{..}}`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod event_loop;
pub mod input_event;
pub mod loader;
pub mod log;
pub mod matcher;
pub mod pattern_buffer;
pub mod render_op;
pub mod style;
pub mod surface;
pub mod term;
pub mod test_fixtures;

pub use event_loop::*;
pub use input_event::*;
pub use loader::*;
pub use log::*;
pub use matcher::*;
pub use pattern_buffer::*;
pub use render_op::*;
pub use style::*;
pub use surface::*;
pub use term::*;
pub use test_fixtures::*;
