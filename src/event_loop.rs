// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The live-edit loop: one blocking event in, one full frame out.

use std::io;

use crate::{input_event::{InputEvent, Key, KeyPress, SpecialKey},
            matcher,
            pattern_buffer::PatternBuffer,
            render_op,
            style::StyleSheet,
            surface::Surface};

/// Whether the loop keeps running after an event. `Terminating` is the only
/// terminal state and is reached by an explicit quit key alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminating,
}

/// Run until a quit key.
///
/// The buffer, the compiled pattern, the scan results, and the draw ops all
/// live on this one thread, so there is nothing to lock. Each event is
/// followed by a full redraw (compile, scan, plan, paint) before the next
/// event is awaited; a frame is also drawn once before the first event.
pub fn run_event_loop(
    surface: &mut dyn Surface,
    lines: &[String],
    styles: &StyleSheet,
) -> io::Result<()> {
    let mut buffer = PatternBuffer::default();
    loop {
        draw_frame(surface, &buffer, lines, styles)?;
        let event = surface.poll_event()?;
        if let RunState::Terminating = apply_event(&mut buffer, &event) {
            // % is Display, ? is Debug.
            tracing::debug!(message = "quit", pattern = %buffer.to_text());
            return Ok(());
        }
    }
}

/// Apply one event to the buffer, returning whether to keep running. The
/// buffer clamps all caret and removal edge cases itself, so no event can
/// leave it in a bad state.
pub fn apply_event(buffer: &mut PatternBuffer, event: &InputEvent) -> RunState {
    match event {
        InputEvent::Keyboard(key_press) => apply_key_press(buffer, *key_press),
        // The next frame reads the new size off the surface.
        InputEvent::Resize(_) => RunState::Running,
    }
}

fn apply_key_press(buffer: &mut PatternBuffer, key_press: KeyPress) -> RunState {
    match key_press {
        KeyPress::Plain {
            key: Key::SpecialKey(SpecialKey::Left),
        } => {
            buffer.move_caret(-1);
            RunState::Running
        }
        KeyPress::Plain {
            key: Key::SpecialKey(SpecialKey::Right),
        } => {
            buffer.move_caret(1);
            RunState::Running
        }
        KeyPress::Plain {
            key: Key::SpecialKey(SpecialKey::Backspace),
        } => {
            buffer.remove_before_caret();
            RunState::Running
        }
        KeyPress::Plain {
            key: Key::SpecialKey(SpecialKey::Esc),
        } => RunState::Terminating,
        // TODO: plain `q` quits even mid-edit, so `q` can never be typed
        // into a pattern. Rebinding it needs a product call first.
        KeyPress::Plain {
            key: Key::Character('q'),
        } => RunState::Terminating,
        KeyPress::Plain {
            key: Key::Character(character),
        } if !character.is_control() => {
            buffer.insert_at_caret(character);
            RunState::Running
        }
        KeyPress::WithModifiers {
            key: Key::Character('c'),
            mask,
        } if mask.ctrl => RunState::Terminating,
        _ => RunState::Running,
    }
}

/// One redraw cycle. The compiled pattern and the scan results are derived
/// fresh here every time and dropped at the end of the frame; nothing is
/// cached across edits.
fn draw_frame(
    surface: &mut dyn Surface,
    buffer: &PatternBuffer,
    lines: &[String],
    styles: &StyleSheet,
) -> io::Result<()> {
    let ops = match matcher::compile(&buffer.to_text()) {
        Ok(compiled) => render_op::plan_frame(buffer, &matcher::scan(&compiled, lines), styles),
        Err(error) => render_op::plan_error_frame(buffer, &error, styles),
    };

    surface.clear();
    for op in &ops {
        surface.paint(op);
    }
    surface.show()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{input_event::ModifierKeysMask, term::Size, test_fixtures::OffscreenSurface};

    fn plain_char(ch: char) -> InputEvent {
        InputEvent::Keyboard(KeyPress::Plain {
            key: Key::Character(ch),
        })
    }

    fn special(key: SpecialKey) -> InputEvent {
        InputEvent::Keyboard(KeyPress::Plain {
            key: Key::SpecialKey(key),
        })
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|it| (*it).to_string()).collect()
    }

    #[test]
    fn printable_characters_insert_at_the_caret() {
        let mut buffer = PatternBuffer::default();
        assert_eq!(apply_event(&mut buffer, &plain_char('a')), RunState::Running);
        assert_eq!(apply_event(&mut buffer, &plain_char('b')), RunState::Running);
        assert_eq!(buffer.to_text(), "ab");
        assert_eq!(buffer.caret_index(), 2);
    }

    #[test]
    fn control_characters_are_rejected_at_the_boundary() {
        let mut buffer = PatternBuffer::default();
        apply_event(&mut buffer, &plain_char('\u{7}'));
        assert!(buffer.is_empty());
    }

    #[test]
    fn arrows_move_and_clamp_backspace_removes() {
        let mut buffer = PatternBuffer::default();
        apply_event(&mut buffer, &plain_char('a'));
        apply_event(&mut buffer, &plain_char('b'));

        apply_event(&mut buffer, &special(SpecialKey::Left));
        assert_eq!(buffer.caret_index(), 1);
        apply_event(&mut buffer, &special(SpecialKey::Left));
        apply_event(&mut buffer, &special(SpecialKey::Left));
        assert_eq!(buffer.caret_index(), 0);

        apply_event(&mut buffer, &special(SpecialKey::Right));
        apply_event(&mut buffer, &special(SpecialKey::Backspace));
        assert_eq!(buffer.to_text(), "b");
        assert_eq!(buffer.caret_index(), 0);
    }

    #[test]
    fn quit_keys_terminate() {
        let mut buffer = PatternBuffer::default();
        assert_eq!(
            apply_event(&mut buffer, &special(SpecialKey::Esc)),
            RunState::Terminating
        );
        assert_eq!(
            apply_event(&mut buffer, &plain_char('q')),
            RunState::Terminating
        );
        let ctrl_c = InputEvent::Keyboard(KeyPress::WithModifiers {
            key: Key::Character('c'),
            mask: ModifierKeysMask::new().with_ctrl(),
        });
        assert_eq!(apply_event(&mut buffer, &ctrl_c), RunState::Terminating);
    }

    #[test]
    fn resize_does_not_touch_the_buffer() {
        let mut buffer = PatternBuffer::default();
        apply_event(&mut buffer, &plain_char('a'));
        let resize = InputEvent::Resize(Size {
            col_count: 100,
            row_count: 40,
        });
        assert_eq!(apply_event(&mut buffer, &resize), RunState::Running);
        assert_eq!(buffer.to_text(), "a");
    }

    #[test]
    fn typing_a_pattern_filters_the_lines_on_screen() {
        let mut surface = OffscreenSurface::new(40, 10);
        surface.script_events([
            plain_char('a'),
            plain_char('b'),
            plain_char('.'),
            special(SpecialKey::Esc),
        ]);

        let corpus = lines(&["abc", "xyz", "abd"]);
        run_event_loop(&mut surface, &corpus, &StyleSheet::default()).unwrap();

        // One frame before the first event, one after each edit; Esc draws
        // nothing further.
        assert_eq!(surface.show_count, 4);
        assert_eq!(surface.clear_count, 4);
        assert_eq!(surface.row_text(0), "ab.");
        assert_eq!(surface.row_text(2), "abc");
        assert_eq!(surface.row_text(3), "abd");
        assert_eq!(surface.row_text(4), "");
    }

    #[test]
    fn groups_render_inline_after_the_matching_line() {
        let mut surface = OffscreenSurface::new(60, 10);
        let mut events: Vec<InputEvent> =
            r"(\w+)=(\w+)".chars().map(plain_char).collect();
        events.push(special(SpecialKey::Esc));
        surface.script_events(events);

        let corpus = lines(&["foo=bar", "nope"]);
        run_event_loop(&mut surface, &corpus, &StyleSheet::default()).unwrap();

        assert_eq!(surface.row_text(2), "foo=bar -> groups {{foo, bar}}");
        assert_eq!(surface.row_text(3), "");
    }

    #[test]
    fn invalid_pattern_shows_the_compile_error_instead_of_matches() {
        let mut surface = OffscreenSurface::new(60, 10);
        surface.script_events([plain_char('('), special(SpecialKey::Esc)]);

        let corpus = lines(&["abc"]);
        run_event_loop(&mut surface, &corpus, &StyleSheet::default()).unwrap();

        assert!(surface.row_text(1).contains("error"));
        // Error text wraps down the screen, but the match row for "abc" is
        // gone: with the empty pattern it was there, after `(` it is not.
        assert_ne!(surface.row_text(2), "abc");
    }

    #[test]
    fn empty_pattern_matches_every_line() {
        let mut surface = OffscreenSurface::new(40, 10);
        surface.script_events([special(SpecialKey::Esc)]);

        let corpus = lines(&["one", "two"]);
        run_event_loop(&mut surface, &corpus, &StyleSheet::default()).unwrap();

        assert_eq!(surface.row_text(2), "one");
        assert_eq!(surface.row_text(3), "two");
    }
}
