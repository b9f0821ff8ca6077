// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input events, cleaned up from the backend's raw form.
//!
//! The event loop consumes [`InputEvent`], never a raw
//! [`crossterm::event::Event`]. The conversions here drop everything the
//! tool has no use for (mouse, focus, paste, key release/repeat), so the
//! loop only ever sees a key press or a resize.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::term::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
}

/// A semantically cleaned up key press: either a bare key, or a key with a
/// non-trivial modifier mask.
///
/// Typing `X` (Shift+x on the keyboard) arrives from the backend with the
/// SHIFT modifier set; that modifier is already folded into the produced
/// character, so it converts to a plain `Character('X')` here rather than a
/// modified one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A [char] that can be printed to the console.
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Delete,
    Insert,
    Esc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeysMask {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl TryFrom<Event> for InputEvent {
    type Error = ();

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) => Ok(InputEvent::Keyboard(key_event.try_into()?)),
            Event::Resize(columns, rows) => Ok(InputEvent::Resize(Size {
                col_count: columns,
                row_count: rows,
            })),
            // Mouse, focus, and paste events are not consumed by this tool.
            _ => Err(()),
        }
    }
}

impl TryFrom<KeyEvent> for KeyPress {
    type Error = ();

    /// Only `Press` events convert; `Release`/`Repeat` (kitty protocol
    /// terminals) are dropped so a key never registers twice.
    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        if key_event.kind != KeyEventKind::Press {
            return Err(());
        }
        match key_event {
            // Character keys: ignore SHIFT (already folded into the char).
            KeyEvent {
                code: KeyCode::Char(character),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => Ok(KeyPress::Plain {
                key: Key::Character(character),
            }),
            _ => {
                let key = convert_key_code(key_event.code).ok_or(())?;
                match convert_modifiers(key_event.modifiers) {
                    Some(mask) => Ok(KeyPress::WithModifiers { key, mask }),
                    None => Ok(KeyPress::Plain { key }),
                }
            }
        }
    }
}

fn convert_key_code(code: KeyCode) -> Option<Key> {
    // Make the code easier to read below using this alias.
    type KC = KeyCode;
    match code {
        KC::Char(character) => Some(Key::Character(character)),
        KC::Backspace => Some(Key::SpecialKey(SpecialKey::Backspace)),
        KC::Enter => Some(Key::SpecialKey(SpecialKey::Enter)),
        KC::Left => Some(Key::SpecialKey(SpecialKey::Left)),
        KC::Right => Some(Key::SpecialKey(SpecialKey::Right)),
        KC::Up => Some(Key::SpecialKey(SpecialKey::Up)),
        KC::Down => Some(Key::SpecialKey(SpecialKey::Down)),
        KC::Home => Some(Key::SpecialKey(SpecialKey::Home)),
        KC::End => Some(Key::SpecialKey(SpecialKey::End)),
        KC::PageUp => Some(Key::SpecialKey(SpecialKey::PageUp)),
        KC::PageDown => Some(Key::SpecialKey(SpecialKey::PageDown)),
        KC::Tab => Some(Key::SpecialKey(SpecialKey::Tab)),
        KC::Delete => Some(Key::SpecialKey(SpecialKey::Delete)),
        KC::Insert => Some(Key::SpecialKey(SpecialKey::Insert)),
        KC::Esc => Some(Key::SpecialKey(SpecialKey::Esc)),
        _ => None,
    }
}

fn convert_modifiers(modifiers: KeyModifiers) -> Option<ModifierKeysMask> {
    if modifiers.is_empty() {
        return None;
    }
    Some(ModifierKeysMask {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        shift: modifiers.contains(KeyModifiers::SHIFT),
        alt: modifiers.contains(KeyModifiers::ALT),
    })
}
