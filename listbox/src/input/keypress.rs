/*
 *   Copyright (c) 2022-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

use super::{ModifierKeysMask, convert_key_modifiers};

/// Examples.
///
/// ```rust
/// use r3bl_listbox::*;
///
/// let a = key_press!(@char 'a');
/// assert_eq!(a, KeyPress::Plain { key: Key::Character('a') });
///
/// let ctrl_a = key_press!(@char ModifierKeysMask::new().with_ctrl(), 'a');
/// assert_eq!(
///     ctrl_a,
///     KeyPress::WithModifiers {
///         key: Key::Character('a'),
///         mask: ModifierKeysMask { ctrl_key_state: KeyState::Pressed, ..Default::default() },
///     }
/// );
///
/// let enter = key_press!(@special SpecialKey::Enter);
/// assert_eq!(enter, KeyPress::Plain { key: Key::SpecialKey(SpecialKey::Enter) });
/// ```
#[macro_export]
macro_rules! key_press {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

/// This is equivalent to [`crossterm::event::KeyEvent`] except that it is cleaned up
/// semantically and impossible states are removed. The listbox only ever sees
/// [`KeyPress`], so it doesn't care which terminal (or GUI) backend produced the input.
///
/// Please use the [`crate::key_press!`] macro instead of directly constructing this.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum Key {
    /// [char] that can be printed. These feed the type-ahead search.
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
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
    BackTab, /* Shift + Tab */
    Delete,
    Insert,
    Esc,
}

impl KeyPress {
    #[must_use]
    pub fn key(&self) -> Key {
        match self {
            KeyPress::Plain { key } | KeyPress::WithModifiers { key, .. } => *key,
        }
    }

    /// Returns [None] for [`KeyPress::Plain`].
    #[must_use]
    pub fn maybe_mask(&self) -> Option<ModifierKeysMask> {
        match self {
            KeyPress::Plain { .. } => None,
            KeyPress::WithModifiers { mask, .. } => Some(*mask),
        }
    }
}

/// Typecast / convert [`KeyEvent`] to [`KeyPress`].
///
/// Only [`KeyEventKind::Press`] is accepted. Repeat and release events (which only show
/// up on terminals that speak the kitty keyboard protocol) are dropped.
///
/// There is special handling of displayable characters in this conversion. Typing "X"
/// by pressing "Shift + X" shows up in crossterm as `SHIFT` + `Char('X')`. The `SHIFT`
/// (and `NONE`) modifiers are ignored for characters:
///
/// ```text
/// ╔════════════════════╦══════════════════════════════════════════════════╗
/// ║ User action        ║ Result                                           ║
/// ╠════════════════════╬══════════════════════════════════════════════════╣
/// ║ Type "x"           ║ key_press! {@char 'x'}                           ║
/// ╠════════════════════╬══════════════════════════════════════════════════╣
/// ║ Type "X"           ║ key_press! {@char 'X'}, the SHIFT is ignored     ║
/// ╠════════════════════╬══════════════════════════════════════════════════╣
/// ║ Type "Ctrl + x"    ║ key_press! {@char ctrl_mask, 'x'}                ║
/// ╚════════════════════╩══════════════════════════════════════════════════╝
/// ```
pub mod convert_key_event {
    use super::{Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyPress,
                SpecialKey, convert_key_modifiers};

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            match key_event {
                // If character keys, then ignore SHIFT or NONE modifiers.
                KeyEvent {
                    code: KeyCode::Char(character),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    ..
                } => Ok(key_press! { @char character }),
                _ => {
                    let key = copy_code_from_key_event(&key_event).ok_or(())?;
                    Ok(match convert_key_modifiers(&key_event.modifiers) {
                        Some(mask) => KeyPress::WithModifiers { key, mask },
                        None => KeyPress::Plain { key },
                    })
                }
            }
        }
    }

    /// Keys the listbox has no use for (function keys, media keys, etc) map to [None].
    #[must_use]
    pub fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;
        let special = |it: SpecialKey| Some(Key::SpecialKey(it));
        match key_event.code {
            KC::Backspace => special(SpecialKey::Backspace),
            KC::Enter => special(SpecialKey::Enter),
            KC::Left => special(SpecialKey::Left),
            KC::Right => special(SpecialKey::Right),
            KC::Up => special(SpecialKey::Up),
            KC::Down => special(SpecialKey::Down),
            KC::Home => special(SpecialKey::Home),
            KC::End => special(SpecialKey::End),
            KC::PageUp => special(SpecialKey::PageUp),
            KC::PageDown => special(SpecialKey::PageDown),
            KC::Tab => special(SpecialKey::Tab),
            KC::BackTab => special(SpecialKey::BackTab),
            KC::Delete => special(SpecialKey::Delete),
            KC::Insert => special(SpecialKey::Insert),
            KC::Esc => special(SpecialKey::Esc),
            KC::Char(character) => Some(Key::Character(character)),
            _ => None,
        }
    }
}
