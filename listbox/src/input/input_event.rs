// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ItemKey, KeyPress, SearchTimeoutToken};

/// Everything that can drive a [`crate::Listbox`].
///
/// Pointer input is not modeled at the level of mouse, touch, or pen events. Whoever
/// hosts the listbox dedupes those into one [`InputEvent::Activate`] per logical click
/// or tap, and (optionally) [`InputEvent::Hover`] when the pointer moves over an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    /// A click or tap on the item with this key.
    Activate { key: ItemKey },
    /// The pointer moved over the item with this key. Only honored when
    /// [`crate::ListboxConfig::activate_on_hover`] is set.
    Hover { key: ItemKey },
    /// The deferred type-ahead inactivity timer fired.
    SearchTimeout(SearchTimeoutToken),
}

impl From<KeyPress> for InputEvent {
    fn from(key_press: KeyPress) -> Self { InputEvent::Keyboard(key_press) }
}

/// Only key events are converted. Everything else that crossterm reports (resize,
/// focus, paste, mouse) is handled by the host.
impl TryFrom<crossterm::event::Event> for InputEvent {
    type Error = ();

    fn try_from(event: crossterm::event::Event) -> Result<Self, Self::Error> {
        match event {
            crossterm::event::Event::Key(key_event) => {
                Ok(InputEvent::Keyboard(KeyPress::try_from(key_event)?))
            }
            _ => Err(()),
        }
    }
}
