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

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    /// `Ctrl` and `Alt` turn a key into a shortcut. Such keys are never type-ahead input
    /// and never navigation for the listbox, so they propagate to the host.
    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        self.ctrl_key_state == KeyState::Pressed || self.alt_key_state == KeyState::Pressed
    }
}

/// Returns [None] if no modifier bits are set.
#[must_use]
pub fn convert_key_modifiers(modifiers: &KeyModifiers) -> Option<ModifierKeysMask> {
    if modifiers.is_empty() {
        None
    } else {
        Some(ModifierKeysMask::from(*modifiers))
    }
}

impl From<KeyModifiers> for ModifierKeysMask {
    /// Extra bits (`SUPER`, `HYPER`, `META`) are ignored, the listbox has no use for them.
    fn from(other: KeyModifiers) -> ModifierKeysMask {
        let state_of = |bit: KeyModifiers| {
            if other.intersects(bit) {
                KeyState::Pressed
            } else {
                KeyState::NotPressed
            }
        };
        ModifierKeysMask {
            shift_key_state: state_of(KeyModifiers::SHIFT),
            ctrl_key_state: state_of(KeyModifiers::CONTROL),
            alt_key_state: state_of(KeyModifiers::ALT),
        }
    }
}
