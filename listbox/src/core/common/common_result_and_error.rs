/*
 *   Copyright (c) 2025 R3BL LLC
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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::InlineString;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`ListboxError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Every way an operation on the engine can be rejected.
///
/// None of these are user facing. They are programmer errors (the widget that owns the
/// listbox wired something up incorrectly) or a configuration that can't be used. The
/// [`crate::Listbox`] facade logs them and turns them into no-ops, so a live UI never
/// crashes because of them.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum ListboxError {
    #[error("🔑 Item key '{key}' is already registered")]
    #[diagnostic(
        code(r3bl_listbox::duplicate_key),
        help("Each mounted item needs a key that is unique within its listbox")
    )]
    DuplicateKey { key: InlineString },

    #[error("🔍 Item key '{key}' is not registered")]
    #[diagnostic(code(r3bl_listbox::unknown_key))]
    UnknownKey { key: InlineString },

    #[error("🚫 Item key '{key}' is disabled")]
    #[diagnostic(code(r3bl_listbox::disabled_key))]
    DisabledKey { key: InlineString },

    #[error("⚙️ Invalid listbox config: {reason}")]
    #[diagnostic(code(r3bl_listbox::invalid_config))]
    InvalidConfig { reason: String },
}

impl ListboxError {
    pub fn duplicate_key(key: impl AsRef<str>) -> Self {
        Self::DuplicateKey {
            key: key.as_ref().into(),
        }
    }

    pub fn unknown_key(key: impl AsRef<str>) -> Self {
        Self::UnknownKey {
            key: key.as_ref().into(),
        }
    }

    pub fn disabled_key(key: impl AsRef<str>) -> Self {
        Self::DisabledKey {
            key: key.as_ref().into(),
        }
    }
}
