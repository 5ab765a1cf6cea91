// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{CommonResult, ListboxError, SelectionMode};

/// Configuration of one [`crate::Listbox`]. Every field has a default, so a partial
/// JSON object (or `{}`) is a valid config.
///
/// ```rust
/// use r3bl_listbox::*;
///
/// let config = ListboxConfig::try_from_json_str(r#"{ "selection_mode": "multiple" }"#)
///     .unwrap();
/// assert_eq!(config.selection_mode, SelectionMode::Multiple);
/// assert_eq!(config.type_ahead_timeout_ms, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListboxConfig {
    pub selection_mode: SelectionMode,
    /// Whether a commit may reduce the selection to nothing.
    pub allow_empty: bool,
    /// Pause after which the type-ahead search starts over.
    pub type_ahead_timeout_ms: u64,
    /// Move the active item when the pointer hovers over an item.
    pub activate_on_hover: bool,
}

pub const DEFAULT_TYPE_AHEAD_TIMEOUT_MS: u64 = 1_000;

impl Default for ListboxConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            allow_empty: true,
            type_ahead_timeout_ms: DEFAULT_TYPE_AHEAD_TIMEOUT_MS,
            activate_on_hover: false,
        }
    }
}

impl ListboxConfig {
    /// # Errors
    ///
    /// Returns an error if `json` can't be parsed, or the values fail
    /// [`Self::validate`].
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let config: ListboxConfig = serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(ListboxError::InvalidConfig {
                reason: "not a valid listbox config JSON object".to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ListboxError::InvalidConfig`] if the type-ahead timeout is zero.
    pub fn validate(&self) -> Result<(), ListboxError> {
        if self.type_ahead_timeout_ms == 0 {
            return Err(ListboxError::InvalidConfig {
                reason: "type_ahead_timeout_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn type_ahead_timeout(&self) -> Duration {
        Duration::from_millis(self.type_ahead_timeout_ms)
    }

    #[must_use]
    pub fn with_selection_mode(mut self, selection_mode: SelectionMode) -> Self {
        self.selection_mode = selection_mode;
        self
    }

    #[must_use]
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    #[must_use]
    pub fn with_type_ahead_timeout(mut self, timeout: Duration) -> Self {
        self.type_ahead_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_activate_on_hover(mut self, activate_on_hover: bool) -> Self {
        self.activate_on_hover = activate_on_hover;
        self
    }
}
