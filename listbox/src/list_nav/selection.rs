// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{InlineVec, ItemKey, ItemRegistry, ListboxError};

/// The fully materialized selection, in the order the keys were selected.
pub type SelectedKeys = InlineVec<ItemKey>;

/// How committing an item affects the selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    /// Menu style. Committing an item fires an action, and nothing is ever selected.
    None,
    /// At most one item is selected.
    #[default]
    Single,
    /// Any subset of items is selected. Committing toggles.
    Multiple,
}

/// What [`SelectionController::commit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The key is unknown or disabled. Nothing changed.
    Rejected(ListboxError),
    /// [`SelectionMode::None`] only.
    Action(ItemKey),
    /// Carries the new selection.
    SelectionChanged(SelectedKeys),
    /// The empty guard fired (`allow_empty` is false and this commit would have emptied
    /// the selection).
    Unchanged,
}

/// Owns the selected keys, and applies the transition rules of each
/// [`SelectionMode`] when an item is committed.
///
/// The selection is keyed. It is not pruned when items unmount, since closing a popup
/// unmounts every option and the selection has to survive that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    mode: SelectionMode,
    allow_empty: bool,
    selected: SelectedKeys,
}

impl SelectionController {
    /// An `initial` selection that doesn't fit `mode` is normalized (not rejected):
    /// duplicates are dropped, [`SelectionMode::Single`] keeps the first key, and
    /// [`SelectionMode::None`] keeps nothing.
    pub fn new(
        mode: SelectionMode,
        allow_empty: bool,
        initial: impl IntoIterator<Item = ItemKey>,
    ) -> Self {
        Self {
            mode,
            allow_empty,
            selected: normalize(mode, initial),
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode { self.mode }

    #[must_use]
    pub fn allow_empty(&self) -> bool { self.allow_empty }

    #[must_use]
    pub fn selected_keys(&self) -> &[ItemKey] { &self.selected }

    #[must_use]
    pub fn is_selected(&self, key: &ItemKey) -> bool { self.selected.contains(key) }

    pub fn commit(&mut self, key: &ItemKey, registry: &ItemRegistry) -> CommitOutcome {
        match registry.get(key) {
            None => return CommitOutcome::Rejected(ListboxError::unknown_key(key)),
            Some(item) if item.disabled => {
                return CommitOutcome::Rejected(ListboxError::disabled_key(key));
            }
            Some(_) => {}
        }

        let is_selected = self.is_selected(key);
        let would_empty = is_selected && self.selected.len() == 1;

        match self.mode {
            SelectionMode::None => return CommitOutcome::Action(key.clone()),
            _ if would_empty && !self.allow_empty => return CommitOutcome::Unchanged,
            SelectionMode::Single if is_selected => self.selected.clear(),
            SelectionMode::Single => {
                self.selected.clear();
                self.selected.push(key.clone());
            }
            SelectionMode::Multiple if is_selected => self.selected.retain(|it| *it != *key),
            SelectionMode::Multiple => self.selected.push(key.clone()),
        }

        CommitOutcome::SelectionChanged(self.selected.clone())
    }

    /// Returns the new selection if switching modes had to normalize it.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Option<SelectedKeys> {
        self.mode = mode;
        self.replace(normalize(mode, self.selected.clone()))
    }

    pub fn set_allow_empty(&mut self, allow_empty: bool) { self.allow_empty = allow_empty; }

    /// Replaces the selection (eg: a controlled value pushed down by the host). The keys
    /// are normalized for the current mode. Returns the new selection if it changed.
    pub fn set_selected_keys(
        &mut self,
        keys: impl IntoIterator<Item = ItemKey>,
    ) -> Option<SelectedKeys> {
        self.replace(normalize(self.mode, keys))
    }

    fn replace(&mut self, new_selection: SelectedKeys) -> Option<SelectedKeys> {
        if new_selection == self.selected {
            return None;
        }
        self.selected = new_selection;
        Some(self.selected.clone())
    }
}

fn normalize(mode: SelectionMode, keys: impl IntoIterator<Item = ItemKey>) -> SelectedKeys {
    let mut deduped = SelectedKeys::new();
    for key in keys {
        if !deduped.contains(&key) {
            deduped.push(key);
        }
    }

    let requested_len = deduped.len();
    let max_len = match mode {
        SelectionMode::None => 0,
        SelectionMode::Single => 1,
        SelectionMode::Multiple => requested_len,
    };
    deduped.truncate(max_len);

    if deduped.len() < requested_len {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "✂️ Selection normalized to fit the selection mode",
            mode = %mode,
            requested_len = requested_len,
            kept = ?deduped.iter().map(ItemKey::as_str).collect::<Vec<_>>(),
        );
    }

    deduped
}
