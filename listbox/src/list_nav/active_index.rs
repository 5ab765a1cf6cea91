// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ItemKey, ItemRegistry};

/// Directional navigation, bound to the arrow keys and paging keys by
/// [`crate::Listbox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum NavCommand {
    /// Arrow down.
    Next,
    /// Arrow up.
    Previous,
    /// Page up or Home.
    First,
    /// Page down or End.
    Last,
}

/// Tracks the one item that has "roving focus" (the active descendant). The active item
/// is always a mounted, enabled item, or nothing at all.
///
/// Navigation walks [`crate::ItemRegistry::ordered_enabled_keys`] and clamps at both
/// ends. It never wraps around.
///
/// Every method that could change the active item returns `true` if it did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveIndexController {
    maybe_active: Option<ItemKey>,
}

impl ActiveIndexController {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn active_key(&self) -> Option<&ItemKey> { self.maybe_active.as_ref() }

    /// No-op when there are no enabled items.
    pub fn navigate(&mut self, command: NavCommand, registry: &ItemRegistry) -> bool {
        let enabled_keys = registry.ordered_enabled_keys();
        let Some(last_index) = enabled_keys.len().checked_sub(1) else {
            return false;
        };

        let maybe_current_index = self
            .maybe_active
            .as_ref()
            .and_then(|key| registry.index_of(key));

        let new_index = match (command, maybe_current_index) {
            (NavCommand::First, _) | (NavCommand::Next, None) => 0,
            (NavCommand::Last, _) | (NavCommand::Previous, None) => last_index,
            (NavCommand::Next, Some(index)) => (index + 1).min(last_index),
            (NavCommand::Previous, Some(index)) => index.saturating_sub(1),
        };

        self.replace(enabled_keys.get(new_index).cloned())
    }

    pub fn next(&mut self, registry: &ItemRegistry) -> bool {
        self.navigate(NavCommand::Next, registry)
    }

    pub fn previous(&mut self, registry: &ItemRegistry) -> bool {
        self.navigate(NavCommand::Previous, registry)
    }

    pub fn first(&mut self, registry: &ItemRegistry) -> bool {
        self.navigate(NavCommand::First, registry)
    }

    pub fn last(&mut self, registry: &ItemRegistry) -> bool {
        self.navigate(NavCommand::Last, registry)
    }

    /// No-op for disabled or unknown keys.
    pub fn set_active(&mut self, key: &ItemKey, registry: &ItemRegistry) -> bool {
        if !registry.is_enabled(key) {
            return false;
        }
        self.replace(Some(key.clone()))
    }

    pub fn clear(&mut self) -> bool { self.replace(None) }

    /// Clears the active item if it is no longer mounted, or got disabled. It never
    /// jumps to a different item.
    pub fn revalidate(&mut self, registry: &ItemRegistry) -> bool {
        let is_stale = self
            .maybe_active
            .as_ref()
            .is_some_and(|key| !registry.is_enabled(key));
        if is_stale { self.clear() } else { false }
    }

    fn replace(&mut self, maybe_new: Option<ItemKey>) -> bool {
        if self.maybe_active == maybe_new {
            return false;
        }
        self.maybe_active = maybe_new;
        true
    }
}
