// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashSet;

use crate::{InlineVec, Item, ItemKey, ItemPatch, ListboxError};

/// Where [`ItemRegistry::register`] puts a newly mounted item. The registry never
/// reorders items on its own. The position is whatever the mount order of the owning UI
/// node implies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegisterPosition {
    #[default]
    End,
    /// Index into the full ordering (disabled items included). An index past the end
    /// appends.
    Index(usize),
    Before(ItemKey),
    After(ItemKey),
}

/// The ordered collection of items that are currently mounted. Order is authoring (and
/// rendering) order.
///
/// There are two orderings:
/// 1. All items: [`Self::ordered_keys`], [`Self::iter`].
/// 2. Enabled items only: [`Self::ordered_enabled_keys`], [`Self::index_of`],
///    [`Self::item_at`]. This is what navigation and type-ahead work against.
///
/// Lookups are linear scans. Listboxes are small, and the order of the `Vec` is the
/// source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the index (in the full ordering) at which the item was inserted.
    ///
    /// # Errors
    ///
    /// - [`ListboxError::DuplicateKey`] if an item with the same key is mounted.
    /// - [`ListboxError::UnknownKey`] if the anchor of [`RegisterPosition::Before`] or
    ///   [`RegisterPosition::After`] is not mounted.
    pub fn register(
        &mut self,
        item: Item,
        position: RegisterPosition,
    ) -> Result<usize, ListboxError> {
        if self.contains(&item.key) {
            return Err(ListboxError::duplicate_key(&item.key));
        }

        let index = match position {
            RegisterPosition::End => self.items.len(),
            RegisterPosition::Index(index) => index.min(self.items.len()),
            RegisterPosition::Before(anchor) => self
                .position_of(&anchor)
                .ok_or_else(|| ListboxError::unknown_key(&anchor))?,
            RegisterPosition::After(anchor) => {
                self.position_of(&anchor)
                    .ok_or_else(|| ListboxError::unknown_key(&anchor))?
                    + 1
            }
        };

        self.items.insert(index, item);
        Ok(index)
    }

    /// No-op if the key is not mounted.
    pub fn unregister(&mut self, key: &ItemKey) -> Option<Item> {
        let index = self.position_of(key)?;
        Some(self.items.remove(index))
    }

    /// Updates the mutable attributes of a mounted item, in place.
    ///
    /// # Errors
    ///
    /// [`ListboxError::UnknownKey`] if the key is not mounted.
    pub fn update(&mut self, key: &ItemKey, patch: &ItemPatch) -> Result<(), ListboxError> {
        let item = self
            .items
            .iter_mut()
            .find(|it| &it.key == key)
            .ok_or_else(|| ListboxError::unknown_key(key))?;
        item.apply(patch);
        Ok(())
    }

    /// Replaces the whole collection with `items`, in their order. Returns the keys that
    /// were mounted before and are gone now.
    ///
    /// # Errors
    ///
    /// [`ListboxError::DuplicateKey`] if `items` repeats a key. Nothing changes in that
    /// case.
    pub fn sync(&mut self, items: Vec<Item>) -> Result<InlineVec<ItemKey>, ListboxError> {
        let mut seen: HashSet<&ItemKey> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.key) {
                return Err(ListboxError::duplicate_key(&item.key));
            }
        }

        let removed = self
            .items
            .iter()
            .filter(|it| !seen.contains(&it.key))
            .map(|it| it.key.clone())
            .collect();

        self.items = items;
        Ok(removed)
    }

    #[must_use]
    pub fn ordered_keys(&self) -> InlineVec<ItemKey> {
        self.items.iter().map(|it| it.key.clone()).collect()
    }

    #[must_use]
    pub fn ordered_enabled_keys(&self) -> InlineVec<ItemKey> {
        self.enabled_items().map(|it| it.key.clone()).collect()
    }

    /// Index of `key` in the enabled-only ordering. [None] if the key is not mounted or
    /// is disabled.
    #[must_use]
    pub fn index_of(&self, key: &ItemKey) -> Option<usize> {
        self.enabled_items().position(|it| &it.key == key)
    }

    /// Item at `index` in the enabled-only ordering.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> { self.enabled_items().nth(index) }

    pub fn enabled_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|it| it.is_enabled())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> { self.items.iter() }

    #[must_use]
    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.items.iter().find(|it| &it.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &ItemKey) -> bool { self.get(key).is_some() }

    #[must_use]
    pub fn is_enabled(&self, key: &ItemKey) -> bool {
        self.get(key).is_some_and(Item::is_enabled)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    #[must_use]
    pub fn enabled_len(&self) -> usize { self.enabled_items().count() }

    fn position_of(&self, key: &ItemKey) -> Option<usize> {
        self.items.iter().position(|it| &it.key == key)
    }
}
