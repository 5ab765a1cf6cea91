// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::InlineString;

/// Stable identity of an [`Item`], similar to React's `key` prop. It stays the same
/// while the item is mounted, so the active item and the selection follow the item
/// around when other items are mounted, unmounted, or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemKey(pub InlineString);

impl ItemKey {
    pub fn new(key: impl AsRef<str>) -> Self { Self(key.as_ref().into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl AsRef<str> for ItemKey {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl From<&str> for ItemKey {
    fn from(it: &str) -> Self { Self::new(it) }
}

impl From<String> for ItemKey {
    fn from(it: String) -> Self { Self::new(it) }
}

impl From<&ItemKey> for ItemKey {
    fn from(it: &ItemKey) -> Self { it.clone() }
}

/// One interactive entry in a listbox. Items are plain values handed over by the
/// widget that renders them. The engine never allocates or owns their markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: ItemKey,
    /// Rendered text.
    pub label: String,
    /// Overrides the text that type-ahead matches against. When [None], the label is
    /// used. Handy when the label is decorated (eg: "🐆 Cheetah").
    pub maybe_text_value: Option<String>,
    pub disabled: bool,
}

impl Item {
    pub fn new(key: impl Into<ItemKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            maybe_text_value: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_text_value(mut self, text_value: impl Into<String>) -> Self {
        self.maybe_text_value = Some(text_value.into());
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The text used for type-ahead matching.
    #[must_use]
    pub fn text_value(&self) -> &str {
        self.maybe_text_value.as_deref().unwrap_or(&self.label)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool { !self.disabled }

    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(disabled) = patch.maybe_disabled {
            self.disabled = disabled;
        }
        if let Some(text_value) = &patch.maybe_text_value {
            self.maybe_text_value.clone_from(text_value);
        }
        if let Some(label) = &patch.maybe_label {
            self.label.clone_from(label);
        }
    }
}

/// The mutable attributes of a mounted [`Item`]. Fields left as [None] are not touched.
/// The key and the position of an item can't be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub maybe_disabled: Option<bool>,
    /// `Some(None)` removes an explicit text value, so the label is used again.
    pub maybe_text_value: Option<Option<String>>,
    pub maybe_label: Option<String>,
}

impl ItemPatch {
    #[must_use]
    pub fn disabled(disabled: bool) -> Self {
        Self {
            maybe_disabled: Some(disabled),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_text_value(mut self, maybe_text_value: Option<String>) -> Self {
        self.maybe_text_value = Some(maybe_text_value);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.maybe_label = Some(label.into());
        self
    }
}

/// Anything that can be shown as one row of a listbox.
pub trait ToListItem {
    fn to_list_item(&self) -> Item;
}

impl ToListItem for Item {
    fn to_list_item(&self) -> Item { self.clone() }
}

/// A bare string is both the key and the label.
impl ToListItem for &str {
    fn to_list_item(&self) -> Item { Item::new(*self, *self) }
}

impl ToListItem for String {
    fn to_list_item(&self) -> Item { Item::new(self.as_str(), self.as_str()) }
}

/// The two ways a widget can author its items. Both are normalized into a flat
/// `Vec<Item>` by [`ItemSource::into_items`] before the [`crate::ItemRegistry`] ever
/// sees them.
#[derive(Debug, Clone)]
pub enum ItemSource<T> {
    /// Explicitly authored child items.
    Children(Vec<Item>),
    /// A data array, plus a function that maps each row to an item.
    Data { rows: Vec<T>, mapper: fn(&T) -> Item },
}

impl<T: ToListItem> ItemSource<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        ItemSource::Data {
            rows,
            mapper: <T as ToListItem>::to_list_item,
        }
    }
}

impl<T> ItemSource<T> {
    pub fn into_items(self) -> Vec<Item> {
        match self {
            ItemSource::Children(items) => items,
            ItemSource::Data { rows, mapper } => rows.iter().map(mapper).collect(),
        }
    }
}
