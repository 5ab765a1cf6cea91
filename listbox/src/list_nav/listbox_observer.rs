// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ItemKey, SelectedKeys};

/// Outputs of a [`crate::Listbox`], delivered in order to every registered
/// [`ListboxObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListboxNotification {
    /// The item with roving focus changed. [None] means no item is active.
    ActiveChanged(Option<ItemKey>),
    /// The selection changed. Carries the whole new selection, not a delta.
    SelectionChanged(SelectedKeys),
    /// An item was committed in [`crate::SelectionMode::None`].
    Action(ItemKey),
    /// The overlay hosting the listbox should close. The listbox never closes anything
    /// by itself.
    RequestClose,
}

pub trait ListboxObserver {
    fn on_notification(&mut self, notification: &ListboxNotification);
}

/// Any closure can observe a listbox.
///
/// ```rust
/// use r3bl_listbox::*;
///
/// let mut listbox = Listbox::new(ListboxConfig::default());
/// listbox.add_observer(|it: &ListboxNotification| println!("{it:?}"));
/// ```
impl<F> ListboxObserver for F
where
    F: FnMut(&ListboxNotification),
{
    fn on_notification(&mut self, notification: &ListboxNotification) { self(notification) }
}
