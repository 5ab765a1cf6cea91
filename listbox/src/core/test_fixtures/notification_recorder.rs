// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc};

use crate::{ItemKey, ListboxNotification, ListboxObserver};

/// A [`ListboxObserver`] that records every notification, for assertions in tests. Clone
/// it before handing it to [`crate::Listbox::add_observer`]: the clones share the same
/// log.
///
/// ```rust
/// use r3bl_listbox::*;
///
/// let recorder = NotificationRecorder::default();
/// let mut listbox = Listbox::new(ListboxConfig::default());
/// listbox.add_observer(recorder.clone());
/// listbox.mount_item(Item::new("a", "a"), RegisterPosition::End).unwrap();
/// listbox.handle_input_event(key_press!(@special SpecialKey::Down).into());
///
/// assert_eq!(
///     recorder.take(),
///     vec![ListboxNotification::ActiveChanged(Some("a".into()))]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationRecorder {
    pub notifications: Rc<RefCell<Vec<ListboxNotification>>>,
}

impl ListboxObserver for NotificationRecorder {
    fn on_notification(&mut self, notification: &ListboxNotification) {
        self.notifications.borrow_mut().push(notification.clone());
    }
}

impl NotificationRecorder {
    /// Drains everything recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<ListboxNotification> {
        std::mem::take(&mut *self.notifications.borrow_mut())
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<ListboxNotification> { self.notifications.borrow().clone() }

    /// Keys of every [`ListboxNotification::Action`] recorded so far, in order.
    #[must_use]
    pub fn actions(&self) -> Vec<ItemKey> {
        self.notifications
            .borrow()
            .iter()
            .filter_map(|it| match it {
                ListboxNotification::Action(key) => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn count_of(&self, predicate: impl Fn(&ListboxNotification) -> bool) -> usize {
        self.notifications.borrow().iter().filter(|it| predicate(it)).count()
    }
}
