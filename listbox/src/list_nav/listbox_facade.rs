// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          time::{Duration, Instant}};

use crate::{ActiveIndexController, CommitOutcome, EventPropagation, InputEvent, Item,
            ItemKey, ItemPatch, ItemRegistry, ItemRenderState, ItemSource, Key,
            KeyPress, ListboxConfig, ListboxError, ListboxNotification, ListboxObserver,
            NativeOption, NavCommand, RegisterPosition, SearchTimeoutToken,
            SelectedKeys, SelectionController, SelectionMode, SpecialKey, TypeAheadMatcher};

const DEVELOPMENT_MODE: bool = cfg!(debug_assertions);

/// The public surface that list, menu, and select widgets use. It owns one of each
/// collaborator ([`ItemRegistry`], [`ActiveIndexController`], [`TypeAheadMatcher`],
/// [`SelectionController`]) and routes input to them.
///
/// # Key bindings
///
/// | Key                  | Effect                                                    |
/// |----------------------|-----------------------------------------------------------|
/// | `Down` / `Up`        | next / previous enabled item (clamped)                    |
/// | `PageUp` / `Home`    | first enabled item                                        |
/// | `PageDown` / `End`   | last enabled item                                         |
/// | `Enter`              | commit the active item                                    |
/// | `Space`              | commit the active item, unless a search is in progress    |
/// | printable characters | type-ahead search                                         |
/// | `Esc`                | drop the search, request close                            |
/// | `Ctrl` / `Alt` + any | not handled, [`EventPropagation::Propagate`]              |
///
/// # Close on commit
///
/// A commit that changes the selection (or fires an action in
/// [`SelectionMode::None`]) is followed by [`ListboxNotification::RequestClose`],
/// except in [`SelectionMode::Multiple`], where the overlay stays open so the user can
/// keep picking.
///
/// # Errors
///
/// Nothing here panics or returns an error for bad input at runtime. Unknown or disabled
/// keys, duplicate mounts, etc. are logged at `warn` and ignored. Lifecycle methods also
/// return the [`ListboxError`] so the host can react if it wants to.
pub struct Listbox {
    config: ListboxConfig,
    registry: ItemRegistry,
    active: ActiveIndexController,
    type_ahead: TypeAheadMatcher,
    selection: SelectionController,
    observers: Vec<Box<dyn ListboxObserver>>,
}

impl Debug for Listbox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listbox")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("type_ahead", &self.type_ahead)
            .field("selection", &self.selection)
            .field("observers.len", &self.observers.len())
            .finish()
    }
}

impl Listbox {
    /// A config that fails [`ListboxConfig::validate`] is not rejected. The invalid
    /// values are replaced with their defaults, and a warning is logged.
    #[must_use]
    pub fn new(config: ListboxConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "⚙️ Using default timeout", error = %error);
                ListboxConfig {
                    type_ahead_timeout_ms: ListboxConfig::default().type_ahead_timeout_ms,
                    ..config
                }
            }
        };

        Self {
            registry: ItemRegistry::new(),
            active: ActiveIndexController::new(),
            type_ahead: TypeAheadMatcher::new(config.type_ahead_timeout()),
            selection: SelectionController::new(
                config.selection_mode,
                config.allow_empty,
                SelectedKeys::new(),
            ),
            observers: vec![],
            config,
        }
    }

    /// Initial selection. It is normalized for the selection mode, eg: only the first
    /// key is kept in [`SelectionMode::Single`].
    #[must_use]
    pub fn with_initial_selection<K: Into<ItemKey>>(
        mut self,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        self.selection.set_selected_keys(keys.into_iter().map(Into::into));
        self
    }

    pub fn add_observer(&mut self, observer: impl ListboxObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn config(&self) -> &ListboxConfig { &self.config }

    #[must_use]
    pub fn registry(&self) -> &ItemRegistry { &self.registry }

    #[must_use]
    pub fn active_key(&self) -> Option<&ItemKey> { self.active.active_key() }

    #[must_use]
    pub fn selected_keys(&self) -> &[ItemKey] { self.selection.selected_keys() }

    #[must_use]
    pub fn is_selected(&self, key: &ItemKey) -> bool { self.selection.is_selected(key) }

    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode { self.selection.mode() }

    #[must_use]
    pub fn search_buffer(&self) -> &str { self.type_ahead.buffer() }
}

/// Lifecycle. Every mutation re-validates the active item.
impl Listbox {
    /// # Errors
    ///
    /// See [`ItemRegistry::register`]. The registry is unchanged on error.
    pub fn mount_item(
        &mut self,
        item: Item,
        position: RegisterPosition,
    ) -> Result<(), ListboxError> {
        let result = self.registry.register(item, position).map(|_| ());
        log_rejection("mount_item", &result);
        result
    }

    pub fn unmount_item(&mut self, key: &ItemKey) -> Option<Item> {
        let maybe_removed = self.registry.unregister(key);
        self.revalidate_active();
        maybe_removed
    }

    /// # Errors
    ///
    /// [`ListboxError::UnknownKey`] if the key is not mounted.
    pub fn update_item(&mut self, key: &ItemKey, patch: &ItemPatch) -> Result<(), ListboxError> {
        let result = self.registry.update(key, patch);
        log_rejection("update_item", &result);
        self.revalidate_active();
        result
    }

    /// Make the mounted items match `source` exactly (stale keys are removed, new keys
    /// are inserted, everything is put in `source` order).
    ///
    /// # Errors
    ///
    /// [`ListboxError::DuplicateKey`] if `source` repeats a key. Nothing changes in that
    /// case.
    pub fn sync_items<T>(&mut self, source: ItemSource<T>) -> Result<(), ListboxError> {
        let result = self.registry.sync(source.into_items());
        log_rejection("sync_items", &result);
        self.revalidate_active();
        result.map(|_| ())
    }

    /// The owning overlay closed. Clears the active item and the search. The selection
    /// is kept.
    pub fn close(&mut self) {
        self.type_ahead.clear();
        if self.active.clear() {
            self.notify(&ListboxNotification::ActiveChanged(None));
        }
    }
}

/// Reconfiguration.
impl Listbox {
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.selection_mode = mode;
        if let Some(keys) = self.selection.set_mode(mode) {
            self.notify(&ListboxNotification::SelectionChanged(keys));
        }
    }

    pub fn set_allow_empty(&mut self, allow_empty: bool) {
        self.config.allow_empty = allow_empty;
        self.selection.set_allow_empty(allow_empty);
    }

    pub fn set_type_ahead_timeout(&mut self, timeout: Duration) {
        // The config stores whole milliseconds, so anything under 1ms would read back as 0.
        if timeout.as_millis() == 0 {
            tracing::warn!(
                message = "⚙️ Ignoring type-ahead timeout shorter than 1ms",
                timeout = ?timeout
            );
            return;
        }
        self.config = self.config.clone().with_type_ahead_timeout(timeout);
        self.type_ahead.set_timeout(timeout);
    }

    /// Controlled selection pushed down by the host. Fires
    /// [`ListboxNotification::SelectionChanged`] only if the (normalized) selection
    /// differs. Never requests close.
    pub fn set_selected_keys<K: Into<ItemKey>>(&mut self, keys: impl IntoIterator<Item = K>) {
        if let Some(keys) = self
            .selection
            .set_selected_keys(keys.into_iter().map(Into::into))
        {
            self.notify(&ListboxNotification::SelectionChanged(keys));
        }
    }
}

/// Input.
impl Listbox {
    pub fn handle_input_event(&mut self, input_event: InputEvent) -> EventPropagation {
        self.handle_input_event_at(input_event, Instant::now())
    }

    /// Same as [`Self::handle_input_event`], with an explicit clock. The type-ahead
    /// timeout is judged against `now`.
    pub fn handle_input_event_at(
        &mut self,
        input_event: InputEvent,
        now: Instant,
    ) -> EventPropagation {
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "📥 listbox input", input_event = ?input_event);
        });

        // The active item may have unmounted since the last event.
        let revalidated = if self.revalidate_active() {
            EventPropagation::ConsumedRender
        } else {
            EventPropagation::Propagate
        };

        let return_it = match input_event {
            InputEvent::Keyboard(key_press) => self.handle_key_press(key_press, now),
            InputEvent::Activate { key } => self.handle_activate(&key),
            InputEvent::Hover { key } => {
                if self.config.activate_on_hover {
                    self.set_active(&key)
                } else {
                    EventPropagation::Propagate
                }
            }
            InputEvent::SearchTimeout(token) => {
                self.type_ahead.expire(token);
                EventPropagation::Consumed
            }
        };

        revalidated.merge(return_it)
    }

    pub fn navigate(&mut self, command: NavCommand) -> EventPropagation {
        let changed = self.active.navigate(command, &self.registry);
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🧭 navigate",
                command = %command,
                active = ?self.active.active_key().map(ItemKey::as_str),
            );
        });
        self.after_active_change(changed)
    }

    /// Commit the active item. Does nothing if no item is active.
    pub fn commit_active(&mut self) -> EventPropagation {
        match self.active.active_key().cloned() {
            Some(key) => self.commit(&key),
            None => EventPropagation::Consumed,
        }
    }

    /// Commit `key` without moving the active item.
    pub fn commit(&mut self, key: &ItemKey) -> EventPropagation {
        match self.selection.commit(key, &self.registry) {
            CommitOutcome::Rejected(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "🚫 Commit rejected", key = %key, error = %error);
                EventPropagation::Consumed
            }
            CommitOutcome::Unchanged => EventPropagation::Consumed,
            CommitOutcome::Action(key) => {
                self.notify(&ListboxNotification::Action(key));
                self.request_close_after_commit();
                EventPropagation::ConsumedRender
            }
            CommitOutcome::SelectionChanged(keys) => {
                self.notify(&ListboxNotification::SelectionChanged(keys));
                self.request_close_after_commit();
                EventPropagation::ConsumedRender
            }
        }
    }

    fn handle_key_press(&mut self, key_press: KeyPress, now: Instant) -> EventPropagation {
        if key_press.maybe_mask().is_some_and(|mask| mask.is_shortcut()) {
            return EventPropagation::Propagate;
        }

        match key_press.key() {
            Key::SpecialKey(SpecialKey::Down) => self.navigate(NavCommand::Next),
            Key::SpecialKey(SpecialKey::Up) => self.navigate(NavCommand::Previous),
            Key::SpecialKey(SpecialKey::PageUp | SpecialKey::Home) => {
                self.navigate(NavCommand::First)
            }
            Key::SpecialKey(SpecialKey::PageDown | SpecialKey::End) => {
                self.navigate(NavCommand::Last)
            }
            Key::SpecialKey(SpecialKey::Enter) => self.commit_active(),
            Key::SpecialKey(SpecialKey::Esc) => {
                self.type_ahead.clear();
                self.notify(&ListboxNotification::RequestClose);
                EventPropagation::ConsumedRender
            }
            Key::Character(' ') if !self.type_ahead.is_searching(now) => self.commit_active(),
            Key::Character(typed_char) if !typed_char.is_control() => {
                match self.type_ahead.handle_char(typed_char, now, &self.registry) {
                    Some(key) => self.set_active(&key),
                    None => EventPropagation::Consumed,
                }
            }
            _ => EventPropagation::Propagate,
        }
    }

    /// Pointer activation. The item also becomes active, for visual consistency.
    fn handle_activate(&mut self, key: &ItemKey) -> EventPropagation {
        let moved = self.set_active(key);
        moved.merge(self.commit(key))
    }

    fn set_active(&mut self, key: &ItemKey) -> EventPropagation {
        let changed = self.active.set_active(key, &self.registry);
        self.after_active_change(changed)
    }

    fn after_active_change(&mut self, changed: bool) -> EventPropagation {
        if !changed {
            return EventPropagation::Consumed;
        }
        let maybe_active = self.active.active_key().cloned();
        self.notify(&ListboxNotification::ActiveChanged(maybe_active));
        EventPropagation::ConsumedRender
    }

    fn request_close_after_commit(&mut self) {
        if self.selection.mode() != SelectionMode::Multiple {
            self.notify(&ListboxNotification::RequestClose);
        }
    }

    fn revalidate_active(&mut self) -> bool {
        let cleared = self.active.revalidate(&self.registry);
        if cleared {
            self.notify(&ListboxNotification::ActiveChanged(None));
        }
        cleared
    }

    fn notify(&mut self, notification: &ListboxNotification) {
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "📣 notify", notification = ?notification);
        });
        for observer in &mut self.observers {
            observer.on_notification(notification);
        }
    }
}

fn log_rejection<T>(operation: &str, result: &Result<T, ListboxError>) {
    if let Err(error) = result {
        // % is Display, ? is Debug.
        tracing::warn!(message = "🚫 Rejected", operation = %operation, error = %error);
    }
}

/// Outputs for the rendering layer.
impl Listbox {
    /// One entry per mounted item, in registry order.
    #[must_use]
    pub fn render_states(&self) -> Vec<ItemRenderState> {
        self.registry
            .iter()
            .map(|item| ItemRenderState {
                key: item.key.clone(),
                label: item.label.clone(),
                is_active: self.active.active_key() == Some(&item.key),
                is_selected: self.selection.is_selected(&item.key),
                is_disabled: item.disabled,
            })
            .collect()
    }

    /// The options of the native fallback control.
    #[must_use]
    pub fn native_options(&self) -> Vec<NativeOption> {
        self.registry
            .iter()
            .map(|item| NativeOption {
                value: item.key.clone(),
                label: item.label.clone(),
                selected: self.selection.is_selected(&item.key),
                disabled: item.disabled,
            })
            .collect()
    }

    #[must_use]
    pub fn is_native_multiple(&self) -> bool {
        self.selection.mode() == SelectionMode::Multiple
    }

    /// After each keystroke, the host schedules a deferred
    /// [`InputEvent::SearchTimeout`] with this token (see
    /// [`crate::SearchTimeoutTimer`]). [None] when no search is in progress.
    #[must_use]
    pub fn pending_search_timeout(&self) -> Option<(SearchTimeoutToken, Duration)> {
        self.type_ahead.pending_timeout()
    }
}
