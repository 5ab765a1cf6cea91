// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

use crate::{InputEvent, Listbox, SearchTimeoutToken};

/// Deferred expiry of the type-ahead search, for hosts that run a tokio event loop.
///
/// After handling each event, call [`Self::sync_with`]. When a keystroke produced a new
/// [`SearchTimeoutToken`], the previous timer is aborted and a new one is spawned. When
/// it fires, [`InputEvent::SearchTimeout`] is sent on the channel, and the host feeds it
/// back into [`Listbox::handle_input_event`]. Timers coalesce, they never stack.
///
/// ```rust
/// use r3bl_listbox::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
/// let mut timer = SearchTimeoutTimer::new(sender);
/// let mut listbox = Listbox::new(ListboxConfig::default());
/// listbox.mount_item(Item::new("a", "apple"), RegisterPosition::End).unwrap();
///
/// listbox.handle_input_event(key_press!(@char 'a').into());
/// timer.sync_with(&listbox);
///
/// if let Some(event) = receiver.recv().await {
///     listbox.handle_input_event(event);
/// }
/// assert_eq!(listbox.search_buffer(), "");
/// # }
/// ```
#[derive(Debug)]
pub struct SearchTimeoutTimer {
    sender: UnboundedSender<InputEvent>,
    maybe_pending: Option<(SearchTimeoutToken, JoinHandle<()>)>,
}

impl SearchTimeoutTimer {
    #[must_use]
    pub fn new(sender: UnboundedSender<InputEvent>) -> Self {
        Self {
            sender,
            maybe_pending: None,
        }
    }

    /// Schedules (or cancels) the expiry to match what `listbox` currently wants.
    pub fn sync_with(&mut self, listbox: &Listbox) {
        match listbox.pending_search_timeout() {
            Some((token, after)) => {
                let already_scheduled = self
                    .maybe_pending
                    .as_ref()
                    .is_some_and(|(pending_token, _)| *pending_token == token);
                if !already_scheduled {
                    self.schedule(token, after);
                }
            }
            None => self.cancel(),
        }
    }

    /// Aborts the pending timer, if any, and starts a new one. Needs a tokio runtime.
    /// Without one, a warning is logged and nothing is scheduled.
    pub fn schedule(&mut self, token: SearchTimeoutToken, after: Duration) {
        self.cancel();

        let Ok(runtime_handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(message = "⏰ No tokio runtime, search timeout not scheduled");
            return;
        };

        let sender = self.sender.clone();
        let join_handle = runtime_handle.spawn(async move {
            tokio::time::sleep(after).await;
            if sender.send(InputEvent::SearchTimeout(token)).is_err() {
                // The receiver is gone, the host is shutting down.
                tracing::debug!(message = "⏰ Search timeout dropped", token = ?token);
            }
        });

        self.maybe_pending = Some((token, join_handle));
    }

    pub fn cancel(&mut self) {
        if let Some((_, join_handle)) = self.maybe_pending.take() {
            join_handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.maybe_pending
            .as_ref()
            .is_some_and(|(_, join_handle)| !join_handle.is_finished())
    }
}

impl Drop for SearchTimeoutTimer {
    fn drop(&mut self) { self.cancel(); }
}
