// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use crate::{DEFAULT_TYPE_AHEAD_TIMEOUT_MS, InactivityStatus, InactivityTimer, InlineString,
            ItemKey, ItemRegistry, inline_string};

const DEVELOPMENT_MODE: bool = cfg!(debug_assertions);

pub const DEFAULT_TYPE_AHEAD_TIMEOUT: Duration =
    Duration::from_millis(DEFAULT_TYPE_AHEAD_TIMEOUT_MS);

/// Identifies one scheduled expiry of the search buffer. Every keystroke bumps the
/// generation, so an expiry that was scheduled before the latest keystroke is stale and
/// gets ignored by [`TypeAheadMatcher::expire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTimeoutToken {
    pub generation: u64,
}

/// Resolves which item the user is "typing toward".
///
/// For each typed character `c`:
/// 1. Try `buffer + c` as a case-insensitive prefix of each enabled item's
///    [`crate::Item::text_value`], in registry order. On a hit the buffer grows.
/// 2. Otherwise restart with `c` alone. On a hit the buffer becomes `c`.
/// 3. Otherwise the buffer is emptied and nothing is returned.
///
/// The buffer is also dropped when the user pauses for longer than the timeout. That
/// happens either when the deferred expiry fires ([`Self::expire`]), or lazily when the
/// next keystroke arrives late.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAheadMatcher {
    buffer: InlineString,
    inactivity_timer: InactivityTimer,
    generation: u64,
}

impl Default for TypeAheadMatcher {
    fn default() -> Self { Self::new(DEFAULT_TYPE_AHEAD_TIMEOUT) }
}

impl TypeAheadMatcher {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            buffer: InlineString::new(),
            inactivity_timer: InactivityTimer::new(timeout),
            generation: 0,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &str { self.buffer.as_str() }

    #[must_use]
    pub fn timeout(&self) -> Duration { self.inactivity_timer.timeout }

    pub fn set_timeout(&mut self, timeout: Duration) { self.inactivity_timer.timeout = timeout; }

    /// `true` while a typing sequence is in progress, ie: the buffer isn't empty and the
    /// last keystroke is within the timeout.
    #[must_use]
    pub fn is_searching(&self, now: Instant) -> bool {
        !self.buffer.is_empty()
            && self.inactivity_timer.get_status(now) == InactivityStatus::Active
    }

    pub fn handle_char(
        &mut self,
        typed_char: char,
        now: Instant,
        registry: &ItemRegistry,
    ) -> Option<ItemKey> {
        if self.inactivity_timer.get_status(now) == InactivityStatus::Expired {
            self.buffer.clear();
        }
        self.inactivity_timer.record_activity(now);
        self.generation += 1;

        let mut candidate = self.buffer.clone();
        candidate.push(typed_char);

        let maybe_hit = find_first_prefix_match(registry, &candidate)
            .map(|key| (key, candidate))
            .or_else(|| {
                let restart = inline_string!("{typed_char}");
                find_first_prefix_match(registry, &restart).map(|key| (key, restart))
            });

        let return_it = match maybe_hit {
            Some((key, new_buffer)) => {
                self.buffer = new_buffer;
                Some(key)
            }
            None => {
                self.buffer.clear();
                None
            }
        };

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⌨️ type-ahead",
                typed_char = ?typed_char,
                buffer = %self.buffer,
                maybe_hit = ?return_it.as_ref().map(ItemKey::as_str),
            );
        });

        return_it
    }

    /// Returns the expiry to schedule after the latest keystroke. [None] when the buffer
    /// is already empty.
    #[must_use]
    pub fn pending_timeout(&self) -> Option<(SearchTimeoutToken, Duration)> {
        if self.buffer.is_empty() {
            return None;
        }
        Some((
            SearchTimeoutToken {
                generation: self.generation,
            },
            self.inactivity_timer.timeout,
        ))
    }

    /// Clears the buffer if `token` belongs to the latest keystroke. Returns `false` for
    /// stale tokens. Never touches anything but the buffer.
    pub fn expire(&mut self, token: SearchTimeoutToken) -> bool {
        if token.generation != self.generation {
            return false;
        }
        self.buffer.clear();
        self.inactivity_timer.reset();
        true
    }

    /// Drops the typing sequence, and invalidates any scheduled expiry.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.inactivity_timer.reset();
        self.generation += 1;
    }
}

fn find_first_prefix_match(registry: &ItemRegistry, prefix: &str) -> Option<ItemKey> {
    registry
        .enabled_items()
        .find(|it| starts_with_ignore_case(it.text_value(), prefix))
        .map(|it| it.key.clone())
}

/// Simple case folding via [`char::to_lowercase`]. No locale aware collation.
#[must_use]
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|prefix_char| text_chars.next() == Some(prefix_char))
}
