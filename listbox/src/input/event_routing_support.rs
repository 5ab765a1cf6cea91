// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is the result of [`crate::Listbox::handle_input_event`]. It tells the hosting
/// widget whether the event was used, and if so, whether anything visible changed.
///
/// - [`EventPropagation::ConsumedRender`]: the event was handled and the active item, the
///   selection, or the open state changed. The host should re-render.
/// - [`EventPropagation::Consumed`]: the event was handled (eg: the search buffer grew,
///   or the cursor was already clamped at the boundary) but nothing visible changed.
/// - [`EventPropagation::Propagate`]: the listbox doesn't care about this event. The host
///   should pass it along (eg: `Tab` to move focus out of the widget).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
}

impl EventPropagation {
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        matches!(
            self,
            EventPropagation::ConsumedRender | EventPropagation::Consumed
        )
    }

    /// Combine the result of two handlers that both saw the same event. The "strongest"
    /// result wins.
    #[must_use]
    pub fn merge(self, other: EventPropagation) -> EventPropagation {
        match (self, other) {
            (EventPropagation::ConsumedRender, _) | (_, EventPropagation::ConsumedRender) => {
                EventPropagation::ConsumedRender
            }
            (EventPropagation::Consumed, _) | (_, EventPropagation::Consumed) => {
                EventPropagation::Consumed
            }
            _ => EventPropagation::Propagate,
        }
    }
}
