// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The listbox engine: item registry, roving focus, type-ahead, selection, and the
//! [`Listbox`] facade that wires them to input.

// Attach sources.
pub mod active_index;
pub mod item;
pub mod item_registry;
pub mod listbox_config;
pub mod listbox_facade;
pub mod listbox_observer;
pub mod listbox_render_state;
pub mod search_timer;
pub mod selection;
pub mod type_ahead;

// Re-export.
pub use active_index::*;
pub use item::*;
pub use item_registry::*;
pub use listbox_config::*;
pub use listbox_facade::*;
pub use listbox_observer::*;
pub use listbox_render_state::*;
pub use search_timer::*;
pub use selection::*;
pub use type_ahead::*;

#[cfg(test)]
mod test_listbox;
