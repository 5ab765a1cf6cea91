// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Backend agnostic input model. Keyboard input arrives as [`KeyPress`] (converted from
//! `crossterm` key events), and pointer input arrives already normalized as
//! [`InputEvent::Activate`] or [`InputEvent::Hover`].

// Attach sources.
pub mod event_routing_support;
pub mod input_event;
pub mod keypress;
pub mod modifier_keys_mask;

// Re-export.
pub use event_routing_support::*;
pub use input_event::*;
pub use keypress::*;
pub use modifier_keys_mask::*;
