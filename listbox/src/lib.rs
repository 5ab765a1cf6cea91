// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words listbox roving activedescendant

//! # Why R3BL?
//!
//! Please read the main
//! [README.md](https://github.com/r3bl-org/r3bl-open-core/blob/main/README.md) of the
//! `r3bl-open-core` monorepo and workspace to get a better understanding of the context
//! in which this crate is meant to exist.
//!
//! # Introduction
//!
//! `r3bl_listbox` is the headless engine that sits behind listbox, menu, and select
//! widgets. It does not paint anything. The rendering layer hands it an ordered list of
//! items, feeds it keyboard and pointer input, and reads back which item is active
//! (roving focus), which items are selected, and whether the hosting overlay should
//! close.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Listbox (facade)                                            │
//! │  - routes InputEvent to the collaborators below              │
//! │  - notifies ListboxObserver(s)                               │
//! │  - close-on-commit policy                                    │
//! └──────────────────────────────────────────────────────────────┘
//!     │               │                  │                  │
//!     ▼               ▼                  ▼                  ▼
//! ┌────────────┐ ┌──────────────────┐ ┌─────────────────┐ ┌─────────────────────┐
//! │ItemRegistry│ │ActiveIndex       │ │TypeAheadMatcher │ │SelectionController  │
//! │ordered keys│ │Controller        │ │search buffer +  │ │none/single/multiple │
//! │enabled keys│ │next/prev/first/  │ │inactivity timer │ │allow_empty guard    │
//! │            │ │last (clamped)    │ │                 │ │                     │
//! └────────────┘ └──────────────────┘ └─────────────────┘ └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use r3bl_listbox::*;
//!
//! let mut listbox = Listbox::new(
//!     ListboxConfig::default().with_selection_mode(SelectionMode::Single),
//! );
//! for label in ["cheetah", "crocodile", "elephant"] {
//!     listbox.mount_item(Item::new(label, label), RegisterPosition::End).unwrap();
//! }
//!
//! // Type "e" to jump to "elephant", then commit it with Enter.
//! listbox.handle_input_event(InputEvent::Keyboard(key_press! { @char 'e' }));
//! listbox.handle_input_event(InputEvent::Keyboard(key_press! { @special SpecialKey::Enter }));
//!
//! assert_eq!(listbox.active_key().map(ItemKey::as_str), Some("elephant"));
//! assert_eq!(listbox.selected_keys().len(), 1);
//! ```
//!
//! # Logging
//!
//! The engine logs through [`tracing`]. Rejected operations (duplicate keys, commits of
//! unknown or disabled keys, normalized configuration) are logged at `warn`. Use
//! [`init_tracing`] with a [`TracingConfig`] to get those logs on screen or in a file.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod input;
pub mod list_nav;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use input::*;
pub use list_nav::*;
