// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient plumbing shared by the rest of the crate: error and result types, small
//! stack allocated string and vec types, declarative macros, `tracing` setup, and test
//! fixtures.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod stack_alloc_types;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use log::*;
pub use stack_alloc_types::*;
pub use test_fixtures::*;
