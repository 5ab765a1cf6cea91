// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod inactivity_timer;

// Re-export.
pub use common_result_and_error::*;
pub use inactivity_timer::*;
