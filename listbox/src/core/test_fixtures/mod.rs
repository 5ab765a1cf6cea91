// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod notification_recorder;

// Re-export.
pub use notification_recorder::*;
