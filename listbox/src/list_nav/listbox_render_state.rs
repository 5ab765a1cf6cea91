// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ItemKey;

/// Snapshot of one mounted item, for the rendering layer. The flags map onto the
/// `data-active`, `data-selected`, and disabled attributes of the rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRenderState {
    pub key: ItemKey,
    pub label: String,
    pub is_active: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

/// One `<option>` of the native form control that mirrors the selection for assistive
/// technology. It carries no logic of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOption {
    pub value: ItemKey,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}
