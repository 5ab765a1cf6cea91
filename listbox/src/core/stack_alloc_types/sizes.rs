/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Be careful when adjusting these sizes. Smaller static allocation sizes are better
//! than larger ones. Item keys and type-ahead buffers are almost always short, so they
//! fit on the stack; anything longer is [`smallvec::SmallVec::spilled`] on the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Item keys, labels, and the type-ahead search buffer rarely exceed this.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Most lists that use keyboard navigation show a handful of items at a time.
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
