/*
 *   Copyright (c) 2022-2025 R3BL LLC
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

/// Wrap the given expression in `Ok(..)`. It is just syntactic sugar that helps having
/// to write `Ok(..)` repeatedly at the end of event handlers.
///
/// ```rust
/// use r3bl_listbox::{ok, CommonResult, EventPropagation};
///
/// fn handle() -> CommonResult<EventPropagation> { ok!(EventPropagation::Consumed) }
/// assert_eq!(handle().unwrap(), EventPropagation::Consumed);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($it: expr) => {
        Ok($it)
    };
}

/// Drop in replacement for [`assert_eq!`] that renders a colored diff of `left` and
/// `right` when they differ. It requires `pretty_assertions` to be available where it is
/// expanded (it is a dev-dependency of this crate).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// A macro to create an [`crate::InlineString`] (which is allocated and returned) with a
/// specified format. No heap allocation happens as long as the result fits in
/// [`crate::DEFAULT_STRING_STORAGE_SIZE`] bytes.
///
/// ```rust
/// use r3bl_listbox::inline_string;
///
/// let it = inline_string!("{}-{}", "item", 1);
/// assert_eq!(it, "item-1");
/// ```
#[macro_export]
macro_rules! inline_string {
    (
        $($format:tt)*
    ) => {{
        let mut acc = $crate::InlineString::new();
        use std::fmt::Write as _;
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
