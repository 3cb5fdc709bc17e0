// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The size-hint seam between a host's data and the placer.

use kurbo::Size;

use crate::ItemPath;

/// Supplies the intrinsic size of each item.
///
/// Only the aspect ratio of the returned size matters: `height / width` for
/// vertical waterfalls and `width / height` for horizontal ones. Both
/// dimensions must be strictly positive and finite; anything else is reported
/// as [`LayoutWarning::InvalidItemSize`](crate::LayoutWarning::InvalidItemSize)
/// and the item is skipped.
///
/// Closures `FnMut(ItemPath) -> Size` implement this trait; precomputed
/// section-major tables can be wrapped in a [`SizeTable`].
pub trait ItemSizes {
    /// Returns the size hint for the item at `path`.
    fn size_hint(&mut self, path: ItemPath) -> Size;
}

impl<F> ItemSizes for F
where
    F: FnMut(ItemPath) -> Size,
{
    fn size_hint(&mut self, path: ItemPath) -> Size {
        self(path)
    }
}

/// Section-major table of precomputed sizes.
///
/// `table[section][index]` is the hint for that item. Missing entries resolve
/// to [`Size::ZERO`], which the placer reports as an invalid size.
#[derive(Debug, Clone, Copy)]
pub struct SizeTable<'a, T>(pub &'a [T]);

impl<T: AsRef<[Size]>> ItemSizes for SizeTable<'_, T> {
    fn size_hint(&mut self, path: ItemPath) -> Size {
        self.0
            .get(path.section)
            .and_then(|sizes| sizes.as_ref().get(path.index))
            .copied()
            .unwrap_or(Size::ZERO)
    }
}
