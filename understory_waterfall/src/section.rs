// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section descriptors and item addressing.

/// Address of an item: its section and its index within that section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemPath {
    /// Section the item belongs to.
    pub section: usize,
    /// Position of the item within its section.
    pub index: usize,
}

impl ItemPath {
    /// Creates a new [`ItemPath`].
    #[must_use]
    pub const fn new(section: usize, index: usize) -> Self {
        Self { section, index }
    }
}

/// One section of a waterfall: a run of items with optional bands around it.
///
/// Band extents are measured along the scroll axis (a height for
/// [`WaterfallStyle::Vertical`](crate::WaterfallStyle::Vertical), a width for
/// [`WaterfallStyle::Horizontal`](crate::WaterfallStyle::Horizontal)).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Section {
    /// Number of items in this section.
    pub item_count: usize,
    /// Extent of the header band, if the section has one.
    pub header_extent: Option<f64>,
    /// Extent of the footer band, if the section has one.
    pub footer_extent: Option<f64>,
}

impl Section {
    /// Creates a section of `item_count` items without header or footer.
    #[must_use]
    pub const fn new(item_count: usize) -> Self {
        Self {
            item_count,
            header_extent: None,
            footer_extent: None,
        }
    }

    /// Adds a header band of the given scroll-axis extent.
    #[must_use]
    pub const fn with_header(mut self, extent: f64) -> Self {
        self.header_extent = Some(extent);
        self
    }

    /// Adds a footer band of the given scroll-axis extent.
    #[must_use]
    pub const fn with_footer(mut self, extent: f64) -> Self {
        self.footer_extent = Some(extent);
        self
    }

    /// Iterates the item paths of this section, given its section index.
    pub fn paths(&self, section: usize) -> impl Iterator<Item = ItemPath> + use<> {
        (0..self.item_count).map(move |index| ItemPath::new(section, index))
    }
}
