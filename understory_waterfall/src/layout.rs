// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of a placement pass.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size};

use crate::buckets::ScrollBuckets;
use crate::{ItemPath, LayoutWarning, WaterfallStyle};

/// Which kind of element a [`PlacedElement`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// An item placed into a track.
    Cell,
    /// A section header band.
    Header,
    /// A section footer band.
    Footer,
}

/// One positioned element of a waterfall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacedElement {
    /// An item placed into the shortest track.
    Cell {
        /// Which item this is.
        path: ItemPath,
        /// Frame in content coordinates.
        frame: Rect,
    },
    /// A band spanning all tracks before a section's items.
    Header {
        /// Section the band belongs to.
        section: usize,
        /// Frame in content coordinates.
        frame: Rect,
    },
    /// A band spanning all tracks after a section's items.
    Footer {
        /// Section the band belongs to.
        section: usize,
        /// Frame in content coordinates.
        frame: Rect,
    },
}

impl PlacedElement {
    /// Frame in content coordinates.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        match *self {
            Self::Cell { frame, .. } | Self::Header { frame, .. } | Self::Footer { frame, .. } => {
                frame
            }
        }
    }

    /// The kind of element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Cell { .. } => ElementKind::Cell,
            Self::Header { .. } => ElementKind::Header,
            Self::Footer { .. } => ElementKind::Footer,
        }
    }

    /// The section the element belongs to.
    #[must_use]
    pub const fn section(&self) -> usize {
        match *self {
            Self::Cell { path, .. } => path.section,
            Self::Header { section, .. } | Self::Footer { section, .. } => section,
        }
    }

    /// The item path, for cells.
    #[must_use]
    pub const fn path(&self) -> Option<ItemPath> {
        match *self {
            Self::Cell { path, .. } => Some(path),
            Self::Header { .. } | Self::Footer { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ElementKey {
    Cell(ItemPath),
    Header(usize),
    Footer(usize),
}

impl ElementKey {
    const fn of(element: &PlacedElement) -> Self {
        match *element {
            PlacedElement::Cell { path, .. } => Self::Cell(path),
            PlacedElement::Header { section, .. } => Self::Header(section),
            PlacedElement::Footer { section, .. } => Self::Footer(section),
        }
    }
}

/// Result of one placement pass.
///
/// Elements are in traversal order: for each section, its header, then its
/// items by ascending index, then its footer. Skipped items (see
/// [`LayoutWarning::InvalidItemSize`]) are absent.
#[derive(Debug)]
pub struct WaterfallLayout {
    style: WaterfallStyle,
    elements: Vec<PlacedElement>,
    content_extent: f64,
    container_length: f64,
    track_length: f64,
    track_extents: Vec<f64>,
    warnings: Vec<LayoutWarning>,
    lookup: HashMap<ElementKey, u32>,
    buckets: ScrollBuckets,
}

impl WaterfallLayout {
    pub(crate) fn new(
        style: WaterfallStyle,
        elements: Vec<PlacedElement>,
        content_extent: f64,
        container_length: f64,
        track_length: f64,
        track_extents: Vec<f64>,
        warnings: Vec<LayoutWarning>,
    ) -> Self {
        let mut lookup = HashMap::with_capacity(elements.len());
        let mut buckets = ScrollBuckets::new(content_extent, elements.len());
        for (slot, element) in (0_u32..).zip(elements.iter()) {
            lookup.insert(ElementKey::of(element), slot);
            let (start, end) = style.scroll_span(element.frame());
            buckets.insert(slot, start, end);
        }
        Self {
            style,
            elements,
            content_extent,
            container_length,
            track_length,
            track_extents,
            warnings,
            lookup,
            buckets,
        }
    }

    /// Orientation the layout was computed for.
    #[must_use]
    pub const fn style(&self) -> WaterfallStyle {
        self.style
    }

    /// All placed elements in traversal order.
    #[must_use]
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    /// Number of placed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Length of the scrollable content: the longest track plus the trailing
    /// scroll-axis inset.
    #[must_use]
    pub const fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Content size: `content_extent` along the scroll axis and the container
    /// length along the cross axis.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.style.size(self.container_length, self.content_extent)
    }

    /// Cross-axis length of every track (zero when the layout was degenerate).
    #[must_use]
    pub const fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Track extents at the end of the pass.
    #[must_use]
    pub fn track_extents(&self) -> &[f64] {
        &self.track_extents
    }

    /// Conditions recovered from during the pass.
    #[must_use]
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    fn frame_of(&self, key: ElementKey) -> Option<Rect> {
        let slot = *self.lookup.get(&key)?;
        self.elements.get(slot as usize).map(PlacedElement::frame)
    }

    /// Frame of the item at `path`, if it was placed.
    #[must_use]
    pub fn cell_frame(&self, path: ItemPath) -> Option<Rect> {
        self.frame_of(ElementKey::Cell(path))
    }

    /// Frame of `section`'s header, if it has one.
    #[must_use]
    pub fn header_frame(&self, section: usize) -> Option<Rect> {
        self.frame_of(ElementKey::Header(section))
    }

    /// Frame of `section`'s footer, if it has one.
    #[must_use]
    pub fn footer_frame(&self, section: usize) -> Option<Rect> {
        self.frame_of(ElementKey::Footer(section))
    }

    /// Elements whose frame overlaps `rect`, in traversal order.
    ///
    /// Edges count as overlapping, so an element that merely touches the
    /// viewport is included.
    pub fn elements_in(&self, rect: Rect) -> impl Iterator<Item = &PlacedElement> + '_ {
        let rect = rect.abs();
        let (start, end) = self.style.scroll_span(rect);
        self.buckets
            .candidates(start, end)
            .into_iter()
            .filter_map(move |slot| self.elements.get(slot as usize))
            .filter(move |element| overlaps(element.frame(), rect))
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}
