// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between axis-relative geometry and x/y geometry.
//!
//! The placer works in two coordinates:
//!
//! - the *cross* axis, along which tracks sit side by side, and
//! - the *scroll* axis, along which each track grows.
//!
//! For [`WaterfallStyle::Vertical`] the cross axis is x and the scroll axis is
//! y; [`WaterfallStyle::Horizontal`] swaps them. Everything orientation
//! specific goes through this module so the placement math exists once.

use kurbo::{Insets, Rect, Size};

use crate::WaterfallStyle;

/// Insets resolved onto the cross and scroll axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisInsets {
    pub(crate) cross_leading: f64,
    pub(crate) cross_trailing: f64,
    pub(crate) scroll_leading: f64,
    pub(crate) scroll_trailing: f64,
}

impl WaterfallStyle {
    /// Splits `insets` into cross-axis and scroll-axis components.
    pub(crate) const fn axis_insets(self, insets: Insets) -> AxisInsets {
        match self {
            Self::Vertical => AxisInsets {
                cross_leading: insets.x0,
                cross_trailing: insets.x1,
                scroll_leading: insets.y0,
                scroll_trailing: insets.y1,
            },
            Self::Horizontal => AxisInsets {
                cross_leading: insets.y0,
                cross_trailing: insets.y1,
                scroll_leading: insets.x0,
                scroll_trailing: insets.x1,
            },
        }
    }

    /// Ratio of scroll-axis length to cross-axis length for a size hint.
    pub(crate) fn aspect_ratio(self, hint: Size) -> f64 {
        match self {
            Self::Vertical => hint.height / hint.width,
            Self::Horizontal => hint.width / hint.height,
        }
    }

    /// Builds an x/y frame from axis-relative offsets and lengths.
    pub(crate) fn frame(
        self,
        cross_offset: f64,
        scroll_offset: f64,
        cross_length: f64,
        scroll_length: f64,
    ) -> Rect {
        match self {
            Self::Vertical => Rect::new(
                cross_offset,
                scroll_offset,
                cross_offset + cross_length,
                scroll_offset + scroll_length,
            ),
            Self::Horizontal => Rect::new(
                scroll_offset,
                cross_offset,
                scroll_offset + scroll_length,
                cross_offset + cross_length,
            ),
        }
    }

    /// Start and end of `rect` along the scroll axis.
    pub(crate) fn scroll_span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Vertical => (rect.y0, rect.y1),
            Self::Horizontal => (rect.x0, rect.x1),
        }
    }

    /// Builds a size from a cross-axis length and a scroll-axis length.
    pub(crate) fn size(self, cross_length: f64, scroll_length: f64) -> Size {
        match self {
            Self::Vertical => Size::new(cross_length, scroll_length),
            Self::Horizontal => Size::new(scroll_length, cross_length),
        }
    }
}
