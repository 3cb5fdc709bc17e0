// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waterfall configuration: track count, orientation, gaps, and insets.

use core::num::NonZeroUsize;

use kurbo::Insets;

use crate::WaterfallError;

/// Orientation of a waterfall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaterfallStyle {
    /// Items flow into columns; content scrolls vertically.
    #[default]
    Vertical,
    /// Items flow into rows; content scrolls horizontally.
    Horizontal,
}

/// Validated configuration for one or more placement passes.
///
/// Every option has an explicit default:
///
/// | option        | default      |
/// |---------------|--------------|
/// | `style`       | `Vertical`   |
/// | `track_gap`   | `10.0`       |
/// | `cross_gap`   | `10.0`       |
/// | `insets`      | `10.0` each  |
///
/// The track count has no default and must be supplied to [`WaterfallConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterfallConfig {
    track_count: NonZeroUsize,
    style: WaterfallStyle,
    track_gap: f64,
    cross_gap: f64,
    insets: Insets,
}

impl WaterfallConfig {
    /// Gap used between tracks and between successive items unless overridden.
    pub const DEFAULT_GAP: f64 = 10.0;
    /// Inset used on every side unless overridden.
    pub const DEFAULT_INSET: f64 = 10.0;

    /// Creates a configuration with `track_count` tracks and default options.
    ///
    /// Returns [`WaterfallError::InvalidConfiguration`] if `track_count` is zero.
    pub fn new(track_count: usize) -> Result<Self, WaterfallError> {
        let track_count =
            NonZeroUsize::new(track_count).ok_or(WaterfallError::InvalidConfiguration {
                reason: "track count must be at least 1",
            })?;
        Ok(Self::with_track_count(track_count))
    }

    /// Creates a configuration from an already non-zero track count.
    #[must_use]
    pub fn with_track_count(track_count: NonZeroUsize) -> Self {
        Self {
            track_count,
            style: WaterfallStyle::Vertical,
            track_gap: Self::DEFAULT_GAP,
            cross_gap: Self::DEFAULT_GAP,
            insets: Insets::uniform(Self::DEFAULT_INSET),
        }
    }

    /// Sets the orientation.
    #[must_use]
    pub const fn with_style(mut self, style: WaterfallStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the spacing between adjacent tracks (along the cross axis).
    pub fn with_track_gap(mut self, gap: f64) -> Result<Self, WaterfallError> {
        self.track_gap = non_negative(gap, "track gap must be finite and non-negative")?;
        Ok(self)
    }

    /// Sets the spacing between successive items in one track (along the scroll axis).
    ///
    /// The same gap separates the last item of a section from its footer.
    pub fn with_cross_gap(mut self, gap: f64) -> Result<Self, WaterfallError> {
        self.cross_gap = non_negative(gap, "cross gap must be finite and non-negative")?;
        Ok(self)
    }

    /// Sets the content insets (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub fn with_insets(mut self, insets: Insets) -> Result<Self, WaterfallError> {
        const REASON: &str = "insets must be finite and non-negative";
        self.insets = Insets::new(
            non_negative(insets.x0, REASON)?,
            non_negative(insets.y0, REASON)?,
            non_negative(insets.x1, REASON)?,
            non_negative(insets.y1, REASON)?,
        );
        Ok(self)
    }

    /// Number of tracks.
    #[must_use]
    pub const fn track_count(&self) -> usize {
        self.track_count.get()
    }

    pub(crate) const fn tracks(&self) -> NonZeroUsize {
        self.track_count
    }

    /// Orientation.
    #[must_use]
    pub const fn style(&self) -> WaterfallStyle {
        self.style
    }

    /// Spacing between adjacent tracks.
    #[must_use]
    pub const fn track_gap(&self) -> f64 {
        self.track_gap
    }

    /// Spacing between successive items of one track.
    #[must_use]
    pub const fn cross_gap(&self) -> f64 {
        self.cross_gap
    }

    /// Content insets.
    #[must_use]
    pub const fn insets(&self) -> Insets {
        self.insets
    }
}

fn non_negative(value: f64, reason: &'static str) -> Result<f64, WaterfallError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WaterfallError::InvalidConfiguration { reason })
    }
}
