// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortest-track placement with section bands.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::axis::AxisInsets;
use crate::tracks::TrackState;
use crate::{
    ItemPath, ItemSizes, LayoutWarning, PlacedElement, Section, WaterfallConfig, WaterfallError,
    WaterfallLayout, WaterfallStyle,
};

/// Places items of one or more sections into a waterfall.
///
/// A placer owns nothing but its configuration; each call to
/// [`WaterfallPlacer::compute_layout`] runs an independent pass with its own
/// scratch track state, so one placer can serve any number of passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterfallPlacer {
    config: WaterfallConfig,
}

impl WaterfallPlacer {
    /// Creates a placer for `config`.
    #[must_use]
    pub const fn new(config: WaterfallConfig) -> Self {
        Self { config }
    }

    /// The configuration every pass uses.
    #[must_use]
    pub const fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    /// Replaces the configuration used by subsequent passes.
    pub fn set_config(&mut self, config: WaterfallConfig) {
        self.config = config;
    }

    /// Runs a full placement pass.
    ///
    /// `container_length` is the container's extent along the cross axis (its
    /// width for vertical waterfalls, its height for horizontal ones).
    ///
    /// Returns [`WaterfallError::InvalidConfiguration`] if `container_length`
    /// is not finite. Containers that are merely too small still produce a
    /// layout, with a [`LayoutWarning::DegenerateLayout`].
    pub fn compute_layout<S>(
        &self,
        sections: &[Section],
        sizes: &mut S,
        container_length: f64,
    ) -> Result<WaterfallLayout, WaterfallError>
    where
        S: ItemSizes + ?Sized,
    {
        if !container_length.is_finite() {
            return Err(WaterfallError::InvalidConfiguration {
                reason: "container length must be finite",
            });
        }

        let mut pass = Pass::new(&self.config, container_length);
        for (section_index, section) in sections.iter().enumerate() {
            pass.place_section(section_index, section, &mut *sizes);
        }
        Ok(pass.finish(container_length))
    }
}

/// Runs a full placement pass with `config`.
///
/// Equivalent to `WaterfallPlacer::new(*config).compute_layout(..)`.
pub fn compute_layout<S>(
    sections: &[Section],
    sizes: &mut S,
    config: &WaterfallConfig,
    container_length: f64,
) -> Result<WaterfallLayout, WaterfallError>
where
    S: ItemSizes + ?Sized,
{
    WaterfallPlacer::new(*config).compute_layout(sections, sizes, container_length)
}

/// Scratch state of one pass.
struct Pass {
    style: WaterfallStyle,
    insets: AxisInsets,
    track_gap: f64,
    cross_gap: f64,
    /// Cross length of every track; fixed for the whole pass.
    track_length: f64,
    /// Cross length of a band spanning all tracks.
    band_length: f64,
    tracks: TrackState,
    elements: Vec<PlacedElement>,
    warnings: Vec<LayoutWarning>,
}

impl Pass {
    fn new(config: &WaterfallConfig, container_length: f64) -> Self {
        let style = config.style();
        let insets = style.axis_insets(config.insets());
        let track_count = config.track_count();
        let track_gap = config.track_gap();
        let available = container_length - insets.cross_leading - insets.cross_trailing;

        let (count, gaps) = (track_count as f64, (track_count - 1) as f64);
        let raw_track_length = (available - gaps * track_gap) / count;

        let mut warnings = Vec::new();
        let track_length = if raw_track_length > 0.0 {
            raw_track_length
        } else {
            let warning = LayoutWarning::DegenerateLayout {
                track_length: raw_track_length,
            };
            log::warn!("{warning}");
            warnings.push(warning);
            0.0
        };

        let tracks = TrackState::new(config.tracks(), insets.scroll_leading);

        Self {
            style,
            insets,
            track_gap,
            cross_gap: config.cross_gap(),
            track_length,
            band_length: available.max(0.0),
            tracks,
            elements: Vec::new(),
            warnings,
        }
    }

    fn place_section<S>(&mut self, section_index: usize, section: &Section, sizes: &mut S)
    where
        S: ItemSizes + ?Sized,
    {
        if let Some(extent) = section.header_extent {
            // Headers clear every track but abut whatever precedes them.
            let offset = self.tracks.longest();
            let frame = self.band(offset, extent);
            self.elements.push(PlacedElement::Header {
                section: section_index,
                frame,
            });
        }

        for path in section.paths(section_index) {
            let hint = sizes.size_hint(path);
            self.place_item(path, hint);
        }

        if let Some(extent) = section.footer_extent {
            let offset = self.tracks.longest() + self.cross_gap;
            let frame = self.band(offset, extent);
            self.elements.push(PlacedElement::Footer {
                section: section_index,
                frame,
            });
        }
    }

    /// Frames a band starting at `offset` and levels all tracks to its end.
    fn band(&mut self, offset: f64, extent: f64) -> Rect {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        let frame = self.style.frame(
            self.insets.cross_leading,
            offset,
            self.band_length,
            extent,
        );
        self.tracks.resync(offset + extent);
        frame
    }

    fn place_item(&mut self, path: ItemPath, hint: Size) {
        let valid_hint = hint.width.is_finite()
            && hint.height.is_finite()
            && hint.width > 0.0
            && hint.height > 0.0;
        let scroll_length = self.track_length * self.style.aspect_ratio(hint);
        if !valid_hint || !scroll_length.is_finite() {
            let warning = LayoutWarning::InvalidItemSize { path, size: hint };
            log::warn!("{warning}");
            self.warnings.push(warning);
            return;
        }

        let (track, extent) = self.tracks.shortest();
        let scroll_offset = if self.tracks.is_at_origin(track) {
            extent
        } else {
            extent + self.cross_gap
        };
        let cross_offset =
            self.insets.cross_leading + track as f64 * (self.track_length + self.track_gap);

        let frame = self
            .style
            .frame(cross_offset, scroll_offset, self.track_length, scroll_length);
        log::trace!(
            "placed item {}:{} in track {track} at {frame:?}",
            path.section,
            path.index
        );
        self.elements.push(PlacedElement::Cell { path, frame });
        self.tracks.advance(track, scroll_offset + scroll_length);
    }

    fn finish(self, container_length: f64) -> WaterfallLayout {
        let content_extent = self.tracks.longest() + self.insets.scroll_trailing;
        log::debug!(
            "waterfall pass: {} elements, {} warnings, content extent {content_extent}",
            self.elements.len(),
            self.warnings.len()
        );
        WaterfallLayout::new(
            self.style,
            self.elements,
            content_extent,
            container_length,
            self.track_length,
            self.tracks.extents().to_vec(),
            self.warnings,
        )
    }
}
