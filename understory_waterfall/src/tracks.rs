// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-track fill state for a single placement pass.

use core::num::NonZeroUsize;

use smallvec::SmallVec;

/// How far each track has been filled along the scroll axis.
///
/// A `TrackState` always holds exactly `track_count` extents. Extents only
/// grow: [`TrackState::advance`] and [`TrackState::resync`] never move a track
/// backwards.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrackState {
    extents: SmallVec<[f64; 8]>,
    origin: f64,
}

impl TrackState {
    /// Creates `track_count` tracks, all filled up to `origin`.
    #[must_use]
    pub(crate) fn new(track_count: NonZeroUsize, origin: f64) -> Self {
        Self {
            extents: SmallVec::from_elem(origin, track_count.get()),
            origin,
        }
    }

    /// Current extents, indexed by track.
    #[must_use]
    pub(crate) fn extents(&self) -> &[f64] {
        &self.extents
    }

    /// Returns the index and extent of the shortest track.
    ///
    /// Ties go to the lowest index: a later track only wins when it is
    /// strictly shorter.
    #[must_use]
    pub(crate) fn shortest(&self) -> (usize, f64) {
        let mut best = (0, self.extents[0]);
        for (track, &extent) in self.extents.iter().enumerate().skip(1) {
            if extent < best.1 {
                best = (track, extent);
            }
        }
        best
    }

    /// Returns the extent of the longest track.
    #[must_use]
    pub(crate) fn longest(&self) -> f64 {
        self.extents
            .iter()
            .copied()
            .fold(self.extents[0], f64::max)
    }

    /// Returns `true` if `track` still sits exactly at the origin.
    ///
    /// The first item of a track is placed flush against the origin; every
    /// later item is separated from its predecessor by a gap.
    #[must_use]
    pub(crate) fn is_at_origin(&self, track: usize) -> bool {
        self.extents[track] == self.origin
    }

    /// Moves `track` forward to `edge`.
    pub(crate) fn advance(&mut self, track: usize, edge: f64) {
        debug_assert!(
            edge >= self.extents[track],
            "track extents never decrease: track={track}, from={}, to={edge}",
            self.extents[track]
        );
        let extent = &mut self.extents[track];
        *extent = extent.max(edge);
    }

    /// Levels every track to `edge`.
    pub(crate) fn resync(&mut self, edge: f64) {
        debug_assert!(
            edge >= self.longest(),
            "resync edge {edge} would move a track backwards"
        );
        for extent in &mut self.extents {
            *extent = extent.max(edge);
        }
    }
}
