// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hard errors and recoverable layout warnings.

use kurbo::Size;
use thiserror::Error;

use crate::ItemPath;

/// Errors that prevent a layout from being produced at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WaterfallError {
    /// The configuration (or the container it is applied to) cannot yield any layout.
    #[error("invalid waterfall configuration: {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

/// Conditions that were recovered from during a pass.
///
/// Warnings never abort a pass; they are collected in
/// [`WaterfallLayout::warnings`](crate::WaterfallLayout::warnings).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutWarning {
    /// The container is too small for the requested tracks, insets, and gaps.
    ///
    /// Tracks were clamped to zero cross length. `track_length` is the value
    /// computed before clamping.
    #[error("container too small for tracks: computed track length {track_length}")]
    DegenerateLayout {
        /// Per-track cross length before clamping.
        track_length: f64,
    },
    /// A size hint had a non-positive (or non-finite) width or height.
    ///
    /// The item was skipped: no element was emitted and no track moved.
    #[error("invalid size hint {size:?} for item {}:{}", .path.section, .path.index)]
    InvalidItemSize {
        /// The item whose hint was rejected.
        path: ItemPath,
        /// The rejected hint.
        size: Size,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = WaterfallError::InvalidConfiguration {
            reason: "track count must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid waterfall configuration: track count must be at least 1"
        );

        let warning = LayoutWarning::InvalidItemSize {
            path: ItemPath::new(2, 7),
            size: Size::new(0.0, 10.0),
        };
        assert!(warning.to_string().contains("2:7"));
    }
}
