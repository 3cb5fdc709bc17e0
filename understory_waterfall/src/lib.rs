// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_waterfall --heading-base-level=0

//! Understory Waterfall: headless waterfall (masonry) placement.
//!
//! This crate computes where the items of a waterfall go. Items with an
//! intrinsic aspect ratio are distributed over a fixed number of parallel
//! *tracks* (columns for vertical waterfalls, rows for horizontal ones). Each
//! item is placed into the currently shortest track, with ties going to the
//! lowest track index, and is sized to the track's cross length while keeping
//! its aspect ratio.
//!
//! Items are grouped into [`Section`]s. A section may declare a header and a
//! footer *band*: a full-width element that clears every track and then
//! levels all of them, so the next items start from a flat edge.
//!
//! The core concepts are:
//!
//! - [`WaterfallConfig`]: validated track count, [`WaterfallStyle`], gaps, and
//!   insets, each with an explicit default.
//! - [`ItemSizes`]: the seam through which a host supplies size hints, either
//!   as a closure or as a precomputed [`SizeTable`].
//! - [`WaterfallPlacer`] / [`compute_layout`]: one full, side-effect-free pass.
//! - [`WaterfallLayout`]: the placed elements in traversal order, the content
//!   extent, recovered [`LayoutWarning`]s, and lookups by item, band, or
//!   viewport rectangle.
//!
//! This crate deliberately does **not** know about views, cells, or reuse
//! pools. Host frameworks are responsible for:
//!
//! - Owning the item data and producing size hints.
//! - Calling [`compute_layout`] again whenever the container's cross length,
//!   the section structure, or the configuration changes.
//! - Positioning their views at the returned frames and sizing the scrollable
//!   area from [`WaterfallLayout::content_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_waterfall::{ItemPath, Section, WaterfallConfig, compute_layout};
//!
//! // Two columns with the default 10-unit gaps and insets.
//! let config = WaterfallConfig::new(2).unwrap();
//! let hints = [Size::new(20.0, 10.0), Size::new(20.0, 20.0), Size::new(20.0, 30.0)];
//!
//! let layout = compute_layout(
//!     &[Section::new(hints.len())],
//!     &mut |path: ItemPath| hints[path.index],
//!     &config,
//!     230.0,
//! )
//! .unwrap();
//!
//! // (230 - 2 * 10 inset - 10 gap) / 2 columns.
//! assert_eq!(layout.track_length(), 100.0);
//! // The third item goes under the first, which is the shorter column.
//! let third = layout.cell_frame(ItemPath::new(0, 2)).unwrap();
//! assert_eq!((third.x0, third.y0), (10.0, 70.0));
//! assert_eq!(layout.content_extent(), 230.0);
//! ```
//!
//! ## Sections, bands, and viewport queries
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_waterfall::{
//!     Section, SizeTable, WaterfallConfig, WaterfallPlacer, WaterfallStyle,
//! };
//!
//! let config = WaterfallConfig::new(3)
//!     .unwrap()
//!     .with_style(WaterfallStyle::Horizontal);
//! let placer = WaterfallPlacer::new(config);
//!
//! let table = [
//!     vec![Size::new(4.0, 3.0); 7],
//!     vec![Size::new(1.0, 1.0); 5],
//! ];
//! let sections = [
//!     Section::new(7).with_header(20.0).with_footer(30.0),
//!     Section::new(5).with_header(20.0),
//! ];
//! let layout = placer
//!     .compute_layout(&sections, &mut SizeTable(&table), 320.0)
//!     .unwrap();
//! assert!(layout.warnings().is_empty());
//!
//! // Everything the host needs to realize for a 200-unit wide viewport.
//! let visible = layout.elements_in(Rect::new(0.0, 0.0, 200.0, 320.0)).count();
//! assert!(visible > 0 && visible < layout.len());
//! ```
//!
//! All geometry uses [`kurbo`] types in a caller-chosen coordinate space
//! (typically logical pixels). Recoverable problems, such as a container too
//! small for its tracks or an item with a zero-sized hint, are reported as
//! [`LayoutWarning`]s and logged through the [`log`] facade; only a pass that
//! cannot produce any layout returns a [`WaterfallError`].
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in `kurbo`.
//! - `libm`: enables `no_std` numeric support in `kurbo` via `libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod buckets;
mod config;
mod error;
mod layout;
mod placer;
mod section;
mod sizes;
mod tracks;

pub use config::{WaterfallConfig, WaterfallStyle};
pub use error::{LayoutWarning, WaterfallError};
pub use layout::{ElementKind, PlacedElement, WaterfallLayout};
pub use placer::{WaterfallPlacer, compute_layout};
pub use section::{ItemPath, Section};
pub use sizes::{ItemSizes, SizeTable};
