// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Understory benchmarks.

use kurbo::Size;
use understory_waterfall::Section;

/// Deterministic sections and size hints: `sections` sections of `per_section` items each.
///
/// Aspect ratios cycle through a spread so that tracks fill unevenly, as they
/// would with a real photo feed.
pub fn photo_feed(sections: usize, per_section: usize) -> (Vec<Section>, Vec<Vec<Size>>) {
    let layout = (0..sections)
        .map(|_| Section::new(per_section).with_header(32.0).with_footer(24.0))
        .collect();
    let sizes = (0..sections)
        .map(|s| {
            (0..per_section)
                .map(|i| {
                    let seed = (s * 31 + i * 17) % 97;
                    Size::new(
                        100.0 + (seed % 11) as f64 * 20.0,
                        60.0 + (seed % 13) as f64 * 20.0,
                    )
                })
                .collect()
        })
        .collect();
    (layout, sizes)
}
