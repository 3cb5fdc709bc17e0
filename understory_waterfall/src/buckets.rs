// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform buckets along the scroll axis for viewport queries.
//!
//! Elements are bucketed by the span they cover along the scroll axis. A
//! range query touches only the buckets overlapping the range, which keeps
//! viewport lookups proportional to what is on screen rather than to the
//! length of the whole waterfall.
//!
//! The bucket size is derived from the content extent and the element count,
//! so the number of buckets never exceeds the number of elements. Elements
//! covering more than [`ScrollBuckets::MAX_SPAN`] buckets are kept in a
//! separate list that every query includes, which bounds the total number of
//! bucket entries by `MAX_SPAN` per element.

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Scroll-axis bucket index over element slots.
pub(crate) struct ScrollBuckets {
    bucket_size: f64,
    buckets: HashMap<u32, SmallVec<[u32; 8]>>,
    /// Slots too long to bucket; candidates for every query.
    spanning: Vec<u32>,
}

impl core::fmt::Debug for ScrollBuckets {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollBuckets")
            .field("bucket_size", &self.bucket_size)
            .field("buckets", &self.buckets.len())
            .field("spanning", &self.spanning.len())
            .finish_non_exhaustive()
    }
}

impl ScrollBuckets {
    /// Smallest bucket size, so near-empty layouts do not produce tiny buckets.
    pub(crate) const MIN_SIZE: f64 = 1.0;

    /// Bucket size used when the extent is not finite.
    pub(crate) const FALLBACK_SIZE: f64 = 256.0;

    /// Most buckets a single element is recorded in.
    pub(crate) const MAX_SPAN: u32 = 64;

    /// Creates an empty index for `element_count` elements laid out over
    /// `0..=scroll_extent`.
    pub(crate) fn new(scroll_extent: f64, element_count: usize) -> Self {
        let bucket_size = if scroll_extent.is_finite() {
            (scroll_extent / element_count.max(1) as f64).max(Self::MIN_SIZE)
        } else {
            Self::FALLBACK_SIZE
        };
        Self {
            bucket_size,
            buckets: HashMap::new(),
            spanning: Vec::new(),
        }
    }

    /// Bucket holding `offset`.
    ///
    /// Offsets below zero land in bucket 0 and offsets beyond the `u32` range
    /// in the last bucket. `NaN` maps to bucket 0.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The quotient is clamped to the u32 range before the cast."
    )]
    fn bucket_of(&self, offset: f64) -> u32 {
        (offset / self.bucket_size).clamp(0.0, f64::from(u32::MAX)) as u32
    }

    fn bucket_range(&self, start: f64, end: f64) -> (u32, u32) {
        let b0 = self.bucket_of(start);
        let b1 = self.bucket_of(end);
        (b0.min(b1), b0.max(b1))
    }

    /// Records that `slot` covers `start..=end` along the scroll axis.
    pub(crate) fn insert(&mut self, slot: u32, start: f64, end: f64) {
        let (b0, b1) = self.bucket_range(start, end);
        if b1 - b0 >= Self::MAX_SPAN {
            self.spanning.push(slot);
            return;
        }
        for bucket in b0..=b1 {
            self.buckets.entry(bucket).or_default().push(slot);
        }
    }

    /// Collects the slots whose buckets overlap `start..=end`, ascending and
    /// without duplicates.
    ///
    /// Candidates are coarse: callers still test each slot's exact span.
    pub(crate) fn candidates(&self, start: f64, end: f64) -> Vec<u32> {
        let (b0, b1) = self.bucket_range(start, end);
        let mut out = self.spanning.clone();
        // Large queries would visit many empty buckets; walk the map instead.
        if u64::from(b1 - b0) >= self.buckets.len() as u64 {
            for (bucket, slots) in &self.buckets {
                if (b0..=b1).contains(bucket) {
                    out.extend_from_slice(slots);
                }
            }
        } else {
            for bucket in b0..=b1 {
                if let Some(slots) = self.buckets.get(&bucket) {
                    out.extend_from_slice(slots);
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}
