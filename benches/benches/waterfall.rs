// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waterfall placement benchmarks: full passes and viewport queries.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::Rect;
use understory_benches::photo_feed;
use understory_waterfall::{SizeTable, WaterfallConfig, WaterfallPlacer};

fn full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("waterfall_full_pass");
    for (sections, per_section) in [(1_usize, 1_000_usize), (10, 1_000), (100, 100)] {
        let (layout, sizes) = photo_feed(sections, per_section);
        for tracks in [2_usize, 5] {
            let placer = WaterfallPlacer::new(WaterfallConfig::new(tracks).unwrap());
            group.bench_with_input(
                BenchmarkId::new(format!("{tracks}_tracks"), sections * per_section),
                &(layout.as_slice(), sizes.as_slice()),
                |b, &(layout, sizes)| {
                    b.iter(|| {
                        placer
                            .compute_layout(black_box(layout), &mut SizeTable(sizes), 1080.0)
                            .unwrap()
                    });
                },
            );
        }
    }
    group.finish();
}

fn viewport_query(c: &mut Criterion) {
    let (layout, sizes) = photo_feed(10, 1_000);
    let result = WaterfallPlacer::new(WaterfallConfig::new(4).unwrap())
        .compute_layout(&layout, &mut SizeTable(&sizes), 1080.0)
        .unwrap();
    let middle = result.content_extent() / 2.0;

    c.bench_function("waterfall_elements_in_viewport", |b| {
        b.iter(|| {
            result
                .elements_in(black_box(Rect::new(0.0, middle, 1080.0, middle + 1920.0)))
                .count()
        });
    });
}

criterion_group!(benches, full_pass, viewport_query);
criterion_main!(benches);
