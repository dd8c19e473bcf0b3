//! Benchmarks for candidate layout and hit-testing.
//!
//! Run with: cargo bench -p cwin-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cwin_core::CandidateEntry;
use cwin_layout::{CandidatePage, calc_start_num, layout};
use cwin_style::{BarStyle, FontSet};
use cwin_text::{CachedMeasurer, CellMeasurer, RunPainter};
use std::hint::black_box;

/// A page of `n` mixed candidates, every third with a comment.
fn make_page(n: usize) -> CandidatePage {
    let entries = (0..n)
        .map(|i| {
            let e = CandidateEntry::new(format!("候选{i}"));
            if i % 3 == 0 {
                e.with_comment(format!("hou{i}"))
            } else {
                e
            }
        })
        .collect();
    CandidatePage {
        entries,
        has_prev_page: true,
        has_next_page: true,
        show_comment: true,
        ..CandidatePage::default()
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/bar");
    let style = BarStyle::default();
    let direct = RunPainter::new(CellMeasurer::default(), FontSet::NONE);
    let cached = RunPainter::new(
        CachedMeasurer::with_default_capacity(CellMeasurer::default()),
        FontSet::NONE,
    );

    for n in [5, 10, 30] {
        let page = make_page(n);
        group.bench_with_input(BenchmarkId::new("direct", n), &page, |b, page| {
            b.iter(|| black_box(layout(page, 40.0, &style, &direct)))
        });
        group.bench_with_input(BenchmarkId::new("cached", n), &page, |b, page| {
            b.iter(|| black_box(layout(page, 40.0, &style, &cached)))
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let style = BarStyle::default();
    let painter = RunPainter::new(CellMeasurer::default(), FontSet::NONE);
    let l = layout(&make_page(30), 40.0, &style, &painter);
    let width = l.content_width();
    c.bench_function("layout/hit_test_sweep", |b| {
        b.iter(|| {
            let mut x = 0.0;
            while x < width {
                black_box(l.hit_test(x, 20.0));
                x += 7.0;
            }
        })
    });
}

fn bench_start_num(c: &mut Criterion) {
    let cands: Vec<_> = (0..100)
        .map(|i| CandidateEntry::new("字".repeat(i % 4)))
        .collect();
    c.bench_function("layout/calc_start_num", |b| {
        b.iter(|| black_box(calc_start_num(black_box(&cands), 2, 5, 30)))
    });
}

criterion_group!(benches, bench_layout, bench_hit_test, bench_start_num);
criterion_main!(benches);
