//! Criterion benchmarks for the frame hot path.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tally::pacer::FramePacer;
use tally::{Counter, Fps};

fn bench_pacer_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("pacer_poll");

    for fps in [1u32, 33, 120].iter() {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(BenchmarkId::from_parameter(fps), fps, |b, &fps| {
            let fps = Fps::new(fps).unwrap_or_default();
            b.iter(|| {
                let mut pacer = FramePacer::new(fps, 0.0);
                let mut due = 0u32;
                for i in 1..=1000 {
                    if pacer.poll(black_box(i as f64 * 16.667)) {
                        due += 1;
                    }
                }
                black_box(due)
            });
        });
    }

    group.finish();
}

fn bench_full_count(c: &mut Criterion) {
    c.bench_function("count_to_10k", |b| {
        b.iter(|| {
            let mut counter = Counter::new();
            let fps = Fps::new(120).unwrap_or_default();
            let _ = counter.start(Some(10_000), fps, 0.0);
            let mut now = 0.0;
            while counter.on_frame(now).wants_next_frame() {
                now += 10.0;
            }
            black_box(counter.count())
        });
    });
}

criterion_group!(benches, bench_pacer_poll, bench_full_count);
criterion_main!(benches);
