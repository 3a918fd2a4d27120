//! Benchmarks for the incremental and batch UTF-8 decoders

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use lumen_text::{Utf8Decoder, decode_utf8};

fn inputs() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("ascii", "Distance: 4.37 ly, magnitude -0.27\n".repeat(64).into_bytes()),
        ("mixed", "α Centauri → 4.37 ly ★ Проксима\n".repeat(64).into_bytes()),
        ("cjk", "天狼星は全天で最も明るい恒星\n".repeat(64).into_bytes()),
        (
            "malformed",
            b"ok \xFF\xE2\x82 bad \xC3( mixed\n".repeat(64),
        ),
    ]
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_incremental");

    for (name, bytes) in inputs() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut decoder = Utf8Decoder::new();
                let mut count = 0usize;
                for &byte in black_box(&bytes) {
                    if decoder.feed(byte).is_some() {
                        count += 1;
                    }
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_batch");

    for (name, bytes) in inputs() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(decode_utf8(black_box(&bytes)).count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_incremental, bench_batch);
criterion_main!(benches);
