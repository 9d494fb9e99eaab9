use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use packbits::{decompress, decompress_into};
use std::hint::black_box;

/// Uncompressed size every scenario decodes to.
const SIZE: usize = 64 * 1024;

/// Generates a stream of maximal repeat runs (0x81 = 128 copies).
///
/// This is the "best-case" scenario: two input bytes per 128 output bytes.
fn generate_repeats(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size / 64);
    let mut value: u8 = 0;
    for _ in 0..size / 128 {
        vec.extend_from_slice(&[0x81, value]);
        value = value.wrapping_add(1);
    }
    vec
}

/// Generates a stream of maximal literal runs (0x7F = 128 bytes) of pseudo-random data.
///
/// Uses a deterministic Linear Congruential Generator (LCG) so runs are reproducible.
/// This represents the "worst-case": incompressible data stored verbatim.
fn generate_literals(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size + size / 128);
    let mut seed: u64 = 0xDEAD_BEEF;
    for _ in 0..size / 128 {
        vec.push(0x7F);
        for _ in 0..128 {
            seed = (seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)) & 0xFFFF_FFFF;
            vec.push((seed >> 24) as u8);
        }
    }
    vec
}

/// Generates a stream alternating short literal and repeat runs, typical of
/// palettized bitmaps with small uniform areas.
///
/// Each unit decodes to 16 bytes: 8 literals followed by a run of 8.
fn generate_mixed(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size);
    for i in 0..size / 16 {
        vec.push(0x07);
        vec.extend((0..8).map(|j| (i + j) as u8));
        vec.extend_from_slice(&[0xF9, i as u8]);
    }
    vec
}

/// Benchmarks PackBits decompression.
///
/// Throughput is based on the *uncompressed* size to represent the rate of
/// data restoration.
fn bench_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("PackBits Decompression");

    let scenarios = [
        ("Repeats", generate_repeats(SIZE)),
        ("Literals", generate_literals(SIZE)),
        ("Mixed", generate_mixed(SIZE)),
    ];

    for (name, compressed_data) in &scenarios {
        let bench_name = format!("{name} 64KB");

        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_function(&bench_name, |b| {
            // Pre-allocate output to avoid measuring allocation overhead during the loop.
            let mut output = Vec::with_capacity(SIZE);
            b.iter(|| {
                output.clear();
                let report =
                    decompress_into(black_box(compressed_data), black_box(&mut output), SIZE);
                assert!(report.is_complete());
            });
        });
    }

    group.finish();
}

/// Benchmarks the allocating, argument-checked entry point on the mixed stream.
fn bench_allocating(c: &mut Criterion) {
    let compressed_data = generate_mixed(SIZE);

    let mut group = c.benchmark_group("PackBits Allocating");
    group.throughput(Throughput::Bytes(SIZE as u64));
    group.bench_function("Mixed 64KB", |b| {
        b.iter(|| {
            // Unwrap to ensure the declared length is accepted; a rejection should fail the benchmark.
            decompress(
                black_box(&compressed_data),
                compressed_data.len(),
                black_box(SIZE),
            )
            .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decompression, bench_allocating);
criterion_main!(benches);
