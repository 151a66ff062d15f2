//! Benchmarks for tint operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use tint_core::{HexColor, hex_to_hsl, hsl_to_hex};
use tint_extract::{PixelBuffer, extract_dominant_color, extract_palette};
use tint_harmony::{HarmonyType, generate};

/// Benchmark hex <-> HSL conversion.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let hexes: Vec<String> = (0..1000u32)
        .map(|i| format!("#{:06x}", i.wrapping_mul(2_654_435_761) & 0xff_ffff))
        .collect();
    group.throughput(Throughput::Elements(hexes.len() as u64));

    group.bench_function("hex_to_hsl", |b| {
        b.iter(|| {
            hexes
                .iter()
                .map(|h| hex_to_hsl(black_box(h)).ok())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("hsl_to_hex", |b| {
        b.iter(|| {
            (0..1000)
                .map(|i| hsl_to_hex(black_box(f64::from(i % 360)), 70.0, 50.0))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark every harmony rule at the largest selectable count.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let base: HexColor = HexColor::from_rgb(0x42, 0x87, 0xf5);

    for harmony in HarmonyType::ALL {
        group.bench_with_input(BenchmarkId::new(harmony.id(), 10), &harmony, |b, &h| {
            b.iter(|| generate(black_box(&base), h, black_box(10)))
        });
    }

    group.finish();
}

/// Noise image so the histogram has many buckets.
fn noise(width: u32, height: u32) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..width * height)
        .flat_map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            [r, g, b, 255]
        })
        .collect()
}

/// Benchmark extraction at the decode size cap and below.
fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [100u32, 250, 500] {
        let data = noise(size, size);
        let pixels = PixelBuffer::new(size, size, &data).expect("buffer size");
        group.throughput(Throughput::Elements(u64::from(size * size)));

        group.bench_with_input(BenchmarkId::new("dominant", size), &pixels, |b, p| {
            b.iter(|| extract_dominant_color(black_box(p)))
        });

        group.bench_with_input(BenchmarkId::new("palette_5", size), &pixels, |b, p| {
            b.iter(|| extract_palette(black_box(p), 5))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_generate, bench_extract);
criterion_main!(benches);
