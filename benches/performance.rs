// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for fretboard
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Position sorting by string, fret and finger
//! - Full-position expansion
//! - Note name parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fretboard::{note_name_to_number, number_to_note_name, NeckPosition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_position(rng: &mut StdRng, len: usize) -> NeckPosition {
    let strings: Vec<i32> = (0..len).map(|_| rng.gen_range(0..12)).collect();
    let frets: Vec<i32> = (0..len).map(|_| rng.gen_range(0..24)).collect();
    let fingers: Vec<i32> = (0..len).map(|_| rng.gen_range(0..=4)).collect();
    NeckPosition::from_strings_frets(&fingers, &strings, &frets, Some(1)).unwrap()
}

/// Benchmark the three sorts over chord-sized positions
fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [4usize, 6, 12].iter() {
        let position = make_position(&mut rng, *size);

        group.bench_with_input(BenchmarkId::new("by_string", size), &position, |b, pos| {
            b.iter(|| black_box(pos.sort_by_string(true).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("by_fret", size), &position, |b, pos| {
            b.iter(|| black_box(pos.sort_by_fret().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("by_finger", size), &position, |b, pos| {
            b.iter(|| black_box(pos.sort_by_finger().unwrap()))
        });
    }

    group.finish();
}

/// Benchmark full-position expansion
fn bench_full_position(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let position = make_position(&mut rng, 6);

    c.bench_function("full_position_12", |b| {
        b.iter(|| black_box(position.get_full_position(black_box(12))))
    });
}

/// Benchmark note name conversion both ways
fn bench_note_names(c: &mut Criterion) {
    let names: Vec<String> = (0..128).map(|n| number_to_note_name(n).unwrap()).collect();

    c.bench_function("note_name_to_number", |b| {
        b.iter(|| {
            for name in &names {
                black_box(note_name_to_number(black_box(name)).unwrap());
            }
        })
    });
    c.bench_function("number_to_note_name", |b| {
        b.iter(|| {
            for n in 0..128 {
                black_box(number_to_note_name(black_box(n)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_sorting, bench_full_position, bench_note_names);
criterion_main!(benches);
