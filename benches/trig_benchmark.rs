// ============================================================================
// Fixed-Point Trigonometry Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Core Arithmetic - widen-multiply-round-narrow and pre-shifted division
// 2. Forward Trig - range reduction plus sin/cos/tan kernels
// 3. Inverse Trig - atan kernel with its reductions
// 4. Precision Comparison - the same call across storage layouts
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixtrig::prelude::*;
use std::hint::black_box;

type Q12 = Fixed<i32, i64, 12>;

/// Angles spread over several turns, both signs
fn sample_angles() -> Vec<Q12> {
    (-1800..=1800)
        .step_by(7)
        .map(|deg| Q12::from_f64(f64::from(deg).to_radians()).unwrap())
        .collect()
}

/// Ratios in [-1, 1]
fn sample_unit_values() -> Vec<Q12> {
    (-1000..=1000)
        .step_by(7)
        .map(|step| Q12::from_f64(f64::from(step) / 1000.0).unwrap())
        .collect()
}

// ============================================================================
// Core Arithmetic
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = Q12::from_f64(3.25).unwrap();
    let b = Q12::from_f64(-1.75).unwrap();

    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul(black_box(b))))
    });
    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(black_box(a).checked_div(black_box(b))))
    });
    group.bench_function("sqrt", |bench| bench.iter(|| black_box(sqrt(black_box(a)))));
    group.bench_function("hypot", |bench| {
        bench.iter(|| black_box(hypot(black_box(a), black_box(b))))
    });

    group.finish();
}

// ============================================================================
// Forward Trig
// ============================================================================

fn benchmark_forward_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_trig");
    let angles = sample_angles();

    group.bench_function("sin", |bench| {
        bench.iter(|| {
            for &angle in &angles {
                let _ = black_box(sin(black_box(angle)));
            }
        })
    });
    group.bench_function("cos", |bench| {
        bench.iter(|| {
            for &angle in &angles {
                let _ = black_box(cos(black_box(angle)));
            }
        })
    });
    group.bench_function("sin_cos", |bench| {
        bench.iter(|| {
            for &angle in &angles {
                let _ = black_box(sin_cos(black_box(angle)));
            }
        })
    });
    group.bench_function("tan", |bench| {
        bench.iter(|| {
            for &angle in &angles {
                let _ = black_box(tan(black_box(angle)));
            }
        })
    });

    group.finish();
}

// ============================================================================
// Inverse Trig
// ============================================================================

fn benchmark_inverse_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_trig");
    let values = sample_unit_values();
    let angles = sample_angles();

    group.bench_function("atan", |bench| {
        bench.iter(|| {
            for &x in &values {
                let _ = black_box(atan(black_box(x)));
            }
        })
    });
    group.bench_function("asin", |bench| {
        bench.iter(|| {
            for &x in &values {
                let _ = black_box(asin(black_box(x)));
            }
        })
    });
    group.bench_function("acos", |bench| {
        bench.iter(|| {
            for &x in &values {
                let _ = black_box(acos(black_box(x)));
            }
        })
    });

    let points: Vec<(Q12, Q12)> = angles.iter().filter_map(|&angle| angle.sin_cos().ok()).collect();
    group.bench_function("atan2", |bench| {
        bench.iter(|| {
            for &(y, x) in &points {
                let _ = black_box(atan2(black_box(y), black_box(x)));
            }
        })
    });

    group.finish();
}

// ============================================================================
// Precision Comparison
// ============================================================================

fn benchmark_precisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin_by_layout");
    let angle = 1.2345;

    let q8 = Fixed8_8::from_f64(angle).unwrap();
    group.bench_with_input(BenchmarkId::new("sin", "Fixed8_8"), &q8, |bench, &x| {
        bench.iter(|| black_box(sin(black_box(x))))
    });

    let q16 = Fixed16_16::from_f64(angle).unwrap();
    group.bench_with_input(BenchmarkId::new("sin", "Fixed16_16"), &q16, |bench, &x| {
        bench.iter(|| black_box(sin(black_box(x))))
    });

    let q32 = Fixed32_32::from_f64(angle).unwrap();
    group.bench_with_input(BenchmarkId::new("sin", "Fixed32_32"), &q32, |bench, &x| {
        bench.iter(|| black_box(sin(black_box(x))))
    });

    // Reference point for the fixed-point timings
    group.bench_with_input(BenchmarkId::new("sin", "f64"), &angle, |bench, &x| {
        bench.iter(|| black_box(black_box(x).sin()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_forward_trig,
    benchmark_inverse_trig,
    benchmark_precisions,
);
criterion_main!(benches);
