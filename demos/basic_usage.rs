// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// debug events emitted for singularities and domain errors.

use fixtrig::prelude::*;

type Q = Fixed20_12;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed-Point Trigonometry Example ===\n");
    println!(
        "Layout: Q20.12 in i32 (quantum = {}, range = [{}, {}])\n",
        Q::EPSILON,
        Q::MIN,
        Q::MAX
    );

    // Forward functions over a few angles
    println!("{:>8} {:>10} {:>10} {:>12}", "degrees", "sin", "cos", "tan");
    for degrees in [0, 30, 45, 60, 90, 135, 180, 270, 405, -60] {
        let angle = Q::from_f64(f64::from(degrees).to_radians()).unwrap();
        let (s, c) = angle.sin_cos().unwrap();
        let t = match angle.tan() {
            Ok(t) => format!("{:.4}", t),
            Err(e) => format!("({})", e),
        };
        let (s, c) = (format!("{:.4}", s), format!("{:.4}", c));
        println!("{:>8} {:>10} {:>10} {:>12}", degrees, s, c, t);
    }

    // Inverse functions
    println!("\n=== Inverse Functions ===");
    let half = Q::from_f64(0.5).unwrap();
    println!("asin(0.5)  = {:.4} rad", asin(half).unwrap());
    println!("acos(0.5)  = {:.4} rad", acos(half).unwrap());
    println!("atan(0.5)  = {:.4} rad", atan(half).unwrap());

    let one = Q::one().unwrap();
    println!("atan2(1, -1) = {:.4} rad", atan2(one, -one).unwrap());
    println!("atan2(0, 0)  = {} (defined as zero)", atan2(Q::ZERO, Q::ZERO).unwrap());

    // Polar form of a point
    println!("\n=== Polar Form ===");
    let x: Q = "-3".parse().unwrap();
    let y: Q = "4".parse().unwrap();
    println!(
        "({}, {}) -> radius {}, heading {:.4} rad",
        x,
        y,
        hypot(x, y).unwrap(),
        y.atan2(x).unwrap()
    );

    // Defined failures
    println!("\n=== Defined Failures ===");
    let two = Q::from_integer(2).unwrap();
    println!("asin(2)          -> {:?}", asin(two));
    println!("sqrt(-2)         -> {:?}", sqrt(-two));
    println!("tan(pi/2)        -> {:?}", Q::half_pi().and_then(tan));
    println!("from_integer(2^20) -> {:?}", Q::from_integer(1 << 20));
    println!("MAX * 2          -> {:?}", Q::MAX.checked_mul(two));

    // Decimal interop at the boundary
    println!("\n=== Decimal Interop ===");
    let angle = Q::from_decimal(rust_decimal::Decimal::new(7854, 4)).unwrap();
    println!("sin(0.7854) = {}", angle.sin().unwrap().to_decimal());
}
