// ============================================================================
// Accuracy sweeps
// Every function against the f64 reference across its input domain
// ============================================================================

mod common;

use common::{check, degrees, has_maximum_error, TOLERANCE};
use fixtrig::math::{acos, asin, atan, atan2, cos, sin, tan};
use fixtrig::numeric::{Fixed, NumericError};

type Q12 = Fixed<i32, i64, 12>;
type Q16 = Fixed<i32, i64, 16>;

fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

// ============================================================================
// sin / cos / tan
// ============================================================================

#[test]
fn test_sin_whole_degrees() {
    for deg in degrees(1800) {
        let angle = radians(f64::from(deg));
        check::<i32, i64, 12>("sin", angle, sin, angle.sin());
    }
}

#[test]
fn test_sin_tenth_degrees() {
    for tenth in degrees(1800) {
        let angle = radians(f64::from(tenth) / 10.0);
        check::<i32, i64, 12>("sin", angle, sin, angle.sin());
    }
}

#[test]
fn test_cos_whole_degrees() {
    for deg in degrees(1800) {
        let angle = radians(f64::from(deg));
        check::<i32, i64, 12>("cos", angle, cos, angle.cos());
    }
}

#[test]
fn test_cos_tenth_degrees() {
    for tenth in degrees(1800) {
        let angle = radians(f64::from(tenth) / 10.0);
        check::<i32, i64, 12>("cos", angle, cos, angle.cos());
    }
}

#[test]
fn test_tan_whole_degrees() {
    for deg in degrees(1800).filter(|deg| (deg + 90) % 180 != 0) {
        let angle = radians(f64::from(deg));
        check::<i32, i64, 12>("tan", angle, tan, angle.tan());
    }
}

#[test]
fn test_tan_tenth_degrees() {
    for tenth in degrees(1800).filter(|tenth| (tenth + 900) % 1800 != 0) {
        let angle = radians(f64::from(tenth) / 10.0);
        check::<i32, i64, 12>("tan", angle, tan, angle.tan());
    }
}

#[test]
fn test_large_angles() {
    for angle in [10_000.0, 100_000.0, 500_000.0] {
        check::<i32, i64, 12>("sin", angle, sin, angle.sin());
        check::<i32, i64, 12>("cos", angle, cos, angle.cos());
    }
    for angle in [30_000.0, -30_000.0, 32_767.0] {
        check::<i32, i64, 16>("sin", angle, sin, angle.sin());
        check::<i32, i64, 16>("cos", angle, cos, angle.cos());
    }
}

#[test]
fn test_tan_poles_are_singular() {
    for deg in [-270.0, -90.0, 90.0, 270.0] {
        let angle = Q12::from_f64(radians(deg)).unwrap();
        assert_eq!(tan(angle), Err(NumericError::Singularity), "{} degrees", deg);
    }
}

// ============================================================================
// atan / asin / acos / atan2
// ============================================================================

#[test]
fn test_atan_wide_range() {
    for step in -1000..=1000 {
        let x = f64::from(step) / 10.0;
        check::<i32, i64, 12>("atan", x, atan, x.atan());
    }
}

#[test]
fn test_atan_unit_range() {
    for step in -1000..=1000 {
        let x = f64::from(step) / 1000.0;
        check::<i32, i64, 12>("atan", x, atan, x.atan());
    }
}

#[test]
fn test_asin() {
    for step in -1000..=1000 {
        let x = f64::from(step) / 1000.0;
        check::<i32, i64, 12>("asin", x, asin, x.asin());
    }
}

#[test]
fn test_acos() {
    for step in -1000..=1000 {
        let x = f64::from(step) / 1000.0;
        check::<i32, i64, 12>("acos", x, acos, x.acos());
    }
}

#[test]
fn test_atan2_full_circle() {
    for deg in 0..=360 {
        let angle = radians(f64::from(deg));
        let (y, x) = (angle.sin(), angle.cos());
        let value = atan2(Q12::from_f64(y).unwrap(), Q12::from_f64(x).unwrap())
            .unwrap()
            .to_f64();
        let reference = y.atan2(x);
        assert!(
            has_maximum_error(value, reference, TOLERANCE),
            "atan2 at {} degrees = {}, expected {}",
            deg,
            value,
            reference
        );
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_sin_of_zero_is_zero() {
    assert_eq!(sin(Q12::ZERO).unwrap(), Q12::ZERO);
}

#[test]
fn test_cos_of_zero_is_one() {
    let value = cos(Q12::ZERO).unwrap().to_f64();
    assert!(has_maximum_error(value, 1.0, TOLERANCE));
}

#[test]
fn test_atan2_on_positive_y_axis() {
    let value = atan2(Q12::one().unwrap(), Q12::ZERO).unwrap().to_f64();
    assert!(has_maximum_error(value, std::f64::consts::FRAC_PI_2, TOLERANCE));
}

#[test]
fn test_asin_of_one() {
    let value = asin(Q12::one().unwrap()).unwrap().to_f64();
    assert!(has_maximum_error(value, std::f64::consts::FRAC_PI_2, TOLERANCE));
}

#[test]
fn test_out_of_range_integer_is_reported() {
    assert_eq!(Q12::from_integer(1 << 20), Err(NumericError::Overflow));
    assert_eq!(Q12::from_integer(-(1 << 20)), Err(NumericError::Underflow));
    assert_eq!(Q16::from_integer(32_768), Err(NumericError::Overflow));
}

#[test]
fn test_other_precisions_meet_tolerance() {
    for deg in (-360..=360).step_by(5) {
        let angle = radians(f64::from(deg));
        check::<i16, i32, 12>("sin", angle, sin, angle.sin());
        check::<i16, i32, 12>("cos", angle, cos, angle.cos());
        // At 32 bits the converted input sits off the zero crossings
        if deg % 180 != 0 {
            check::<i64, i128, 32>("sin", angle, sin, angle.sin());
        }
        if (deg + 90) % 180 != 0 {
            check::<i64, i128, 32>("cos", angle, cos, angle.cos());
        }
    }
}

#[test]
fn test_zero_crossings_at_32_bits() {
    type Q32 = Fixed<i64, i128, 32>;
    for deg in (-360..=360).step_by(90) {
        let angle = Q32::from_f64(radians(f64::from(deg))).unwrap();
        let value = if deg % 180 == 0 { sin(angle) } else { cos(angle) }.unwrap();
        assert!(value.raw().abs() <= 2, "{} degrees: {:?}", deg, value);
    }
}
