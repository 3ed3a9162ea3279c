//! Scalar helpers shared by every value type.
//!
//! Trigonometry, powers and logarithms are the inherent `f32` methods; this
//! module only holds the helpers whose behaviour differs from the standard
//! library (epsilon comparison, integral rounding rules, cyclic wrap).

/// Tolerance for every epsilon comparison and degeneracy threshold.
pub const EPSILON: f32 = 1.192_092_9e-7;

pub const PI: f32 = std::f32::consts::PI;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
pub const RAD_TO_DEG: f32 = 180.0 / PI;
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn is_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `value` is a positive power of two.
#[inline]
pub fn is_pow2(value: i32) -> bool {
    value > 0 && (value & (value - 1)) == 0
}

/// Counts the `true` entries.
pub fn count_true(values: &[bool]) -> i32 {
    values.iter().filter(|&&v| v).count() as i32
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn clamp_min(value: f32, min: f32) -> f32 {
    if value < min {
        min
    } else {
        value
    }
}

#[inline]
pub fn clamp_max(value: f32, max: f32) -> f32 {
    if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn clamp_min_i32(value: i32, min: i32) -> i32 {
    value.max(min)
}

#[inline]
pub fn clamp_max_i32(value: i32, max: i32) -> i32 {
    value.min(max)
}

/// Clamps an integer into the `0..=255` channel range.
#[inline]
pub fn clamp_byte(value: i32) -> u8 {
    clamp_i32(value, 0, 255) as u8
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Smallest integer not below `value`.
///
/// Integral values (within [`EPSILON`]) and negative values keep their
/// truncated part; other positive values round up by one.
pub fn ceil_to_int(value: f32) -> i32 {
    let truncated = value as i32;
    if value < 0.0 || (truncated as f32 - value).abs() < EPSILON {
        return truncated;
    }
    truncated + 1
}

/// Largest integer not above `value`.
pub fn floor_to_int(value: f32) -> i32 {
    let truncated = value as i32;
    if value > 0.0 || (value - truncated as f32).abs() < EPSILON {
        return truncated;
    }
    truncated - 1
}

/// Rounds to the nearest integer, ties to even.
#[inline]
pub fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Rounds to `digits` fractional digits, ties to even.
pub fn round(value: f32, digits: i32) -> f32 {
    let factor = 10f64.powi(digits);
    ((value as f64 * factor).round_ties_even() / factor) as f32
}

/// Rounds `value` up to the next power of two that is at least `min`.
///
/// Works on the truncated integer part by bit smearing, so `4.0` stays `4.0`
/// while `4.5` becomes `8.0`.
pub fn ceil_to_pow2(value: f32, min: u32) -> f32 {
    let mut x: u32 = if value < min as f32 {
        min.wrapping_sub(1)
    } else {
        let truncated = value as u32;
        if (truncated as f32 - value).abs() < EPSILON {
            truncated.wrapping_sub(1)
        } else {
            truncated
        }
    };

    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x.wrapping_add(1) as f32
}

/// Linear interpolation, unclamped: `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Wraps `value` once into `[min, max)`.
///
/// Only a single period is added or removed, values more than one period
/// away stay outside the range.
#[inline]
pub fn wrap(value: f32, min_inclusive: f32, max_exclusive: f32) -> f32 {
    if value < min_inclusive {
        return max_exclusive - (min_inclusive - value);
    }
    if value >= max_exclusive {
        return value - (max_exclusive - min_inclusive);
    }
    value
}

/// -1, 0 or 1. Zero maps to zero, unlike [`f32::signum`].
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Angle of the point `(x, y)` from the positive x axis.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

#[inline]
pub fn log_base(value: f32, base: f32) -> f32 {
    value.ln() / base.ln()
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_equal() {
        assert!(is_equal(1.0, 1.0 + EPSILON * 0.5));
        assert!(!is_equal(1.0, 1.001));
    }

    #[test]
    fn test_is_pow2() {
        assert!(is_pow2(1));
        assert!(is_pow2(64));
        assert!(!is_pow2(0));
        assert!(!is_pow2(-8));
        assert!(!is_pow2(12));
    }

    #[test]
    fn test_count_true() {
        assert_eq!(count_true(&[true, false, true, true]), 3);
        assert_eq!(count_true(&[]), 0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp_min(-3.0, 0.0), 0.0);
        assert_eq!(clamp_max(3.0, 1.0), 1.0);
        assert_eq!(clamp_i32(7, 0, 5), 5);
        assert_eq!(clamp_byte(300), 255);
        assert_eq!(clamp_byte(-4), 0);
    }

    #[test]
    fn test_ceil_floor_to_int() {
        assert_eq!(ceil_to_int(1.2), 2);
        assert_eq!(ceil_to_int(2.0), 2);
        assert_eq!(ceil_to_int(-1.5), -1);
        assert_eq!(floor_to_int(1.7), 1);
        assert_eq!(floor_to_int(-1.2), -2);
        assert_eq!(floor_to_int(-3.0), -3);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round_to_int(2.5), 2);
        assert_eq!(round_to_int(3.5), 4);
        assert_eq!(round_to_int(-2.5), -2);
        assert_eq!(round(1.25, 1), 1.2);
        assert_eq!(round(1.35, 1), 1.4);
    }

    #[test]
    fn test_ceil_to_pow2() {
        assert_eq!(ceil_to_pow2(0.5, 1), 1.0);
        assert_eq!(ceil_to_pow2(1.0, 1), 1.0);
        assert_eq!(ceil_to_pow2(3.0, 1), 4.0);
        assert_eq!(ceil_to_pow2(4.0, 1), 4.0);
        assert_eq!(ceil_to_pow2(4.5, 1), 8.0);
        assert_eq!(ceil_to_pow2(5.0, 16), 16.0);
        assert_eq!(ceil_to_pow2(100.0, 1), 128.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(5.0, 0.0, 10.0), 5.0);
        assert_eq!(wrap(-2.0, 0.0, 10.0), 8.0);
        assert_eq!(wrap(10.0, 0.0, 10.0), 0.0);
        assert_eq!(wrap(12.0, 0.0, 10.0), 2.0);
        assert_eq!(wrap(0.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_sign_of_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
        assert!((rad_to_deg(HALF_PI) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_log_base() {
        assert!((log_base(8.0, 2.0) - 3.0).abs() < 1e-6);
        assert!((atan2(1.0, 0.0) - HALF_PI).abs() < 1e-6);
    }
}
