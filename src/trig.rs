// Copyright (c) 2024-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `trig` module contains guarded inverse trigonometric functions and a
//! floored modulo for normalising angles.
//!
//! Rounding errors can push the sine or cosine of an angle slightly outside
//! of the range [-1, 1], e.g. 1.000_000_000_000_000_2, where `asin` and `acos`
//! return `NaN`. The "safe" functions clamp their arguments first.

#![allow(clippy::float_cmp)]

use angle_sc::trig::UnitNegRange;

/// Calculate the arcsine of `x` after clamping it to the range [-1, 1].
/// * `x` - the sine of an angle, possibly with a rounding error.
///
/// returns the angle in radians, in the range [-π/2, π/2].
/// # Examples
/// ```
/// use bearing_lines::trig::safe_asin;
///
/// assert_eq!(core::f64::consts::FRAC_PI_2, safe_asin(1.000_000_1));
/// assert_eq!(0.0, safe_asin(0.0));
/// ```
#[must_use]
pub fn safe_asin(x: f64) -> f64 {
    libm::asin(UnitNegRange::clamp(x).0)
}

/// Calculate the arccosine of `x` after clamping it to the range [-1, 1].
/// * `x` - the cosine of an angle, possibly with a rounding error.
///
/// returns the angle in radians, in the range [0, π].
/// # Examples
/// ```
/// use bearing_lines::trig::safe_acos;
///
/// assert_eq!(core::f64::consts::PI, safe_acos(-1.000_000_1));
/// assert_eq!(0.0, safe_acos(1.0));
/// ```
#[must_use]
pub fn safe_acos(x: f64) -> f64 {
    libm::acos(UnitNegRange::clamp(x).0)
}

/// The remainder of `y / x` with the sign of the divisor `x`.
///
/// The `%` operator truncates, so its result has the sign of the dividend.
/// Angle normalisation into (-π, π] needs the floored form:
/// `y - x * floor(y / x)`.
/// * `y` - the dividend.
/// * `x` - the divisor.
/// # Examples
/// ```
/// use bearing_lines::trig::euclidean_modulo;
///
/// assert_eq!(2.0, euclidean_modulo(-1.0, 3.0));
/// assert_eq!(-1.0, -1.0_f64 % 3.0);
/// ```
#[must_use]
pub fn euclidean_modulo(y: f64, x: f64) -> f64 {
    y - x * libm::floor(y / x)
}

/// Normalise an angle in radians into the range [-π, π).
/// * `angle` - the angle in radians.
#[must_use]
pub fn normalise_radians(angle: f64) -> f64 {
    use core::f64::consts::{PI, TAU};
    euclidean_modulo(angle + PI, TAU) - PI
}

/// Round `value` to `places` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = libm::pow(10.0, f64::from(places));
    libm::round(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_safe_asin() {
        assert_eq!(FRAC_PI_2, safe_asin(1.000_000_1));
        assert_eq!(-FRAC_PI_2, safe_asin(-1.000_000_1));
        assert_eq!(FRAC_PI_2, safe_asin(1.0));
        assert!(is_within_tolerance(
            PI / 6.0,
            safe_asin(0.5),
            f64::EPSILON
        ));
        assert!(!safe_asin(1.000_000_1).is_nan());
    }

    #[test]
    fn test_safe_acos() {
        assert_eq!(PI, safe_acos(-1.000_000_1));
        assert_eq!(0.0, safe_acos(1.000_000_1));
        assert_eq!(FRAC_PI_2, safe_acos(0.0));
        assert!(is_within_tolerance(
            PI / 3.0,
            safe_acos(0.5),
            2.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_euclidean_modulo() {
        // sign follows the divisor
        assert_eq!(2.0, euclidean_modulo(-1.0, 3.0));
        assert_eq!(-1.0, euclidean_modulo(5.0, -3.0));
        assert_eq!(1.0, euclidean_modulo(7.0, 3.0));
        assert_eq!(0.0, euclidean_modulo(6.0, 3.0));

        // unlike the truncating remainder
        assert_eq!(-1.0, -1.0_f64 % 3.0);

        assert!(is_within_tolerance(
            PI,
            euclidean_modulo(-PI, TAU),
            f64::EPSILON
        ));
    }

    #[test]
    fn test_normalise_radians() {
        assert_eq!(0.0, normalise_radians(0.0));
        assert_eq!(-PI, normalise_radians(PI));
        assert!(is_within_tolerance(
            FRAC_PI_2,
            normalise_radians(FRAC_PI_2 + TAU),
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            -FRAC_PI_2,
            normalise_radians(3.0 * FRAC_PI_2),
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(4.98107, round_to(4.981_068_9, 5));
        assert_eq!(-175.0, round_to(-174.999_999_9, 5));
        assert_eq!(10_007.5434, round_to(10_007.543_398_010_284, 4));
        assert_eq!(0.0, round_to(0.0, 5));
    }
}
