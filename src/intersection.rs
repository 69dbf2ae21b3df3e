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

//! The `intersection` module contains functions for calculating the
//! intersection of a pair of `BearingLine`s on a spherical Earth.
//!
//! The intersection is found by solving the spherical triangle formed by the
//! two origins and the intersection point, using the method in Ed Williams'
//! [Aviation Formulary](https://www.edwilliams.org/avform147.htm#Intersection).
//!
//! The Aviation Formulary takes longitudes as positive West; the longitudes
//! of the `BearingLine`s are negated before the calculation and the
//! longitude of the intersection is negated afterwards.
//!
//! `get_intersection` applies an `IntersectionPolicy` to the result, since
//! nearly parallel bearing lines have a valid intersection that is almost a
//! hemisphere away from both origins.

#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::trig::{euclidean_modulo, normalise_radians, round_to, safe_acos, safe_asin};
use crate::{BearingLine, Degrees, Error, Point, Result};
use core::f64::consts::{PI, TAU};

/// Intersections further than this distance (in kilometres) from both
/// origins may be caused by diverging bearing lines.
/// Roughly a quarter of the Earth's circumference.
pub const PROBABLE_DIVERGENCE_DISTANCE_KM: f64 = 10_000.0;

/// Intersections are only suspected of divergence when the origins are
/// closer than this distance (in kilometres).
pub const PROBABLE_DIVERGENCE_BASELINE_KM: f64 = 10_000.0;

/// The number of decimal places of an intersection latitude and longitude.
const INTERSECTION_DECIMAL_PLACES: i32 = 5;

/// How `get_intersection` treats distant or probably divergent intersections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionPolicy {
    /// Return `Error::ProbableDivergence` if the bearing lines probably diverge.
    pub warn_probable_divergence: bool,
    /// Return no result if the bearing lines probably diverge.
    /// Takes precedence over `warn_probable_divergence`.
    pub suppress_probable_divergence: bool,
    /// Return no result if the intersection is further than this distance
    /// (in kilometres) from either origin.
    pub suppress_greater_than: Option<f64>,
    /// Return no result instead of an identical origin, infinite or
    /// ambiguous intersection error.
    pub ignore_errors: bool,
}

impl Default for IntersectionPolicy {
    /// Warn of probable divergence, do not suppress any intersection.
    fn default() -> Self {
        Self {
            warn_probable_divergence: true,
            suppress_probable_divergence: false,
            suppress_greater_than: None,
            ignore_errors: false,
        }
    }
}

impl IntersectionPolicy {
    /// A policy that returns every intersection the solver finds.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            warn_probable_divergence: false,
            suppress_probable_divergence: false,
            suppress_greater_than: None,
            ignore_errors: false,
        }
    }

    #[must_use]
    pub const fn with_warn_probable_divergence(mut self, warn: bool) -> Self {
        self.warn_probable_divergence = warn;
        self
    }

    #[must_use]
    pub const fn with_suppress_probable_divergence(mut self, suppress: bool) -> Self {
        self.suppress_probable_divergence = suppress;
        self
    }

    /// * `max_distance` - the maximum distance in kilometres, None for no limit.
    #[must_use]
    pub const fn with_suppress_greater_than(mut self, max_distance: Option<f64>) -> Self {
        self.suppress_greater_than = max_distance;
        self
    }

    #[must_use]
    pub const fn with_ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    /// Whether the policy needs the distances to the intersection, i.e.
    /// whether divergence is checked or a maximum distance is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.warn_probable_divergence
            || self.suppress_probable_divergence
            || self.suppress_greater_than.is_some()
    }
}

/// Calculate the angular distance between a pair of positions.
/// * `lat1`, `lon1`, `lat2`, `lon2` - the positions in radians.
#[must_use]
fn calculate_angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let sin_half_dlat = libm::sin((lat1 - lat2) / 2.0);
    let sin_half_dlon = libm::sin((lon1 - lon2) / 2.0);
    2.0 * safe_asin(libm::sqrt(
        sin_half_dlat * sin_half_dlat
            + libm::cos(lat1) * libm::cos(lat2) * sin_half_dlon * sin_half_dlon,
    ))
}

/// Calculate the intersection of a pair of great circle rays.
///
/// Longitudes are positive West.
/// * `lat1`, `lon1` - the first origin in radians.
/// * `crs13` - the true course from the first origin in radians.
/// * `lat2`, `lon2` - the second origin in radians.
/// * `crs23` - the true course from the second origin in radians.
///
/// returns the latitude and longitude of the intersection in radians,
/// longitude positive West.
///
/// # Errors
///
/// `Error::IdenticalInputPoint` if the origins are identical.
///
/// `Error::InfiniteIntersection` if both rays lie along the great circle
/// between the origins.
///
/// `Error::AmbiguousIntersection` if the rays are on opposite sides of the
/// great circle between the origins.
pub fn calculate_gc_intersection(
    lat1: f64,
    lon1: f64,
    crs13: f64,
    lat2: f64,
    lon2: f64,
    crs23: f64,
) -> Result<(f64, f64)> {
    if lat1 == lat2 && lon1 == lon2 {
        log::debug!("identical origins: ({lat1}, {lon1})");
        return Err(Error::IdenticalInputPoint);
    }

    let dst12 = calculate_angular_distance(lat1, lon1, lat2, lon2);

    // the courses between the origins, which origin is East of the other
    // decides which course is the reflex angle
    let (sin_lat1, cos_lat1) = (libm::sin(lat1), libm::cos(lat1));
    let (sin_lat2, cos_lat2) = (libm::sin(lat2), libm::cos(lat2));
    let (sin_dst12, cos_dst12) = (libm::sin(dst12), libm::cos(dst12));
    let acos12 = safe_acos((sin_lat2 - sin_lat1 * cos_dst12) / (sin_dst12 * cos_lat1));
    let acos21 = safe_acos((sin_lat1 - sin_lat2 * cos_dst12) / (sin_dst12 * cos_lat2));
    let (crs12, crs21) = if libm::sin(lon2 - lon1) < 0.0 {
        (acos12, 2.0 * PI - acos21)
    } else {
        (2.0 * PI - acos12, acos21)
    };

    // the angles between the rays and the great circle between the origins
    let ang1 = normalise_radians(crs13 - crs12);
    let ang2 = normalise_radians(crs21 - crs23);
    let (sin_ang1, sin_ang2) = (libm::sin(ang1), libm::sin(ang2));
    log::trace!("dst12: {dst12} crs12: {crs12} crs21: {crs21} ang1: {ang1} ang2: {ang2}");

    if sin_ang1 == 0.0 && sin_ang2 == 0.0 {
        log::debug!("infinite intersections: ang1: {ang1} ang2: {ang2}");
        return Err(Error::InfiniteIntersection);
    }
    if sin_ang1 * sin_ang2 < 0.0 {
        log::debug!("ambiguous intersection: ang1: {ang1} ang2: {ang2}");
        return Err(Error::AmbiguousIntersection);
    }

    // solve the spherical triangle
    let ang1 = libm::fabs(ang1);
    let ang2 = libm::fabs(ang2);
    let (sin_ang1, cos_ang1) = (libm::sin(ang1), libm::cos(ang1));
    let (sin_ang2, cos_ang2) = (libm::sin(ang2), libm::cos(ang2));
    let ang3 = safe_acos(-cos_ang1 * cos_ang2 + sin_ang1 * sin_ang2 * cos_dst12);
    let dst13 = libm::atan2(
        sin_dst12 * sin_ang1 * sin_ang2,
        cos_ang2 + cos_ang1 * libm::cos(ang3),
    );

    let (sin_dst13, cos_dst13) = (libm::sin(dst13), libm::cos(dst13));
    let lat3 = safe_asin(sin_lat1 * cos_dst13 + cos_lat1 * sin_dst13 * libm::cos(crs13));
    let dlon = libm::atan2(
        libm::sin(crs13) * sin_dst13 * cos_lat1,
        cos_dst13 - sin_lat1 * libm::sin(lat3),
    );
    let lon3 = euclidean_modulo(lon1 - dlon + PI, TAU) - PI;
    log::trace!("ang3: {ang3} dst13: {dst13} lat3: {lat3} lon3: {lon3}");

    Ok((lat3, lon3))
}

/// Calculate the intersection of a pair of `BearingLine`s.
/// * `a`, `b` - the `BearingLine`s.
///
/// returns the intersection `Point`, its latitude and longitude rounded to
/// 5 decimal places.
///
/// # Errors
///
/// `Error::IdenticalInputPoint`, `Error::InfiniteIntersection` or
/// `Error::AmbiguousIntersection`, see `calculate_gc_intersection`.
///
/// `Error::Validation` if the calculation does not produce a valid position,
/// e.g. an origin at a pole.
///
/// # Examples
/// ```
/// use bearing_lines::{intersection, BearingLine, Degrees, Error};
///
/// let a = BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(45.0), Degrees(0.0)).unwrap();
/// let b = BearingLine::new(Degrees(0.0), Degrees(10.0), Degrees(315.0), Degrees(0.0)).unwrap();
///
/// let point = intersection::calculate_intersection(&a, &b).unwrap();
/// assert_eq!(4.98107, point.lat().0);
/// assert_eq!(5.0, point.lon().0);
///
/// // Identical origins
/// let c = BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(90.0), Degrees(0.0)).unwrap();
/// assert_eq!(Err(Error::IdenticalInputPoint), intersection::calculate_intersection(&a, &c));
/// assert_eq!(None, intersection::calculate_intersection(&a, &c).ok());
/// ```
pub fn calculate_intersection(a: &BearingLine, b: &BearingLine) -> Result<Point> {
    let (lat, lon) = calculate_gc_intersection(
        a.lat_radians().0,
        -a.lon_radians().0,
        a.true_bearing_radians().0,
        b.lat_radians().0,
        -b.lon_radians().0,
        b.true_bearing_radians().0,
    )?;
    Point::new(
        Degrees(round_to(lat.to_degrees(), INTERSECTION_DECIMAL_PLACES)),
        Degrees(round_to((-lon).to_degrees(), INTERSECTION_DECIMAL_PLACES)),
    )
}

/// Whether an error means that there is no single intersection.
const fn is_degenerate(error: &Error) -> bool {
    matches!(
        error,
        Error::IdenticalInputPoint | Error::InfiniteIntersection | Error::AmbiguousIntersection
    )
}

/// Calculate the intersection of a pair of `BearingLine`s and apply an
/// `IntersectionPolicy` to it.
/// * `a`, `b` - the `BearingLine`s.
/// * `policy` - the `IntersectionPolicy`.
///
/// The bearing lines "probably diverge" if the intersection is further than
/// `PROBABLE_DIVERGENCE_DISTANCE_KM` from both origins while the origins are
/// closer than `PROBABLE_DIVERGENCE_BASELINE_KM`.
///
/// returns the intersection `Point` or None if the policy suppresses it.
///
/// # Errors
///
/// The errors of `calculate_intersection`, unless `policy.ignore_errors` is
/// set and the error means that there is no single intersection.
///
/// `Error::ProbableDivergence` if the bearing lines probably diverge,
/// `policy.warn_probable_divergence` is set and
/// `policy.suppress_probable_divergence` is not.
pub fn get_intersection(
    a: &BearingLine,
    b: &BearingLine,
    policy: &IntersectionPolicy,
) -> Result<Option<Point>> {
    let point = match calculate_intersection(a, b) {
        Ok(point) => point,
        Err(error) if policy.ignore_errors && is_degenerate(&error) => {
            log::debug!("ignoring intersection error: {error}");
            return Ok(None);
        }
        Err(error) => return Err(error),
    };

    if !policy.is_active() {
        return Ok(Some(point));
    }

    let a_to_point = a.distance_to(&point)?;
    let b_to_point = b.distance_to(&point)?;
    let a_to_b = a.distance_to(b)?;
    let max_to_point = a_to_point.max(b_to_point);

    if let Some(max_distance) = policy.suppress_greater_than {
        if max_distance < max_to_point {
            log::debug!("intersection {point} is {max_to_point} km away, limit {max_distance} km");
            return Ok(None);
        }
    }

    if PROBABLE_DIVERGENCE_DISTANCE_KM < a_to_point
        && PROBABLE_DIVERGENCE_DISTANCE_KM < b_to_point
        && a_to_b < PROBABLE_DIVERGENCE_BASELINE_KM
    {
        log::warn!(
            "bearing lines probably diverge: intersection {point} is {a_to_point} km and {b_to_point} km from origins {a_to_b} km apart"
        );
        if policy.suppress_probable_divergence {
            return Ok(None);
        }
        if policy.warn_probable_divergence {
            return Err(Error::ProbableDivergence);
        }
    }

    Ok(Some(point))
}
