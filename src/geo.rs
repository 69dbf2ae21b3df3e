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

//! The `geo` module contains haversine distance and bounding box functions
//! for `Point`s on a spherical Earth.

#![allow(clippy::suboptimal_flops)]

use crate::{Error, Metres, NauticalMiles, Point, Radians, Result};

/// The mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The number of decimal places of a rounded `haversine_distance`.
const DISTANCE_DECIMAL_PLACES: i32 = 4;

/// Calculate the haversine distance between a pair of positions in radians.
/// * `lat1`, `lon1` - the first position.
/// * `lat2`, `lon2` - the second position.
///
/// returns the great circle distance in kilometres, not rounded.
#[must_use]
pub fn calculate_haversine_distance(
    lat1: Radians,
    lon1: Radians,
    lat2: Radians,
    lon2: Radians,
) -> f64 {
    let sin_half_dlat = libm::sin((lat2.0 - lat1.0) / 2.0);
    let sin_half_dlon = libm::sin((lon2.0 - lon1.0) / 2.0);
    let h = sin_half_dlat * sin_half_dlat
        + libm::cos(lat1.0) * libm::cos(lat2.0) * sin_half_dlon * sin_half_dlon;
    // h may exceed 1 by a rounding error
    let h = h.min(1.0);
    2.0 * EARTH_RADIUS_KM * libm::asin(libm::sqrt(h))
}

/// Calculate the haversine distance between a pair of `Point`s.
/// * `a`, `b` - the `Point`s.
///
/// returns the great circle distance in kilometres, rounded to 4 decimal places.
/// # Examples
/// ```
/// use bearing_lines::{haversine_distance, Degrees, Point};
///
/// let a = Point::new(Degrees(0.0), Degrees(0.0)).unwrap();
/// let b = Point::new(Degrees(0.0), Degrees(90.0)).unwrap();
/// assert_eq!(10_007.5434, haversine_distance(&a, &b));
/// ```
#[must_use]
pub fn haversine_distance(a: &Point, b: &Point) -> f64 {
    crate::trig::round_to(unrounded_distance(a, b), DISTANCE_DECIMAL_PLACES)
}

/// Calculate the haversine distance between a pair of `Point`s in
/// `NauticalMiles`.
/// * `a`, `b` - the `Point`s.
#[must_use]
pub fn haversine_distance_nm(a: &Point, b: &Point) -> NauticalMiles {
    NauticalMiles::from(Metres(unrounded_distance(a, b) * 1000.0))
}

fn unrounded_distance(a: &Point, b: &Point) -> f64 {
    calculate_haversine_distance(
        Radians(a.lat().0.to_radians()),
        Radians(a.lon().0.to_radians()),
        Radians(b.lat().0.to_radians()),
        Radians(b.lon().0.to_radians()),
    )
}

/// The minimum bounding box of a set of `Point`s, in degrees.
///
/// Longitudes are compared by value, so a box around `Point`s either side
/// of the antimeridian spans nearly the whole globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// The bounding box as a tuple: (`min_lon`, `max_lon`, `min_lat`, `max_lat`).
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lon, self.max_lon, self.min_lat, self.max_lat)
    }

    /// Whether `point` lies within the bounding box, including its edges.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_lon..=self.max_lon).contains(&point.lon().0)
            && (self.min_lat..=self.max_lat).contains(&point.lat().0)
    }
}

/// Calculate the minimum bounding box around a slice of `Point`s.
/// * `points` - the `Point`s.
///
/// # Errors
///
/// `Error::EmptyInput` if `points` is empty.
///
/// `Error::AmbiguousBox` if all the `Point`s have the same latitude or the
/// same longitude, i.e. the box would have zero area.
/// # Examples
/// ```
/// use bearing_lines::{bounding_box, Degrees, Point};
///
/// let points = [
///     Point::new(Degrees(1.0), Degrees(2.0)).unwrap(),
///     Point::new(Degrees(-3.0), Degrees(4.0)).unwrap(),
///     Point::new(Degrees(5.0), Degrees(-6.0)).unwrap(),
/// ];
/// let bbox = bounding_box(&points).unwrap();
/// assert_eq!((-6.0, 4.0, -3.0, 5.0), bbox.as_tuple());
/// ```
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;

    let mut bbox = BoundingBox {
        min_lon: first.lon().0,
        max_lon: first.lon().0,
        min_lat: first.lat().0,
        max_lat: first.lat().0,
    };
    for point in rest {
        bbox.min_lon = bbox.min_lon.min(point.lon().0);
        bbox.max_lon = bbox.max_lon.max(point.lon().0);
        bbox.min_lat = bbox.min_lat.min(point.lat().0);
        bbox.max_lat = bbox.max_lat.max(point.lat().0);
    }

    if bbox.max_lon <= bbox.min_lon || bbox.max_lat <= bbox.min_lat {
        log::debug!("ambiguous bounding box: {bbox:?}");
        Err(Error::AmbiguousBox)
    } else {
        Ok(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Degrees;
    use angle_sc::is_within_tolerance;
    use claims::{assert_err_eq, assert_ok};

    fn point(lat: f64, lon: f64) -> Point {
        Point::new(Degrees(lat), Degrees(lon)).unwrap()
    }

    #[test]
    fn test_haversine_distance_known_values() {
        // a quarter of a great circle
        assert_eq!(10_007.5434, haversine_distance(&point(0.0, 0.0), &point(0.0, 90.0)));
        // pole to pole
        assert_eq!(
            20_015.0868,
            haversine_distance(&point(90.0, 0.0), &point(-90.0, 0.0))
        );
        // London to Paris
        assert_eq!(
            343.1279,
            haversine_distance(&point(51.5, -0.12), &point(48.85, 2.35))
        );
        assert_eq!(0.0, haversine_distance(&point(12.0, 34.0), &point(12.0, 34.0)));
    }

    #[test]
    fn test_haversine_distance_symmetry() {
        let points = [
            point(0.0, 0.0),
            point(51.5, -0.12),
            point(-33.9, 151.2),
            point(89.9, 179.9),
            point(-45.0, -179.0),
            point(10.0, 180.0),
        ];
        for a in &points {
            for b in &points {
                assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
            }
        }
    }

    #[test]
    fn test_haversine_distance_antipodal() {
        // h is clamped to 1, so antipodal points are half a circumference apart
        let distance = calculate_haversine_distance(
            Radians(0.0),
            Radians(0.0),
            Radians(0.0),
            Radians(core::f64::consts::PI),
        );
        assert!(is_within_tolerance(
            core::f64::consts::PI * EARTH_RADIUS_KM,
            distance,
            1e-9
        ));
    }

    #[test]
    fn test_haversine_distance_nm() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 90.0);
        let distance = haversine_distance_nm(&a, &b);
        assert!(is_within_tolerance(
            10_007_543.398_010_284 / 1852.0,
            distance.0,
            1e-6
        ));
        assert_eq!(distance.0, a.distance_nm(&b).0);
    }

    #[test]
    fn test_bounding_box() {
        let points = [point(1.0, 2.0), point(-3.0, 4.0), point(5.0, -6.0)];
        let bbox = assert_ok!(bounding_box(&points));
        assert_eq!(-6.0, bbox.min_lon);
        assert_eq!(4.0, bbox.max_lon);
        assert_eq!(-3.0, bbox.min_lat);
        assert_eq!(5.0, bbox.max_lat);
        assert_eq!((-6.0, 4.0, -3.0, 5.0), bbox.as_tuple());

        for p in &points {
            assert!(bbox.contains(p));
        }
        assert!(!bbox.contains(&point(6.0, 0.0)));
        assert!(!bbox.contains(&point(0.0, 4.5)));
    }

    #[test]
    fn test_bounding_box_degenerate() {
        assert_err_eq!(bounding_box(&[]), Error::EmptyInput);
        assert_err_eq!(bounding_box(&[point(1.0, 2.0)]), Error::AmbiguousBox);

        // all points share a latitude
        let points = [point(10.0, 2.0), point(10.0, 4.0), point(10.0, -6.0)];
        assert_err_eq!(bounding_box(&points), Error::AmbiguousBox);

        // all points share a longitude
        let points = [point(1.0, 7.0), point(-3.0, 7.0)];
        assert_err_eq!(bounding_box(&points), Error::AmbiguousBox);
    }
}
