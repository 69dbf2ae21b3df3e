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

//! bearing-lines
//!
//! A library for calculating where a pair of bearing lines cross on the
//! surface of a spherical Earth, see *Figure 1*.
//!
//! <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/c/cb/Illustration_of_great-circle_distance.svg/500px-Illustration_of_great-circle_distance.svg.png" width="400">
//!
//! *Figure 1 A great circle arc between two points on a sphere
//! [CheCheDaWaff](https://commons.wikimedia.org/wiki/User:CheCheDaWaff), [CC BY-SA 4.0](https://creativecommons.org/licenses/by-sa/4.0), via Wikimedia Commons*
//!
//! ## Bearing lines
//!
//! A `BearingLine` is a ray along a [great circle](https://en.wikipedia.org/wiki/Great_circle):
//! it starts at an origin (latitude and longitude) and heads along a bearing,
//! measured clockwise from North. A magnetic bearing is corrected to a true
//! bearing by adding the magnetic declination at the origin.
//!
//! The intersection of two `BearingLine`s is found by solving the spherical
//! triangle formed by their origins and the intersection point, using the
//! method in Ed Williams' [Aviation Formulary](https://www.edwilliams.org/avform147.htm#Intersection).
//!
//! Some configurations do not have a single intersection:
//!
//! - the origins are identical, see `Error::IdenticalInputPoint`;
//! - the lines lie on top of each other, see `Error::InfiniteIntersection`;
//! - the lines point away from each other, see `Error::AmbiguousIntersection`.
//!
//! Nearly parallel lines have a mathematically valid intersection almost a
//! hemisphere away. An `IntersectionPolicy` selects whether such "probable
//! divergence" is an error, no result or the distant point, and may also limit
//! how far from the origins an intersection may be.
//!
//! ## Design
//!
//! All values are validated on construction: a `Point` or `BearingLine`
//! with a latitude, longitude, bearing or declination out of range cannot
//! exist. Angles are accepted and returned in `Degrees`; the calculations are
//! performed in radians using the "safe" inverse trigonometric functions in
//! the `trig` module, which clamp their arguments to remove rounding errors.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians` and clamp values to the range of sines and cosines;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`,
//!   which `Point`s convert to and from;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! # Examples
//! ```
//! use bearing_lines::*;
//!
//! let a = BearingLine::new(Degrees(51.8853), Degrees(0.2545), Degrees(108.55), Degrees(0.0)).unwrap();
//! let b = BearingLine::new(Degrees(49.0034), Degrees(2.5735), Degrees(32.44), Degrees(0.0)).unwrap();
//!
//! let point = a.intersect(&b).unwrap();
//! assert_eq!(50.90761, point.lat().0);
//! assert_eq!(4.50857, point.lon().0);
//!
//! // No result if the intersection is more than 100 km from either origin.
//! let policy = IntersectionPolicy::default().with_suppress_greater_than(Some(100.0));
//! assert_eq!(None, a.get_intersection(&b, &policy).unwrap());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod error;
pub mod geo;
pub mod intersection;
pub mod trig;

pub use angle_sc::{Degrees, Radians, Validate};
pub use error::{Error, Field, Result, ValidationError, ValidationErrorKind};
pub use geo::{bounding_box, haversine_distance, haversine_distance_nm, BoundingBox};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use intersection::IntersectionPolicy;
pub use unit_sphere::LatLong;

use core::fmt;

/// The valid range of a latitude in degrees.
const LATITUDE_LIMIT: f64 = 90.0;
/// The valid range of a longitude or declination in degrees.
const LONGITUDE_LIMIT: f64 = 180.0;
/// A bearing must be less than a full turn.
const FULL_TURN: f64 = 360.0;

/// Check that `value` is finite and within `min..=max`,
/// or `min..max` if `max_inclusive` is false.
fn validate(field: Field, value: f64, min: f64, max: f64, max_inclusive: bool) -> Result<Degrees> {
    let kind = if !value.is_finite() {
        ValidationErrorKind::NotFinite(value)
    } else if value < min || max < value || (!max_inclusive && max <= value) {
        ValidationErrorKind::OutOfRange { value, min, max }
    } else {
        return Ok(Degrees(value));
    };
    Err(Error::Validation(ValidationError { field, kind }))
}

/// Validate a latitude: -90° <= `lat` <= 90°.
fn validate_latitude(lat: Degrees) -> Result<Degrees> {
    validate(Field::Latitude, lat.0, -LATITUDE_LIMIT, LATITUDE_LIMIT, true)
}

/// Validate a longitude: -180° <= `lon` <= 180°.
fn validate_longitude(lon: Degrees) -> Result<Degrees> {
    validate(
        Field::Longitude,
        lon.0,
        -LONGITUDE_LIMIT,
        LONGITUDE_LIMIT,
        true,
    )
}

/// Validate a bearing: 0° <= `bearing` < 360°.
fn validate_bearing(bearing: Degrees) -> Result<Degrees> {
    validate(Field::Bearing, bearing.0, 0.0, FULL_TURN, false)
}

/// Validate a magnetic declination: -180° <= `declination` <= 180°.
fn validate_declination(declination: Degrees) -> Result<Degrees> {
    validate(
        Field::Declination,
        declination.0,
        -LONGITUDE_LIMIT,
        LONGITUDE_LIMIT,
        true,
    )
}

/// A position on the surface of the Earth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The latitude: -90° <= lat <= 90°.
    lat: Degrees,
    /// The longitude: -180° <= lon <= 180°.
    lon: Degrees,
}

impl Validate for Point {
    /// Test whether a `Point` is valid.
    /// Whether -90° <= `lat` <= 90° and -180° <= `lon` <= 180°.
    fn is_valid(&self) -> bool {
        validate_latitude(self.lat).is_ok() && validate_longitude(self.lon).is_ok()
    }
}

impl Point {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if either value is not finite or out of range.
    pub fn new(lat: Degrees, lon: Degrees) -> Result<Self> {
        Ok(Self {
            lat: validate_latitude(lat)?,
            lon: validate_longitude(lon)?,
        })
    }

    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Set the latitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `lat` is invalid, the `Point` is unchanged.
    pub fn set_lat(&mut self, lat: Degrees) -> Result<()> {
        self.lat = validate_latitude(lat)?;
        Ok(())
    }

    /// Set the longitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `lon` is invalid, the `Point` is unchanged.
    pub fn set_lon(&mut self, lon: Degrees) -> Result<()> {
        self.lon = validate_longitude(lon)?;
        Ok(())
    }

    /// The haversine distance to another `Point` in kilometres,
    /// rounded to 4 decimal places.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        geo::haversine_distance(self, other)
    }

    /// The haversine distance to another `Point` in `NauticalMiles`.
    #[must_use]
    pub fn distance_nm(&self, other: &Self) -> NauticalMiles {
        geo::haversine_distance_nm(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat.0, self.lon.0)
    }
}

impl From<Point> for LatLong {
    fn from(point: Point) -> Self {
        Self::new(point.lat, point.lon)
    }
}

impl TryFrom<&LatLong> for Point {
    type Error = Error;

    fn try_from(lat_long: &LatLong) -> Result<Self> {
        Self::new(lat_long.lat(), lat_long.lon())
    }
}

/// The target of a distance calculation from a `BearingLine` origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target<'a> {
    /// The origin of another `BearingLine`.
    Line(&'a BearingLine),
    /// A `Point`.
    Point(&'a Point),
    /// A latitude and longitude, validated like a `Point`.
    Coordinates(Degrees, Degrees),
}

impl<'a> From<&'a BearingLine> for Target<'a> {
    fn from(line: &'a BearingLine) -> Self {
        Self::Line(line)
    }
}

impl<'a> From<&'a Point> for Target<'a> {
    fn from(point: &'a Point) -> Self {
        Self::Point(point)
    }
}

impl From<(Degrees, Degrees)> for Target<'_> {
    fn from(coordinates: (Degrees, Degrees)) -> Self {
        Self::Coordinates(coordinates.0, coordinates.1)
    }
}

/// A ray along a great circle from an origin on a bearing.
///
/// The true bearing is the bearing plus the magnetic declination. It is not
/// normalised, e.g. a bearing of 355° with a declination of 10° has a true
/// bearing of 365°; the intersection calculations are performed modulo 2π.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BearingLine {
    /// The origin latitude: -90° <= lat <= 90°.
    lat: Degrees,
    /// The origin longitude: -180° <= lon <= 180°.
    lon: Degrees,
    /// The bearing: 0° <= bearing < 360°.
    bearing: Degrees,
    /// The magnetic declination: -180° <= declination <= 180°.
    declination: Degrees,

    /// The bearing plus the declination.
    true_bearing: Degrees,
    /// The origin latitude in radians.
    lat_radians: Radians,
    /// The origin longitude in radians.
    lon_radians: Radians,
    /// The true bearing in radians.
    true_bearing_radians: Radians,
}

impl Validate for BearingLine {
    /// Test whether a `BearingLine` is valid.
    /// Whether its origin is a valid `Point`, 0° <= `bearing` < 360° and
    /// -180° <= `declination` <= 180°.
    fn is_valid(&self) -> bool {
        self.origin().is_valid()
            && validate_bearing(self.bearing).is_ok()
            && validate_declination(self.declination).is_ok()
    }
}

impl BearingLine {
    /// Constructor.
    /// * `lat` - the origin latitude.
    /// * `lon` - the origin longitude.
    /// * `bearing` - the bearing from North.
    /// * `declination` - the magnetic declination, zero for a true bearing.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if any value is not finite or out of range.
    pub fn new(lat: Degrees, lon: Degrees, bearing: Degrees, declination: Degrees) -> Result<Self> {
        let lat = validate_latitude(lat)?;
        let lon = validate_longitude(lon)?;
        let bearing = validate_bearing(bearing)?;
        let declination = validate_declination(declination)?;
        let true_bearing = Degrees(bearing.0 + declination.0);
        Ok(Self {
            lat,
            lon,
            bearing,
            declination,
            true_bearing,
            lat_radians: Radians(lat.0.to_radians()),
            lon_radians: Radians(lon.0.to_radians()),
            true_bearing_radians: Radians(true_bearing.0.to_radians()),
        })
    }

    /// Construct a `BearingLine` from an origin `Point`.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `bearing` or `declination` is invalid.
    pub fn from_point(origin: &Point, bearing: Degrees, declination: Degrees) -> Result<Self> {
        Self::new(origin.lat, origin.lon, bearing, declination)
    }

    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    #[must_use]
    pub const fn bearing(&self) -> Degrees {
        self.bearing
    }

    #[must_use]
    pub const fn declination(&self) -> Degrees {
        self.declination
    }

    /// The bearing plus the declination, not normalised.
    #[must_use]
    pub const fn true_bearing(&self) -> Degrees {
        self.true_bearing
    }

    #[must_use]
    pub const fn lat_radians(&self) -> Radians {
        self.lat_radians
    }

    #[must_use]
    pub const fn lon_radians(&self) -> Radians {
        self.lon_radians
    }

    #[must_use]
    pub const fn true_bearing_radians(&self) -> Radians {
        self.true_bearing_radians
    }

    /// The origin of the `BearingLine`.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// Set the origin latitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `lat` is invalid, the `BearingLine` is unchanged.
    pub fn set_lat(&mut self, lat: Degrees) -> Result<()> {
        self.lat = validate_latitude(lat)?;
        self.lat_radians = Radians(self.lat.0.to_radians());
        Ok(())
    }

    /// Set the origin longitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `lon` is invalid, the `BearingLine` is unchanged.
    pub fn set_lon(&mut self, lon: Degrees) -> Result<()> {
        self.lon = validate_longitude(lon)?;
        self.lon_radians = Radians(self.lon.0.to_radians());
        Ok(())
    }

    /// Set the bearing, updating the true bearing.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `bearing` is invalid, the `BearingLine` is unchanged.
    pub fn set_bearing(&mut self, bearing: Degrees) -> Result<()> {
        self.bearing = validate_bearing(bearing)?;
        self.update_true_bearing();
        Ok(())
    }

    /// Set the magnetic declination, updating the true bearing.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `declination` is invalid, the `BearingLine` is unchanged.
    pub fn set_declination(&mut self, declination: Degrees) -> Result<()> {
        self.declination = validate_declination(declination)?;
        self.update_true_bearing();
        Ok(())
    }

    fn update_true_bearing(&mut self) {
        self.true_bearing = Degrees(self.bearing.0 + self.declination.0);
        self.true_bearing_radians = Radians(self.true_bearing.0.to_radians());
    }

    /// Calculate the haversine distance in kilometres from the origin of this
    /// `BearingLine` to a `Target`. The distance is not rounded.
    /// * `target` - another `BearingLine`, a `Point` or a latitude and longitude.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if the `Target` coordinates are invalid.
    ///
    /// # Examples
    /// ```
    /// use bearing_lines::{BearingLine, Degrees};
    ///
    /// let a = BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(0.0), Degrees(0.0)).unwrap();
    /// let b = BearingLine::new(Degrees(0.0), Degrees(90.0), Degrees(10.0), Degrees(0.0)).unwrap();
    ///
    /// let distance = a.distance_to(&b).unwrap();
    /// assert!((distance - 10_007.543_398).abs() < 1e-6);
    ///
    /// assert!(a.distance_to((Degrees(91.0), Degrees(0.0))).is_err());
    /// ```
    pub fn distance_to<'a>(&self, target: impl Into<Target<'a>>) -> Result<f64> {
        let (lat, lon) = match target.into() {
            Target::Line(other) => (other.lat_radians, other.lon_radians),
            Target::Point(point) => (
                Radians(point.lat.0.to_radians()),
                Radians(point.lon.0.to_radians()),
            ),
            Target::Coordinates(lat, lon) => {
                let point = Point::new(lat, lon)?;
                (
                    Radians(point.lat.0.to_radians()),
                    Radians(point.lon.0.to_radians()),
                )
            }
        };
        Ok(geo::calculate_haversine_distance(
            self.lat_radians,
            self.lon_radians,
            lat,
            lon,
        ))
    }

    /// Calculate the intersection with another `BearingLine`.
    ///
    /// The latitude and longitude of the intersection are rounded to 5
    /// decimal places. Call `.ok()` on the result for "no result" instead
    /// of an error.
    ///
    /// # Errors
    ///
    /// `Error::IdenticalInputPoint`, `Error::InfiniteIntersection` or
    /// `Error::AmbiguousIntersection` if there is no single intersection.
    pub fn intersect(&self, other: &Self) -> Result<Point> {
        intersection::calculate_intersection(self, other)
    }

    /// Calculate the intersection with another `BearingLine`, applying an
    /// `IntersectionPolicy` for distant and probably divergent intersections.
    ///
    /// returns `None` if the policy suppresses the intersection.
    ///
    /// # Errors
    ///
    /// See `intersection::get_intersection`.
    pub fn get_intersection(
        &self,
        other: &Self,
        policy: &IntersectionPolicy,
    ) -> Result<Option<Point>> {
        intersection::get_intersection(self, other, policy)
    }
}

impl fmt::Display for BearingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BearingLine: ({}, {}) at {}° true",
            self.lat.0, self.lon.0, self.true_bearing.0
        )
    }
}
