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

// extern crate we're testing, same as any other code would do.
extern crate bearing_lines;

use angle_sc::is_within_tolerance;
use bearing_lines::*;
use claims::{assert_err_eq, assert_matches, assert_none, assert_ok};

#[test]
fn test_triangulate_position_from_three_bearings() {
    // Three observers take bearings on the same landmark, the intersections
    // of each pair of bearing lines form a "cocked hat" around it.
    let observers = [
        BearingLine::new(Degrees(51.8853), Degrees(0.2545), Degrees(108.55), Degrees(0.0))
            .unwrap(),
        BearingLine::new(Degrees(49.0034), Degrees(2.5735), Degrees(32.44), Degrees(0.0))
            .unwrap(),
        BearingLine::new(Degrees(52.0), Degrees(8.0), Degrees(240.0), Degrees(0.0)).unwrap(),
    ];

    let policy = IntersectionPolicy::default().with_suppress_greater_than(Some(1_000.0));
    let mut fixes = Vec::new();
    for (i, a) in observers.iter().enumerate() {
        for b in &observers[i + 1..] {
            if let Some(point) = assert_ok!(a.get_intersection(b, &policy)) {
                fixes.push(point);
            }
        }
    }
    assert_eq!(3, fixes.len());

    let bbox = assert_ok!(bounding_box(&fixes));
    for fix in &fixes {
        assert!(bbox.contains(fix));
    }
    assert!(bbox.min_lat < bbox.max_lat);
    assert!(bbox.min_lon < bbox.max_lon);
}

#[test]
fn test_intersection_distances() {
    let a = BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(45.0), Degrees(0.0)).unwrap();
    let b = BearingLine::new(Degrees(0.0), Degrees(10.0), Degrees(315.0), Degrees(0.0)).unwrap();

    let point = assert_ok!(a.intersect(&b));

    // the intersection of a symmetric wedge is equidistant from the origins
    let a_to_point = assert_ok!(a.distance_to(&point));
    let b_to_point = assert_ok!(b.distance_to(&point));
    assert!(is_within_tolerance(a_to_point, b_to_point, 1e-6));
    assert!(is_within_tolerance(784.283_068, a_to_point, 1e-3));

    // distance_to does not round, haversine_distance does
    let a_to_point_rounded = haversine_distance(&a.origin(), &point);
    assert!(is_within_tolerance(a_to_point, a_to_point_rounded, 5e-5));
    assert_eq!(a_to_point_rounded, point.distance(&a.origin()));

    let nm = point.distance_nm(&a.origin());
    assert!(is_within_tolerance(a_to_point * 1000.0 / 1852.0, nm.0, 1e-6));
}

#[test]
fn test_no_result_outcomes() {
    let a = BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(0.0), Degrees(0.0)).unwrap();
    let same_origin =
        BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(90.0), Degrees(0.0)).unwrap();
    let opposite =
        BearingLine::new(Degrees(0.0), Degrees(10.0), Degrees(180.0), Degrees(0.0)).unwrap();

    assert_err_eq!(a.intersect(&same_origin), Error::IdenticalInputPoint);
    assert_err_eq!(a.intersect(&opposite), Error::AmbiguousIntersection);

    // callers that want "no result" instead of an error
    assert_none!(a.intersect(&same_origin).ok());
    assert_none!(a.intersect(&opposite).ok());

    let policy = IntersectionPolicy::default().with_ignore_errors(true);
    assert_none!(assert_ok!(a.get_intersection(&same_origin, &policy)));
    assert_none!(assert_ok!(a.get_intersection(&opposite, &policy)));
}

#[test]
fn test_invalid_values() {
    assert_matches!(
        BearingLine::new(Degrees(0.0), Degrees(0.0), Degrees(360.0), Degrees(0.0)),
        Err(Error::Validation(ValidationError {
            field: Field::Bearing,
            kind: ValidationErrorKind::OutOfRange { .. }
        }))
    );
    assert_matches!(
        Point::new(Degrees(f64::NAN), Degrees(0.0)),
        Err(Error::Validation(ValidationError {
            field: Field::Latitude,
            kind: ValidationErrorKind::NotFinite(_)
        }))
    );

    let error = Point::new(Degrees(0.0), Degrees(180.0001)).unwrap_err();
    assert_eq!(
        "longitude must be between -180 and 180 degrees, got 180.0001",
        error.to_string()
    );
}

#[test]
fn test_lat_long_interoperability() {
    let lat_long = LatLong::new(Degrees(-33.9), Degrees(151.2));
    let origin = assert_ok!(Point::try_from(&lat_long));
    let line = assert_ok!(BearingLine::from_point(&origin, Degrees(120.0), Degrees(0.0)));
    let other = assert_ok!(BearingLine::new(
        Degrees(-37.8),
        Degrees(144.9),
        Degrees(80.0),
        Degrees(0.0)
    ));

    let point = assert_ok!(line.intersect(&other));
    let result = LatLong::from(point);
    assert!(is_within_tolerance(-35.81784, result.lat().0, 1e-5));
    assert!(is_within_tolerance(155.45201, result.lon().0, 1e-5));
}
