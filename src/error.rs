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

//! The `error` module contains the errors returned by this library.

use core::fmt;

/// The field of a `Point` or `BearingLine` that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Bearing,
    Declination,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Bearing => "bearing",
            Self::Declination => "declination",
        };
        f.write_str(name)
    }
}

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationErrorKind {
    /// The value is `NaN` or infinite, i.e. not a number of degrees.
    NotFinite(f64),
    /// The value is a number of degrees outside of the valid range.
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// A field value that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::NotFinite(value) => write!(
                f,
                "{} must be a finite number of decimal degrees, got {value}",
                self.field
            ),
            ValidationErrorKind::OutOfRange { value, min, max } => write!(
                f,
                "{} must be between {min} and {max} degrees, got {value}",
                self.field
            ),
        }
    }
}

/// Errors from constructing values or calculating intersections.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("the origins of both bearing lines are identical (already at the intersection)")]
    IdenticalInputPoint,

    #[error("infinite intersections, the bearing lines lie on top of each other")]
    InfiniteIntersection,

    #[error("ambiguous intersection, the bearing lines point away from each other")]
    AmbiguousIntersection,

    #[error("the bearing lines probably diverge, the intersection is more than a quarter of the Earth's circumference from both origins")]
    ProbableDivergence,

    #[error("ambiguous bounding box, the points share a minimum and maximum latitude or longitude")]
    AmbiguousBox,

    #[error("a bounding box requires at least one point")]
    EmptyInput,
}

pub type Result<T> = core::result::Result<T, Error>;
