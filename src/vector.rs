//! Immutable 2D vector value type.
//!
//! Every operation returns a new [`Vector`]; nothing mutates in place, so
//! fluent chains like `a.add(b).rotate(t).multiply(2.0)` never alias.
//! Operations that divide by a caller-supplied quantity return
//! [`VectorError`] instead of producing infinities.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use glam::{DVec2, dvec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::radians_to_degrees;
use crate::errors::{ParseVectorError, VectorError};
use crate::types::Point;

/// A 2D vector with `f64` components.
///
/// Equality is exact component-wise comparison; use a tolerance in callers
/// that compare results of trigonometry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Shorthand for [`Vector::new`]
pub fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for [`Vector::polar`]
pub fn vp(angle: f64, radius: f64) -> Vector {
    Vector::polar(angle, radius)
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const ONE: Vector = Vector { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Vector with both components set to `value`
    pub const fn splat(value: f64) -> Self {
        Vector { x: value, y: value }
    }

    /// Vector of length `radius` pointing at `angle` radians from +x.
    pub fn polar(angle: f64, radius: f64) -> Self {
        Vector::new(angle.cos() * radius, angle.sin() * radius)
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    pub fn invert(self) -> Self {
        Vector::new(-self.x, -self.y)
    }

    pub fn invert_y(self) -> Self {
        Vector::new(self.x, -self.y)
    }

    /// Uniform scale
    pub fn multiply(self, scalar: f64) -> Self {
        Vector::new(scalar * self.x, scalar * self.y)
    }

    /// Component-wise product
    pub fn multiply_vec(self, other: Vector) -> Self {
        Vector::new(self.x * other.x, self.y * other.y)
    }

    /// `self * (1 / scalar)`; fails when `scalar` is zero.
    pub fn divide(self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.multiply(1.0 / scalar))
    }

    /// Rotate by `angle` radians (counter-clockwise when y points up).
    pub fn rotate(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self.into()).into()
    }

    // ------------------------------------------------------------------
    // Magnitude
    // ------------------------------------------------------------------

    pub fn length_sq(self) -> f64 {
        DVec2::from(self).length_squared()
    }

    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn normalize(self) -> Result<Self, VectorError> {
        self.normalize_to(1.0)
    }

    /// Vector of length `length` in the same direction.
    pub fn normalize_to(self, length: f64) -> Result<Self, VectorError> {
        let current = self.length();
        if current == 0.0 {
            return Err(VectorError::ZeroLength);
        }
        Ok(self.divide(current)?.multiply(length))
    }

    /// Stretch to at least `length`, keeping direction.
    ///
    /// A zero vector cannot be stretched and yields [`VectorError::ZeroLength`]
    /// unless it already satisfies the bound.
    pub fn min_length(self, length: f64) -> Result<Self, VectorError> {
        if self.length() < length {
            self.normalize_to(length)
        } else {
            Ok(self)
        }
    }

    /// Shrink to at most `length`, keeping direction.
    pub fn max_length(self, length: f64) -> Result<Self, VectorError> {
        if self.length() > length {
            self.normalize_to(length)
        } else {
            Ok(self)
        }
    }

    // ------------------------------------------------------------------
    // Interpolation and perpendiculars
    // ------------------------------------------------------------------

    /// Linear interpolation: `amount == 0` gives `self`, `1` gives `other`.
    pub fn mix(self, other: Vector, amount: f64) -> Self {
        Vector::new(
            (1.0 - amount) * self.x + amount * other.x,
            (1.0 - amount) * self.y + amount * other.y,
        )
    }

    pub fn midpoint(self, other: Vector) -> Self {
        self.mix(other, 0.5)
    }

    /// 90 degrees counter-clockwise: `(-y, x)`
    pub fn left(self) -> Self {
        Vector::new(-self.y, self.x)
    }

    /// 90 degrees clockwise: `(y, -x)`
    pub fn right(self) -> Self {
        Vector::new(self.y, -self.x)
    }

    /// Round each component to the nearest multiple of `step`.
    pub fn snap(self, step: f64) -> Self {
        let snap = |c: f64| (c / step).round() * step;
        Vector::new(snap(self.x), snap(self.y))
    }

    // ------------------------------------------------------------------
    // Products and projections
    // ------------------------------------------------------------------

    pub fn dot(self, other: Vector) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    /// Component of `self` along `onto`.
    pub fn project_onto(self, onto: Vector) -> Result<Self, VectorError> {
        let denom = onto.length_sq();
        if denom == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(onto.multiply(self.dot(onto) / denom))
    }

    /// `atan2(y, x)` in `[-PI, PI]`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn angle_deg(self) -> f64 {
        radians_to_degrees(self.angle())
    }

    /// `y / x`; infinite or NaN when `x == 0`.
    pub fn slope(self) -> f64 {
        self.y / self.x
    }

    // ------------------------------------------------------------------
    // Serialization forms
    // ------------------------------------------------------------------

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn from_array([x, y]: [f64; 2]) -> Self {
        Vector::new(x, y)
    }

    pub fn to_object(self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    pub fn from_object(point: Point<f64>) -> Self {
        Vector::new(point.x, point.y)
    }

    pub fn as_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.invert()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.multiply(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.multiply(self)
    }
}

/// Component-wise (Hadamard) product
impl Mul<Vector> for Vector {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        self.multiply_vec(rhs)
    }
}

// No Div impl: Vector::divide reports a zero divisor.

// ============================================================================
// Conversions
// ============================================================================

impl From<[f64; 2]> for Vector {
    fn from(arr: [f64; 2]) -> Self {
        Vector::from_array(arr)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<Point<f64>> for Vector {
    fn from(p: Point<f64>) -> Self {
        Vector::from_object(p)
    }
}

impl From<Vector> for Point<f64> {
    fn from(v: Vector) -> Self {
        v.to_object()
    }
}

impl From<DVec2> for Vector {
    fn from(d: DVec2) -> Self {
        Vector::new(d.x, d.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        v.as_dvec2()
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

/// Formats as `x:<x>, y:<y>`, the form accepted by [`FromStr`].
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{}, y:{}", self.x, self.y)
    }
}

impl FromStr for Vector {
    type Err = ParseVectorError;

    /// Parse `"x:<n>, y:<n>"`.
    ///
    /// Strict on purpose: extra components, uppercase prefixes and
    /// trailing units such as `px` are rejected rather than ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((first, second)) = s.split_once(", ") else {
            return Err(ParseVectorError::new(
                s,
                0,
                s.len(),
                "expected two components separated by \", \"",
            ));
        };
        let x = parse_component(s, first, 0, "x:")?;
        let y = parse_component(s, second, first.len() + 2, "y:")?;
        Ok(Vector::new(x, y))
    }
}

fn parse_component(
    input: &str,
    part: &str,
    offset: usize,
    prefix: &str,
) -> Result<f64, ParseVectorError> {
    let Some(number) = part.strip_prefix(prefix) else {
        let reason = if prefix == "x:" {
            "expected `x:` prefix"
        } else {
            "expected `y:` prefix"
        };
        return Err(ParseVectorError::new(input, offset, part.len(), reason));
    };
    match number.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ParseVectorError::new(
            input,
            offset + prefix.len(),
            number.len(),
            "not a number",
        )),
    }
}
