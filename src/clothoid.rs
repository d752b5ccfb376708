//! Euler spiral (clothoid) points from a truncated Fresnel series.
//!
//! A clothoid with total turning angle `θ` and scale `r` is evaluated at a
//! fraction `p` of its length with `t = sqrt(θ)·p` and `AR = 2r·sqrt(θ)`:
//!
//! ```text
//! x = Σ_{i<L} AR·(-1)^i·t^(4i+1) / ((2i)!·(4i+1))
//! y = Σ_{i<L} AR·(-1)^i·t^(4i+3) / ((2i+1)!·(4i+3))
//! ```
//!
//! `L` (the number of terms) trades accuracy for work; no error bound is
//! computed. Non-positive angles or radii are not rejected and give NaN or
//! degenerate points.

use crate::defaults;
use crate::log::debug;
use crate::vector::{Vector, v};

/// Point on a clothoid at `percent` of its length using `terms` series terms.
pub fn clothoid(final_angle: f64, radius: f64, percent: f64, terms: usize) -> Vector {
    let ar = 2.0 * radius * final_angle.sqrt();
    let t = final_angle.sqrt() * percent;

    let mut x = 0.0;
    let mut y = 0.0;
    // (-1)^i / (2i)! and (-1)^i / (2i+1)!, built incrementally
    let mut even = 1.0;
    let mut odd = 1.0;
    for i in 0..terms {
        if i > 0 {
            let k = (2 * i) as f64;
            even = -even / ((k - 1.0) * k);
            odd = -odd / (k * (k + 1.0));
        }
        let e1 = (4 * i + 1) as i32;
        let e3 = (4 * i + 3) as i32;
        x += ar * even * t.powi(e1) / e1 as f64;
        y += ar * odd * t.powi(e3) / e3 as f64;
    }
    v(x, y)
}

/// Clothoid parameters: total turning angle, scale, and series length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clothoid {
    pub final_angle: f64,
    pub radius: f64,
    pub terms: usize,
}

impl Clothoid {
    pub fn new(final_angle: f64, radius: f64) -> Self {
        Self {
            final_angle,
            radius,
            terms: defaults::CLOTHOID_TERMS,
        }
    }

    pub fn with_terms(mut self, terms: usize) -> Self {
        self.terms = terms;
        self
    }

    pub fn point_at(&self, percent: f64) -> Vector {
        clothoid(self.final_angle, self.radius, percent, self.terms)
    }

    /// Point at the end of the curve
    pub fn end_point(&self) -> Vector {
        self.point_at(defaults::CLOTHOID_PERCENT)
    }

    /// Polyline resolution derived from arc length (`radius · final_angle`).
    pub fn num_steps(&self) -> f64 {
        self.radius * self.final_angle
    }
}

/// Which side of its starting heading a sampled clothoid bends toward.
///
/// `Left` keeps the series' positive y (left of +x when y points up);
/// `Right` mirrors it across the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    #[default]
    Left,
    Right,
}

impl Turn {
    fn y_factor(self) -> f64 {
        match self {
            Turn::Left => 1.0,
            Turn::Right => -1.0,
        }
    }
}

/// A clothoid placed in the plane and sampled into a polyline.
///
/// Each sample is `from + point_at(p) ⊙ (1, ±1)` rotated by `rotation`, for
/// `p` stepping from 0 to 1 in `1 / num_steps` increments (or 1 to 0 when
/// `reverse` is set).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothoidPath {
    pub clothoid: Clothoid,
    pub from: Vector,
    pub rotation: f64,
    pub turn: Turn,
    pub reverse: bool,
}

impl ClothoidPath {
    pub fn new(from: Vector, clothoid: Clothoid) -> Self {
        Self {
            clothoid,
            from,
            rotation: 0.0,
            turn: Turn::Left,
            reverse: false,
        }
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn turning(mut self, turn: Turn) -> Self {
        self.turn = turn;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Sampled fractions of the curve, in traversal order.
    ///
    /// Fractions `k / num_steps` below 1, then exactly 1 once (0 when
    /// reversed), so the endpoint is never duplicated. When the step count
    /// is not a positive finite number only the starting fraction is
    /// produced. A step count too small to invert still starts at 0.
    pub fn percents(&self) -> Vec<f64> {
        let num_steps = self.clothoid.num_steps();

        let mut raw = Vec::new();
        if num_steps.is_finite() && num_steps > 0.0 {
            let mut k: u64 = 0;
            loop {
                let i = k as f64 / num_steps;
                if i >= 1.0 {
                    raw.push(1.0);
                    break;
                }
                raw.push(i);
                k += 1;
            }
        } else {
            raw.push(0.0);
        }

        debug!(
            num_steps,
            samples = raw.len(),
            reverse = self.reverse,
            "clothoid sampling"
        );

        if self.reverse {
            raw.into_iter().map(|p| 1.0 - p).collect()
        } else {
            raw
        }
    }

    /// Transform a raw clothoid point into place.
    pub fn place(&self, point: Vector) -> Vector {
        let mirrored = point.multiply_vec(v(1.0, self.turn.y_factor()));
        self.from + mirrored.rotate(self.rotation)
    }

    /// The polyline approximating this clothoid.
    pub fn points(&self) -> Vec<Vector> {
        self.percents()
            .into_iter()
            .map(|p| self.place(self.clothoid.point_at(p)))
            .collect()
    }
}
