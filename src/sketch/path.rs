//! Path builder for strokes.
//!
//! A [`PathBuilder`] records drawing operations as plain data. It keeps one
//! piece of state: whether the next [`PathBuilder::path_to`] is the first
//! point of a path (and therefore a move) or a continuation (a line).
//!
//! # Example
//!
//! ```
//! use grapher::sketch::{PathBuilder, PathOp};
//! use grapher::v;
//!
//! let mut path = PathBuilder::new();
//! path.path_to(v(0.0, 0.0));
//! path.path_to(v(10.0, 0.0));
//! path.path_to(v(10.0, 5.0));
//!
//! assert_eq!(
//!     path.ops(),
//!     &[
//!         PathOp::MoveTo(v(0.0, 0.0)),
//!         PathOp::LineTo(v(10.0, 0.0)),
//!         PathOp::LineTo(v(10.0, 5.0)),
//!     ]
//! );
//! ```

use crate::clothoid::ClothoidPath;
use crate::vector::Vector;

/// A circular arc, in the argument order of canvas-style `arc()` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOp {
    pub center: Vector,
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    pub anticlockwise: bool,
}

impl ArcOp {
    /// Point where the arc begins
    pub fn start_point(&self) -> Vector {
        self.center + Vector::polar(self.start_angle, self.radius)
    }

    /// Point where the arc ends
    pub fn end_point(&self) -> Vector {
        self.center + Vector::polar(self.end_angle, self.radius)
    }
}

/// One drawing operation within a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vector),
    LineTo(Vector),
    Arc(ArcOp),
}

/// Records [`PathOp`]s for a single stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct PathBuilder {
    ops: Vec<PathOp>,
    /// True until `path_to` has emitted the opening move
    is_first: bool,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            is_first: true,
        }
    }

    /// Make the next `path_to` open a new subpath with a move.
    pub fn start_path(&mut self) {
        self.is_first = true;
    }

    /// Move to `pos` if this is the first point of the path, else line to it.
    pub fn path_to(&mut self, pos: Vector) {
        if self.is_first {
            self.ops.push(PathOp::MoveTo(pos));
            self.is_first = false;
        } else {
            self.ops.push(PathOp::LineTo(pos));
        }
    }

    pub fn move_to(&mut self, pos: Vector) {
        self.ops.push(PathOp::MoveTo(pos));
    }

    pub fn line_to(&mut self, pos: Vector) {
        self.ops.push(PathOp::LineTo(pos));
    }

    pub fn arc_to(&mut self, center: Vector, radius: f64, from: f64, to: f64, anticlockwise: bool) {
        self.ops.push(PathOp::Arc(ArcOp {
            center,
            radius,
            start_angle: from,
            end_angle: to,
            anticlockwise,
        }));
    }

    /// Continue the path through every sample of a placed clothoid.
    pub fn clothoid_to(&mut self, clothoid: &ClothoidPath) {
        for point in clothoid.points() {
            self.path_to(point);
        }
    }

    /// Continue the path through `points` in order.
    pub fn polyline<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vector>,
    {
        for point in points {
            self.path_to(point);
        }
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<PathOp> {
        self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clothoid::{Clothoid, Turn};
    use crate::vector::v;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn first_path_to_moves() {
        let mut path = PathBuilder::new();
        path.path_to(v(1.0, 1.0));
        path.path_to(v(2.0, 2.0));
        assert_eq!(
            path.ops(),
            &[PathOp::MoveTo(v(1.0, 1.0)), PathOp::LineTo(v(2.0, 2.0))]
        );
    }

    #[test]
    fn start_path_opens_new_subpath() {
        let mut path = PathBuilder::new();
        path.path_to(v(0.0, 0.0));
        path.path_to(v(1.0, 0.0));
        path.start_path();
        path.path_to(v(5.0, 5.0));
        path.path_to(v(6.0, 5.0));

        let moves = path
            .ops()
            .iter()
            .filter(|op| matches!(op, PathOp::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(path.ops()[2], PathOp::MoveTo(v(5.0, 5.0)));
    }

    #[test]
    fn explicit_moves_and_lines_ignore_first_flag() {
        let mut path = PathBuilder::new();
        path.line_to(v(1.0, 0.0));
        path.move_to(v(2.0, 0.0));
        path.path_to(v(3.0, 0.0));
        assert_eq!(
            path.into_ops(),
            vec![
                PathOp::LineTo(v(1.0, 0.0)),
                PathOp::MoveTo(v(2.0, 0.0)),
                PathOp::MoveTo(v(3.0, 0.0)),
            ]
        );
    }

    #[test]
    fn arc_records_endpoints() {
        let mut path = PathBuilder::new();
        path.arc_to(v(1.0, 1.0), 2.0, 0.0, FRAC_PI_2, false);
        let PathOp::Arc(arc) = path.ops()[0] else {
            panic!("expected arc, got {:?}", path.ops()[0]);
        };
        assert_eq!(arc.start_point(), v(3.0, 1.0));
        let end = arc.end_point();
        assert!((end.x - 1.0).abs() < 1e-12 && (end.y - 3.0).abs() < 1e-12);
        assert!(!arc.anticlockwise);
    }

    #[test]
    fn clothoid_to_follows_samples() {
        let clothoid = ClothoidPath::new(v(5.0, 5.0), Clothoid::new(1.0, 4.0))
            .turning(Turn::Right);
        let mut path = PathBuilder::new();
        path.clothoid_to(&clothoid);

        let points = clothoid.points();
        assert_eq!(path.ops().len(), points.len());
        assert_eq!(path.ops()[0], PathOp::MoveTo(v(5.0, 5.0)));
        assert_eq!(path.ops().last(), Some(&PathOp::LineTo(*points.last().unwrap())));
    }

    #[test]
    fn clothoid_continues_existing_path() {
        let clothoid = ClothoidPath::new(v(1.0, 0.0), Clothoid::new(1.0, 2.0));
        let mut path = PathBuilder::new();
        path.path_to(v(0.0, 0.0));
        path.clothoid_to(&clothoid);
        assert_eq!(path.ops()[1], PathOp::LineTo(v(1.0, 0.0)));
    }
}
