//! The seam between recorded sketches and whatever actually draws them.

use crate::color::Rgba;
use crate::vector::Vector;

use super::path::{ArcOp, PathOp};

/// A canvas-like drawing target.
///
/// Implementations forward these calls to a real surface (an HTML canvas, a
/// raster library, an SVG writer). A stroke is always replayed as
/// `begin_path`, its operations, then `stroke`.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, pos: Vector);
    fn line_to(&mut self, pos: Vector);
    fn arc(&mut self, arc: &ArcOp);
    /// Stroke the current path. `None` keeps the surface's own stroke style.
    fn stroke(&mut self, color: Option<&Rgba>);
}

/// Send one operation to `surface`.
pub fn apply_op<S: Surface + ?Sized>(surface: &mut S, op: &PathOp) {
    match op {
        PathOp::MoveTo(p) => surface.move_to(*p),
        PathOp::LineTo(p) => surface.line_to(*p),
        PathOp::Arc(arc) => surface.arc(arc),
    }
}
