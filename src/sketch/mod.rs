//! Drawing instructions built from vectors, clothoids and colors
//!
//! This module is organized into submodules:
//! - `path`: `PathBuilder` and the `PathOp`s it records
//! - `surface`: the `Surface` trait strokes are replayed onto
//! - `cache`: `CurveCache` for progressively revealed curves
//!
//! A [`Sketch`] is an ordered list of [`Stroke`]s. Nothing here draws; call
//! [`Sketch::draw`] with a [`Surface`] to emit the recorded operations.

pub mod cache;
pub mod path;
pub mod surface;

pub use cache::CurveCache;
pub use path::{ArcOp, PathBuilder, PathOp};
pub use surface::{Surface, apply_op};

use crate::angle::TAU;
use crate::clothoid::ClothoidPath;
use crate::color::{Rgba, lch_color};
use crate::defaults;
use crate::log::debug;
use crate::vector::{Vector, v};

/// A path plus the color it is stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub ops: Vec<PathOp>,
    /// `None` strokes with the surface's current style
    pub color: Option<Rgba>,
}

/// Recorded strokes, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    strokes: Vec<Stroke>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Record one stroke whose path is filled in by `draw`.
    pub fn draw_curve<F>(&mut self, color: Option<Rgba>, draw: F)
    where
        F: FnOnce(&mut PathBuilder),
    {
        let mut path = PathBuilder::new();
        draw(&mut path);
        self.strokes.push(Stroke {
            ops: path.into_ops(),
            color,
        });
    }

    pub fn line(&mut self, a: Vector, b: Vector) {
        self.draw_curve(None, |path| {
            path.move_to(a);
            path.line_to(b);
        });
    }

    pub fn circle(&mut self, center: Vector, radius: f64) {
        self.draw_curve(None, |path| path.arc_to(center, radius, 0.0, TAU, false));
    }

    pub fn arc(&mut self, center: Vector, radius: f64, from: f64, to: f64, anticlockwise: bool) {
        self.draw_curve(None, |path| {
            path.arc_to(center, radius, from, to, anticlockwise)
        });
    }

    pub fn clothoid(&mut self, clothoid: &ClothoidPath) {
        self.draw_curve(None, |path| path.clothoid_to(clothoid));
    }

    /// Draw `curve` as segments whose hue advances along the parameter.
    ///
    /// Samples `p_i = at + curve(i / scale.x) ⊙ scale` for integer `i` while
    /// `i < to · scale.x`, and strokes each segment `p_{i-1} → p_i` with
    /// `lch(50, 230, (i / scale.x) · color_scale)`.
    pub fn curve_colored<F>(
        &mut self,
        at: Vector,
        scale: Vector,
        to: f64,
        curve: F,
        color_scale: f64,
    )
    where
        F: Fn(f64) -> Vector,
    {
        let end = to * scale.x;
        let mut previous = None;
        let mut i = 0.0;
        while i < end {
            let t = i / scale.x;
            let p = at + curve(t).multiply_vec(scale);
            if let Some(prev) = previous {
                let color = lch_color(
                    defaults::CURVE_LIGHTNESS,
                    defaults::CURVE_CHROMA,
                    t * color_scale,
                    defaults::OPACITY,
                );
                self.draw_curve(Some(color), |path| {
                    path.move_to(prev);
                    path.line_to(p);
                });
            }
            previous = Some(p);
            i += 1.0;
        }
        debug!(samples = i, to, "colored curve");
    }

    /// [`Sketch::curve_colored`] for the graph of `y = f(x)`, with the
    /// default hue scale.
    pub fn y_of_x_colored<F>(&mut self, at: Vector, scale: Vector, to: f64, f: F)
    where
        F: Fn(f64) -> f64,
    {
        self.curve_colored(at, scale, to, |t| v(t, f(t)), defaults::CURVE_COLOR_SCALE);
    }

    /// Replay every stroke onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for stroke in &self.strokes {
            surface.begin_path();
            for op in &stroke.ops {
                apply_op(surface, op);
            }
            surface.stroke(stroke.color.as_ref());
        }
    }
}
