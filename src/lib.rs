//! 2D plotting math and replayable drawing instructions.
//!
//! - [`vector`]: the immutable [`Vector`] value type
//! - [`angle`]: radian helpers built around [`TAU`]
//! - [`clothoid`]: Euler spiral points from a truncated Fresnel series
//! - [`color`]: LCH → sRGB conversion producing `rgba(...)` strings
//! - [`sketch`]: paths and strokes recorded as data and replayed onto a
//!   caller-supplied [`Surface`](sketch::Surface)
//!
//! ```
//! use grapher::{Clothoid, ClothoidPath, Sketch, Turn, lch_color, v};
//!
//! let spiral = ClothoidPath::new(v(20.0, 20.0), Clothoid::new(1.2, 40.0)).turning(Turn::Right);
//! let mut sketch = Sketch::new();
//! sketch.line(v(0.0, 20.0), v(20.0, 20.0));
//! sketch.clothoid(&spiral);
//! assert_eq!(sketch.len(), 2);
//!
//! assert_eq!(lch_color(0.0, 0.0, 90.0, 1.0).to_string(), "rgba(0,0,0,1)");
//! ```

pub mod angle;
pub mod clothoid;
pub mod color;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod sketch;
pub mod types;
pub mod vector;

pub use angle::{
    TAU, add_angles, are_angles_equal, degrees_to_radians, normalize_angle, radians_to_degrees,
    subtract_angles, taus,
};
pub use clothoid::{Clothoid, ClothoidPath, Turn, clothoid};
pub use color::{Lch, Rgba, lch_color};
pub use errors::{ParseVectorError, VectorError};
pub use sketch::{CurveCache, PathBuilder, PathOp, Sketch, Stroke, Surface};
pub use types::Point;
pub use vector::{Vector, v, vp};
