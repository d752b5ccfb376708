//! Default parameters for series truncation, comparisons and curve colors

/// Number of Fresnel series terms used when the caller does not pick one
pub const CLOTHOID_TERMS: usize = 3;

/// Fraction of a clothoid traversed when the caller does not pick one
pub const CLOTHOID_PERCENT: f64 = 1.0;

/// Tolerance for [`are_angles_equal`](crate::angle::are_angles_equal)
pub const ANGLE_EPSILON: f64 = 1e-10;

/// Hue degrees advanced per unit of curve parameter in colored curves
pub const CURVE_COLOR_SCALE: f64 = 50.0;

/// LCH lightness of colored curve segments
pub const CURVE_LIGHTNESS: f64 = 50.0;

/// LCH chroma of colored curve segments
pub const CURVE_CHROMA: f64 = 230.0;

/// Opacity used when a color is converted without one
pub const OPACITY: f64 = 1.0;
