//! Angle helpers operating on plain radians.
//!
//! Angles are bare `f64`s. [`normalize_angle`] folds a value back into
//! `[-TAU/2, TAU/2]` by correcting at most one full turn: it is not a modulo,
//! so inputs further out stay out of range.

use crate::defaults;

/// One full turn in radians
pub const TAU: f64 = std::f64::consts::TAU;

const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;

/// Fold `x` by at most one turn toward `[-TAU/2, TAU/2]`.
pub fn normalize_angle(x: f64) -> f64 {
    if x > TAU / 2.0 {
        x - TAU
    } else if x < -TAU / 2.0 {
        x + TAU
    } else {
        x
    }
}

/// Sum of two angles, normalized
pub fn add_angles(a: f64, b: f64) -> f64 {
    normalize_angle(a + b)
}

/// Signed turn from `a` to `b`, normalized (`b - a`).
pub fn subtract_angles(a: f64, b: f64) -> f64 {
    normalize_angle(b - a)
}

pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * DEGREES_PER_RADIAN
}

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg / DEGREES_PER_RADIAN
}

/// True when the angles differ by less than [`defaults::ANGLE_EPSILON`].
pub fn are_angles_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < defaults::ANGLE_EPSILON
}

/// Fraction of a full turn, truncated (floored) to two decimals.
///
/// `taus(TAU / 4.0) == 0.25`, `taus(-0.001) == -0.01`.
pub fn taus(rad: f64) -> f64 {
    ((rad / TAU) * 100.0).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    // ==================== normalize_angle ====================

    #[test]
    fn normalize_keeps_in_range_values() {
        for x in [0.0, 1.0, -1.0, PI, -PI, PI - 1e-9, -PI + 1e-9, 3.0, -3.0] {
            assert_eq!(normalize_angle(x), x);
        }
    }

    #[test]
    fn normalize_corrects_one_turn_over() {
        let got = normalize_angle(TAU / 2.0 + 0.1);
        assert!((got - (0.1 - TAU / 2.0)).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn normalize_corrects_one_turn_under() {
        let got = normalize_angle(-TAU / 2.0 - 0.1);
        assert!((got - (TAU / 2.0 - 0.1)).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn normalize_is_not_a_modulo() {
        // Three turns out only gets one turn of correction.
        let x = 3.0 * TAU + 0.5;
        assert_eq!(normalize_angle(x), x - TAU);
        assert!(normalize_angle(x) > TAU / 2.0);
    }

    // ==================== add / subtract ====================

    #[test]
    fn add_angles_wraps() {
        let got = add_angles(3.0, 1.0);
        assert!((got - (4.0 - TAU)).abs() < 1e-12);
        assert_eq!(add_angles(0.25, 0.5), 0.75);
    }

    #[test]
    fn subtract_angles_is_turn_from_a_to_b() {
        assert_eq!(subtract_angles(1.0, 1.5), 0.5);
        assert_eq!(subtract_angles(1.5, 1.0), -0.5);
        // Crossing the seam takes the short way round.
        let got = subtract_angles(3.0, -3.0);
        assert!((got - (TAU - 6.0)).abs() < 1e-12, "got {got}");
    }

    // ==================== conversions ====================

    #[test]
    fn degree_conversions() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((degrees_to_radians(radians_to_degrees(1.234)) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn angles_equal_within_epsilon() {
        assert!(are_angles_equal(1.0, 1.0 + 1e-11));
        assert!(!are_angles_equal(1.0, 1.0 + 1e-9));
        assert!(are_angles_equal(PI, PI));
    }

    #[test]
    fn taus_truncates_to_hundredths() {
        assert_eq!(taus(0.0), 0.0);
        assert_eq!(taus(TAU / 4.0), 0.25);
        assert_eq!(taus(TAU), 1.0);
        assert_eq!(taus(TAU * 0.999), 0.99);
        assert_eq!(taus(-0.001), -0.01);
    }
}
