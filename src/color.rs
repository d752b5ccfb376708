//! LCH → RGB color conversion.
//!
//! The pipeline is LCH → Lab → XYZ (D50 reference white) → linear sRGB →
//! gamma-encoded sRGB on a 0–255 scale. Channels are kept as unclamped reals:
//! out-of-gamut inputs produce values below 0 or above 255. Only the string
//! form ([`Rgba`]'s `Display`) rounds and clamps them to bytes.

use std::fmt;

use crate::angle::degrees_to_radians;
use crate::defaults;
use crate::log::warn;

/// Reference white used when scaling Lab into XYZ (D50)
pub const WHITE_POINT: Xyz = Xyz {
    x: 0.96422,
    y: 1.0,
    z: 0.82521,
};

const DELTA: f64 = 6.0 / 29.0;

/// Cylindrical Lab: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Linear (not gamma-encoded) sRGB, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB channels on a 0–255 scale plus opacity.
///
/// Displays as `rgba(R,G,B,A)` with R, G, B rounded and clamped to 0..=255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Lch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    pub fn to_lab(self) -> Lab {
        let h = degrees_to_radians(self.h);
        Lab {
            l: self.l,
            a: h.cos() * self.c,
            b: h.sin() * self.c,
        }
    }

    /// Opaque sRGB color
    pub fn to_rgb(self) -> Rgba {
        self.to_rgba(defaults::OPACITY)
    }

    pub fn to_rgba(self, opacity: f64) -> Rgba {
        let rgba = self.to_lab().to_xyz().to_linear_rgb().encode(opacity);
        if !rgba.is_in_gamut() {
            warn!(
                l = self.l,
                c = self.c,
                h = self.h,
                r = rgba.r,
                g = rgba.g,
                b = rgba.b,
                "LCH color outside sRGB gamut"
            );
        }
        rgba
    }
}

impl Lab {
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        Xyz {
            x: WHITE_POINT.x * lab_to_xyz(fx),
            y: WHITE_POINT.y * lab_to_xyz(fy),
            z: WHITE_POINT.z * lab_to_xyz(fz),
        }
    }
}

impl Xyz {
    pub fn to_linear_rgb(self) -> LinearRgb {
        let Xyz { x, y, z } = self;
        LinearRgb {
            r: 3.1338561 * x - 1.6168667 * y - 0.4906146 * z,
            g: -0.9787684 * x + 1.9161415 * y + 0.0334540 * z,
            b: 0.0719453 * x - 0.2289914 * y + 1.4052427 * z,
        }
    }
}

impl LinearRgb {
    /// Gamma-encode onto the 0–255 scale.
    pub fn encode(self, opacity: f64) -> Rgba {
        Rgba {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
            a: opacity,
        }
    }
}

impl Rgba {
    /// True when every channel already lies in `0.0..=255.0`.
    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=255.0).contains(c))
    }

    /// Channels rounded and clamped to bytes, as used by `Display`.
    pub fn to_bytes(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "rgba({},{},{},{})", r, g, b, self.a)
    }
}

/// Convert an LCH color (hue in degrees) to sRGB with the given opacity.
pub fn lch_color(l: f64, c: f64, h_degrees: f64, opacity: f64) -> Rgba {
    Lch::new(l, c, h_degrees).to_rgba(opacity)
}

/// Inverse of the Lab companding function
fn lab_to_xyz(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// sRGB transfer function, scaled to 0–255
fn linear_to_srgb(x: f64) -> f64 {
    255.0
        * if x <= 0.0031308 {
            12.92 * x
        } else {
            1.055 * x.powf(1.0 / 2.4) - 0.055
        }
}

fn to_byte(channel: f64) -> u8 {
    // NaN saturates to 0 in float-to-int casts
    channel.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== conversion pipeline ====================

    #[test]
    fn black_for_zero_lightness() {
        for h in [0.0, 45.0, 123.0, 359.0, -90.0] {
            let c = lch_color(0.0, 0.0, h, 1.0);
            assert!(c.r.abs() < 1e-9 && c.g.abs() < 1e-9 && c.b.abs() < 1e-9, "{c:?}");
            assert_eq!(c.to_string(), "rgba(0,0,0,1)");
        }
    }

    #[test]
    fn white_for_full_lightness() {
        let c = Lch::new(100.0, 0.0, 0.0).to_rgb();
        for channel in [c.r, c.g, c.b] {
            assert!((channel - 255.0).abs() < 1e-3, "{c:?}");
        }
        assert_eq!(c.to_string(), "rgba(255,255,255,1)");
    }

    #[test]
    fn mid_gray_is_neutral() {
        let c = lch_color(50.0, 0.0, 200.0, 0.5);
        assert!((c.r - 118.913).abs() < 1e-2, "{c:?}");
        assert!((c.r - c.g).abs() < 1e-4 && (c.g - c.b).abs() < 1e-4);
        assert_eq!(c.to_string(), "rgba(119,119,119,0.5)");
    }

    #[test]
    fn lab_components_follow_hue() {
        let lab = Lch::new(50.0, 10.0, 90.0).to_lab();
        assert!(lab.a.abs() < 1e-12);
        assert!((lab.b - 10.0).abs() < 1e-12);
    }

    #[test]
    fn lab_to_xyz_is_continuous_at_breakpoint() {
        let below = lab_to_xyz(DELTA);
        let above = lab_to_xyz(DELTA + 1e-12);
        assert!((below - above).abs() < 1e-9);
        assert!((below - DELTA.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn transfer_function_segments() {
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(0.0031308) - 255.0 * 12.92 * 0.0031308).abs() < 1e-9);
        assert!((linear_to_srgb(1.0) - 255.0).abs() < 1e-9);
        assert!(linear_to_srgb(-0.5) < 0.0);
    }

    // ==================== out of gamut ====================

    #[test]
    fn saturated_colors_are_not_clamped_in_channels() {
        let c = lch_color(50.0, 230.0, 0.0, 1.0);
        assert!(!c.is_in_gamut());
        assert!(c.r > 255.0, "{c:?}");
        assert!(c.g < 0.0, "{c:?}");
    }

    #[test]
    fn display_clamps_channels() {
        let c = Rgba {
            r: 406.4,
            g: -2207.9,
            b: 136.2,
            a: 1.0,
        };
        assert_eq!(c.to_bytes(), [255, 0, 136]);
        assert_eq!(c.to_string(), "rgba(255,0,136,1)");
        let nan = Rgba {
            r: f64::NAN,
            g: 0.4,
            b: 254.6,
            a: 0.25,
        };
        assert_eq!(nan.to_string(), "rgba(0,0,255,0.25)");
    }
}
