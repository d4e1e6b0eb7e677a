// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hue/saturation to CIE 1931 xy conversion.
//!
//! The pipeline runs HSV (value fixed at 1) to RGB, undoes the sRGB gamma,
//! maps linear RGB to XYZ with the wide gamut matrix used by Hue bulbs,
//! projects XYZ to xy chromaticity and finally clamps the point into the
//! bulb's gamut.
//!
//! Every step is a pure function and can be used on its own.
//!
//! # Examples
//!
//! ```
//! use huelight_lib::color::hue_sat_to_xy;
//! use huelight_lib::types::{Gamut, XyPoint};
//!
//! // Pure red falls just outside the default gamut and is pulled back
//! // onto its red-green edge.
//! let xy = hue_sat_to_xy(0.0, 1.0, &Gamut::DEFAULT).unwrap();
//! assert_eq!(xy, XyPoint::new(0.6987, 0.2974));
//! ```

mod gamut;

pub use gamut::closest_in_gamut;

use crate::error::ColorError;
use crate::types::{Gamut, XyPoint};

/// An RGB triple with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
}

impl Rgb {
    /// Creates a new RGB triple.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Applies the inverse sRGB companding to every channel.
    #[must_use]
    pub fn linearized(&self) -> Self {
        Self::new(
            inverse_compand(self.red),
            inverse_compand(self.green),
            inverse_compand(self.blue),
        )
    }
}

/// CIE 1931 XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(non_snake_case)]
pub struct Xyz {
    /// X tristimulus value.
    pub X: f64,
    /// Y tristimulus value (luminance).
    pub Y: f64,
    /// Z tristimulus value.
    pub Z: f64,
}

// Wide gamut D65 matrix, rows X, Y, Z.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.664_511, 0.154_324, 0.162_028],
    [0.283_881, 0.668_433, 0.047_685],
    [0.000_088, 0.072_310, 0.986_039],
];

/// Converts hue and saturation to RGB with the value fixed at 1.
///
/// `hue` is a fraction of a full turn; it wraps, so `0.0` and `1.0` give the
/// same color. `sat` is in [0, 1].
///
/// # Examples
///
/// ```
/// use huelight_lib::color::{hue_sat_to_rgb, Rgb};
///
/// assert_eq!(hue_sat_to_rgb(0.0, 1.0), Rgb::new(1.0, 0.0, 0.0));
/// assert_eq!(hue_sat_to_rgb(0.5, 0.5), Rgb::new(0.5, 1.0, 1.0));
/// ```
#[must_use]
#[allow(clippy::many_single_char_names, clippy::cast_possible_truncation)]
pub fn hue_sat_to_rgb(hue: f64, sat: f64) -> Rgb {
    let v = 1.0;
    let c = v * sat;
    let h = hue * 6.0;
    let m = v - c;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());

    match (h.floor() as i64).rem_euclid(6) {
        0 => Rgb::new(c + m, x + m, m),
        1 => Rgb::new(x + m, c + m, m),
        2 => Rgb::new(m, c + m, x + m),
        3 => Rgb::new(m, x + m, c + m),
        4 => Rgb::new(x + m, m, c + m),
        _ => Rgb::new(c + m, m, x + m),
    }
}

/// Inverse sRGB companding of a single channel.
#[must_use]
pub fn inverse_compand(v: f64) -> f64 {
    if v > 0.040_45 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Converts linear RGB to XYZ.
#[must_use]
pub fn rgb_to_xyz(linear: Rgb) -> Xyz {
    let mix = |row: [f64; 3]| linear.red * row[0] + linear.green * row[1] + linear.blue * row[2];
    let [x, y, z] = RGB_TO_XYZ.map(mix);
    Xyz { X: x, Y: y, Z: z }
}

/// Projects XYZ onto the xy chromaticity plane.
///
/// Black (`X + Y + Z == 0`) maps to the origin.
#[must_use]
pub fn xyz_to_xy(xyz: Xyz) -> XyPoint {
    let sum = xyz.X + xyz.Y + xyz.Z;
    if sum == 0.0 {
        return XyPoint::ORIGIN;
    }
    XyPoint::new(xyz.X / sum, xyz.Y / sum)
}

/// Converts gamma encoded RGB to an xy point clamped into `gamut` and
/// rounded to four decimals.
///
/// # Errors
///
/// Returns [`ColorError::DegenerateGamut`] if the gamut primaries are
/// collinear.
pub fn rgb_to_xy(rgb: Rgb, gamut: &Gamut) -> Result<XyPoint, ColorError> {
    let xy = xyz_to_xy(rgb_to_xyz(rgb.linearized()));
    Ok(closest_in_gamut(xy, gamut)?.round4())
}

/// Converts hue and saturation to an xy point inside `gamut`.
///
/// # Errors
///
/// Returns [`ColorError::DegenerateGamut`] if the gamut primaries are
/// collinear.
pub fn hue_sat_to_xy(hue: f64, sat: f64, gamut: &Gamut) -> Result<XyPoint, ColorError> {
    rgb_to_xy(hue_sat_to_rgb(hue, sat), gamut)
}
