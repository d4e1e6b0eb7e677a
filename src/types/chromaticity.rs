// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CIE 1931 chromaticity points and triangular color gamuts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A point in the CIE 1931 xy chromaticity plane.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct XyPoint {
    /// x chromaticity coordinate.
    pub x: f64,
    /// y chromaticity coordinate.
    pub y: f64,
}

impl XyPoint {
    /// The origin, used for pure black.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new chromaticity point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rounds both coordinates to four decimal places, ties away from zero.
    #[must_use]
    pub fn round4(&self) -> Self {
        Self::new(
            (self.x * 10_000.0).round() / 10_000.0,
            (self.y * 10_000.0).round() / 10_000.0,
        )
    }
}

impl From<[f64; 2]> for XyPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<XyPoint> for [f64; 2] {
    fn from(value: XyPoint) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for XyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A triangular color gamut given by its red, green and blue primaries.
///
/// Serialized with the keys `r`, `g`, `b`, each an `[x, y]` pair.
///
/// # Examples
///
/// ```
/// use huelight_lib::types::{Gamut, XyPoint};
///
/// let gamut = Gamut::new(
///     XyPoint::new(0.7, 0.3),
///     XyPoint::new(0.2, 0.7),
///     XyPoint::new(0.15, 0.05),
/// );
/// assert!(gamut.validate().is_ok());
///
/// let flat = Gamut::new(
///     XyPoint::new(0.0, 0.0),
///     XyPoint::new(0.5, 0.5),
///     XyPoint::new(1.0, 1.0),
/// );
/// assert!(flat.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gamut {
    /// Red primary.
    #[serde(rename = "r")]
    pub red: XyPoint,
    /// Green primary.
    #[serde(rename = "g")]
    pub green: XyPoint,
    /// Blue primary.
    #[serde(rename = "b")]
    pub blue: XyPoint,
}

impl Gamut {
    /// Safe default gamut for bulbs that do not report their own.
    ///
    /// The corners take into account:
    /// - the maximum raw value for CurrentX and CurrentY, 65279 (0xfeff), as
    ///   defined by the ZCL, which is 0.9961 once scaled by 65536;
    /// - a division by zero on CurrentY when the xy values are translated back
    ///   to hue/saturation, hence the 0.0001 floor on y.
    pub const DEFAULT: Self = Self::new(
        XyPoint::new(0.9961, 0.0001),
        XyPoint::new(0.0, 0.9961),
        XyPoint::new(0.0, 0.0001),
    );

    /// Hue gamut A (first generation LivingColors, Bloom, Iris).
    pub const HUE_A: Self = Self::new(
        XyPoint::new(0.704, 0.296),
        XyPoint::new(0.2151, 0.7106),
        XyPoint::new(0.138, 0.08),
    );

    /// Hue gamut B (first generation Hue bulbs).
    pub const HUE_B: Self = Self::new(
        XyPoint::new(0.675, 0.322),
        XyPoint::new(0.4091, 0.518),
        XyPoint::new(0.167, 0.04),
    );

    /// Hue gamut C (current Hue color bulbs).
    pub const HUE_C: Self = Self::new(
        XyPoint::new(0.692, 0.308),
        XyPoint::new(0.17, 0.7),
        XyPoint::new(0.153, 0.048),
    );

    /// Creates a gamut from its primaries.
    ///
    /// The triangle is not checked here; see [`Gamut::validate`].
    #[must_use]
    pub const fn new(red: XyPoint, green: XyPoint, blue: XyPoint) -> Self {
        Self { red, green, blue }
    }

    /// Cross product of the edge vectors `green - red` and `blue - red`.
    ///
    /// Twice the signed area of the triangle.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let v1x = self.green.x - self.red.x;
        let v1y = self.green.y - self.red.y;
        let v2x = self.blue.x - self.red.x;
        let v2y = self.blue.y - self.red.y;
        v1x * v2y - v1y * v2x
    }

    /// Checks that the primaries span a proper triangle.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DegenerateGamut`] if the primaries are collinear
    /// or not finite.
    pub fn validate(&self) -> Result<(), ColorError> {
        let area = self.signed_area();
        if area == 0.0 || !area.is_finite() {
            return Err(ColorError::DegenerateGamut { area });
        }
        Ok(())
    }
}

impl Default for Gamut {
    fn default() -> Self {
        Self::DEFAULT
    }
}
