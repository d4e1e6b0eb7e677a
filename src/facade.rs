// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color write routing and mode-aware write suppression.
//!
//! Two policies sit between the mapper and the device:
//!
//! - [`ColorPath`] decides whether hue and saturation are written natively
//!   or converted to a CIE xy point first. Some firmware ignores hue and
//!   saturation writes entirely; the device layer resolves this quirk once
//!   and hands in a boolean.
//! - [`ModePolicy`] drops writes to channels that belong to the other light
//!   mode. Writing them makes real bulbs flip between color and temperature
//!   mode.

use crate::color::hue_sat_to_xy;
use crate::error::ColorError;
use crate::types::{Capability, Gamut, LightMode, NativeProperty, Value, XyPoint};

static TEMPERATURE_SUPPRESSES: [Capability; 2] =
    [Capability::LightHue, Capability::LightSaturation];
static COLOR_SUPPRESSES: [Capability; 1] = [Capability::LightTemperature];

/// Lookup table from light mode to the capabilities whose writes it drops.
///
/// # Examples
///
/// ```
/// use huelight_lib::ModePolicy;
/// use huelight_lib::types::{Capability, LightMode};
///
/// assert!(ModePolicy::is_suppressed(Some(LightMode::Temperature), &Capability::LightHue));
/// assert!(!ModePolicy::is_suppressed(Some(LightMode::Color), &Capability::LightHue));
/// assert!(!ModePolicy::is_suppressed(None, &Capability::LightTemperature));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy;

impl ModePolicy {
    /// Capabilities that must not be written while `mode` is active.
    #[must_use]
    pub fn suppressed(mode: LightMode) -> &'static [Capability] {
        match mode {
            LightMode::Temperature => &TEMPERATURE_SUPPRESSES,
            LightMode::Color => &COLOR_SUPPRESSES,
        }
    }

    /// Returns `true` if writing `capability` is suppressed under `mode`.
    ///
    /// Without a known mode nothing is suppressed.
    #[must_use]
    pub fn is_suppressed(mode: Option<LightMode>, capability: &Capability) -> bool {
        mode.is_some_and(|mode| Self::suppressed(mode).contains(capability))
    }
}

/// A single write to a native property.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeWrite {
    /// Target property.
    pub property: NativeProperty,
    /// Raw value.
    pub value: Value,
}

impl NativeWrite {
    /// Creates a new write.
    #[must_use]
    pub fn new(property: NativeProperty, value: impl Into<Value>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// How color is sent to a bulb.
///
/// # Examples
///
/// ```
/// use huelight_lib::ColorPath;
/// use huelight_lib::facade::NativeWrite;
/// use huelight_lib::types::{Gamut, NativeProperty, Value, XyPoint};
///
/// let path = ColorPath::from_quirk(true, Gamut::DEFAULT);
/// let write = path
///     .route(NativeProperty::Hue, Value::Number(0.0), 0.0, 1.0)
///     .unwrap();
/// assert_eq!(write, NativeWrite::new(NativeProperty::Xy, XyPoint::new(0.6987, 0.2974)));
///
/// let native = ColorPath::HueSaturation;
/// let write = native
///     .route(NativeProperty::Hue, Value::Number(0.0), 0.0, 1.0)
///     .unwrap();
/// assert_eq!(write, NativeWrite::new(NativeProperty::Hue, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorPath {
    /// Write native `hue` and `saturation`.
    #[default]
    HueSaturation,
    /// Replace hue and saturation writes with an `xy` write in `gamut`.
    Xy {
        /// Gamut the converted point is clamped into.
        gamut: Gamut,
    },
}

impl ColorPath {
    /// Selects the path from the device's xy-mode quirk flag.
    #[must_use]
    pub const fn from_quirk(uses_xy_color_mode: bool, gamut: Gamut) -> Self {
        if uses_xy_color_mode {
            Self::Xy { gamut }
        } else {
            Self::HueSaturation
        }
    }

    /// Returns `true` if writes to `property` are converted to `xy`.
    #[must_use]
    pub const fn redirects(&self, property: NativeProperty) -> bool {
        matches!(self, Self::Xy { .. })
            && matches!(property, NativeProperty::Hue | NativeProperty::Saturation)
    }

    /// Routes a native write.
    ///
    /// `hue` and `sat` are the capability fractions to use for the xy
    /// conversion; they are ignored unless the write is redirected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DegenerateGamut`] if the configured gamut is
    /// degenerate.
    pub fn route(
        &self,
        property: NativeProperty,
        value: Value,
        hue: f64,
        sat: f64,
    ) -> Result<NativeWrite, ColorError> {
        match self {
            Self::Xy { gamut } if self.redirects(property) => {
                let xy = hue_sat_to_xy(hue, sat, gamut)?;
                tracing::debug!(%property, hue, sat, %xy, "Redirecting color write to xy");
                Ok(NativeWrite::new(NativeProperty::Xy, xy))
            }
            _ => Ok(NativeWrite { property, value }),
        }
    }
}

/// Converts hue and saturation to xy in the default gamut.
///
/// # Errors
///
/// Never fails for the built-in default gamut; the `Result` mirrors
/// [`hue_sat_to_xy`].
pub fn hue_sat_to_default_xy(hue: f64, sat: f64) -> Result<XyPoint, ColorError> {
    hue_sat_to_xy(hue, sat, &Gamut::DEFAULT)
}
