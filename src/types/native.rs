// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Native, vendor-specific bulb properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::Value;

/// A raw property on the physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NativeProperty {
    /// `on`: power state.
    On,
    /// `brightness`: 0-254.
    Brightness,
    /// `hue`: 0-65535.
    Hue,
    /// `saturation`: 0-254.
    Saturation,
    /// `colorTemp`: 153-500 mireds.
    ColorTemp,
    /// `colorMode`: `ct`, `hs` or `xy`.
    ColorMode,
    /// `xy`: CIE 1931 chromaticity pair.
    Xy,
    /// `transitionTime`: seconds.
    TransitionTime,
    /// `alert`: `none`, `select` or `lselect`.
    Alert,
    /// `effect`: `none` or `colorloop`.
    Effect,
}

impl NativeProperty {
    /// Returns the property identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Brightness => "brightness",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::ColorTemp => "colorTemp",
            Self::ColorMode => "colorMode",
            Self::Xy => "xy",
            Self::TransitionTime => "transitionTime",
            Self::Alert => "alert",
            Self::Effect => "effect",
        }
    }
}

impl fmt::Display for NativeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive raw range of a numeric native property.
///
/// Converting to a fraction is `(raw - min) / (max - min)`; converting back
/// is `ceil(min + fraction * (max - min))`. The upward rounding is what
/// existing firmware expects and must not be changed to round-to-nearest.
///
/// # Examples
///
/// ```
/// use huelight_lib::types::NativeRange;
///
/// assert_eq!(NativeRange::BRIGHTNESS.from_fraction(0.5), 127.0);
/// assert_eq!(NativeRange::COLOR_TEMP.from_fraction(0.0), 153.0);
/// assert_eq!(NativeRange::COLOR_TEMP.to_fraction(500.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeRange {
    min: f64,
    max: f64,
}

impl NativeRange {
    /// `brightness` range.
    pub const BRIGHTNESS: Self = Self::new(0.0, 254.0);

    /// `saturation` range.
    pub const SATURATION: Self = Self::new(0.0, 254.0);

    /// `hue` range.
    pub const HUE: Self = Self::new(0.0, 65535.0);

    /// `colorTemp` range in mireds (~6500K to 2000K).
    pub const COLOR_TEMP: Self = Self::new(153.0, 500.0);

    /// Creates a new range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Converts a raw value to a fraction of the range.
    #[must_use]
    pub fn to_fraction(&self, raw: f64) -> f64 {
        (raw - self.min) / (self.max - self.min)
    }

    /// Converts a fraction to a raw value, rounding up.
    #[must_use]
    pub fn from_fraction(&self, fraction: f64) -> f64 {
        (self.min + fraction * (self.max - self.min)).ceil()
    }
}

/// Native color mode reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color temperature.
    Ct,
    /// Hue / saturation.
    Hs,
    /// CIE xy.
    Xy,
}

impl ColorMode {
    /// Returns the mode identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ct => "ct",
            Self::Hs => "hs",
            Self::Xy => "xy",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ct" => Ok(Self::Ct),
            "hs" => Ok(Self::Hs),
            "xy" => Ok(Self::Xy),
            _ => Err(ValueError::InvalidColorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alert {
    /// No alert.
    #[default]
    None,
    /// Single breathe cycle.
    Select,
    /// Breathe cycles for about fifteen seconds.
    LongSelect,
}

impl Alert {
    /// Returns the native alert value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Select => "select",
            Self::LongSelect => "lselect",
        }
    }
}

impl From<Alert> for Value {
    fn from(value: Alert) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

/// Dynamic light effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// No effect.
    #[default]
    None,
    /// Cycle through all hues.
    ColorLoop,
}

impl Effect {
    /// Returns the native effect value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ColorLoop => "colorloop",
        }
    }
}

impl From<Effect> for Value {
    fn from(value: Effect) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names() {
        assert_eq!(NativeProperty::ColorTemp.as_str(), "colorTemp");
        let json = serde_json::to_string(&NativeProperty::TransitionTime).unwrap();
        assert_eq!(json, r#""transitionTime""#);
    }

    #[test]
    fn range_bounds() {
        assert_eq!(NativeRange::HUE.from_fraction(1.0), 65535.0);
        assert_eq!(NativeRange::HUE.from_fraction(0.0), 0.0);
        assert_eq!(NativeRange::SATURATION.to_fraction(254.0), 1.0);
        assert_eq!(NativeRange::COLOR_TEMP.to_fraction(153.0), 0.0);
    }

    #[test]
    fn range_rounds_up() {
        // 0.1 * 254 = 25.400000000000002
        assert_eq!(NativeRange::BRIGHTNESS.from_fraction(0.1), 26.0);
        assert_eq!(NativeRange::COLOR_TEMP.from_fraction(0.5), 327.0);
    }

    #[test]
    fn color_mode_strings() {
        assert_eq!("hs".parse::<ColorMode>(), Ok(ColorMode::Hs));
        assert_eq!(ColorMode::Ct.to_string(), "ct");
        assert_eq!(
            "rgb".parse::<ColorMode>(),
            Err(ValueError::InvalidColorMode("rgb".to_string()))
        );
    }

    #[test]
    fn alert_and_effect_values() {
        assert_eq!(Value::from(Alert::LongSelect), Value::from("lselect"));
        assert_eq!(Value::from(Effect::ColorLoop), Value::from("colorloop"));
    }
}
