// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized light capabilities.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::NativeProperty;

/// A normalized, device-agnostic light capability.
///
/// Identifiers without a dedicated variant are kept as [`Capability::Other`]
/// so that they can still flow through the mapper.
///
/// The derived ordering follows the capability map order: `onoff`, `dim`,
/// `light_hue`, `light_saturation`, `light_temperature`, `light_mode`.
///
/// # Examples
///
/// ```
/// use huelight_lib::types::{Capability, NativeProperty};
///
/// let cap: Capability = "light_hue".parse().unwrap();
/// assert_eq!(cap, Capability::LightHue);
/// assert_eq!(cap.native_property(), Some(NativeProperty::Hue));
///
/// let other: Capability = "measure_power".parse().unwrap();
/// assert_eq!(other.native_property(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Capability {
    /// `onoff`: boolean power state.
    OnOff,
    /// `dim`: brightness fraction in [0, 1].
    Dim,
    /// `light_hue`: hue as a fraction of a full turn, [0, 1).
    LightHue,
    /// `light_saturation`: saturation fraction in [0, 1].
    LightSaturation,
    /// `light_temperature`: interpolation between the mired bounds, [0, 1].
    LightTemperature,
    /// `light_mode`: `color` or `temperature`.
    LightMode,
    /// Any capability without a defined mapping.
    Other(String),
}

impl Capability {
    /// All mapped light capabilities, in map order.
    pub const LIGHT: [Self; 6] = [
        Self::OnOff,
        Self::Dim,
        Self::LightHue,
        Self::LightSaturation,
        Self::LightTemperature,
        Self::LightMode,
    ];

    /// Returns the capability identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnOff => "onoff",
            Self::Dim => "dim",
            Self::LightHue => "light_hue",
            Self::LightSaturation => "light_saturation",
            Self::LightTemperature => "light_temperature",
            Self::LightMode => "light_mode",
            Self::Other(id) => id,
        }
    }

    /// Returns the native property backing this capability.
    #[must_use]
    pub const fn native_property(&self) -> Option<NativeProperty> {
        match self {
            Self::OnOff => Some(NativeProperty::On),
            Self::Dim => Some(NativeProperty::Brightness),
            Self::LightHue => Some(NativeProperty::Hue),
            Self::LightSaturation => Some(NativeProperty::Saturation),
            Self::LightTemperature => Some(NativeProperty::ColorTemp),
            Self::LightMode => Some(NativeProperty::ColorMode),
            Self::Other(_) => None,
        }
    }
}

impl FromStr for Capability {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "onoff" => Self::OnOff,
            "dim" => Self::Dim,
            "light_hue" => Self::LightHue,
            "light_saturation" => Self::LightSaturation,
            "light_temperature" => Self::LightTemperature,
            "light_mode" => Self::LightMode,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for Capability {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(cap) => cap,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Capability {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightMode {
    /// Hue/saturation driven color.
    Color,
    /// White color temperature.
    Temperature,
}

impl LightMode {
    /// Returns the mode identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Temperature => "temperature",
        }
    }
}

impl FromStr for LightMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "temperature" => Ok(Self::Temperature),
            _ => Err(ValueError::InvalidLightMode(s.to_string())),
        }
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_capabilities() {
        for cap in Capability::LIGHT {
            let parsed: Capability = cap.as_str().parse().unwrap();
            assert_eq!(parsed, cap);
        }
    }

    #[test]
    fn parse_unknown_capability() {
        let cap = Capability::from("alarm_motion");
        assert_eq!(cap, Capability::Other("alarm_motion".to_string()));
        assert_eq!(cap.to_string(), "alarm_motion");
    }

    #[test]
    fn ordering_follows_map_order() {
        let mut caps = vec![
            Capability::LightMode,
            Capability::Dim,
            Capability::LightTemperature,
            Capability::OnOff,
            Capability::LightSaturation,
            Capability::LightHue,
        ];
        caps.sort();
        assert_eq!(caps, Capability::LIGHT.to_vec());
    }

    #[test]
    fn native_properties() {
        assert_eq!(
            Capability::OnOff.native_property(),
            Some(NativeProperty::On)
        );
        assert_eq!(
            Capability::LightTemperature.native_property(),
            Some(NativeProperty::ColorTemp)
        );
        assert_eq!(Capability::from("other").native_property(), None);
    }

    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&Capability::LightSaturation).unwrap();
        assert_eq!(json, r#""light_saturation""#);
        let cap: Capability = serde_json::from_str(r#""dim""#).unwrap();
        assert_eq!(cap, Capability::Dim);
    }

    #[test]
    fn light_mode_strings() {
        assert_eq!("color".parse::<LightMode>(), Ok(LightMode::Color));
        assert_eq!(LightMode::Temperature.to_string(), "temperature");
        assert_eq!(
            "hs".parse::<LightMode>(),
            Err(ValueError::InvalidLightMode("hs".to_string()))
        );
    }
}
