// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamically shaped values carried by capabilities and native properties.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ColorMode, LightMode, XyPoint};

/// A capability value or a native property value.
///
/// Both sides of the mapping share this type so that capabilities without a
/// defined mapping can be passed through unchanged.
///
/// Serialized untagged, so `true`, `0.5`, `[0.3, 0.3]`, `"color"` and `"ct"`
/// round-trip as plain JSON.
///
/// # Examples
///
/// ```
/// use huelight_lib::types::{LightMode, Value};
///
/// let dim = Value::from(0.5);
/// assert_eq!(dim.as_f64(), Some(0.5));
///
/// let mode = Value::from(LightMode::Temperature);
/// assert_eq!(mode.as_light_mode(), Some(LightMode::Temperature));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean, used by `onoff` / `on`.
    Bool(bool),
    /// A plain number: a fraction on the capability side, a raw value on the
    /// native side.
    Number(f64),
    /// A CIE 1931 chromaticity pair.
    Xy(XyPoint),
    /// Normalized light mode.
    LightMode(LightMode),
    /// Native color mode.
    ColorMode(ColorMode),
    /// Any other string.
    Text(String),
}

impl Value {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the light mode, also accepting its string spelling.
    #[must_use]
    pub fn as_light_mode(&self) -> Option<LightMode> {
        match self {
            Self::LightMode(mode) => Some(*mode),
            Self::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returns the native color mode, also accepting its string spelling.
    #[must_use]
    pub fn as_color_mode(&self) -> Option<ColorMode> {
        match self {
            Self::ColorMode(mode) => Some(*mode),
            Self::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returns `true` only for `Value::Bool(true)`.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<XyPoint> for Value {
    fn from(value: XyPoint) -> Self {
        Self::Xy(value)
    }
}

impl From<LightMode> for Value {
    fn from(value: LightMode) -> Self {
        Self::LightMode(value)
    }
}

impl From<ColorMode> for Value {
    fn from(value: ColorMode) -> Self {
        Self::ColorMode(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Xy(p) => write!(f, "{p}"),
            Self::LightMode(mode) => write!(f, "{mode}"),
            Self::ColorMode(mode) => write!(f, "{mode}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from(true).as_f64(), None);
        assert!(Value::from(true).is_true());
        assert!(!Value::from(1.0).is_true());
    }

    #[test]
    fn modes_from_text() {
        assert_eq!(
            Value::from("temperature").as_light_mode(),
            Some(LightMode::Temperature)
        );
        assert_eq!(Value::from("ct").as_color_mode(), Some(ColorMode::Ct));
        assert_eq!(Value::from("bogus").as_color_mode(), None);
    }

    #[test]
    fn deserialize_untagged() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[true, 0.25, [0.3, 0.4], "color", "xy", "select"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Bool(true),
                Value::Number(0.25),
                Value::Xy(XyPoint::new(0.3, 0.4)),
                Value::LightMode(LightMode::Color),
                Value::ColorMode(ColorMode::Xy),
                Value::Text("select".to_string()),
            ]
        );
    }

    #[test]
    fn serialize_plain_json() {
        let json = serde_json::to_string(&Value::Xy(XyPoint::new(0.5, 0.25))).unwrap();
        assert_eq!(json, "[0.5,0.25]");
        let json = serde_json::to_string(&Value::from(LightMode::Temperature)).unwrap();
        assert_eq!(json, r#""temperature""#);
    }
}
