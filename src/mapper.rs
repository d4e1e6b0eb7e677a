// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bidirectional mapping between capability values and native values.
//!
//! | Capability          | to capability                 | to native                      |
//! |---------------------|-------------------------------|--------------------------------|
//! | `onoff`             | `value == true`               | `value == true`                |
//! | `dim`, `light_saturation` | `value / 254`           | `ceil(value * 254)`            |
//! | `light_hue`         | `value / 65535`               | `ceil(value * 65535)`          |
//! | `light_temperature` | `(value - 153) / (500 - 153)` | `ceil(153 + value * (500 - 153))` |
//! | `light_mode`        | `ct` is `temperature`, anything else `color` | never written    |
//!
//! Capabilities without a mapping are handled according to the
//! [`UnknownCapabilityPolicy`].

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::{Capability, ColorMode, LightMode, NativeRange, Value};

/// What to do with a capability that has no defined mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCapabilityPolicy {
    /// Return the value unchanged.
    #[default]
    PassThrough,
    /// Fail with [`ValueError::UnsupportedCapability`].
    Reject,
}

/// Converts values between the capability model and the native model.
///
/// The mapper holds no state besides its policy and can be shared freely.
///
/// # Examples
///
/// ```
/// use huelight_lib::CapabilityMapper;
/// use huelight_lib::types::{Capability, Value};
///
/// let mapper = CapabilityMapper::new();
///
/// let raw = mapper.to_native(&Capability::Dim, &Value::from(0.5)).unwrap();
/// assert_eq!(raw, Some(Value::Number(127.0)));
///
/// let dim = mapper.to_capability(&Capability::Dim, &Value::from(254.0)).unwrap();
/// assert_eq!(dim, Value::Number(1.0));
///
/// // The light mode is never written directly.
/// let mode = mapper.to_native(&Capability::LightMode, &Value::from("color")).unwrap();
/// assert_eq!(mode, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityMapper {
    unknown: UnknownCapabilityPolicy,
}

impl CapabilityMapper {
    /// Creates a mapper that passes unknown capabilities through.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unknown: UnknownCapabilityPolicy::PassThrough,
        }
    }

    /// Creates a mapper with an explicit unknown-capability policy.
    #[must_use]
    pub const fn with_policy(unknown: UnknownCapabilityPolicy) -> Self {
        Self { unknown }
    }

    /// Converts a capability value to the native property value.
    ///
    /// Returns `Ok(None)` when the capability is never written to the device
    /// (`light_mode`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TypeMismatch`] if a numeric capability receives
    /// a non-numeric value or `light_mode` receives something other than a
    /// light mode, or [`ValueError::UnsupportedCapability`] if the capability
    /// is unknown and the policy is `Reject`.
    pub fn to_native(
        &self,
        capability: &Capability,
        value: &Value,
    ) -> Result<Option<Value>, ValueError> {
        let range = match capability {
            Capability::OnOff => return Ok(Some(Value::Bool(value.is_true()))),
            Capability::Dim => NativeRange::BRIGHTNESS,
            Capability::LightSaturation => NativeRange::SATURATION,
            Capability::LightHue => NativeRange::HUE,
            Capability::LightTemperature => NativeRange::COLOR_TEMP,
            Capability::LightMode => {
                if value.as_light_mode().is_none() {
                    return Err(ValueError::TypeMismatch {
                        capability: capability.to_string(),
                        expected: "light mode",
                    });
                }
                return Ok(None);
            }
            Capability::Other(_) => return self.unknown(capability, value).map(Some),
        };
        let fraction = number(capability, value)?;
        Ok(Some(Value::Number(range.from_fraction(fraction))))
    }

    /// Converts a native property value to the capability value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TypeMismatch`] if a numeric property holds a
    /// non-numeric value, or [`ValueError::UnsupportedCapability`] if the
    /// capability is unknown and the policy is `Reject`.
    pub fn to_capability(&self, capability: &Capability, raw: &Value) -> Result<Value, ValueError> {
        let range = match capability {
            Capability::OnOff => return Ok(Value::Bool(raw.is_true())),
            Capability::Dim => NativeRange::BRIGHTNESS,
            Capability::LightSaturation => NativeRange::SATURATION,
            Capability::LightHue => NativeRange::HUE,
            Capability::LightTemperature => NativeRange::COLOR_TEMP,
            Capability::LightMode => {
                let mode = if raw.as_color_mode() == Some(ColorMode::Ct) {
                    LightMode::Temperature
                } else {
                    LightMode::Color
                };
                return Ok(Value::LightMode(mode));
            }
            Capability::Other(_) => return self.unknown(capability, raw),
        };
        Ok(Value::Number(range.to_fraction(number(capability, raw)?)))
    }

    fn unknown(&self, capability: &Capability, value: &Value) -> Result<Value, ValueError> {
        match self.unknown {
            UnknownCapabilityPolicy::PassThrough => Ok(value.clone()),
            UnknownCapabilityPolicy::Reject => Err(ValueError::UnsupportedCapability {
                capability: capability.to_string(),
            }),
        }
    }
}

/// Converts a capability value to its native value with the default mapper.
///
/// # Errors
///
/// See [`CapabilityMapper::to_native`].
pub fn to_native(capability: &Capability, value: &Value) -> Result<Option<Value>, ValueError> {
    CapabilityMapper::new().to_native(capability, value)
}

/// Converts a native value to its capability value with the default mapper.
///
/// # Errors
///
/// See [`CapabilityMapper::to_capability`].
pub fn to_capability(capability: &Capability, raw: &Value) -> Result<Value, ValueError> {
    CapabilityMapper::new().to_capability(capability, raw)
}

fn number(capability: &Capability, value: &Value) -> Result<f64, ValueError> {
    value.as_f64().ok_or_else(|| ValueError::TypeMismatch {
        capability: capability.to_string(),
        expected: "number",
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn native(capability: Capability, value: impl Into<Value>) -> Option<Value> {
        to_native(&capability, &value.into()).unwrap()
    }

    fn capability(capability: Capability, raw: impl Into<Value>) -> Value {
        to_capability(&capability, &raw.into()).unwrap()
    }

    #[test]
    fn onoff_is_strict_true() {
        assert_eq!(native(Capability::OnOff, true), Some(Value::Bool(true)));
        assert_eq!(native(Capability::OnOff, false), Some(Value::Bool(false)));
        assert_eq!(native(Capability::OnOff, 1.0), Some(Value::Bool(false)));
        assert_eq!(capability(Capability::OnOff, "true"), Value::Bool(false));
        assert_eq!(capability(Capability::OnOff, true), Value::Bool(true));
    }

    #[test]
    fn dim_bounds() {
        assert_eq!(native(Capability::Dim, 0.0), Some(Value::Number(0.0)));
        assert_eq!(native(Capability::Dim, 1.0), Some(Value::Number(254.0)));
        assert_eq!(native(Capability::Dim, 0.5), Some(Value::Number(127.0)));
        assert_eq!(capability(Capability::Dim, 0.0), Value::Number(0.0));
        assert_eq!(capability(Capability::Dim, 254.0), Value::Number(1.0));
    }

    #[test]
    fn native_values_round_up() {
        assert_eq!(native(Capability::Dim, 0.001), Some(Value::Number(1.0)));
        assert_eq!(
            native(Capability::LightSaturation, 0.1),
            Some(Value::Number(26.0))
        );
        assert_eq!(
            native(Capability::LightHue, 0.5),
            Some(Value::Number(32768.0))
        );
        assert_eq!(
            native(Capability::LightTemperature, 0.5),
            Some(Value::Number(327.0))
        );
    }

    #[test]
    fn temperature_bounds() {
        assert_eq!(
            native(Capability::LightTemperature, 0.0),
            Some(Value::Number(153.0))
        );
        assert_eq!(
            native(Capability::LightTemperature, 1.0),
            Some(Value::Number(500.0))
        );
        let temperature = |raw: f64| capability(Capability::LightTemperature, raw);
        assert_eq!(temperature(153.0), Value::Number(0.0));
        assert_eq!(temperature(500.0), Value::Number(1.0));
    }

    #[test]
    fn hue_to_capability() {
        let hue = |raw: f64| capability(Capability::LightHue, raw);
        assert_eq!(hue(65535.0), Value::Number(1.0));
        assert_abs_diff_eq!(hue(21845.0).as_f64().unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_within_resolution() {
        let cases = [
            (Capability::Dim, 1.0 / 254.0),
            (Capability::LightSaturation, 1.0 / 254.0),
            (Capability::LightHue, 1.0 / 65535.0),
            (Capability::LightTemperature, 1.0 / 347.0),
        ];
        for (cap, resolution) in cases {
            for step in 0..=20 {
                let v = f64::from(step) / 20.0;
                let raw = native(cap.clone(), v).unwrap();
                let back = capability(cap.clone(), raw).as_f64().unwrap();
                assert!(back >= v - 1e-12, "{cap}: {v} -> {back}");
                assert!(back - v <= resolution + 1e-12, "{cap}: {v} -> {back}");
            }
        }
    }

    #[test]
    fn light_mode_mapping() {
        assert_eq!(native(Capability::LightMode, LightMode::Temperature), None);
        assert_eq!(
            capability(Capability::LightMode, ColorMode::Ct),
            Value::LightMode(LightMode::Temperature)
        );
        assert_eq!(
            capability(Capability::LightMode, "ct"),
            Value::LightMode(LightMode::Temperature)
        );
        assert_eq!(
            capability(Capability::LightMode, ColorMode::Xy),
            Value::LightMode(LightMode::Color)
        );
        assert_eq!(
            capability(Capability::LightMode, ColorMode::Hs),
            Value::LightMode(LightMode::Color)
        );
    }

    #[test]
    fn light_mode_rejects_unknown_mode() {
        assert_eq!(native(Capability::LightMode, "temperature"), None);
        let err = to_native(&Capability::LightMode, &Value::from("hs")).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                capability: "light_mode".to_string(),
                expected: "light mode",
            }
        );
        let one = Value::Number(1.0);
        assert!(to_native(&Capability::LightMode, &one).is_err());
    }

    #[test]
    fn numeric_capability_rejects_non_number() {
        let err = to_native(&Capability::Dim, &Value::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                capability: "dim".to_string(),
                expected: "number",
            }
        );
        let text = Value::from("x");
        assert!(to_capability(&Capability::LightHue, &text).is_err());
    }

    #[test]
    fn unknown_capability_passes_through() {
        let cap = Capability::from("measure_power");
        let value = Value::Number(42.5);
        assert_eq!(to_native(&cap, &value).unwrap(), Some(value.clone()));
        assert_eq!(to_capability(&cap, &value).unwrap(), value);
    }

    #[test]
    fn unknown_capability_can_be_rejected() {
        let mapper = CapabilityMapper::with_policy(UnknownCapabilityPolicy::Reject);
        let cap = Capability::from("measure_power");
        let err = mapper.to_native(&cap, &Value::Number(1.0)).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedCapability { .. }));
        assert!(mapper.to_capability(&cap, &Value::Number(1.0)).is_err());
        // Known capabilities are unaffected.
        let dim = Value::Number(1.0);
        assert!(mapper.to_native(&Capability::Dim, &dim).is_ok());
    }
}
