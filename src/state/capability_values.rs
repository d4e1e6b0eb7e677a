// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Requested capability values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Capability, LightMode, Value};

/// A set of capability values, ordered by capability map order.
///
/// Used both as a request to a bulb and as the result of a sync.
///
/// # Examples
///
/// ```
/// use huelight_lib::state::CapabilityValues;
/// use huelight_lib::types::{Capability, Value};
///
/// let values = CapabilityValues::new().light_hue(0.25).light_saturation(1.0);
/// assert_eq!(values.get(&Capability::LightHue), Some(&Value::Number(0.25)));
/// assert_eq!(values.len(), 2);
///
/// let parsed: CapabilityValues =
///     serde_json::from_str(r#"{"dim": 0.5, "onoff": true}"#).unwrap();
/// assert_eq!(parsed.number(&Capability::Dim), Some(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityValues(BTreeMap<Capability, Value>);

impl CapabilityValues {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous value for the capability.
    #[must_use]
    pub fn with(mut self, capability: Capability, value: impl Into<Value>) -> Self {
        self.insert(capability, value);
        self
    }

    /// Sets `onoff`.
    #[must_use]
    pub fn onoff(self, on: bool) -> Self {
        self.with(Capability::OnOff, on)
    }

    /// Sets `dim`.
    #[must_use]
    pub fn dim(self, dim: f64) -> Self {
        self.with(Capability::Dim, dim)
    }

    /// Sets `light_hue`.
    #[must_use]
    pub fn light_hue(self, hue: f64) -> Self {
        self.with(Capability::LightHue, hue)
    }

    /// Sets `light_saturation`.
    #[must_use]
    pub fn light_saturation(self, saturation: f64) -> Self {
        self.with(Capability::LightSaturation, saturation)
    }

    /// Sets `light_temperature`.
    #[must_use]
    pub fn light_temperature(self, temperature: f64) -> Self {
        self.with(Capability::LightTemperature, temperature)
    }

    /// Sets `light_mode`.
    #[must_use]
    pub fn light_mode(self, mode: LightMode) -> Self {
        self.with(Capability::LightMode, mode)
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(&mut self, capability: Capability, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(capability, value.into())
    }

    /// Returns the value for a capability.
    #[must_use]
    pub fn get(&self, capability: &Capability) -> Option<&Value> {
        self.0.get(capability)
    }

    /// Returns the value for a capability if it is a number.
    #[must_use]
    pub fn number(&self, capability: &Capability) -> Option<f64> {
        self.get(capability).and_then(Value::as_f64)
    }

    /// Returns the requested light mode, if any.
    #[must_use]
    pub fn light_mode_value(&self) -> Option<LightMode> {
        self.get(&Capability::LightMode)
            .and_then(Value::as_light_mode)
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the values in capability map order.
    pub fn iter(&self) -> impl Iterator<Item = (&Capability, &Value)> {
        self.0.iter()
    }
}
