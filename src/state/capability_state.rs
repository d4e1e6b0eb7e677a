// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability state tracking.

use crate::types::{Capability, LightMode, Value};

use super::CapabilityValues;

/// Last known capability values of a bulb.
///
/// All values are optional because nothing is known until the device has
/// been synced or a value has been set.
///
/// # Examples
///
/// ```
/// use huelight_lib::state::CapabilityState;
/// use huelight_lib::types::{Capability, Value};
///
/// let mut state = CapabilityState::new();
/// assert!(state.set(Capability::Dim, Value::Number(0.3)));
/// assert_eq!(state.number(&Capability::Dim), Some(0.3));
///
/// // Setting the same value again reports no change
/// assert!(!state.set(Capability::Dim, Value::Number(0.3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilityState {
    values: CapabilityValues,
}

impl CapabilityState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value of a capability.
    #[must_use]
    pub fn get(&self, capability: &Capability) -> Option<&Value> {
        self.values.get(capability)
    }

    /// Gets the value of a capability if it is a number.
    #[must_use]
    pub fn number(&self, capability: &Capability) -> Option<f64> {
        self.values.number(capability)
    }

    /// Gets the `onoff` value.
    #[must_use]
    pub fn onoff(&self) -> Option<bool> {
        self.get(&Capability::OnOff).and_then(Value::as_bool)
    }

    /// Gets the `light_mode` value.
    #[must_use]
    pub fn light_mode(&self) -> Option<LightMode> {
        self.values.light_mode_value()
    }

    /// Sets a capability value.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, capability: Capability, value: Value) -> bool {
        if self.values.get(&capability) == Some(&value) {
            return false;
        }
        self.values.insert(capability, value);
        true
    }

    /// Applies a set of values.
    ///
    /// Returns `true` if any stored value changed.
    pub fn apply(&mut self, values: &CapabilityValues) -> bool {
        let mut changed = false;
        for (capability, value) in values.iter() {
            changed |= self.set(capability.clone(), value.clone());
        }
        changed
    }

    /// Returns a copy of all known values.
    #[must_use]
    pub fn snapshot(&self) -> CapabilityValues {
        self.values.clone()
    }

    /// Clears all known values.
    pub fn clear(&mut self) {
        self.values = CapabilityValues::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = CapabilityState::new();
        assert_eq!(state.onoff(), None);
        assert_eq!(state.light_mode(), None);
        assert!(state.snapshot().is_empty());
    }

    #[test]
    fn typed_getters() {
        let mut state = CapabilityState::new();
        state.set(Capability::OnOff, Value::Bool(false));
        state.set(Capability::LightMode, Value::from(LightMode::Temperature));
        state.set(Capability::LightHue, Value::from("not a number"));
        assert_eq!(state.onoff(), Some(false));
        assert_eq!(state.light_mode(), Some(LightMode::Temperature));
        assert_eq!(state.number(&Capability::LightHue), None);
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = CapabilityState::new();
        let values = CapabilityValues::new().onoff(true).dim(0.5);
        assert!(state.apply(&values));
        assert!(!state.apply(&values));
        assert!(state.apply(&CapabilityValues::new().dim(0.6)));
        assert_eq!(state.number(&Capability::Dim), Some(0.6));
    }

    #[test]
    fn clear_resets_state() {
        let mut state = CapabilityState::new();
        state.apply(&CapabilityValues::new().onoff(true));
        state.clear();
        assert_eq!(state, CapabilityState::new());
    }
}
