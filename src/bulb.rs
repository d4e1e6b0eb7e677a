// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level bulb abstraction.
//!
//! A [`Bulb`] ties the conversion engine to a [`NativeDevice`]: it reads raw
//! properties into capability values, turns capability requests into raw
//! writes and keeps a cache of the last known capability values.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use huelight_lib::device::MemoryDevice;
//! use huelight_lib::state::CapabilityValues;
//! use huelight_lib::types::{Capability, NativeProperty, Value};
//! use huelight_lib::{Bulb, BulbConfig, NativeDevice};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> huelight_lib::Result<()> {
//! let device = MemoryDevice::new()
//!     .with_property(NativeProperty::On, true)
//!     .with_property(NativeProperty::Brightness, 127.0);
//! let bulb = Bulb::new(device, BulbConfig::default())?;
//!
//! let synced = bulb.sync();
//! assert_eq!(synced.get(&Capability::OnOff), Some(&Value::Bool(true)));
//!
//! bulb.set_capabilities(CapabilityValues::new().dim(1.0), Some(Duration::from_millis(400)))
//!     .await?;
//! assert_eq!(
//!     bulb.device().native_property(NativeProperty::Brightness),
//!     Some(Value::Number(254.0))
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::BulbConfig;
use crate::device::{NativeDevice, Notice, Notifier, TracingNotifier};
use crate::error::{ConfigError, Result};
use crate::facade::{ColorPath, ModePolicy, NativeWrite};
use crate::mapper::CapabilityMapper;
use crate::state::{CapabilityState, CapabilityValues};
use crate::types::{Alert, Capability, Effect, LightMode, NativeProperty, Value};

/// A light bulb driven through capability values.
///
/// Writes are serialized: a request holds an internal lock until its
/// `persist` has completed, so concurrent requests never interleave their
/// property writes. Reads of the cache never wait for a write.
pub struct Bulb<D: NativeDevice> {
    device: D,
    capabilities: Vec<Capability>,
    mapped: Vec<(Capability, NativeProperty)>,
    mapper: CapabilityMapper,
    path: ColorPath,
    state: parking_lot::Mutex<CapabilityState>,
    writes: tokio::sync::Mutex<()>,
    notifier: Arc<dyn Notifier>,
}

impl<D: NativeDevice> Bulb<D> {
    /// Creates a bulb on top of `device`.
    ///
    /// Colors are sent as xy if either the configuration or the device asks
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGamut`] if the configured gamut is
    /// degenerate.
    pub fn new(device: D, config: BulbConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let uses_xy = config.uses_xy_color_mode || device.uses_xy_color_mode();
        let path = ColorPath::from_quirk(uses_xy, config.gamut);

        let mut mapped: Vec<_> = config
            .capabilities
            .iter()
            .filter_map(|capability| {
                let property = capability.native_property()?;
                Some((capability.clone(), property))
            })
            .collect();
        mapped.sort_by(|a, b| a.0.cmp(&b.0));
        mapped.dedup_by(|a, b| a.0 == b.0);

        tracing::debug!(
            capabilities = config.capabilities.len(),
            uses_xy,
            "Created bulb"
        );

        Ok(Self {
            device,
            mapper: config.mapper(),
            capabilities: config.capabilities,
            mapped,
            path,
            state: parking_lot::Mutex::new(CapabilityState::new()),
            writes: tokio::sync::Mutex::new(()),
            notifier: Arc::new(TracingNotifier::new()),
        })
    }

    /// Replaces the notifier used for one-shot notices.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Returns the underlying device.
    #[must_use]
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Returns the color path in use.
    #[must_use]
    pub fn color_path(&self) -> ColorPath {
        self.path
    }

    /// Returns `true` if the bulb exposes `capability`.
    #[must_use]
    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns a copy of the cached capability values.
    #[must_use]
    pub fn state(&self) -> CapabilityState {
        self.state.lock().clone()
    }

    /// Returns the cached value of a capability.
    #[must_use]
    pub fn capability_value(&self, capability: &Capability) -> Option<Value> {
        self.state.lock().get(capability).cloned()
    }

    /// Exposed capabilities that have a native counterpart, in map order.
    #[must_use]
    pub fn mapped_capabilities(&self) -> impl Iterator<Item = (&Capability, NativeProperty)> {
        self.mapped
            .iter()
            .map(|(capability, property)| (capability, *property))
    }

    // ========== Sync ==========

    /// Reads the device into the capability cache.
    ///
    /// Properties the device does not report are skipped, as are values that
    /// fail to convert. `dim` is not updated while the bulb is known to be
    /// off, so the last brightness survives a power cycle.
    ///
    /// Returns the values that were stored.
    pub fn sync(&self) -> CapabilityValues {
        let mut state = self.state.lock();
        let mut updated = CapabilityValues::new();

        for (capability, property) in self.mapped_capabilities() {
            let Some(raw) = self.device.native_property(property) else {
                continue;
            };
            let value = match self.mapper.to_capability(capability, &raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(
                        %capability,
                        %property,
                        error = %e,
                        "Failed to read capability"
                    );
                    continue;
                }
            };
            if *capability == Capability::Dim && state.onoff() == Some(false) {
                tracing::trace!("Keeping cached dim while off");
                continue;
            }
            state.set(capability.clone(), value.clone());
            updated.insert(capability.clone(), value);
        }

        tracing::debug!(updated = updated.len(), "Synced capabilities");
        updated
    }

    // ========== Capabilities ==========

    /// Applies capability values to the device.
    ///
    /// Every mapped capability is written, taking the requested value or the
    /// cached one. A numeric `dim` also sets `onoff`. Channels belonging to
    /// the other light mode are left alone. `transition` is sent as
    /// `transitionTime` in seconds.
    ///
    /// Values that fail to convert are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Device`](crate::Error::Device) if the device does not
    /// accept the writes.
    pub async fn set_capabilities(
        &self,
        values: CapabilityValues,
        transition: Option<Duration>,
    ) -> Result<()> {
        self.write(Vec::new(), values, transition).await
    }

    /// Sets `onoff`.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn set_on(&self, on: bool) -> Result<()> {
        self.set_capabilities(CapabilityValues::new().onoff(on), None)
            .await
    }

    /// Sets `dim`, optionally over a transition.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn set_dim(&self, dim: f64, transition: Option<Duration>) -> Result<()> {
        self.set_capabilities(CapabilityValues::new().dim(dim), transition)
            .await
    }

    // ========== Alerts ==========

    /// Flashes the bulb once.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn short_alert(&self) -> Result<()> {
        self.alert(Alert::Select).await
    }

    /// Flashes the bulb for a longer period.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn long_alert(&self) -> Result<()> {
        self.alert(Alert::LongSelect).await
    }

    async fn alert(&self, alert: Alert) -> Result<()> {
        let _guard = self.writes.lock().await;
        tracing::debug!(alert = alert.as_str(), "Sending alert");
        self.device
            .set_native_property(NativeProperty::Alert, alert.into());
        self.device.persist().await?;
        Ok(())
    }

    // ========== Effects ==========

    /// Starts cycling through colors and turns the bulb on.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn start_color_loop(&self) -> Result<()> {
        self.write(
            Self::effect_writes(Effect::ColorLoop),
            CapabilityValues::new().onoff(true),
            None,
        )
        .await
    }

    /// Stops the color loop and keeps the bulb on.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn stop_color_loop(&self) -> Result<()> {
        self.write(
            Self::effect_writes(Effect::None),
            CapabilityValues::new().onoff(true),
            None,
        )
        .await
    }

    /// Sets a random fully saturated color.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn set_random_color(&self) -> Result<()> {
        self.set_random_color_with(rand::random::<f64>()).await
    }

    /// Sets a fully saturated color with the given hue.
    ///
    /// Any running effect is stopped and the bulb is switched to color mode.
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn set_random_color_with(&self, hue: f64) -> Result<()> {
        let values = CapabilityValues::new()
            .onoff(true)
            .light_saturation(1.0)
            .light_hue(hue)
            .light_mode(LightMode::Color);
        self.write(Self::effect_writes(Effect::None), values, None)
            .await
    }

    /// Sets `dim` over `duration`.
    ///
    /// Deprecated action kept for existing flows. Shows a one-shot notice
    /// pointing to [`set_dim`](Self::set_dim).
    ///
    /// # Errors
    ///
    /// Returns error if the device does not accept the writes.
    pub async fn brightness_increment(&self, brightness: f64, duration: Duration) -> Result<()> {
        self.notifier
            .notify_once(Notice::BrightnessIncrementDeprecated);
        self.set_dim(brightness, Some(duration)).await
    }

    fn effect_writes(effect: Effect) -> Vec<NativeWrite> {
        vec![
            NativeWrite::new(NativeProperty::Effect, effect),
            NativeWrite::new(NativeProperty::Alert, Alert::None),
        ]
    }

    // ========== Writes ==========

    async fn write(
        &self,
        pre: Vec<NativeWrite>,
        mut values: CapabilityValues,
        transition: Option<Duration>,
    ) -> Result<()> {
        let _guard = self.writes.lock().await;

        for write in pre {
            self.device.set_native_property(write.property, write.value);
        }

        if let Some(dim) = values.number(&Capability::Dim) {
            values.insert(Capability::OnOff, dim > 0.0);
        }

        self.write_capabilities(&values);

        if let Some(transition) = transition {
            self.device.set_native_property(
                NativeProperty::TransitionTime,
                Value::Number(transition.as_secs_f64()),
            );
        }

        self.device.persist().await?;
        tracing::debug!(values = values.len(), "Persisted capability values");
        Ok(())
    }

    /// Writes every mapped capability. The cache lock is released before the
    /// caller awaits `persist`.
    fn write_capabilities(&self, values: &CapabilityValues) {
        let mut state = self.state.lock();
        let mode = values.light_mode_value().or_else(|| state.light_mode());
        let (hue, sat) = Self::color_inputs(values, &state);

        for (capability, property) in self.mapped_capabilities() {
            let Some(value) = values
                .get(capability)
                .or_else(|| state.get(capability))
                .cloned()
            else {
                continue;
            };

            let native = match self.mapper.to_native(capability, &value) {
                Ok(Some(native)) => native,
                Ok(None) => {
                    state.set(capability.clone(), value);
                    continue;
                }
                Err(e) => {
                    tracing::error!(%capability, error = %e, "Failed to convert capability");
                    continue;
                }
            };

            if ModePolicy::is_suppressed(mode, capability) {
                tracing::debug!(%capability, ?mode, "Suppressed write for inactive light mode");
                continue;
            }

            match self.path.route(property, native, hue, sat) {
                Ok(write) => {
                    self.device.set_native_property(write.property, write.value);
                    state.set(capability.clone(), value);
                }
                Err(e) => {
                    tracing::error!(%capability, error = %e, "Failed to convert color");
                }
            }
        }
    }

    /// Hue and saturation used for xy conversion: requested values first,
    /// then cached ones.
    fn color_inputs(values: &CapabilityValues, state: &CapabilityState) -> (f64, f64) {
        let pick = |capability: &Capability| {
            values
                .number(capability)
                .or_else(|| state.number(capability))
        };
        let hue = pick(&Capability::LightHue);
        let sat = pick(&Capability::LightSaturation);
        if hue.is_none() || sat.is_none() {
            tracing::trace!(?hue, ?sat, "Missing color inputs default to zero");
        }
        (hue.unwrap_or(0.0), sat.unwrap_or(0.0))
    }
}

impl<D: NativeDevice + fmt::Debug> fmt::Debug for Bulb<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bulb")
            .field("device", &self.device)
            .field("capabilities", &self.capabilities)
            .field("mapper", &self.mapper)
            .field("path", &self.path)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MemoryDevice;
    use crate::types::{Gamut, XyPoint};

    fn bulb(device: MemoryDevice) -> Bulb<MemoryDevice> {
        Bulb::new(device, BulbConfig::default()).unwrap()
    }

    #[test]
    fn mapped_capabilities_follow_map_order() {
        let config = BulbConfig::default().with_capabilities([
            Capability::LightMode,
            Capability::from("measure_power"),
            Capability::Dim,
            Capability::OnOff,
        ]);
        let bulb = Bulb::new(MemoryDevice::new(), config).unwrap();
        let order: Vec<_> = bulb.mapped_capabilities().map(|(_, p)| p).collect();
        assert_eq!(
            order,
            vec![
                NativeProperty::On,
                NativeProperty::Brightness,
                NativeProperty::ColorMode
            ]
        );
    }

    #[test]
    fn device_quirk_selects_xy_path() {
        let bulb = bulb(MemoryDevice::new().with_xy_color_mode());
        assert_eq!(
            bulb.color_path(),
            ColorPath::Xy {
                gamut: Gamut::DEFAULT
            }
        );
    }

    #[test]
    fn degenerate_gamut_rejected_on_creation() {
        let flat = Gamut::new(
            XyPoint::new(0.1, 0.1),
            XyPoint::new(0.2, 0.2),
            XyPoint::new(0.3, 0.3),
        );
        let result = Bulb::new(MemoryDevice::new(), BulbConfig::default().with_gamut(flat));
        assert!(matches!(result, Err(ConfigError::InvalidGamut(_))));
    }

    #[test]
    fn color_inputs_prefer_request() {
        let mut state = CapabilityState::new();
        state.set(Capability::LightHue, Value::Number(0.1));
        state.set(Capability::LightSaturation, Value::Number(0.2));

        let request = CapabilityValues::new().light_hue(0.5);
        let (hue, sat) = Bulb::<MemoryDevice>::color_inputs(&request, &state);
        assert!((hue - 0.5).abs() < f64::EPSILON);
        assert!((sat - 0.2).abs() < f64::EPSILON);

        let (hue, sat) =
            Bulb::<MemoryDevice>::color_inputs(&CapabilityValues::new(), &CapabilityState::new());
        assert!(hue.abs() < f64::EPSILON);
        assert!(sat.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn light_mode_is_cached_but_not_written() {
        let bulb = bulb(MemoryDevice::new());
        bulb.set_capabilities(
            CapabilityValues::new().light_mode(LightMode::Temperature),
            None,
        )
        .await
        .unwrap();

        assert!(bulb.device().take_writes().is_empty());
        assert_eq!(bulb.state().light_mode(), Some(LightMode::Temperature));
    }
}
