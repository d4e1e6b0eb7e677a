// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces to the surrounding device layer.
//!
//! The conversion engine never talks to hardware. A [`Bulb`](crate::Bulb)
//! reads and writes raw properties through a [`NativeDevice`] and reports
//! one-shot user notices through a [`Notifier`].

use std::collections::{BTreeMap, HashSet};

use parking_lot::Mutex;

use crate::error::DeviceError;
use crate::types::{NativeProperty, Value};

/// Access to the raw properties of a physical bulb.
///
/// Property writes are buffered by the implementation and confirmed with
/// [`persist`](NativeDevice::persist).
#[allow(async_fn_in_trait)]
pub trait NativeDevice {
    /// Reads a raw property. Returns `None` if the device does not report it.
    fn native_property(&self, property: NativeProperty) -> Option<Value>;

    /// Buffers a raw property write.
    fn set_native_property(&self, property: NativeProperty, value: Value);

    /// Sends the buffered writes to the device.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the device did not accept the writes.
    async fn persist(&self) -> Result<(), DeviceError>;

    /// Returns `true` if the firmware ignores hue/saturation writes and needs
    /// colors as CIE xy.
    ///
    /// Resolved once when the bulb is created.
    fn uses_xy_color_mode(&self) -> bool {
        false
    }
}

/// An in-memory [`NativeDevice`], useful as a simulator.
///
/// # Examples
///
/// ```
/// use huelight_lib::device::{MemoryDevice, NativeDevice};
/// use huelight_lib::types::{NativeProperty, Value};
///
/// let device = MemoryDevice::new().with_property(NativeProperty::Brightness, 127.0);
/// assert_eq!(device.native_property(NativeProperty::Brightness), Some(Value::Number(127.0)));
///
/// device.set_native_property(NativeProperty::On, Value::Bool(true));
/// assert_eq!(device.native_property(NativeProperty::On), Some(Value::Bool(true)));
/// ```
#[derive(Debug, Default)]
pub struct MemoryDevice {
    properties: Mutex<BTreeMap<NativeProperty, Value>>,
    writes: Mutex<Vec<(NativeProperty, Value)>>,
    persisted: Mutex<usize>,
    fail_persist: Mutex<Option<DeviceError>>,
    uses_xy: bool,
}

impl MemoryDevice {
    /// Creates an empty device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an initial property value.
    #[must_use]
    pub fn with_property(self, property: NativeProperty, value: impl Into<Value>) -> Self {
        self.properties.lock().insert(property, value.into());
        self
    }

    /// Marks the device as needing xy color writes.
    #[must_use]
    pub fn with_xy_color_mode(mut self) -> Self {
        self.uses_xy = true;
        self
    }

    /// Makes every subsequent `persist` fail with `error`.
    pub fn fail_persist_with(&self, error: DeviceError) {
        *self.fail_persist.lock() = Some(error);
    }

    /// Returns all writes since the last call, in order.
    pub fn take_writes(&self) -> Vec<(NativeProperty, Value)> {
        std::mem::take(&mut *self.writes.lock())
    }

    /// Number of successful `persist` calls.
    #[must_use]
    pub fn persist_count(&self) -> usize {
        *self.persisted.lock()
    }
}

impl NativeDevice for MemoryDevice {
    fn native_property(&self, property: NativeProperty) -> Option<Value> {
        self.properties.lock().get(&property).cloned()
    }

    fn set_native_property(&self, property: NativeProperty, value: Value) {
        self.writes.lock().push((property, value.clone()));
        self.properties.lock().insert(property, value);
    }

    async fn persist(&self) -> Result<(), DeviceError> {
        if let Some(err) = self.fail_persist.lock().clone() {
            return Err(err);
        }
        *self.persisted.lock() += 1;
        Ok(())
    }

    fn uses_xy_color_mode(&self) -> bool {
        self.uses_xy
    }
}

/// A notice shown to the user at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The brightness increment action is deprecated.
    BrightnessIncrementDeprecated,
}

impl Notice {
    /// Stable key, suitable for persisting the "already shown" flag.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::BrightnessIncrementDeprecated => "notification_brightness_increment_deprecated",
        }
    }

    /// Human readable text.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::BrightnessIncrementDeprecated => {
                "The brightness increment action is deprecated, set dim with a duration instead"
            }
        }
    }
}

/// Sink for one-shot user notices.
pub trait Notifier: Send + Sync {
    /// Shows `notice` unless it has been shown before.
    fn notify_once(&self, notice: Notice);
}

/// Default [`Notifier`] that logs each notice once per process.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    shown: Mutex<HashSet<Notice>>,
}

impl TracingNotifier {
    /// Creates a notifier that has shown nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `notice` has been shown.
    #[must_use]
    pub fn was_shown(&self, notice: Notice) -> bool {
        self.shown.lock().contains(&notice)
    }
}

impl Notifier for TracingNotifier {
    fn notify_once(&self, notice: Notice) {
        if self.shown.lock().insert(notice) {
            tracing::warn!(key = notice.key(), "{}", notice.message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_device_records_writes() {
        let device = MemoryDevice::new();
        device.set_native_property(NativeProperty::Hue, Value::Number(100.0));
        device.set_native_property(NativeProperty::Hue, Value::Number(200.0));
        assert_eq!(
            device.native_property(NativeProperty::Hue),
            Some(Value::Number(200.0))
        );
        assert_eq!(
            device.take_writes(),
            vec![
                (NativeProperty::Hue, Value::Number(100.0)),
                (NativeProperty::Hue, Value::Number(200.0)),
            ]
        );
        assert!(device.take_writes().is_empty());
    }

    #[tokio::test]
    async fn memory_device_persist() {
        let device = MemoryDevice::new();
        device.persist().await.unwrap();
        assert_eq!(device.persist_count(), 1);

        device.fail_persist_with(DeviceError::Unavailable("offline".to_string()));
        let err = device.persist().await.unwrap_err();
        assert_eq!(err, DeviceError::Unavailable("offline".to_string()));
        assert_eq!(device.persist_count(), 1);
    }

    #[test]
    fn xy_quirk_flag() {
        assert!(!MemoryDevice::new().uses_xy_color_mode());
        let device = MemoryDevice::new().with_xy_color_mode();
        assert!(device.uses_xy_color_mode());
    }

    #[test]
    fn tracing_notifier_is_one_shot() {
        let notifier = TracingNotifier::new();
        let notice = Notice::BrightnessIncrementDeprecated;
        assert!(!notifier.was_shown(notice));
        notifier.notify_once(notice);
        notifier.notify_once(notice);
        assert!(notifier.was_shown(notice));
        assert_eq!(notice.key(), "notification_brightness_increment_deprecated");
    }
}
