// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HueLight` Lib - capability mapping and color conversion for smart bulbs.
//!
//! This library sits between a home automation platform, which speaks in
//! normalized capability values (`onoff`, `dim`, `light_hue`, ...), and a
//! Zigbee/Hue style bulb, which speaks in raw properties (`on`, `bri`,
//! `hue`, `xy`, ...).
//!
//! # Supported Features
//!
//! - **Color conversion**: hue/saturation to CIE 1931 xy via sRGB
//! - **Gamut projection**: clamp xy points into a bulb's color triangle
//! - **Value mapping**: capability fractions to native ranges and back
//! - **Mode suppression**: drop writes to channels of the inactive light mode
//! - **Bulb control**: sync, alerts, color loop, random color
//!
//! # Quick Start
//!
//! ## Color Conversion
//!
//! ```
//! use huelight_lib::color::hue_sat_to_xy;
//! use huelight_lib::types::{Gamut, XyPoint};
//!
//! let red = hue_sat_to_xy(0.0, 1.0, &Gamut::DEFAULT).unwrap();
//! assert_eq!(red, XyPoint::new(0.6987, 0.2974));
//! ```
//!
//! ## Value Mapping
//!
//! ```
//! use huelight_lib::CapabilityMapper;
//! use huelight_lib::types::{Capability, Value};
//!
//! let mapper = CapabilityMapper::new();
//! let raw = mapper.to_native(&Capability::Dim, &Value::Number(0.5)).unwrap();
//! assert_eq!(raw, Some(Value::Number(127.0)));
//! ```
//!
//! ## Driving a Bulb
//!
//! ```
//! use huelight_lib::device::MemoryDevice;
//! use huelight_lib::state::CapabilityValues;
//! use huelight_lib::types::{LightMode, NativeProperty, Value};
//! use huelight_lib::{Bulb, BulbConfig, NativeDevice};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> huelight_lib::Result<()> {
//! let bulb = Bulb::new(MemoryDevice::new(), BulbConfig::default())?;
//!
//! // Hue writes are dropped while the bulb is in temperature mode
//! let request = CapabilityValues::new()
//!     .light_mode(LightMode::Temperature)
//!     .light_temperature(0.0)
//!     .light_hue(0.5);
//! bulb.set_capabilities(request, None).await?;
//!
//! let device = bulb.device();
//! assert_eq!(device.native_property(NativeProperty::ColorTemp), Some(Value::Number(153.0)));
//! assert_eq!(device.native_property(NativeProperty::Hue), None);
//! # Ok(())
//! # }
//! ```

pub mod bulb;
pub mod color;
pub mod config;
pub mod device;
pub mod error;
pub mod facade;
pub mod mapper;
pub mod state;
pub mod types;

pub use bulb::Bulb;
pub use config::BulbConfig;
pub use device::{MemoryDevice, NativeDevice, Notice, Notifier, TracingNotifier};
pub use error::{ColorError, ConfigError, DeviceError, Error, Result, ValueError};
pub use facade::{ColorPath, ModePolicy};
pub use mapper::{CapabilityMapper, UnknownCapabilityPolicy};
