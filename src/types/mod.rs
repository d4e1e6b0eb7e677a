// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light bulb control.
//!
//! This module provides the values exchanged between the normalized
//! capability model and the device's native property model.
//!
//! # Types
//!
//! - [`Value`] - A capability or native property value
//! - [`Capability`] - Normalized, device-agnostic light capability identifier
//! - [`LightMode`] - Normalized light mode (color / temperature)
//! - [`NativeProperty`] - Vendor-specific property identifier
//! - [`NativeRange`] - Raw numeric range of a native property
//! - [`ColorMode`] - Native color mode (`ct`, `hs`, `xy`)
//! - [`Alert`], [`Effect`] - Native alert and effect settings
//! - [`XyPoint`], [`Gamut`] - CIE 1931 chromaticity and triangular gamuts

mod capability;
mod chromaticity;
mod native;
mod value;

pub use capability::{Capability, LightMode};
pub use chromaticity::{Gamut, XyPoint};
pub use native::{Alert, ColorMode, Effect, NativeProperty, NativeRange};
pub use value::Value;
