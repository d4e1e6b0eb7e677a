// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HueLight` library.
//!
//! This module provides the error hierarchy for value conversion, color
//! geometry, device access and configuration loading.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A capability or native value could not be converted.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A color conversion could not be performed.
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// The device layer reported a failure.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The bulb configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while mapping a single capability value.
///
/// These errors are local to one value; a batch of conversions keeps going
/// when one of its values fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// No mapping is defined for the capability and the mapper is configured
    /// to reject unknown capabilities.
    #[error("capability {capability} has no defined mapping")]
    UnsupportedCapability {
        /// The capability identifier.
        capability: String,
    },

    /// The value has the wrong shape for the capability.
    #[error("capability {capability} expects a {expected} value")]
    TypeMismatch {
        /// The capability identifier.
        capability: String,
        /// Description of the expected value kind.
        expected: &'static str,
    },

    /// An invalid light mode string was provided.
    #[error("invalid light mode: {0}")]
    InvalidLightMode(String),

    /// An invalid native color mode string was provided.
    #[error("invalid color mode: {0}")]
    InvalidColorMode(String),
}

/// Errors raised by the color conversion engine.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ColorError {
    /// The three gamut primaries are collinear.
    #[error("gamut is degenerate (signed area {area})")]
    DegenerateGamut {
        /// Cross product of the two edge vectors spanning the triangle.
        area: f64,
    },
}

/// Errors reported by the surrounding device layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The physical device is not reachable.
    #[error("device unavailable: {0}")]
    Unavailable(String),

    /// Pending property writes were not accepted.
    #[error("failed to persist properties: {0}")]
    PersistFailed(String),
}

/// Errors related to loading a bulb configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured gamut cannot be used for projection.
    #[error("invalid gamut: {0}")]
    InvalidGamut(#[from] ColorError),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
