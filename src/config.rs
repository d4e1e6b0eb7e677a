// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-bulb configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::facade::ColorPath;
use crate::mapper::{CapabilityMapper, UnknownCapabilityPolicy};
use crate::types::{Capability, Gamut};

/// Configuration for a bulb.
///
/// # Examples
///
/// ```
/// use huelight_lib::BulbConfig;
/// use huelight_lib::types::{Capability, Gamut};
///
/// // A color bulb whose firmware ignores hue/saturation writes
/// let config = BulbConfig::default()
///     .with_xy_color_mode(true)
///     .with_gamut(Gamut::HUE_C);
/// assert!(config.has_capability(&Capability::LightHue));
///
/// // A dimmable white bulb
/// let config = BulbConfig::default()
///     .with_capabilities([Capability::OnOff, Capability::Dim]);
/// assert!(!config.has_capability(&Capability::LightHue));
///
/// // Loaded from JSON
/// let config = BulbConfig::from_json(r#"{"uses_xy_color_mode": true}"#).unwrap();
/// assert!(config.uses_xy_color_mode);
/// assert_eq!(config.gamut, Gamut::DEFAULT);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulbConfig {
    /// Capabilities the bulb exposes.
    pub capabilities: Vec<Capability>,
    /// Send colors as CIE xy instead of hue/saturation.
    pub uses_xy_color_mode: bool,
    /// Gamut used when converting to xy.
    pub gamut: Gamut,
    /// Handling of capabilities without a mapping.
    pub unknown_capability: UnknownCapabilityPolicy,
}

impl Default for BulbConfig {
    fn default() -> Self {
        Self {
            capabilities: Capability::LIGHT.to_vec(),
            uses_xy_color_mode: false,
            gamut: Gamut::DEFAULT,
            unknown_capability: UnknownCapabilityPolicy::PassThrough,
        }
    }
}

impl BulbConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the JSON is malformed and
    /// [`ConfigError::InvalidGamut`] if the gamut is degenerate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGamut`] if the gamut is degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gamut.validate()?;
        Ok(())
    }

    /// Sets the exposed capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Sets whether colors are sent as CIE xy.
    #[must_use]
    pub fn with_xy_color_mode(mut self, enabled: bool) -> Self {
        self.uses_xy_color_mode = enabled;
        self
    }

    /// Sets the gamut used for xy conversion.
    #[must_use]
    pub fn with_gamut(mut self, gamut: Gamut) -> Self {
        self.gamut = gamut;
        self
    }

    /// Sets the unknown-capability policy.
    #[must_use]
    pub fn with_unknown_capability_policy(mut self, policy: UnknownCapabilityPolicy) -> Self {
        self.unknown_capability = policy;
        self
    }

    /// Returns `true` if the bulb exposes `capability`.
    #[must_use]
    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns the color path implied by this configuration.
    #[must_use]
    pub fn color_path(&self) -> ColorPath {
        ColorPath::from_quirk(self.uses_xy_color_mode, self.gamut)
    }

    /// Returns a mapper using the configured policy.
    #[must_use]
    pub fn mapper(&self) -> CapabilityMapper {
        CapabilityMapper::with_policy(self.unknown_capability)
    }
}
