// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability state management types.
//!
//! [`CapabilityState`] holds the last known capability values of a bulb,
//! while [`CapabilityValues`] is a set of requested values to apply.
//!
//! # Examples
//!
//! ```
//! use huelight_lib::state::{CapabilityState, CapabilityValues};
//! use huelight_lib::types::LightMode;
//!
//! let mut state = CapabilityState::new();
//!
//! let request = CapabilityValues::new()
//!     .onoff(true)
//!     .dim(0.4)
//!     .light_mode(LightMode::Color);
//! state.apply(&request);
//!
//! assert_eq!(state.onoff(), Some(true));
//! assert_eq!(state.light_mode(), Some(LightMode::Color));
//! ```

mod capability_state;
mod capability_values;

pub use capability_state::CapabilityState;
pub use capability_values::CapabilityValues;
