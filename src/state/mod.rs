// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat state management types.
//!
//! [`ThermostatState`] holds one poll cycle's raw codes and pass-through
//! values and derives Celsius readings from them. [`ThermostatChange`]
//! represents individual updates that can be applied, and
//! [`SharedThermostat`] publishes whole snapshots to concurrent readers.
//!
//! # Examples
//!
//! ```
//! use hkr_lib::state::{ThermostatChange, ThermostatState};
//!
//! let mut state = ThermostatState::new().with_temperatures(40, 42, 32, 44);
//! assert_eq!(state.current_celsius(), 20.0);
//!
//! state.apply(&ThermostatChange::economy(253));
//! assert_eq!(state.economy_celsius(), 0.0);
//! assert!(state.is_regulated());
//! ```

mod shared;
mod state_change;
mod thermostat_state;

pub use shared::SharedThermostat;
pub use state_change::ThermostatChange;
pub use thermostat_state::{ProtocolViolation, TemperatureField, ThermostatState};
