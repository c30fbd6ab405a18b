// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hkr_lib` - radiator thermostat state for home-automation gateways.
//!
//! Home-automation gateways report radiator thermostats ("HKR") as a flat
//! record of integer temperature codes plus a handful of status values.
//! This library models that record and converts its codes to and from
//! degrees Celsius.
//!
//! Transport, authentication and scheduling are left to the device client
//! that uses this crate.
//!
//! # Temperature Codes
//!
//! Temperatures travel as half-degree integer codes: `16` is 8.0 °C, `60`
//! is 30.0 °C. Two codes are reserved: `253` closes the valve, `254` opens
//! it fully. See [`codec`] for the exact conversion rules.
//!
//! # Quick Start
//!
//! ```
//! use hkr_lib::telemetry::parse_thermostat;
//! use hkr_lib::types::{ErrorStatus, RadiatorMode};
//!
//! # fn main() -> hkr_lib::Result<()> {
//! let json = r#"{
//!     "current-temperature": 41,
//!     "target-temperature": 42,
//!     "economy-temperature": 253,
//!     "comfort-temperature": 44,
//!     "error-code": 0
//! }"#;
//!
//! let state = parse_thermostat(json)?;
//!
//! assert_eq!(state.current_celsius(), 20.5);
//! assert_eq!(state.mode(), RadiatorMode::Regulated);
//! assert_eq!(state.economy_celsius(), 0.0);
//! assert_eq!(state.error_status(), ErrorStatus::None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Changing the Target
//!
//! ```
//! use hkr_lib::command::{Command, TargetTemperatureCommand};
//! use hkr_lib::state::ThermostatState;
//!
//! let mut state = ThermostatState::new().with_temperatures(40, 42, 32, 44);
//!
//! let cmd = TargetTemperatureCommand::Celsius(22.0);
//! assert_eq!(cmd.to_query(), "switchcmd=sethkrtsoll&param=44");
//!
//! // Once the gateway acknowledges, reflect the change locally
//! if let Some(change) = cmd.expected_change() {
//!     state.apply(&change);
//! }
//! assert_eq!(state.target_celsius(), 22.0);
//! ```

pub mod codec;
pub mod command;
pub mod error;
pub mod state;
pub mod telemetry;
pub mod types;

pub use command::{Command, PresetQuery, TargetTemperatureCommand};
pub use error::{Error, ParseError, Result, ValueError};
pub use state::{
    ProtocolViolation, SharedThermostat, TemperatureField, ThermostatChange, ThermostatState,
};
pub use telemetry::{ParsePolicy, parse_thermostat, parse_thermostat_with, to_wire_json};
pub use types::{
    BatteryState, ErrorStatus, LockState, NextChangeInfo, RadiatorMode, TemperatureCode,
};
