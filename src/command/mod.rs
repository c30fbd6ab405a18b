// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat command definitions.
//!
//! Typed representations of the gateway commands a device client sends to
//! read or change thermostat temperatures. Transport is up to the client;
//! this module only produces the command name and integer payload.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`TargetTemperatureCommand`] | Read or set the target temperature | 21.5 °C, On, Off |
//! | [`PresetQuery`] | Read the comfort or economy preset | Comfort |
//!
//! # Examples
//!
//! ```
//! use hkr_lib::command::{Command, TargetTemperatureCommand};
//!
//! let cmd = TargetTemperatureCommand::Celsius(21.3);
//! assert_eq!(cmd.name(), "sethkrtsoll");
//! assert_eq!(cmd.payload(), Some("42".to_string()));
//! assert_eq!(cmd.to_query(), "switchcmd=sethkrtsoll&param=42");
//! ```

mod thermostat;

pub use thermostat::{PresetQuery, TargetTemperatureCommand};

use crate::state::ThermostatChange;

/// A command that can be sent to a thermostat through the gateway.
pub trait Command {
    /// Returns the gateway command name.
    fn name(&self) -> String;

    /// Returns the command parameter, if any.
    ///
    /// Temperature parameters are raw codes, never Celsius values.
    fn payload(&self) -> Option<String>;

    /// Returns the query-string form used by the gateway's HTTP interface.
    fn to_query(&self) -> String {
        match self.payload() {
            Some(p) => format!("switchcmd={}&param={}", self.name(), p),
            None => format!("switchcmd={}", self.name()),
        }
    }

    /// Returns the state change the device reports once the command is acknowledged.
    ///
    /// Queries return `None`.
    fn expected_change(&self) -> Option<ThermostatChange> {
        None
    }
}
