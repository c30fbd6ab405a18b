// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat temperature commands.

use crate::error::ValueError;
use crate::state::ThermostatChange;
use crate::types::TemperatureCode;

use super::Command;

/// Command to read or set the target temperature.
///
/// # Examples
///
/// ```
/// use hkr_lib::command::{Command, TargetTemperatureCommand};
///
/// // Switch the radiator fully on
/// let on = TargetTemperatureCommand::On;
/// assert_eq!(on.payload(), Some("254".to_string()));
///
/// // Below 8 °C the radiator is switched off
/// let cold = TargetTemperatureCommand::Celsius(6.0);
/// assert_eq!(cold.payload(), Some("253".to_string()));
///
/// // Query the current target
/// let get = TargetTemperatureCommand::Get;
/// assert_eq!(get.name(), "gethkrtsoll");
/// assert_eq!(get.payload(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetTemperatureCommand {
    /// Query the current target code.
    Get,
    /// Open the valve fully.
    On,
    /// Close the valve.
    Off,
    /// Regulate to a temperature in degrees Celsius.
    Celsius(f32),
    /// Send a raw code.
    ///
    /// Build the code with [`TemperatureCode::new`] or use
    /// [`TargetTemperatureCommand::from_code`]. A code created with
    /// [`TemperatureCode::from_raw`] is sent as is; codes outside the
    /// protocol range are logged as a warning.
    Code(TemperatureCode),
}

impl TargetTemperatureCommand {
    /// Creates a command sending a raw code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperatureCode` if `code` is neither a
    /// sentinel nor within `16..=60`.
    pub fn from_code(code: i32) -> Result<Self, ValueError> {
        TemperatureCode::new(code).map(Self::Code)
    }

    /// Returns the code this command would write, or `None` for a query.
    #[must_use]
    pub fn code(&self) -> Option<TemperatureCode> {
        match self {
            Self::Get => None,
            Self::On => Some(TemperatureCode::ON),
            Self::Off => Some(TemperatureCode::OFF),
            Self::Celsius(celsius) => Some(TemperatureCode::from_celsius(*celsius)),
            Self::Code(code) => Some(*code),
        }
    }
}

impl Command for TargetTemperatureCommand {
    fn name(&self) -> String {
        match self {
            Self::Get => "gethkrtsoll".to_string(),
            _ => "sethkrtsoll".to_string(),
        }
    }

    fn payload(&self) -> Option<String> {
        let code = self.code()?;
        if !code.is_protocol_valid() {
            tracing::warn!(code = code.value(), "Sending target code outside protocol range");
        }
        Some(code.value().to_string())
    }

    fn expected_change(&self) -> Option<ThermostatChange> {
        self.code().map(|code| ThermostatChange::target(code.value()))
    }
}

/// Query for one of the temperature presets.
///
/// # Examples
///
/// ```
/// use hkr_lib::command::{Command, PresetQuery};
///
/// assert_eq!(PresetQuery::Comfort.name(), "gethkrkomfort");
/// assert_eq!(PresetQuery::Economy.to_query(), "switchcmd=gethkrabsenk");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetQuery {
    /// Comfort preset.
    Comfort,
    /// Economy preset.
    Economy,
}

impl Command for PresetQuery {
    fn name(&self) -> String {
        match self {
            Self::Comfort => "gethkrkomfort".to_string(),
            Self::Economy => "gethkrabsenk".to_string(),
        }
    }

    fn payload(&self) -> Option<String> {
        None
    }
}
