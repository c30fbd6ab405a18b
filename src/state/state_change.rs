// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat state change representation.
//!
//! A [`ThermostatChange`] describes one discrete update to a
//! [`ThermostatState`](super::ThermostatState), typically derived by the
//! device client from a fresh poll or an acknowledged command.
//!
//! # Examples
//!
//! ```
//! use hkr_lib::state::{ThermostatChange, ThermostatState};
//!
//! let mut state = ThermostatState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&ThermostatChange::target(254)));
//! assert!(state.is_fully_on());
//!
//! // Applying the same change again returns false
//! assert!(!state.apply(&ThermostatChange::target(254)));
//! ```

use crate::codec;
use crate::types::{BatteryState, ErrorStatus, LockState, NextChangeInfo};

use super::TemperatureField;

/// Represents a change in thermostat state.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermostatChange {
    /// A raw temperature code changed.
    Temperature {
        /// The field that changed.
        field: TemperatureField,
        /// The new raw code.
        code: i32,
    },

    /// The UI/API lock changed.
    Lock(LockState),

    /// The device lock changed.
    DeviceLock(LockState),

    /// The device-reported error status changed.
    ErrorStatus(ErrorStatus),

    /// The battery value changed.
    BatteryLow(BatteryState),

    /// The next scheduled change was updated.
    NextChange(NextChangeInfo),

    /// Multiple changes at once.
    Batch(Vec<ThermostatChange>),
}

impl ThermostatChange {
    /// Creates a measured temperature change.
    #[must_use]
    pub fn current(code: i32) -> Self {
        Self::Temperature {
            field: TemperatureField::Current,
            code,
        }
    }

    /// Creates a target temperature change.
    #[must_use]
    pub fn target(code: i32) -> Self {
        Self::Temperature {
            field: TemperatureField::Target,
            code,
        }
    }

    /// Creates a target change from degrees Celsius.
    #[must_use]
    pub fn target_celsius(celsius: f32) -> Self {
        Self::target(codec::encode_from_celsius(celsius))
    }

    /// Creates an economy preset change.
    #[must_use]
    pub fn economy(code: i32) -> Self {
        Self::Temperature {
            field: TemperatureField::Economy,
            code,
        }
    }

    /// Creates a comfort preset change.
    #[must_use]
    pub fn comfort(code: i32) -> Self {
        Self::Temperature {
            field: TemperatureField::Comfort,
            code,
        }
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<ThermostatChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is a batch.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns `true` if this change touches a temperature code.
    #[must_use]
    pub fn is_temperature(&self) -> bool {
        match self {
            Self::Temperature { .. } => true,
            Self::Batch(changes) => changes.iter().any(Self::is_temperature),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_select_field() {
        assert_eq!(
            ThermostatChange::current(40),
            ThermostatChange::Temperature {
                field: TemperatureField::Current,
                code: 40
            }
        );
        assert_eq!(
            ThermostatChange::comfort(44),
            ThermostatChange::Temperature {
                field: TemperatureField::Comfort,
                code: 44
            }
        );
    }

    #[test]
    fn target_celsius_encodes() {
        assert_eq!(ThermostatChange::target_celsius(21.3), ThermostatChange::target(42));
        assert_eq!(ThermostatChange::target_celsius(2.0), ThermostatChange::target(253));
    }

    #[test]
    fn is_temperature() {
        assert!(ThermostatChange::economy(32).is_temperature());
        assert!(!ThermostatChange::ErrorStatus(ErrorStatus::None).is_temperature());
        let batch = ThermostatChange::batch(vec![
            ThermostatChange::ErrorStatus(ErrorStatus::None),
            ThermostatChange::target(42),
        ]);
        assert!(batch.is_temperature());
        assert!(batch.is_batch());
    }
}
