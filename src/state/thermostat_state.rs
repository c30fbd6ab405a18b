// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat state snapshot.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::ValueError;
use crate::types::{
    BatteryState, ErrorStatus, LockState, NextChangeInfo, RadiatorMode, TemperatureCode,
};

use super::ThermostatChange;

/// Which temperature field of a [`ThermostatState`] a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureField {
    /// Measured temperature.
    Current,
    /// Desired temperature, may be a sentinel.
    Target,
    /// Economy preset.
    Economy,
    /// Comfort preset.
    Comfort,
}

impl TemperatureField {
    /// All fields in wire order.
    pub const ALL: [Self; 4] = [Self::Current, Self::Target, Self::Economy, Self::Comfort];

    /// Returns the protocol-level field name.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Current => "current-temperature",
            Self::Target => "target-temperature",
            Self::Economy => "economy-temperature",
            Self::Comfort => "comfort-temperature",
        }
    }
}

/// A temperature field holding a code outside the protocol range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolViolation {
    /// The offending field.
    pub field: TemperatureField,
    /// The raw code found in it.
    pub code: i32,
}

/// State of a radiator thermostat as reported in one poll cycle.
///
/// The four temperatures are stored as raw wire codes. Celsius values and
/// the on/off/regulated predicates are computed from those codes on every
/// call, so writing a raw field is immediately reflected by every view.
///
/// Lock, battery and next-change values are carried through untouched.
///
/// # Examples
///
/// ```
/// use hkr_lib::state::ThermostatState;
///
/// let mut state = ThermostatState::new();
/// state.set_target_temperature_code(42);
/// assert!(state.is_regulated());
/// assert_eq!(state.target_celsius(), 21.0);
///
/// state.set_target_temperature_code(254);
/// assert!(state.is_fully_on());
/// assert_eq!(state.target_celsius(), 30.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermostatState {
    /// Measured temperature code.
    #[serde(rename = "current-temperature", alias = "tist", default)]
    current_temperature: i32,
    /// Target temperature code.
    #[serde(rename = "target-temperature", alias = "tsoll", default)]
    target_temperature: i32,
    /// Economy preset code.
    #[serde(rename = "economy-temperature", alias = "absenk", default)]
    economy_temperature: i32,
    /// Comfort preset code.
    #[serde(rename = "comfort-temperature", alias = "komfort", default)]
    comfort_temperature: i32,
    /// Lock set through the UI or API.
    #[serde(rename = "ui-lock", alias = "lock", default)]
    lock: LockState,
    /// Lock set on the device.
    #[serde(rename = "device-lock", alias = "devicelock", default)]
    device_lock: LockState,
    /// Device-reported maintenance condition.
    #[serde(rename = "error-code", alias = "errorcode", default)]
    error_status: ErrorStatus,
    /// Battery status, opaque.
    #[serde(rename = "battery-low", alias = "batterylow", default)]
    battery_low: BatteryState,
    /// Next scheduled change, opaque.
    #[serde(rename = "next-change", alias = "nextchange", default)]
    next_change: NextChangeInfo,
}

impl ThermostatState {
    /// Creates a state with all codes zero and no sub-values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all four temperature codes at once.
    #[must_use]
    pub fn with_temperatures(
        mut self,
        current: i32,
        target: i32,
        economy: i32,
        comfort: i32,
    ) -> Self {
        self.current_temperature = current;
        self.target_temperature = target;
        self.economy_temperature = economy;
        self.comfort_temperature = comfort;
        self
    }

    /// Sets the error status.
    #[must_use]
    pub fn with_error_status(mut self, status: ErrorStatus) -> Self {
        self.error_status = status;
        self
    }

    /// Sets the UI and device lock values.
    #[must_use]
    pub fn with_locks(mut self, lock: LockState, device_lock: LockState) -> Self {
        self.lock = lock;
        self.device_lock = device_lock;
        self
    }

    /// Sets the battery value.
    #[must_use]
    pub fn with_battery_low(mut self, battery: BatteryState) -> Self {
        self.battery_low = battery;
        self
    }

    /// Sets the next-change value.
    #[must_use]
    pub fn with_next_change(mut self, next: NextChangeInfo) -> Self {
        self.next_change = next;
        self
    }

    // ========== Raw codes ==========

    /// Returns the raw measured temperature code.
    #[must_use]
    pub const fn current_temperature_code(&self) -> i32 {
        self.current_temperature
    }

    /// Sets the raw measured temperature code.
    pub fn set_current_temperature_code(&mut self, code: i32) {
        self.current_temperature = code;
    }

    /// Returns the raw target temperature code.
    #[must_use]
    pub const fn target_temperature_code(&self) -> i32 {
        self.target_temperature
    }

    /// Sets the raw target temperature code.
    pub fn set_target_temperature_code(&mut self, code: i32) {
        self.target_temperature = code;
    }

    /// Sets the target from a Celsius value, encoding it first.
    ///
    /// Values below 8.0 °C switch the radiator off, values above 30.0 °C
    /// switch it fully on.
    pub fn set_target_celsius(&mut self, celsius: f32) {
        self.target_temperature = codec::encode_from_celsius(celsius);
    }

    /// Returns the raw economy preset code.
    #[must_use]
    pub const fn economy_temperature_code(&self) -> i32 {
        self.economy_temperature
    }

    /// Sets the raw economy preset code.
    pub fn set_economy_temperature_code(&mut self, code: i32) {
        self.economy_temperature = code;
    }

    /// Returns the raw comfort preset code.
    #[must_use]
    pub const fn comfort_temperature_code(&self) -> i32 {
        self.comfort_temperature
    }

    /// Sets the raw comfort preset code.
    pub fn set_comfort_temperature_code(&mut self, code: i32) {
        self.comfort_temperature = code;
    }

    /// Returns the raw code of the given field.
    #[must_use]
    pub const fn temperature_code(&self, field: TemperatureField) -> i32 {
        match field {
            TemperatureField::Current => self.current_temperature,
            TemperatureField::Target => self.target_temperature,
            TemperatureField::Economy => self.economy_temperature,
            TemperatureField::Comfort => self.comfort_temperature,
        }
    }

    /// Sets the raw code of the given field.
    pub fn set_temperature_code(&mut self, field: TemperatureField, code: i32) {
        match field {
            TemperatureField::Current => self.current_temperature = code,
            TemperatureField::Target => self.target_temperature = code,
            TemperatureField::Economy => self.economy_temperature = code,
            TemperatureField::Comfort => self.comfort_temperature = code,
        }
    }

    // ========== Derived views ==========

    /// Returns `true` if the target is the "fully on" sentinel.
    #[must_use]
    pub const fn is_fully_on(&self) -> bool {
        codec::is_on_code(self.target_temperature)
    }

    /// Returns `true` if the target is the "fully off" sentinel.
    #[must_use]
    pub const fn is_fully_off(&self) -> bool {
        codec::is_off_code(self.target_temperature)
    }

    /// Returns `true` if the target is neither sentinel.
    #[must_use]
    pub const fn is_regulated(&self) -> bool {
        !self.is_fully_on() && !self.is_fully_off()
    }

    /// Returns the radiator mode selected by the target code.
    #[must_use]
    pub const fn mode(&self) -> RadiatorMode {
        RadiatorMode::from_code(self.target_temperature)
    }

    /// Returns the measured temperature in degrees Celsius.
    #[must_use]
    pub fn current_celsius(&self) -> f32 {
        codec::decode_to_celsius(self.current_temperature)
    }

    /// Returns the target temperature in degrees Celsius.
    ///
    /// Sentinels yield `30.0` (on) and `0.0` (off).
    #[must_use]
    pub fn target_celsius(&self) -> f32 {
        codec::decode_to_celsius(self.target_temperature)
    }

    /// Returns the economy preset in degrees Celsius.
    #[must_use]
    pub fn economy_celsius(&self) -> f32 {
        codec::decode_to_celsius(self.economy_temperature)
    }

    /// Returns the comfort preset in degrees Celsius.
    #[must_use]
    pub fn comfort_celsius(&self) -> f32 {
        codec::decode_to_celsius(self.comfort_temperature)
    }

    /// Returns the given field as a [`TemperatureCode`].
    #[must_use]
    pub const fn temperature(&self, field: TemperatureField) -> TemperatureCode {
        TemperatureCode::from_raw(self.temperature_code(field))
    }

    // ========== Pass-through values ==========

    /// Returns the UI/API lock value.
    #[must_use]
    pub const fn lock(&self) -> &LockState {
        &self.lock
    }

    /// Sets the UI/API lock value.
    pub fn set_lock(&mut self, lock: LockState) {
        self.lock = lock;
    }

    /// Returns the device lock value.
    #[must_use]
    pub const fn device_lock(&self) -> &LockState {
        &self.device_lock
    }

    /// Sets the device lock value.
    pub fn set_device_lock(&mut self, lock: LockState) {
        self.device_lock = lock;
    }

    /// Returns the device-reported error status.
    #[must_use]
    pub const fn error_status(&self) -> ErrorStatus {
        self.error_status
    }

    /// Sets the device-reported error status.
    pub fn set_error_status(&mut self, status: ErrorStatus) {
        self.error_status = status;
    }

    /// Returns the battery value.
    #[must_use]
    pub const fn battery_low(&self) -> &BatteryState {
        &self.battery_low
    }

    /// Sets the battery value.
    pub fn set_battery_low(&mut self, battery: BatteryState) {
        self.battery_low = battery;
    }

    /// Returns the next scheduled change.
    #[must_use]
    pub const fn next_change(&self) -> &NextChangeInfo {
        &self.next_change
    }

    /// Sets the next scheduled change.
    pub fn set_next_change(&mut self, next: NextChangeInfo) {
        self.next_change = next;
    }

    // ========== Validation ==========

    /// Lists every temperature field whose code is outside the protocol range.
    ///
    /// The codes themselves are left as they are.
    #[must_use]
    pub fn protocol_violations(&self) -> Vec<ProtocolViolation> {
        TemperatureField::ALL
            .iter()
            .filter_map(|&field| {
                let code = self.temperature_code(field);
                (!codec::is_protocol_valid(code)).then_some(ProtocolViolation { field, code })
            })
            .collect()
    }

    /// Checks that all temperature codes are protocol-valid.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperatureCode` for the first field,
    /// in wire order, that holds an invalid code.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self.protocol_violations().first() {
            Some(violation) => Err(ValueError::InvalidTemperatureCode(violation.code)),
            None => Ok(()),
        }
    }

    // ========== Changes ==========

    /// Applies a change to the state.
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply(&mut self, change: &ThermostatChange) -> bool {
        let changed = match change {
            ThermostatChange::Temperature { field, code } => {
                if self.temperature_code(*field) == *code {
                    false
                } else {
                    self.set_temperature_code(*field, *code);
                    true
                }
            }
            ThermostatChange::Lock(lock) => replace_if_changed(&mut self.lock, lock),
            ThermostatChange::DeviceLock(lock) => replace_if_changed(&mut self.device_lock, lock),
            ThermostatChange::ErrorStatus(status) => {
                replace_if_changed(&mut self.error_status, status)
            }
            ThermostatChange::BatteryLow(battery) => {
                replace_if_changed(&mut self.battery_low, battery)
            }
            ThermostatChange::NextChange(next) => replace_if_changed(&mut self.next_change, next),
            ThermostatChange::Batch(changes) => {
                let mut any = false;
                for change in changes {
                    any |= self.apply(change);
                }
                any
            }
        };
        if changed && !change.is_batch() {
            tracing::debug!(
                change = ?change,
                temperature = change.is_temperature(),
                mode = %self.mode(),
                "Applied thermostat change"
            );
        }
        changed
    }
}

fn replace_if_changed<T: Clone + PartialEq>(slot: &mut T, value: &T) -> bool {
    if slot == value {
        false
    } else {
        slot.clone_from(value);
        true
    }
}
