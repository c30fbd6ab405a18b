// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature code and radiator mode types.
//!
//! [`TemperatureCode`] wraps a raw wire code and exposes the conversions of
//! the [`codec`](crate::codec) module as methods. [`RadiatorMode`] names
//! which of the three thermostat states a target code selects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::ValueError;

/// Raw temperature code as sent by the gateway.
///
/// The wrapped value is kept exactly as received. [`TemperatureCode::from_raw`]
/// accepts any integer so that out-of-range telemetry can be carried and
/// inspected; [`TemperatureCode::new`] only accepts protocol-valid codes.
///
/// # Examples
///
/// ```
/// use hkr_lib::types::TemperatureCode;
///
/// let code = TemperatureCode::from_celsius(21.5);
/// assert_eq!(code.value(), 43);
/// assert_eq!(code.celsius(), 21.5);
///
/// assert!(TemperatureCode::ON.is_on());
/// assert!(TemperatureCode::new(61).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemperatureCode(i32);

impl TemperatureCode {
    /// Radiator fully open.
    pub const ON: Self = Self(codec::ON_CODE);

    /// Radiator fully closed.
    pub const OFF: Self = Self(codec::OFF_CODE);

    /// Lowest regular code (8.0 °C).
    pub const MIN: Self = Self(codec::MIN_CODE);

    /// Highest regular code (30.0 °C).
    pub const MAX: Self = Self(codec::MAX_CODE);

    /// Default regulated target (21.0 °C).
    pub const REGULATED_DEFAULT: Self = Self(42);

    /// Creates a code, rejecting values the protocol does not define.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperatureCode` if `code` is neither a
    /// sentinel nor within `16..=60`.
    pub fn new(code: i32) -> Result<Self, ValueError> {
        if !codec::is_protocol_valid(code) {
            return Err(ValueError::InvalidTemperatureCode(code));
        }
        Ok(Self(code))
    }

    /// Wraps a code without validation.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// Encodes a temperature in degrees Celsius.
    ///
    /// See [`codec::encode_from_celsius`] for clamping and truncation.
    #[must_use]
    pub fn from_celsius(celsius: f32) -> Self {
        Self(codec::encode_from_celsius(celsius))
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Decodes the code to degrees Celsius.
    #[must_use]
    pub fn celsius(&self) -> f32 {
        codec::decode_to_celsius(self.0)
    }

    /// Returns `true` for the "fully on" sentinel.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        codec::is_on_code(self.0)
    }

    /// Returns `true` for the "fully off" sentinel.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        codec::is_off_code(self.0)
    }

    /// Returns `true` if the code is a sentinel or within `16..=60`.
    #[must_use]
    pub const fn is_protocol_valid(&self) -> bool {
        codec::is_protocol_valid(self.0)
    }

    /// Returns the radiator mode this code selects when used as a target.
    #[must_use]
    pub const fn mode(&self) -> RadiatorMode {
        RadiatorMode::from_code(self.0)
    }
}

impl Default for TemperatureCode {
    fn default() -> Self {
        Self::REGULATED_DEFAULT
    }
}

impl fmt::Display for TemperatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            RadiatorMode::On => write!(f, "ON"),
            RadiatorMode::Off => write!(f, "OFF"),
            RadiatorMode::Regulated => write!(f, "{:.1} °C", self.celsius()),
        }
    }
}

impl TryFrom<i32> for TemperatureCode {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemperatureCode> for i32 {
    fn from(code: TemperatureCode) -> Self {
        code.0
    }
}

/// Operating mode of the radiator valve, derived from the target code.
///
/// Every integer maps to exactly one mode. Codes that are not sentinels,
/// including out-of-range ones, are [`RadiatorMode::Regulated`].
///
/// # Examples
///
/// ```
/// use hkr_lib::types::RadiatorMode;
///
/// assert_eq!(RadiatorMode::from_code(254), RadiatorMode::On);
/// assert_eq!(RadiatorMode::from_code(253), RadiatorMode::Off);
/// assert_eq!(RadiatorMode::from_code(42), RadiatorMode::Regulated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiatorMode {
    /// Valve fully open, no regulation.
    On,
    /// Valve fully closed.
    Off,
    /// Valve modulated to reach the target temperature.
    Regulated,
}

impl RadiatorMode {
    /// Classifies a raw target code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        if codec::is_on_code(code) {
            Self::On
        } else if codec::is_off_code(code) {
            Self::Off
        } else {
            Self::Regulated
        }
    }

    /// Returns a lowercase name for the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Regulated => "regulated",
        }
    }
}

impl fmt::Display for RadiatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_protocol_codes() {
        for code in 16..=60 {
            assert_eq!(TemperatureCode::new(code).unwrap().value(), code);
        }
        assert!(TemperatureCode::new(253).unwrap().is_off());
        assert!(TemperatureCode::new(254).unwrap().is_on());
    }

    #[test]
    fn new_rejects_other_codes() {
        for code in [-1, 0, 15, 61, 100, 252, 255] {
            assert_eq!(
                TemperatureCode::new(code),
                Err(ValueError::InvalidTemperatureCode(code))
            );
        }
    }

    #[test]
    fn from_raw_keeps_value() {
        let code = TemperatureCode::from_raw(100);
        assert_eq!(code.value(), 100);
        assert!(!code.is_protocol_valid());
        assert_eq!(code.celsius(), 50.0);
    }

    #[test]
    fn from_celsius_delegates_to_codec() {
        assert_eq!(TemperatureCode::from_celsius(21.3).value(), 42);
        assert_eq!(TemperatureCode::from_celsius(5.0), TemperatureCode::OFF);
        assert_eq!(TemperatureCode::from_celsius(35.0), TemperatureCode::ON);
    }

    #[test]
    fn default_is_regulated_at_21() {
        let code = TemperatureCode::default();
        assert_eq!(code.mode(), RadiatorMode::Regulated);
        assert_eq!(code.celsius(), 21.0);
    }

    #[test]
    fn display() {
        assert_eq!(TemperatureCode::ON.to_string(), "ON");
        assert_eq!(TemperatureCode::OFF.to_string(), "OFF");
        assert_eq!(TemperatureCode::from_raw(43).to_string(), "21.5 °C");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&TemperatureCode::from_raw(42)).unwrap();
        assert_eq!(json, "42");
        let code: TemperatureCode = serde_json::from_str("254").unwrap();
        assert!(code.is_on());
    }

    #[test]
    fn mode_is_exhaustive() {
        for code in -300..=300 {
            let mode = RadiatorMode::from_code(code);
            match code {
                254 => assert_eq!(mode, RadiatorMode::On),
                253 => assert_eq!(mode, RadiatorMode::Off),
                _ => assert_eq!(mode, RadiatorMode::Regulated),
            }
        }
        assert_eq!(RadiatorMode::from_code(i32::MIN), RadiatorMode::Regulated);
        assert_eq!(RadiatorMode::from_code(i32::MAX), RadiatorMode::Regulated);
    }

    #[test]
    fn mode_display() {
        assert_eq!(RadiatorMode::Regulated.to_string(), "regulated");
        assert_eq!(RadiatorMode::On.as_str(), "on");
    }
}
