// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hkr_lib` library.
//!
//! The temperature codec and the derived state views never fail. Errors
//! only arise at the edges: strict construction of value types, and
//! parsing of wire records handed over by the device client.
//!
//! Note that [`ErrorStatus`](crate::types::ErrorStatus) is not an error
//! type. It is device-reported data and lives with the other value types.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing or producing a wire record.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A temperature code is neither a sentinel nor within `16..=60`.
    #[error("temperature code {0} is not a sentinel (253, 254) and not in range [16, 60]")]
    InvalidTemperatureCode(i32),

    /// An error code is outside the known `0..=6` vocabulary.
    #[error("error code {0} is out of range [0, 6]")]
    InvalidErrorCode(u8),
}

/// Errors related to parsing and producing thermostat wire records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON (de)serialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A temperature field carries a code outside the protocol range.
    ///
    /// Only returned under [`ParsePolicy::Strict`](crate::telemetry::ParsePolicy::Strict).
    #[error("protocol violation in {field}: code {code}")]
    ProtocolViolation {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw code that was received.
        code: i32,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_code_display() {
        let err = ValueError::InvalidErrorCode(7);
        assert_eq!(err.to_string(), "error code 7 is out of range [0, 6]");
    }

    #[test]
    fn invalid_temperature_code_display() {
        let err = ValueError::InvalidTemperatureCode(255);
        assert_eq!(
            err.to_string(),
            "temperature code 255 is not a sentinel (253, 254) and not in range [16, 60]"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidErrorCode(7);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidErrorCode(7))));
    }

    #[test]
    fn protocol_violation_display() {
        let err = ParseError::ProtocolViolation {
            field: "target-temperature",
            code: 70,
        };
        assert_eq!(
            err.to_string(),
            "protocol violation in target-temperature: code 70"
        );
    }

    #[test]
    fn error_from_parse_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: Error = ParseError::from(json_err).into();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }
}
