// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for thermostat wire records.

use crate::error::ParseError;
use crate::state::ThermostatState;

/// How protocol-violating temperature codes are handled while parsing.
///
/// The codec always accepts such codes; this policy only decides whether
/// the parser reports them as warnings or refuses the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Keep the record and log a warning per offending field.
    #[default]
    PassThrough,
    /// Reject the record with [`ParseError::ProtocolViolation`].
    Strict,
}

/// Parses a thermostat record with [`ParsePolicy::PassThrough`].
///
/// # Errors
///
/// Returns `ParseError::Json` if the payload is not a valid record, including
/// an `error-code` outside `0..=6`.
pub fn parse_thermostat(payload: &str) -> Result<ThermostatState, ParseError> {
    parse_thermostat_with(payload, ParsePolicy::default())
}

/// Parses a thermostat record with the given policy.
///
/// # Errors
///
/// Returns `ParseError::Json` if the payload is not a valid record, and
/// `ParseError::ProtocolViolation` under [`ParsePolicy::Strict`] if a
/// temperature code is neither a sentinel nor within `16..=60`.
///
/// # Examples
///
/// ```
/// use hkr_lib::telemetry::{ParsePolicy, parse_thermostat_with};
///
/// let json = r#"{"tist":70,"tsoll":42}"#;
///
/// let lenient = parse_thermostat_with(json, ParsePolicy::PassThrough).unwrap();
/// assert_eq!(lenient.current_celsius(), 35.0);
///
/// assert!(parse_thermostat_with(json, ParsePolicy::Strict).is_err());
/// ```
pub fn parse_thermostat_with(
    payload: &str,
    policy: ParsePolicy,
) -> Result<ThermostatState, ParseError> {
    tracing::trace!(payload = %payload, ?policy, "Parsing thermostat record");
    let state: ThermostatState = serde_json::from_str(payload)?;

    for violation in state.protocol_violations() {
        let field = violation.field.wire_name();
        match policy {
            ParsePolicy::PassThrough => {
                tracing::warn!(
                    wire_field = %field,
                    code = violation.code,
                    "Temperature code outside protocol range, passing through"
                );
            }
            ParsePolicy::Strict => {
                return Err(ParseError::ProtocolViolation {
                    field,
                    code: violation.code,
                });
            }
        }
    }

    Ok(state)
}

/// Serializes a thermostat state to a wire record using protocol field names.
///
/// # Errors
///
/// Returns `ParseError::Json` if serialization fails.
pub fn to_wire_json(state: &ThermostatState) -> Result<String, ParseError> {
    serde_json::to_string(state).map_err(ParseError::Json)
}
