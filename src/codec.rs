// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature code conversion.
//!
//! The gateway reports thermostat temperatures as integer codes with a
//! resolution of half a degree Celsius. Two codes are reserved:
//!
//! | Code | Meaning |
//! |------|---------|
//! | `16..=60` | 8.0 °C to 30.0 °C in 0.5 °C steps |
//! | `253` | Radiator fully closed (off) |
//! | `254` | Radiator fully open (always on) |
//!
//! Conversion is lossy. Decoding a sentinel yields a display value
//! (`0.0` for off, `30.0` for on), and encoding truncates toward zero.
//! As a consequence the two directions are not inverse at the "on"
//! sentinel:
//!
//! ```
//! use hkr_lib::codec::{decode_to_celsius, encode_from_celsius, ON_CODE};
//!
//! let on = decode_to_celsius(ON_CODE);
//! assert_eq!(on, 30.0);
//! assert_eq!(encode_from_celsius(on), 60);
//! ```
//!
//! None of these functions fail. Codes outside the documented range that
//! are not sentinels still go through the linear formula, so out-of-range
//! telemetry stays visible to callers instead of being rejected here. Use
//! [`is_protocol_valid`] to flag such codes.

/// Code meaning the radiator is fully open.
pub const ON_CODE: i32 = 254;

/// Code meaning the radiator is fully closed.
pub const OFF_CODE: i32 = 253;

/// Lowest regular code (8.0 °C).
pub const MIN_CODE: i32 = 16;

/// Highest regular code (30.0 °C).
pub const MAX_CODE: i32 = 60;

/// Lowest temperature that encodes to a regular code.
pub const MIN_CELSIUS: f32 = 8.0;

/// Highest temperature that encodes to a regular code.
pub const MAX_CELSIUS: f32 = 30.0;

/// Width of one code step in degrees Celsius.
pub const STEP_CELSIUS: f32 = 0.5;

/// Display value for the off sentinel.
pub const OFF_DISPLAY_CELSIUS: f32 = 0.0;

/// Display value for the on sentinel.
pub const ON_DISPLAY_CELSIUS: f32 = 30.0;

/// Returns `true` if `code` is the "fully on" sentinel.
#[must_use]
pub const fn is_on_code(code: i32) -> bool {
    code == ON_CODE
}

/// Returns `true` if `code` is the "fully off" sentinel.
#[must_use]
pub const fn is_off_code(code: i32) -> bool {
    code == OFF_CODE
}

/// Returns `true` if `code` is a sentinel or lies within `16..=60`.
#[must_use]
pub const fn is_protocol_valid(code: i32) -> bool {
    is_on_code(code) || is_off_code(code) || (code >= MIN_CODE && code <= MAX_CODE)
}

/// Converts a raw code to degrees Celsius.
///
/// Sentinels short-circuit to their display values and never reach the
/// linear formula.
///
/// # Examples
///
/// ```
/// use hkr_lib::codec::decode_to_celsius;
///
/// assert_eq!(decode_to_celsius(42), 21.0);
/// assert_eq!(decode_to_celsius(253), 0.0);
/// assert_eq!(decode_to_celsius(254), 30.0);
///
/// // Out-of-range codes pass through unchanged
/// assert_eq!(decode_to_celsius(100), 50.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decode_to_celsius(code: i32) -> f32 {
    if is_off_code(code) {
        return OFF_DISPLAY_CELSIUS;
    }
    if is_on_code(code) {
        return ON_DISPLAY_CELSIUS;
    }
    code as f32 * STEP_CELSIUS
}

/// Converts degrees Celsius to a raw code.
///
/// Temperatures below 8.0 °C select the off sentinel, temperatures above
/// 30.0 °C select the on sentinel. Anything in between is divided by the
/// step width and truncated, so `21.3` becomes `42`, not `43`.
///
/// `NaN` is treated as "off".
///
/// # Examples
///
/// ```
/// use hkr_lib::codec::encode_from_celsius;
///
/// assert_eq!(encode_from_celsius(21.0), 42);
/// assert_eq!(encode_from_celsius(21.3), 42);
/// assert_eq!(encode_from_celsius(7.9), 253);
/// assert_eq!(encode_from_celsius(30.1), 254);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_from_celsius(celsius: f32) -> i32 {
    if celsius.is_nan() || celsius < MIN_CELSIUS {
        return OFF_CODE;
    }
    if celsius > MAX_CELSIUS {
        return ON_CODE;
    }
    // Range is bounded above, so the cast cannot saturate.
    (celsius / STEP_CELSIUS) as i32
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_predicates() {
        assert!(is_on_code(254));
        assert!(!is_on_code(253));
        assert!(is_off_code(253));
        assert!(!is_off_code(254));
        assert!(!is_on_code(42));
        assert!(!is_off_code(42));
    }

    #[test]
    fn decode_regular_range_is_linear() {
        for code in MIN_CODE..=MAX_CODE {
            #[allow(clippy::cast_precision_loss)]
            let expected = code as f32 * 0.5;
            assert_eq!(decode_to_celsius(code), expected);
        }
    }

    #[test]
    fn decode_sentinels_use_display_values() {
        assert_eq!(decode_to_celsius(OFF_CODE), 0.0);
        assert_eq!(decode_to_celsius(ON_CODE), 30.0);
    }

    #[test]
    fn decode_out_of_range_passes_through() {
        assert_eq!(decode_to_celsius(0), 0.0);
        assert_eq!(decode_to_celsius(10), 5.0);
        assert_eq!(decode_to_celsius(-4), -2.0);
        assert_eq!(decode_to_celsius(252), 126.0);
        assert_eq!(decode_to_celsius(255), 127.5);
    }

    #[test]
    fn encode_regular_range_truncates() {
        let mut t = MIN_CELSIUS;
        while t <= MAX_CELSIUS {
            let code = encode_from_celsius(t);
            assert!((MIN_CODE..=MAX_CODE).contains(&code), "{t} -> {code}");
            #[allow(clippy::cast_possible_truncation)]
            let expected = (t / 0.5).floor() as i32;
            assert_eq!(code, expected);
            t += 0.1;
        }
    }

    #[test]
    fn encode_truncates_instead_of_rounding() {
        assert_eq!(encode_from_celsius(21.3), 42);
        assert_eq!(encode_from_celsius(21.4), 42);
        assert_eq!(encode_from_celsius(21.5), 43);
        assert_eq!(encode_from_celsius(29.99), 59);
    }

    #[test]
    fn encode_below_minimum_is_off() {
        for t in [7.99, 7.5, 0.0, -10.0, f32::MIN, f32::NEG_INFINITY] {
            assert_eq!(encode_from_celsius(t), OFF_CODE);
        }
    }

    #[test]
    fn encode_above_maximum_is_on() {
        for t in [30.01, 31.0, 100.0, f32::MAX, f32::INFINITY] {
            assert_eq!(encode_from_celsius(t), ON_CODE);
        }
    }

    #[test]
    fn encode_boundaries_are_regular_codes() {
        assert_eq!(encode_from_celsius(8.0), MIN_CODE);
        assert_eq!(encode_from_celsius(30.0), MAX_CODE);
    }

    #[test]
    fn encode_nan_is_off() {
        assert_eq!(encode_from_celsius(f32::NAN), OFF_CODE);
    }

    #[test]
    fn round_trip_over_regular_range() {
        for code in MIN_CODE..=MAX_CODE {
            assert_eq!(encode_from_celsius(decode_to_celsius(code)), code);
        }
    }

    #[test]
    fn round_trip_at_sentinels_is_asymmetric() {
        assert_eq!(decode_to_celsius(OFF_CODE), 0.0);
        assert_eq!(encode_from_celsius(0.0), OFF_CODE);

        assert_eq!(decode_to_celsius(ON_CODE), 30.0);
        let reencoded = encode_from_celsius(30.0);
        assert_ne!(reencoded, ON_CODE);
        assert_eq!(reencoded, MAX_CODE);
    }

    #[test]
    fn protocol_validity() {
        assert!(is_protocol_valid(16));
        assert!(is_protocol_valid(60));
        assert!(is_protocol_valid(253));
        assert!(is_protocol_valid(254));
        assert!(!is_protocol_valid(15));
        assert!(!is_protocol_valid(61));
        assert!(!is_protocol_valid(252));
        assert!(!is_protocol_valid(255));
        assert!(!is_protocol_valid(-1));
    }
}
