// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat wire record parsing.
//!
//! The device client hands over each thermostat record as a flat JSON
//! object. Field names follow the protocol:
//!
//! | Field | Content |
//! |-------|---------|
//! | `current-temperature` | measured temperature code |
//! | `target-temperature` | target temperature code or sentinel |
//! | `economy-temperature` | economy preset code |
//! | `comfort-temperature` | comfort preset code |
//! | `ui-lock` | opaque lock value |
//! | `device-lock` | opaque lock value |
//! | `error-code` | error status, `0..=6` |
//! | `battery-low` | opaque battery value |
//! | `next-change` | opaque next scheduled change |
//!
//! The gateway's native element names (`tist`, `tsoll`, `absenk`,
//! `komfort`, `lock`, `devicelock`, `errorcode`, `batterylow`,
//! `nextchange`) are accepted as well. Missing fields take their defaults.
//!
//! # Examples
//!
//! ```
//! use hkr_lib::telemetry::parse_thermostat;
//!
//! let json = r#"{"current-temperature":40,"target-temperature":254,"error-code":0}"#;
//! let state = parse_thermostat(json).unwrap();
//!
//! assert_eq!(state.current_celsius(), 20.0);
//! assert!(state.is_fully_on());
//! ```

mod hkr_parser;

pub use hkr_parser::{ParsePolicy, parse_thermostat, parse_thermostat_with, to_wire_json};
