// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat state.
//!
//! # Types
//!
//! - [`TemperatureCode`] - Raw half-degree temperature code or sentinel
//! - [`RadiatorMode`] - On/Off/Regulated, derived from a target code
//! - [`ErrorStatus`] - Device-reported maintenance condition (0-6)
//! - [`LockState`], [`BatteryState`], [`NextChangeInfo`] - Opaque pass-through values

mod error_status;
mod opaque;
mod temperature;

pub use error_status::ErrorStatus;
pub use opaque::{BatteryState, LockState, NextChangeInfo};
pub use temperature::{RadiatorMode, TemperatureCode};
