// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-reported error status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Maintenance condition reported by the thermostat.
///
/// These are conditions the device reports about itself, not failures of
/// this library. They are surfaced unchanged and do not affect how
/// temperature codes are interpreted.
///
/// On the wire the status is a small integer:
///
/// | Code | Variant |
/// |------|---------|
/// | 0 | [`None`](Self::None) |
/// | 1 | [`BadAdaptation`](Self::BadAdaptation) |
/// | 2 | [`WeakBatteries`](Self::WeakBatteries) |
/// | 3 | [`ValveStuck`](Self::ValveStuck) |
/// | 4 | [`Preparation`](Self::Preparation) |
/// | 5 | [`Installation`](Self::Installation) |
/// | 6 | [`Adaptation`](Self::Adaptation) |
///
/// # Examples
///
/// ```
/// use hkr_lib::types::ErrorStatus;
///
/// let status = ErrorStatus::try_from(3).unwrap();
/// assert_eq!(status, ErrorStatus::ValveStuck);
/// assert_eq!(status.code(), 3);
///
/// assert!(ErrorStatus::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ErrorStatus {
    /// No error.
    #[default]
    None,
    /// Adaptation failed; mounting should be checked.
    BadAdaptation,
    /// Valve stroke too short or batteries too weak.
    WeakBatteries,
    /// Valve does not move.
    ValveStuck,
    /// Installation is being prepared.
    Preparation,
    /// Device is ready for installation.
    Installation,
    /// Adaptation run in progress.
    Adaptation,
}

impl ErrorStatus {
    /// All variants in wire order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::BadAdaptation,
        Self::WeakBatteries,
        Self::ValveStuck,
        Self::Preparation,
        Self::Installation,
        Self::Adaptation,
    ];

    /// Returns the wire code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::BadAdaptation => 1,
            Self::WeakBatteries => 2,
            Self::ValveStuck => 3,
            Self::Preparation => 4,
            Self::Installation => 5,
            Self::Adaptation => 6,
        }
    }

    /// Returns `true` unless the status is [`ErrorStatus::None`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns a short human-readable explanation.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::None => "no error",
            Self::BadAdaptation => "no adaptation possible, check mounting",
            Self::WeakBatteries => "valve stroke too short or batteries weak",
            Self::ValveStuck => "valve does not move",
            Self::Preparation => "installation being prepared",
            Self::Installation => "ready for installation",
            Self::Adaptation => "adaptation in progress",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl TryFrom<u8> for ErrorStatus {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::BadAdaptation),
            2 => Ok(Self::WeakBatteries),
            3 => Ok(Self::ValveStuck),
            4 => Ok(Self::Preparation),
            5 => Ok(Self::Installation),
            6 => Ok(Self::Adaptation),
            _ => Err(ValueError::InvalidErrorCode(value)),
        }
    }
}

impl From<ErrorStatus> for u8 {
    fn from(status: ErrorStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_mapping_is_bijective() {
        for (i, status) in ErrorStatus::ALL.iter().enumerate() {
            let code = u8::try_from(i).unwrap();
            assert_eq!(status.code(), code);
            assert_eq!(ErrorStatus::try_from(code).unwrap(), *status);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [7, 8, 100, 255] {
            assert_eq!(
                ErrorStatus::try_from(code),
                Err(ValueError::InvalidErrorCode(code))
            );
        }
    }

    #[test]
    fn is_error() {
        assert!(!ErrorStatus::None.is_error());
        assert!(ErrorStatus::ValveStuck.is_error());
        assert!(ErrorStatus::Adaptation.is_error());
    }

    #[test]
    fn serde_uses_wire_codes() {
        assert_eq!(
            serde_json::to_string(&ErrorStatus::WeakBatteries).unwrap(),
            "2"
        );
        let status: ErrorStatus = serde_json::from_str("5").unwrap();
        assert_eq!(status, ErrorStatus::Installation);
        assert!(serde_json::from_str::<ErrorStatus>("9").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ErrorStatus::ValveStuck.to_string(), "valve does not move");
    }
}
