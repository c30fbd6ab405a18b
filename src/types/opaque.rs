// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opaque sub-values of the thermostat record.
//!
//! Lock flags, battery status and the next scheduled change are forwarded
//! from the device client without interpretation. Each wrapper holds the
//! value exactly as it appeared in the wire record and serializes it back
//! verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! opaque_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// Wraps a wire value.
            #[must_use]
            pub fn new(value: Value) -> Self {
                Self(value)
            }

            /// Returns the wrapped wire value.
            #[must_use]
            pub const fn as_value(&self) -> &Value {
                &self.0
            }

            /// Consumes the wrapper and returns the wire value.
            #[must_use]
            pub fn into_value(self) -> Value {
                self.0
            }

            /// Returns `true` if no value was supplied.
            #[must_use]
            pub fn is_absent(&self) -> bool {
                self.0.is_null()
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

opaque_value!(
    /// Lock flag, either set through the UI/API or on the device itself.
    LockState
);

opaque_value!(
    /// Battery status as reported by the device.
    BatteryState
);

opaque_value!(
    /// Next scheduled temperature change.
    NextChangeInfo
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_is_absent() {
        assert!(LockState::default().is_absent());
        assert!(BatteryState::default().is_absent());
        assert!(NextChangeInfo::default().is_absent());
    }

    #[test]
    fn value_passes_through_unchanged() {
        let raw = json!({"endperiod": 1_700_000_000, "tchange": 34});
        let next = NextChangeInfo::new(raw.clone());
        assert_eq!(next.as_value(), &raw);
        assert_eq!(serde_json::to_value(&next).unwrap(), raw);
        assert_eq!(next.into_value(), raw);
    }

    #[test]
    fn deserialize_keeps_shape() {
        let lock: LockState = serde_json::from_str("1").unwrap();
        assert_eq!(lock.as_value(), &json!(1));
        assert!(!lock.is_absent());
    }
}
