// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared thermostat snapshot for one writer and many readers.
//!
//! [`ThermostatState`] itself carries no synchronization. When a device
//! client polls in one thread and readers look at the state from others,
//! [`SharedThermostat`] holds the current snapshot behind an [`Arc`] and
//! swaps it as a whole on every update. Readers never observe a
//! half-written record.
//!
//! ```text
//! device client ── replace(new snapshot) ──▶ SharedThermostat
//!                                                 │
//!                         load() ─────────────────┤
//!                                                 ▼
//!                                    Arc<ThermostatState> (immutable)
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use super::{ThermostatChange, ThermostatState};

/// Atomically replaceable thermostat snapshot.
///
/// # Examples
///
/// ```
/// use hkr_lib::state::{SharedThermostat, ThermostatState};
///
/// let shared = SharedThermostat::new(ThermostatState::new().with_temperatures(40, 42, 32, 44));
/// let before = shared.load();
///
/// shared.replace(ThermostatState::new().with_temperatures(40, 254, 32, 44));
///
/// // The old snapshot is unaffected
/// assert!(before.is_regulated());
/// assert!(shared.load().is_fully_on());
/// ```
#[derive(Debug, Default)]
pub struct SharedThermostat {
    current: RwLock<Arc<ThermostatState>>,
}

impl SharedThermostat {
    /// Creates a holder with an initial snapshot.
    #[must_use]
    pub fn new(state: ThermostatState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state)),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn load(&self) -> Arc<ThermostatState> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the snapshot and returns the previous one.
    pub fn replace(&self, state: ThermostatState) -> Arc<ThermostatState> {
        let next = Arc::new(state);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::debug!("Replaced thermostat snapshot");
        previous
    }

    /// Applies a change to a copy of the current snapshot and publishes it.
    ///
    /// Returns `true` if the change altered the state. Nothing is published
    /// otherwise.
    pub fn apply(&self, change: &ThermostatChange) -> bool {
        let mut guard = self.current.write();
        let mut next = ThermostatState::clone(&guard);
        if !next.apply(change) {
            return false;
        }
        *guard = Arc::new(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn load_returns_current_snapshot() {
        let shared =
            SharedThermostat::new(ThermostatState::new().with_temperatures(40, 42, 32, 44));
        assert_eq!(shared.load().target_temperature_code(), 42);
    }

    #[test]
    fn replace_returns_previous() {
        let shared = SharedThermostat::default();
        let previous = shared.replace(ThermostatState::new().with_temperatures(40, 253, 32, 44));
        assert_eq!(previous.target_temperature_code(), 0);
        assert!(shared.load().is_fully_off());
    }

    #[test]
    fn apply_publishes_only_on_change() {
        let shared =
            SharedThermostat::new(ThermostatState::new().with_temperatures(40, 42, 32, 44));
        let before = shared.load();

        assert!(!shared.apply(&ThermostatChange::target(42)));
        assert!(Arc::ptr_eq(&before, &shared.load()));

        assert!(shared.apply(&ThermostatChange::target(254)));
        assert!(shared.load().is_fully_on());
        assert!(before.is_regulated());
    }

    #[test]
    fn readers_see_whole_snapshots() {
        let shared = Arc::new(SharedThermostat::new(
            ThermostatState::new().with_temperatures(40, 40, 40, 40),
        ));

        let writer = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for code in 16..=60 {
                    shared.replace(
                        ThermostatState::new().with_temperatures(code, code, code, code),
                    );
                }
            })
        };

        for _ in 0..1000 {
            let snapshot = shared.load();
            let code = snapshot.current_temperature_code();
            assert_eq!(snapshot.target_temperature_code(), code);
            assert_eq!(snapshot.economy_temperature_code(), code);
            assert_eq!(snapshot.comfort_temperature_code(), code);
        }

        writer.join().unwrap();
        assert_eq!(shared.load().current_temperature_code(), 60);
    }
}
