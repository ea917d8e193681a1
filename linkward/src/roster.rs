// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Station roster tracking
//!
//! Tracks the stations associated with us in access point mode.  Each
//! join/leave notification fetches the authoritative count from the radio
//! rather than bumping a local counter, so the tracker cannot drift from
//! the radio's live association table.

use linkward_core::{RadioError, RosterState};

use crate::radio::RadioControl;

/// Tracker of the live station roster in access point mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterTracker {
    last: RosterState,
}

impl RosterTracker {
    /// Creates a tracker with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a station joining our access point.  Fetches and returns
    /// the updated roster.
    pub fn on_station_connected<R: RadioControl>(
        &mut self,
        radio: &mut R,
    ) -> Result<RosterState, RadioError> {
        self.refresh(radio)
    }

    /// Handles a station leaving our access point.  Fetches and returns
    /// the updated roster.
    pub fn on_station_disconnected<R: RadioControl>(
        &mut self,
        radio: &mut R,
    ) -> Result<RosterState, RadioError> {
        self.refresh(radio)
    }

    /// Returns the roster from the most recent successful fetch.
    pub fn current(&self) -> RosterState {
        self.last
    }

    fn refresh<R: RadioControl>(&mut self, radio: &mut R) -> Result<RosterState, RadioError> {
        let roster = radio.station_roster()?;
        self.last = roster;
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use linkward_core::{AccessPointRecord, ModeConfig, ScanConfig};

    // Radio stub that serves a fixed roster and counts fetches.
    struct RosterRadio {
        connected: usize,
        fetches: usize,
    }

    impl RadioControl for RosterRadio {
        fn start(&mut self, _config: &ModeConfig) -> Result<(), RadioError> {
            Ok(())
        }

        fn connect(&mut self) -> Result<(), RadioError> {
            Ok(())
        }

        fn disconnect(&mut self) -> Result<(), RadioError> {
            Ok(())
        }

        fn start_scan(&mut self, _config: &ScanConfig) -> Result<(), RadioError> {
            Ok(())
        }

        fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError> {
            Ok(Vec::new())
        }

        fn station_roster(&mut self) -> Result<RosterState, RadioError> {
            self.fetches += 1;
            Ok(RosterState {
                connected: self.connected,
            })
        }
    }

    #[test]
    fn each_notification_fetches_once() {
        let mut radio = RosterRadio {
            connected: 1,
            fetches: 0,
        };
        let mut tracker = RosterTracker::new();

        let roster = tracker.on_station_connected(&mut radio).unwrap();
        assert_eq!(roster.connected, 1);
        assert_eq!(radio.fetches, 1);

        radio.connected = 0;
        let roster = tracker.on_station_disconnected(&mut radio).unwrap();
        assert_eq!(roster.connected, 0);
        assert_eq!(radio.fetches, 2);
        assert_eq!(tracker.current().connected, 0);
    }

    #[test]
    fn failed_fetch_keeps_last_roster() {
        struct FailingRadio;

        impl RadioControl for FailingRadio {
            fn start(&mut self, _config: &ModeConfig) -> Result<(), RadioError> {
                Ok(())
            }

            fn connect(&mut self) -> Result<(), RadioError> {
                Ok(())
            }

            fn disconnect(&mut self) -> Result<(), RadioError> {
                Ok(())
            }

            fn start_scan(&mut self, _config: &ScanConfig) -> Result<(), RadioError> {
                Ok(())
            }

            fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError> {
                Ok(Vec::new())
            }

            fn station_roster(&mut self) -> Result<RosterState, RadioError> {
                Err(RadioError::Busy)
            }
        }

        let mut tracker = RosterTracker::new();
        assert_eq!(
            tracker.on_station_connected(&mut FailingRadio),
            Err(RadioError::Busy)
        );
        assert_eq!(tracker.current(), RosterState::default());
    }
}
