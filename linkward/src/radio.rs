// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Radio control port
//!
//! The boundary to the vendor WiFi/IP stack.  The controller only ever
//! talks to the radio through this trait; hardware bring-up, driver
//! internals and the IP stack live on the far side of it.

use alloc::vec::Vec;

use linkward_core::{AccessPointRecord, ModeConfig, RadioError, RosterState, ScanConfig};

/// Control surface of the underlying radio.
///
/// All operations are asynchronous from the caller's perspective: the
/// radio acknowledges the command and completion arrives later as a
/// [`linkward_core::NetworkEvent`].  The one exception is a scan issued
/// with [`ScanConfig::blocking`] set, where [`RadioControl::start_scan`]
/// returns only once results are ready and no scan-done event is delivered
/// for that request.
pub trait RadioControl {
    /// Starts the radio in the mode `config` selects.  Completion is
    /// signalled by a radio-started event.
    fn start(&mut self, config: &ModeConfig) -> Result<(), RadioError>;

    /// Associates with the configured access point.
    ///
    /// Valid only after a radio-started event in station mode; calling it
    /// earlier returns [`RadioError::NotInitialized`].
    fn connect(&mut self) -> Result<(), RadioError>;

    /// Drops the current association.
    fn disconnect(&mut self) -> Result<(), RadioError>;

    /// Requests a scan for nearby access points.
    fn start_scan(&mut self, config: &ScanConfig) -> Result<(), RadioError>;

    /// Fetches the records of the most recent completed scan.
    fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError>;

    /// Fetches the live station association table for our access point.
    fn station_roster(&mut self) -> Result<RosterState, RadioError>;
}

// Allows callers to hand the controller a mutable borrow and keep hold of
// the concrete radio, e.g. to drive a simulated one.
impl<R: RadioControl + ?Sized> RadioControl for &mut R {
    fn start(&mut self, config: &ModeConfig) -> Result<(), RadioError> {
        (**self).start(config)
    }

    fn connect(&mut self) -> Result<(), RadioError> {
        (**self).connect()
    }

    fn disconnect(&mut self) -> Result<(), RadioError> {
        (**self).disconnect()
    }

    fn start_scan(&mut self, config: &ScanConfig) -> Result<(), RadioError> {
        (**self).start_scan(config)
    }

    fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError> {
        (**self).scan_results()
    }

    fn station_roster(&mut self) -> Result<RosterState, RadioError> {
        (**self).station_roster()
    }
}
