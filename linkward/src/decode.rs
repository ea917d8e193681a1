// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Scan result decoding
//!
//! Turns the raw records a scan produced into a normalized, printable
//! report.  Output order matches input order (radio-reported signal
//! order); callers sort if they want a different order.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use linkward_core::AccessPointRecord;

/// One line of a decoded scan report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Network name.
    pub ssid: String,

    /// Received signal strength in dBm.
    pub rssi: i8,

    /// Human-readable authentication mode label.  Modes outside the known
    /// set label as `"Unknown"`.
    pub auth_label: &'static str,
}

impl fmt::Display for ScanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ssid={}, rssi={}, authmode={}",
            self.ssid, self.rssi, self.auth_label
        )
    }
}

/// Decodes raw scan records into report entries.
///
/// Never fails: an unrecognized vendor-specific auth mode labels as
/// `"Unknown"` rather than aborting the scan.
pub fn decode(records: &[AccessPointRecord]) -> Vec<ScanEntry> {
    records
        .iter()
        .map(|record| ScanEntry {
            ssid: record.ssid.clone(),
            rssi: record.rssi,
            auth_label: record.auth_mode.label(),
        })
        .collect()
}
