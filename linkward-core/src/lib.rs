// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! Linkward is a small event-driven WiFi network lifecycle controller.
//!
//! linkward-core - Core types shared by the controller and its
//! integrations: operating modes, network events, configuration objects,
//! authentication modes, scan records and errors.
//!
//! This library is `no_std` compatible, and requires an `alloc`
//! implementation.

#![no_std]

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod scan;

extern crate alloc;
use core::fmt;

pub use auth::AuthMode;
pub use config::{
    AccessPointConfig, ModeConfig, ScanConfig, StationConfig, StaticIpConfig,
};
pub use error::RadioError;
pub use event::NetworkEvent;
pub use scan::AccessPointRecord;

/// Maximum SSID length in bytes.
pub const SSID_MAX_LEN: usize = 32;

/// Maximum password/passphrase length in bytes.
pub const PASSWORD_MAX_LEN: usize = 64;

/// Minimum password length for any secured authentication mode.
pub const PASSWORD_MIN_SECURE_LEN: usize = 8;

static_assertions::const_assert!(PASSWORD_MIN_SECURE_LEN <= PASSWORD_MAX_LEN);

/// The role the device plays on the wireless network.
///
/// Selected once at startup and immutable for the lifetime of the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Host a wireless network that other stations join.
    AccessPoint,

    /// Join another device's wireless network as a client.
    Station,

    /// Bring the radio up only to scan for nearby access points.
    ScanOnly,
}

impl OperatingMode {
    /// Returns whether this mode hosts an access point.
    pub fn is_ap(&self) -> bool {
        matches!(self, OperatingMode::AccessPoint)
    }

    /// Returns whether this mode joins a network as a station.
    pub fn is_sta(&self) -> bool {
        matches!(self, OperatingMode::Station)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingMode::AccessPoint => write!(f, "access point"),
            OperatingMode::Station => write!(f, "station"),
            OperatingMode::ScanOnly => write!(f, "scan only"),
        }
    }
}

/// MAC address identifying a specific access point radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bssid(pub [u8; 6]);

impl Bssid {
    /// Returns the raw bytes of the address.
    pub fn bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for Bssid {
    fn from(bytes: [u8; 6]) -> Self {
        Bssid(bytes)
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// Live count of stations currently associated with us in access point
/// mode.
///
/// Always fetched from the radio's association table, never maintained as
/// an independent counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterState {
    /// Number of currently associated stations.
    pub connected: usize,
}

impl fmt::Display for RosterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} station(s) connected", self.connected)
    }
}
