// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-core - WiFi authentication modes

use core::fmt;

/// Authentication mode of a wireless network.
///
/// The set of modes the controller understands.  Vendor-specific values
/// outside this set are carried through as [`AuthMode::Unknown`] rather
/// than rejected, so scanning never aborts on an unrecognized mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// No security.
    Open,

    /// WEP security.
    Wep,

    /// WPA-PSK security.
    WpaPsk,

    /// WPA2-PSK security.
    Wpa2Psk,

    /// WPA or WPA2 security.
    WpaWpa2Psk,

    /// Unrecognized (e.g. vendor-specific) mode, identified by its raw
    /// value.
    Unknown(u8),
}

// Raw values as reported by the radio.
const AUTH_OPEN: u8 = 0;
const AUTH_WEP: u8 = 1;
const AUTH_WPA_PSK: u8 = 2;
const AUTH_WPA2_PSK: u8 = 3;
const AUTH_WPA_WPA2_PSK: u8 = 4;

impl AuthMode {
    /// Returns the human-readable label for this mode.
    ///
    /// Unrecognized modes label as `"Unknown"`.
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Open => "WIFI_AUTH_OPEN",
            AuthMode::Wep => "WIFI_AUTH_WEP",
            AuthMode::WpaPsk => "WIFI_AUTH_WPA_PSK",
            AuthMode::Wpa2Psk => "WIFI_AUTH_WPA2_PSK",
            AuthMode::WpaWpa2Psk => "WIFI_AUTH_WPA_WPA2_PSK",
            AuthMode::Unknown(_) => "Unknown",
        }
    }

    /// Returns whether this mode requires a password.
    pub fn is_secured(&self) -> bool {
        !matches!(self, AuthMode::Open)
    }
}

impl From<u8> for AuthMode {
    fn from(raw: u8) -> Self {
        match raw {
            AUTH_OPEN => AuthMode::Open,
            AUTH_WEP => AuthMode::Wep,
            AUTH_WPA_PSK => AuthMode::WpaPsk,
            AUTH_WPA2_PSK => AuthMode::Wpa2Psk,
            AUTH_WPA_WPA2_PSK => AuthMode::WpaWpa2Psk,
            other => AuthMode::Unknown(other),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
