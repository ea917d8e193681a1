// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-core - Scan records
//!
//! A raw record per discovered access point, as reported by the radio.
//! Records are ephemeral: they live for one scan cycle and are discarded
//! once decoded.

use alloc::string::String;
use core::fmt;

use crate::Bssid;
use crate::auth::AuthMode;

/// One access point discovered by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPointRecord {
    /// MAC address of the access point radio.
    pub bssid: Bssid,

    /// Network name, up to 32 bytes.  May be empty for hidden networks.
    pub ssid: String,

    /// Primary channel the access point beacons on.
    pub channel: u8,

    /// Received signal strength in dBm.
    pub rssi: i8,

    /// Authentication mode the access point offers.
    pub auth_mode: AuthMode,
}

impl fmt::Display for AccessPointRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ssid={}, bssid={}, channel={}, rssi={}, authmode={}",
            self.ssid,
            self.bssid,
            self.channel,
            self.rssi,
            self.auth_mode.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn record_display_matches_report_line() {
        let record = AccessPointRecord {
            bssid: Bssid([0, 1, 2, 3, 4, 5]),
            ssid: "Home".to_string(),
            channel: 6,
            rssi: -40,
            auth_mode: AuthMode::Wpa2Psk,
        };
        assert_eq!(
            format!("{record}"),
            "ssid=Home, bssid=00:01:02:03:04:05, channel=6, rssi=-40, \
             authmode=WIFI_AUTH_WPA2_PSK"
        );
    }
}
