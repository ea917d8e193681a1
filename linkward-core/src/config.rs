// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-core - Startup configuration objects
//!
//! One configuration object per operating mode, created once at startup and
//! read-only thereafter.  Validation happens before any radio call is
//! attempted, so a malformed configuration never reaches the hardware.

use alloc::string::String;
use core::fmt;
use core::net::Ipv4Addr;

use crate::auth::AuthMode;
use crate::error::RadioError;
use crate::{Bssid, OperatingMode, PASSWORD_MAX_LEN, PASSWORD_MIN_SECURE_LEN, SSID_MAX_LEN};

/// Default maximum number of stations allowed to associate with our access
/// point.
pub const AP_DEFAULT_MAX_CONNECTIONS: u8 = 4;

/// Permitted range for the access point connection limit.
pub const AP_MAX_CONNECTIONS_LIMIT: u8 = 10;

/// Default beacon interval in milliseconds.
pub const AP_DEFAULT_BEACON_INTERVAL_MS: u16 = 100;

/// Permitted beacon interval range in milliseconds.
pub const AP_BEACON_INTERVAL_MS_RANGE: core::ops::RangeInclusive<u16> = 100..=60000;

/// Highest 2.4GHz channel number a scan may be pinned to.
pub const SCAN_CHANNEL_MAX: u8 = 14;

static_assertions::const_assert!(AP_DEFAULT_MAX_CONNECTIONS <= AP_MAX_CONNECTIONS_LIMIT);

/// Configuration for hosting an access point.
///
/// For any secured [`AuthMode`] ensure the password is at least 8 bytes
/// long, otherwise [`AccessPointConfig::validate`] rejects it.
// Debug is implemented by hand so the password never lands in logs.
#[derive(Clone)]
pub struct AccessPointConfig {
    /// SSID of the network we host.  1-32 bytes.
    pub ssid: String,

    /// Password stations must supply.  Up to 64 bytes; at least 8 when
    /// `auth_mode` is secured.
    pub password: String,

    /// Authentication mode offered to stations.
    pub auth_mode: AuthMode,

    /// Maximum number of simultaneous station associations, 1-10.
    pub max_connections: u8,

    /// Period between advertisement broadcasts, 100-60000ms.
    pub beacon_interval_ms: u16,

    /// Whether to omit the SSID from beacons.
    pub hidden: bool,
}

impl Default for AccessPointConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            auth_mode: AuthMode::Open,
            max_connections: AP_DEFAULT_MAX_CONNECTIONS,
            beacon_interval_ms: AP_DEFAULT_BEACON_INTERVAL_MS,
            hidden: false,
        }
    }
}

impl fmt::Debug for AccessPointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPointConfig")
            .field("ssid", &self.ssid)
            .field("auth_mode", &self.auth_mode)
            .field("max_connections", &self.max_connections)
            .field("beacon_interval_ms", &self.beacon_interval_ms)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

impl AccessPointConfig {
    /// Checks the configuration against the radio's limits.
    pub fn validate(&self) -> Result<(), RadioError> {
        validate_ssid(&self.ssid)?;
        validate_password(&self.password)?;
        if self.auth_mode.is_secured() && self.password.len() < PASSWORD_MIN_SECURE_LEN {
            return Err(RadioError::InvalidArgument(
                "password too short for secured auth mode",
            ));
        }
        if self.max_connections == 0 || self.max_connections > AP_MAX_CONNECTIONS_LIMIT {
            return Err(RadioError::InvalidArgument("max connections out of range"));
        }
        if !AP_BEACON_INTERVAL_MS_RANGE.contains(&self.beacon_interval_ms) {
            return Err(RadioError::InvalidArgument("beacon interval out of range"));
        }
        Ok(())
    }
}

/// Configuration for joining an access point as a station.
// Debug is implemented by hand so the password never lands in logs.
#[derive(Clone)]
pub struct StationConfig {
    /// SSID of the network to join.  1-32 bytes.
    pub ssid: String,

    /// Password to supply for authorization.  Up to 64 bytes.
    pub password: String,

    /// Pin the association to a specific access point radio.
    pub bssid: Option<Bssid>,
}

impl fmt::Debug for StationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationConfig")
            .field("ssid", &self.ssid)
            .field("bssid", &self.bssid)
            .finish_non_exhaustive()
    }
}

impl StationConfig {
    /// Creates a station configuration for the given network.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
            bssid: None,
        }
    }

    /// Checks the configuration against the radio's limits.
    pub fn validate(&self) -> Result<(), RadioError> {
        validate_ssid(&self.ssid)?;
        validate_password(&self.password)
    }
}

/// Statically assigned IPv4 addressing for station mode, used in place of
/// DHCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticIpConfig {
    /// The address we want the device to have.
    pub address: Ipv4Addr,

    /// Gateway for communications, commonly the access point.
    pub gateway: Ipv4Addr,

    /// Network mask.
    pub netmask: Ipv4Addr,
}

impl fmt::Display for StaticIpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} gateway {} netmask {}",
            self.address, self.gateway, self.netmask
        )
    }
}

/// Parameters for a scan of nearby access points.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Only report networks with this SSID.
    pub ssid: Option<String>,

    /// Only report the access point with this BSSID.
    pub bssid: Option<Bssid>,

    /// Channel to scan: 0 scans every channel, 1-14 pins the scan.
    pub channel: u8,

    /// Also report networks whose SSID is hidden.
    pub show_hidden: bool,

    /// Whether the scan request blocks until results are ready.  A
    /// blocking scan produces no separate scan-done event.
    pub blocking: bool,
}

impl ScanConfig {
    /// Checks the configuration against the radio's limits.
    pub fn validate(&self) -> Result<(), RadioError> {
        if let Some(ssid) = &self.ssid {
            validate_ssid(ssid)?;
        }
        if self.channel > SCAN_CHANNEL_MAX {
            return Err(RadioError::InvalidArgument("channel out of range"));
        }
        Ok(())
    }
}

/// Startup configuration covering every operating mode.
///
/// The mode-specific configuration travels with its mode, so there is no
/// way to hand an access point configuration to a station controller.
#[derive(Debug, Clone)]
pub enum ModeConfig {
    /// Host an access point.
    AccessPoint(AccessPointConfig),

    /// Join an access point as a station, optionally with static
    /// addressing in place of DHCP.
    Station {
        /// Network to join.
        config: StationConfig,

        /// Static addressing, if DHCP is not used.
        static_ip: Option<StaticIpConfig>,
    },

    /// Bring the radio up only to scan.
    ScanOnly(ScanConfig),
}

impl ModeConfig {
    /// Returns the operating mode this configuration selects.
    pub fn mode(&self) -> OperatingMode {
        match self {
            ModeConfig::AccessPoint(_) => OperatingMode::AccessPoint,
            ModeConfig::Station { .. } => OperatingMode::Station,
            ModeConfig::ScanOnly(_) => OperatingMode::ScanOnly,
        }
    }

    /// Checks the mode-specific configuration against the radio's limits.
    pub fn validate(&self) -> Result<(), RadioError> {
        match self {
            ModeConfig::AccessPoint(config) => config.validate(),
            ModeConfig::Station { config, .. } => config.validate(),
            ModeConfig::ScanOnly(config) => config.validate(),
        }
    }
}

fn validate_ssid(ssid: &str) -> Result<(), RadioError> {
    if ssid.is_empty() {
        return Err(RadioError::InvalidArgument("ssid empty"));
    }
    if ssid.len() > SSID_MAX_LEN {
        return Err(RadioError::InvalidArgument("ssid too long"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), RadioError> {
    if password.len() > PASSWORD_MAX_LEN {
        return Err(RadioError::InvalidArgument("password too long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    fn ap_config() -> AccessPointConfig {
        AccessPointConfig {
            ssid: "linkward-ap".to_string(),
            password: "123456789AP".to_string(),
            auth_mode: AuthMode::Wpa2Psk,
            ..Default::default()
        }
    }

    #[test]
    fn ap_defaults_are_in_range() {
        let config = AccessPointConfig {
            ssid: "open-net".to_string(),
            ..Default::default()
        };
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.beacon_interval_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ap_rejects_short_password_when_secured() {
        let mut config = ap_config();
        config.password = "short".to_string();
        assert_eq!(
            config.validate(),
            Err(RadioError::InvalidArgument(
                "password too short for secured auth mode"
            ))
        );

        // The same password is fine on an open network.
        config.auth_mode = AuthMode::Open;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ap_rejects_out_of_range_limits() {
        let mut config = ap_config();
        config.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = ap_config();
        config.max_connections = 11;
        assert!(config.validate().is_err());

        let mut config = ap_config();
        config.beacon_interval_ms = 99;
        assert!(config.validate().is_err());

        let mut config = ap_config();
        config.beacon_interval_ms = 60000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ssid_length_is_enforced() {
        let mut config = StationConfig::new("x".repeat(33), "secret123");
        assert_eq!(
            config.validate(),
            Err(RadioError::InvalidArgument("ssid too long"))
        );
        config.ssid = "x".repeat(32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scan_channel_is_bounded() {
        let mut config = ScanConfig::default();
        assert!(config.validate().is_ok());
        config.channel = 14;
        assert!(config.validate().is_ok());
        config.channel = 15;
        assert!(config.validate().is_err());
    }

    #[test]
    fn mode_config_routes_validation() {
        let config = ModeConfig::Station {
            config: StationConfig::new("", ""),
            static_ip: None,
        };
        assert_eq!(config.mode(), OperatingMode::Station);
        assert_eq!(
            config.validate(),
            Err(RadioError::InvalidArgument("ssid empty"))
        );
    }

    #[test]
    fn debug_never_prints_passwords() {
        let rendered = format!("{:?}", ap_config());
        assert!(!rendered.contains("123456789AP"));

        let rendered = format!("{:?}", StationConfig::new("Home", "secret123"));
        assert!(!rendered.contains("secret123"));
    }
}
