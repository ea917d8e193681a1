// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-sim - Scanning for access points
//!
//! Brings the radio up in scan-only mode and scans every channel,
//! including hidden networks.  The decoded report lists one line per
//! discovered network - ssid, rssi and auth mode label - in the order the
//! radio found them.

use anyhow::Context;
use log::info;

use linkward::{Controller, LogSink};
use linkward_core::{AccessPointRecord, AuthMode, Bssid, ModeConfig, ScanConfig};
use linkward_sim::{ScriptedRadio, pump};

fn neighborhood() -> Vec<AccessPointRecord> {
    vec![
        AccessPointRecord {
            bssid: Bssid([0x3c, 0x84, 0x6a, 0x01, 0x02, 0x03]),
            ssid: "CoffeeShop".into(),
            channel: 1,
            rssi: -38,
            auth_mode: AuthMode::Wpa2Psk,
        },
        AccessPointRecord {
            bssid: Bssid([0x3c, 0x84, 0x6a, 0x04, 0x05, 0x06]),
            ssid: "Library".into(),
            channel: 6,
            rssi: -61,
            auth_mode: AuthMode::Open,
        },
        AccessPointRecord {
            bssid: Bssid([0xd8, 0x47, 0x32, 0x07, 0x08, 0x09]),
            // Hidden network - only reported because the scan asks for
            // hidden SSIDs.
            ssid: String::new(),
            channel: 11,
            rssi: -70,
            auth_mode: AuthMode::WpaWpa2Psk,
        },
        AccessPointRecord {
            bssid: Bssid([0xd8, 0x47, 0x32, 0x0a, 0x0b, 0x0c]),
            ssid: "Printer-Setup".into(),
            channel: 11,
            rssi: -82,
            // Vendor-specific mode the decoder labels "Unknown".
            auth_mode: AuthMode::Unknown(200),
        },
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("*** linkward scan ***");

    // Channel 0 scans every channel.
    let config = ScanConfig {
        channel: 0,
        show_hidden: true,
        ..Default::default()
    };

    let radio = ScriptedRadio::new().with_neighborhood(neighborhood());
    let mut controller = Controller::new(ModeConfig::ScanOnly(config), radio, LogSink)
        .context("invalid scan configuration")?;

    // Startup errors are fatal - abort and report.
    controller.start().context("failed to start radio")?;
    pump(&mut controller);

    info!("Ok:    Scan finished in state '{}'", controller.state());
    Ok(())
}
