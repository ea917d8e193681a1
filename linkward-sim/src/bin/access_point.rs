// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-sim - Hosting a WiFi access point
//!
//! Brings the radio up as an access point, then scripts two stations
//! joining and one leaving.  Each join/leave report carries the live
//! association count fetched from the radio.
//!
//! Set `AP_SSID` and `AP_PASSWORD` environment variables to change the
//! advertised network.

use anyhow::Context;
use log::info;
use std::env;

use linkward::{Controller, LogSink};
use linkward_core::{AccessPointConfig, AuthMode, ModeConfig};
use linkward_sim::{ScriptedRadio, pump};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("*** linkward access point ***");

    let config = AccessPointConfig {
        ssid: env::var("AP_SSID").unwrap_or_else(|_| "linkward-ap".into()),
        password: env::var("AP_PASSWORD").unwrap_or_else(|_| "123456789AP".into()),
        auth_mode: AuthMode::Wpa2Psk,
        ..Default::default()
    };

    // Configuration problems surface here, before any radio call.
    let mut controller =
        Controller::new(ModeConfig::AccessPoint(config), ScriptedRadio::new(), LogSink)
            .context("invalid access point configuration")?;

    // Startup errors are fatal - abort and report.
    controller.start().context("failed to start radio")?;
    pump(&mut controller);

    // Two devices join us, then one leaves.
    controller.radio_mut().join_station();
    pump(&mut controller);

    controller.radio_mut().join_station();
    pump(&mut controller);

    controller.radio_mut().leave_station();
    pump(&mut controller);

    info!("Ok:    Final roster: {}", controller.roster());
    Ok(())
}
