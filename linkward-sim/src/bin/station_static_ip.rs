// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-sim - Joining an access point with a static address
//!
//! Connects to an access point as a station with statically assigned
//! addressing in place of DHCP, waits for the connection milestone on the
//! status signal, then scripts a dropped link to show the automatic
//! reconnect.
//!
//! Set `STA_SSID` and `STA_PASSWORD` environment variables to change the
//! target network.

use anyhow::Context;
use embassy_futures::block_on;
use log::info;
use std::env;

use linkward::{Controller, LogSink, StatusSignal};
use linkward_core::{ModeConfig, StationConfig, StaticIpConfig};
use linkward_sim::{ScriptedRadio, pump};

// The addressing we want the device to have.
const DEVICE_IP: &str = "192.168.1.111";
const DEVICE_GW: &str = "192.168.1.1";
const DEVICE_NETMASK: &str = "255.255.255.0";

static STATUS: StatusSignal = StatusSignal::new();

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("*** linkward station (static ip) ***");

    let config = ModeConfig::Station {
        config: StationConfig::new(
            env::var("STA_SSID").unwrap_or_else(|_| "Home".into()),
            env::var("STA_PASSWORD").unwrap_or_else(|_| "secret123".into()),
        ),
        static_ip: Some(StaticIpConfig {
            address: DEVICE_IP.parse()?,
            gateway: DEVICE_GW.parse()?,
            netmask: DEVICE_NETMASK.parse()?,
        }),
    };

    let mut controller = Controller::new(config, ScriptedRadio::new(), LogSink)
        .context("invalid station configuration")?
        .with_status(&STATUS);

    // Startup errors are fatal - abort and report.
    controller.start().context("failed to start radio")?;
    pump(&mut controller);

    // The signal holds the most recent milestone; the connect completed
    // during the pump above.
    let status = block_on(STATUS.wait());
    info!("Ok:    Reached {status:?}, we can now do things...");

    // The access point goes away.  The controller reconnects on its own,
    // one attempt per disconnect event.
    controller.radio_mut().drop_link();
    pump(&mut controller);

    let status = block_on(STATUS.wait());
    info!("Ok:    Back to {status:?} after link drop");
    Ok(())
}
