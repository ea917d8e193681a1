// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Structured reports
//!
//! Every completed connect, disconnect, scan and address acquisition emits
//! a [`Report`] to the sink supplied at construction.  The sink decides
//! the format; [`LogSink`] writes each report through the `log` facade.

use alloc::string::String;
use alloc::vec::Vec;
use core::net::Ipv4Addr;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use linkward_core::RosterState;

use crate::decode::ScanEntry;

/// A completed lifecycle transition, with the fields worth reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Our access point is up and beaconing.
    ApStarted {
        /// SSID we advertise.
        ssid: String,

        /// Password stations must supply.
        password: String,
    },

    /// A station joined our access point.
    ApStationJoined {
        /// Live association count fetched from the radio.
        roster: RosterState,
    },

    /// A station left our access point.
    ApStationLeft {
        /// Live association count fetched from the radio.
        roster: RosterState,
    },

    /// We joined a network and acquired an address.
    Connected {
        /// Our address.
        address: Ipv4Addr,

        /// Gateway for communications.
        gateway: Ipv4Addr,

        /// Network mask.
        netmask: Ipv4Addr,
    },

    /// We lost our association with the access point.
    Disconnected,

    /// A scan completed, one entry per discovered network in radio order.
    ScanReport(Vec<ScanEntry>),
}

/// Consumer of lifecycle reports.
pub trait ReportSink {
    /// Delivers one report.  Must not block the event path.
    fn report(&mut self, report: &Report);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, report: &Report) {
        (**self).report(report)
    }
}

/// Report sink that writes through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, report: &Report) {
        match report {
            Report::ApStarted { ssid, password } => {
                info!("Ok:    WiFi access point started");
                info!("Value: AP name: {ssid}");
                info!("Value: AP password: {password}");
            }
            Report::ApStationJoined { roster } => {
                info!("Info:  Device connected to our access point");
                info!("Value: {roster}");
            }
            Report::ApStationLeft { roster } => {
                info!("Info:  Device disconnected from our access point");
                info!("Value: {roster}");
            }
            Report::Connected {
                address,
                gateway,
                netmask,
            } => {
                info!("Ok:    Connected - address {address} gateway {gateway} netmask {netmask}");
            }
            Report::Disconnected => {
                warn!("Warn:  WiFi station disconnected");
            }
            Report::ScanReport(entries) => {
                info!("Ok:    Scan found {} network(s)", entries.len());
                for entry in entries {
                    info!("Value: {entry}");
                }
            }
        }
    }
}
