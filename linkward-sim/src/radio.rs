// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-sim - Scripted radio
//!
//! An in-memory stand-in for the vendor WiFi stack.  Control calls queue
//! the events a real radio would deliver; the caller drains the queue with
//! [`ScriptedRadio::take_event`] and feeds each event to the controller,
//! playing the role of the platform's event loop.

use std::collections::VecDeque;
use std::net::Ipv4Addr;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use linkward::RadioControl;
use linkward_core::{
    AccessPointRecord, ModeConfig, NetworkEvent, OperatingMode, RadioError, RosterState,
    ScanConfig, StaticIpConfig,
};

// Addressing handed out when station mode is started without a static
// configuration, standing in for a DHCP lease.
const DHCP_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 111);
const DHCP_GATEWAY: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
const DHCP_NETMASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// A control call the radio received, recorded in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// [`RadioControl::start`]
    Start,

    /// [`RadioControl::connect`]
    Connect,

    /// [`RadioControl::disconnect`]
    Disconnect,

    /// [`RadioControl::start_scan`]
    StartScan,

    /// [`RadioControl::scan_results`]
    ScanResults,

    /// [`RadioControl::station_roster`]
    StationRoster,
}

/// Scripted in-memory radio.
///
/// Seed it with the networks a scan should discover, start the controller
/// against it, then pump queued events.  Every control call is recorded so
/// tests can assert on exactly what the controller asked for.
#[derive(Debug, Default)]
pub struct ScriptedRadio {
    started: bool,
    mode: Option<OperatingMode>,
    static_ip: Option<StaticIpConfig>,
    neighborhood: Vec<AccessPointRecord>,
    last_scan: Option<Vec<AccessPointRecord>>,
    roster: RosterState,
    events: VecDeque<NetworkEvent>,
    calls: Vec<Call>,
}

impl ScriptedRadio {
    /// Creates a radio with nothing in the air.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the networks a scan will discover, in the order the radio
    /// reports them.
    pub fn with_neighborhood(mut self, records: Vec<AccessPointRecord>) -> Self {
        self.neighborhood = records;
        self
    }

    /// Returns the mode the radio was started in, if started.
    pub fn mode(&self) -> Option<OperatingMode> {
        self.mode
    }

    /// Takes the next queued event, if any.
    pub fn take_event(&mut self) -> Option<NetworkEvent> {
        self.events.pop_front()
    }

    /// Returns every control call received so far, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Returns how many times the given control call was received.
    pub fn call_count(&self, call: Call) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Scripts a station joining our access point: bumps the association
    /// table and queues the join event.
    pub fn join_station(&mut self) {
        self.roster.connected += 1;
        self.events.push_back(NetworkEvent::StationConnected);
    }

    /// Scripts a station leaving our access point.
    pub fn leave_station(&mut self) {
        self.roster.connected = self.roster.connected.saturating_sub(1);
        self.events.push_back(NetworkEvent::StationDisconnected);
    }

    /// Scripts the access point we joined going away: queues the
    /// disconnect event a real radio would raise.
    pub fn drop_link(&mut self) {
        self.events.push_back(NetworkEvent::StationDisconnected);
    }

    fn check_started(&self) -> Result<(), RadioError> {
        if self.started {
            Ok(())
        } else {
            Err(RadioError::NotInitialized)
        }
    }

    // Applies the scan filters the way the radio would.
    fn filtered_neighborhood(&self, config: &ScanConfig) -> Vec<AccessPointRecord> {
        self.neighborhood
            .iter()
            .filter(|record| {
                config
                    .ssid
                    .as_ref()
                    .is_none_or(|ssid| record.ssid == *ssid)
            })
            .filter(|record| config.bssid.is_none_or(|bssid| record.bssid == bssid))
            .filter(|record| config.channel == 0 || record.channel == config.channel)
            .filter(|record| config.show_hidden || !record.ssid.is_empty())
            .cloned()
            .collect()
    }

    fn lease(&self) -> StaticIpConfig {
        self.static_ip.unwrap_or(StaticIpConfig {
            address: DHCP_ADDRESS,
            gateway: DHCP_GATEWAY,
            netmask: DHCP_NETMASK,
        })
    }
}

impl RadioControl for ScriptedRadio {
    fn start(&mut self, config: &ModeConfig) -> Result<(), RadioError> {
        self.calls.push(Call::Start);
        if self.started {
            return Err(RadioError::Busy);
        }
        self.started = true;
        self.mode = Some(config.mode());
        if let ModeConfig::Station { static_ip, .. } = config {
            self.static_ip = *static_ip;
        }
        trace!("Info:  Scripted radio started in {} mode", config.mode());
        self.events.push_back(NetworkEvent::RadioStarted);
        Ok(())
    }

    fn connect(&mut self) -> Result<(), RadioError> {
        self.calls.push(Call::Connect);
        self.check_started()?;
        let lease = self.lease();
        trace!("Info:  Scripted radio associating, will lease {lease}");
        self.events.push_back(NetworkEvent::GotIp {
            address: lease.address,
            gateway: lease.gateway,
            netmask: lease.netmask,
        });
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), RadioError> {
        self.calls.push(Call::Disconnect);
        self.check_started()?;
        self.events.push_back(NetworkEvent::StationDisconnected);
        Ok(())
    }

    fn start_scan(&mut self, config: &ScanConfig) -> Result<(), RadioError> {
        self.calls.push(Call::StartScan);
        self.check_started()?;
        let found = self.filtered_neighborhood(config);
        let count = found.len() as u16;
        self.last_scan = Some(found);
        if !config.blocking {
            // Completion is delivered asynchronously; a blocking scan
            // returns with results already fetchable and no event.
            self.events.push_back(NetworkEvent::ScanDone { count });
        }
        Ok(())
    }

    fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError> {
        self.calls.push(Call::ScanResults);
        self.check_started()?;
        // Records live for one scan cycle only.
        self.last_scan.take().ok_or(RadioError::Busy)
    }

    fn station_roster(&mut self) -> Result<RosterState, RadioError> {
        self.calls.push(Call::StationRoster);
        self.check_started()?;
        Ok(self.roster)
    }
}
