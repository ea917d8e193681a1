// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Lifecycle state machine
//!
//! The [`Controller`] consumes network events one at a time, tracks the
//! current operating state and issues the follow-up command each event
//! calls for: a started radio in station mode triggers the connect call,
//! a completed scan triggers result decoding, a lost association triggers
//! one reconnect attempt.
//!
//! The platform delivers at most one event at a time and
//! [`Controller::handle_event`] takes `&mut self`, so the state machine
//! cannot re-enter itself.  Errors during startup are fatal and propagate
//! to the caller; errors during steady-state handling are logged and the
//! controller parks in a safe state, ready for the next event.

use alloc::vec::Vec;
use core::fmt;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use linkward_core::{
    ModeConfig, NetworkEvent, OperatingMode, RadioError, RosterState, StaticIpConfig,
};

use crate::decode::decode;
use crate::radio::RadioControl;
use crate::report::{Report, ReportSink};
use crate::roster::RosterTracker;
use crate::status::{LinkStatus, StatusSignal};

/// Operating state of the lifecycle controller.
///
/// There is no terminal state - the controller runs indefinitely,
/// re-entering [`LinkState::Connecting`] on a disconnect in station mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Created but the radio has not been started.
    Idle,

    /// Radio start issued, waiting for the radio-started event.
    RadioStarting,

    /// Radio up with no operation in flight.  Safe fallback when a
    /// post-start action fails.
    RadioReady,

    /// Connect issued, waiting for an address.
    Connecting,

    /// Associated and addressed (station mode).
    Connected,

    /// Access point up, stations may join (access point mode).
    Serving,

    /// Scan issued, waiting for the scan-done event.
    ScanPending,

    /// Scan results decoded and reported.
    ScanReady,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkState::Idle => write!(f, "idle"),
            LinkState::RadioStarting => write!(f, "radio starting"),
            LinkState::RadioReady => write!(f, "radio ready"),
            LinkState::Connecting => write!(f, "connecting"),
            LinkState::Connected => write!(f, "connected"),
            LinkState::Serving => write!(f, "serving"),
            LinkState::ScanPending => write!(f, "scan pending"),
            LinkState::ScanReady => write!(f, "scan ready"),
        }
    }
}

/// Event-driven network lifecycle controller.
///
/// Owns the radio control port and the report sink for its lifetime.  The
/// operating mode is fixed by the [`ModeConfig`] supplied at construction.
pub struct Controller<R: RadioControl, S: ReportSink> {
    config: ModeConfig,
    state: LinkState,
    radio: R,
    sink: S,
    status: Option<&'static StatusSignal>,
    net_config: Option<StaticIpConfig>,
    roster: RosterTracker,
}

impl<R: RadioControl, S: ReportSink> Controller<R, S> {
    /// Creates a controller for the mode `config` selects.
    ///
    /// The configuration is validated here, before any radio call is
    /// attempted; a malformed configuration fails construction with
    /// [`RadioError::InvalidArgument`].
    pub fn new(config: ModeConfig, radio: R, sink: S) -> Result<Self, RadioError> {
        config.validate()?;
        Ok(Self {
            config,
            state: LinkState::Idle,
            radio,
            sink,
            status: None,
            net_config: None,
            roster: RosterTracker::new(),
        })
    }

    /// Attaches a status signal.  Lifecycle milestones are published to it
    /// in addition to the report sink.
    pub fn with_status(mut self, status: &'static StatusSignal) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the operating mode.
    pub fn mode(&self) -> OperatingMode {
        self.config.mode()
    }

    /// Returns the current operating state.
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Returns our current addressing, if connected.
    pub fn net_config(&self) -> Option<StaticIpConfig> {
        self.net_config
    }

    /// Returns the station roster from the most recent fetch.
    pub fn roster(&self) -> RosterState {
        self.roster.current()
    }

    /// Returns a mutable reference to the radio control port.
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Starts the radio in the configured mode.
    ///
    /// Errors here are fatal to initialization - report and abort rather
    /// than retrying.  Completion arrives later as a radio-started event.
    /// Returns [`RadioError::Busy`] if the radio was already started.
    pub fn start(&mut self) -> Result<(), RadioError> {
        if self.state != LinkState::Idle {
            return Err(RadioError::Busy);
        }
        info!("Exec:  Starting radio in {} mode", self.config.mode());
        self.radio.start(&self.config)?;
        self.state = LinkState::RadioStarting;
        Ok(())
    }

    /// Consumes one network event.
    ///
    /// Called by the platform once per event.  Events that do not apply to
    /// the current state (or that this controller does not concern itself
    /// with) are a no-op, not an error.
    pub fn handle_event(&mut self, event: NetworkEvent) {
        trace!("Info:  Event '{event}' in state '{}'", self.state);
        match (self.state, event) {
            (LinkState::RadioStarting, NetworkEvent::RadioStarted) => self.on_radio_started(),
            (
                LinkState::Connecting,
                NetworkEvent::GotIp {
                    address,
                    gateway,
                    netmask,
                },
            ) => self.on_got_ip(StaticIpConfig {
                address,
                gateway,
                netmask,
            }),
            (LinkState::Connected, NetworkEvent::StationDisconnected) => self.on_sta_lost(),
            (LinkState::Serving, NetworkEvent::StationConnected) => self.on_ap_station_joined(),
            (LinkState::Serving, NetworkEvent::StationDisconnected) => self.on_ap_station_left(),
            (LinkState::ScanPending, NetworkEvent::ScanDone { count }) => self.on_scan_done(count),
            (state, event) => {
                trace!("Info:  Ignoring event '{event}' in state '{state}'");
            }
        }
    }

    // The radio came up.  What happens next depends on the operating mode:
    // an access point simply serves, a station connects, a scanner scans.
    fn on_radio_started(&mut self) {
        match &self.config {
            ModeConfig::AccessPoint(config) => {
                let report = Report::ApStarted {
                    ssid: config.ssid.clone(),
                    password: config.password.clone(),
                };
                self.sink.report(&report);
                self.state = LinkState::Serving;
                self.publish(LinkStatus::Serving);
            }
            ModeConfig::Station { .. } => {
                info!("Exec:  Connecting WiFi station");
                match self.radio.connect() {
                    Ok(()) => self.state = LinkState::Connecting,
                    Err(e) => {
                        error!("Error: Failed to connect: {e}");
                        self.state = LinkState::RadioReady;
                    }
                }
            }
            ModeConfig::ScanOnly(config) => {
                let config = config.clone();
                info!("Exec:  Starting scan");
                match self.radio.start_scan(&config) {
                    Ok(()) if config.blocking => {
                        // A blocking scan returns with results ready and no
                        // scan-done event follows - fetch straight away.
                        self.fetch_and_report_scan();
                    }
                    Ok(()) => self.state = LinkState::ScanPending,
                    Err(e) => {
                        error!("Error: Failed to start scan: {e}");
                        self.state = LinkState::RadioReady;
                    }
                }
            }
        }
    }

    // Station mode: we associated and acquired an address.
    fn on_got_ip(&mut self, net_config: StaticIpConfig) {
        self.net_config = Some(net_config);
        self.sink.report(&Report::Connected {
            address: net_config.address,
            gateway: net_config.gateway,
            netmask: net_config.netmask,
        });
        self.state = LinkState::Connected;
        self.publish(LinkStatus::Connected);
    }

    // Station mode: we lost the association.  One reconnect attempt per
    // disconnect event; pacing repeated disconnects is the radio layer's
    // concern.
    fn on_sta_lost(&mut self) {
        self.net_config = None;
        self.sink.report(&Report::Disconnected);
        self.publish(LinkStatus::Disconnected);
        info!("Exec:  Reconnecting WiFi station");
        match self.radio.connect() {
            Ok(()) => self.state = LinkState::Connecting,
            Err(e) => {
                error!("Error: Failed to reconnect: {e}");
                self.state = LinkState::RadioReady;
            }
        }
    }

    // Access point mode: a station joined us.
    fn on_ap_station_joined(&mut self) {
        match self.roster.on_station_connected(&mut self.radio) {
            Ok(roster) => self.sink.report(&Report::ApStationJoined { roster }),
            Err(e) => error!("Error: Failed to fetch station roster: {e}"),
        }
    }

    // Access point mode: a station left us.
    fn on_ap_station_left(&mut self) {
        match self.roster.on_station_disconnected(&mut self.radio) {
            Ok(roster) => self.sink.report(&Report::ApStationLeft { roster }),
            Err(e) => error!("Error: Failed to fetch station roster: {e}"),
        }
    }

    // Scan only mode: the radio finished scanning.
    fn on_scan_done(&mut self, count: u16) {
        info!("Info:  Number of access points found: {count}");
        if count == 0 {
            // Nothing to fetch - requesting zero records is meaningless.
            self.sink.report(&Report::ScanReport(Vec::new()));
            self.state = LinkState::ScanReady;
            self.publish(LinkStatus::ScanComplete { count: 0 });
            return;
        }
        self.fetch_and_report_scan();
    }

    // Fetches the scan records, decodes them and delivers the report.  On
    // a fetch failure the state is left untouched so a later scan-done
    // event can retry.
    fn fetch_and_report_scan(&mut self) {
        match self.radio.scan_results() {
            Ok(records) => {
                let entries = decode(&records);
                let count = entries.len();
                self.sink.report(&Report::ScanReport(entries));
                self.state = LinkState::ScanReady;
                self.publish(LinkStatus::ScanComplete { count });
            }
            Err(e) => {
                warn!("Warn:  Failed to fetch scan results: {e}");
            }
        }
    }

    fn publish(&self, status: LinkStatus) {
        if let Some(signal) = self.status {
            signal.signal(status);
        }
    }
}
