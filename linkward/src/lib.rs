// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! Linkward is a small event-driven WiFi network lifecycle controller.
//!
//! The [`Controller`] object tracks the network lifecycle for one of three
//! operating roles - hosting an access point, joining an access point as a
//! station, or scanning for nearby access points - and reacts to the
//! asynchronous events the platform delivers (radio started, station
//! connected/disconnected, address acquired, scan completed) by issuing the
//! correct follow-up command to the radio.
//!
//! The radio itself is a black box behind the [`RadioControl`] trait;
//! completed transitions are reported through a [`ReportSink`] and,
//! optionally, an `embassy-sync` status signal for async integrators.
//!
//! # Example
//! ```no_run
//! use linkward::{Controller, LogSink, RadioControl};
//! use linkward_core::{ModeConfig, StationConfig, NetworkEvent};
//! # use linkward_core::{AccessPointRecord, RadioError, RosterState, ScanConfig};
//! # struct StubRadio;
//! # impl RadioControl for StubRadio {
//! #     fn start(&mut self, _: &ModeConfig) -> Result<(), RadioError> { Ok(()) }
//! #     fn connect(&mut self) -> Result<(), RadioError> { Ok(()) }
//! #     fn disconnect(&mut self) -> Result<(), RadioError> { Ok(()) }
//! #     fn start_scan(&mut self, _: &ScanConfig) -> Result<(), RadioError> { Ok(()) }
//! #     fn scan_results(&mut self) -> Result<Vec<AccessPointRecord>, RadioError> { Ok(Vec::new()) }
//! #     fn station_roster(&mut self) -> Result<RosterState, RadioError> { Ok(RosterState::default()) }
//! # }
//! # fn radio() -> StubRadio { StubRadio }
//!
//! let config = ModeConfig::Station {
//!     config: StationConfig::new("Home", "secret123"),
//!     static_ip: None,
//! };
//! let mut controller = Controller::new(config, radio(), LogSink)?;
//!
//! // Bring the radio up.  Startup errors are fatal - propagate them.
//! controller.start()?;
//!
//! // The platform then delivers events one at a time.  A started radio
//! // in station mode triggers the connect call; an acquired address
//! // completes the connection.
//! controller.handle_event(NetworkEvent::RadioStarted);
//! # Ok::<(), linkward_core::RadioError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod controller;
pub mod decode;
pub mod radio;
pub mod report;
pub mod roster;
pub mod status;

pub use controller::{Controller, LinkState};
pub use decode::{ScanEntry, decode};
pub use radio::RadioControl;
pub use report::{LogSink, Report, ReportSink};
pub use roster::RosterTracker;
pub use status::{LinkStatus, StatusSignal};
