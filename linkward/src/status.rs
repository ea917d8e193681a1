// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward - Link status signalling
//!
//! Optional cross-task notification of lifecycle milestones, for
//! integrators running the controller inside an async executor.  The
//! signal holds the most recent status; waiters see the latest value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Lifecycle milestones published through the status signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Our access point is up and serving.
    Serving,

    /// We joined a network and acquired an address.
    Connected,

    /// We lost our association with the access point.
    Disconnected,

    /// A scan completed.
    ScanComplete {
        /// Number of networks in the decoded report.
        count: usize,
    },
}

/// Signal type the controller publishes [`LinkStatus`] updates through.
///
/// Declare one as a `static` and attach it with
/// [`crate::Controller::with_status`]:
///
/// ```no_run
/// use linkward::StatusSignal;
/// use embassy_sync::signal::Signal;
///
/// static STATUS: StatusSignal = Signal::new();
/// ```
pub type StatusSignal = Signal<CriticalSectionRawMutex, LinkStatus>;
