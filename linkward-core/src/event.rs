// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-core - Network lifecycle events
//!
//! The platform (radio driver, IP stack, scheduler) delivers these to the
//! controller one at a time.  Each event carries only the payload needed to
//! react to it, and each instance is consumed exactly once.

use core::fmt;
use core::net::Ipv4Addr;

/// An asynchronous radio/network lifecycle event.
///
/// The enum is non-exhaustive so radio layers can grow new events without
/// breaking integrators; the controller treats anything it does not handle
/// as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkEvent {
    /// The radio finished starting in the configured mode.
    RadioStarted,

    /// A station associated with our access point.
    StationConnected,

    /// A station disassociated from our access point, or - in station
    /// mode - we lost our association with the access point.
    StationDisconnected,

    /// We acquired an address on the network we joined.
    GotIp {
        /// Our address.
        address: Ipv4Addr,

        /// Gateway for communications, commonly the access point.
        gateway: Ipv4Addr,

        /// Network mask.
        netmask: Ipv4Addr,
    },

    /// A previously requested scan completed.
    ScanDone {
        /// Number of access points discovered.
        count: u16,
    },
}

impl fmt::Display for NetworkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkEvent::RadioStarted => write!(f, "radio started"),
            NetworkEvent::StationConnected => write!(f, "station connected"),
            NetworkEvent::StationDisconnected => write!(f, "station disconnected"),
            NetworkEvent::GotIp { address, .. } => write!(f, "got ip {address}"),
            NetworkEvent::ScanDone { count } => write!(f, "scan done ({count} found)"),
        }
    }
}
