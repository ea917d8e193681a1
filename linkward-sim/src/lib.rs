// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! Linkward is a small event-driven WiFi network lifecycle controller.
//!
//! linkward-sim - A scripted in-memory radio implementing the
//! [`linkward::RadioControl`] port, plus the three tutorial programs that
//! drive the controller end to end on a host: hosting an access point,
//! joining an access point with a static address, and scanning for nearby
//! access points.
//!
//! The [`ScriptedRadio`](radio::ScriptedRadio) mimics the call/event
//! semantics of a real WiFi driver: control calls are acknowledged
//! immediately and completion arrives later as a queued
//! [`linkward_core::NetworkEvent`] the caller pumps into the controller.

pub mod radio;

pub use radio::{Call, ScriptedRadio};

use linkward::{Controller, ReportSink};

/// Drains the radio's queued events into the controller, one at a time,
/// until the queue is empty.
///
/// This plays the role of the platform's event loop: at most one event is
/// in flight at any moment, and an action the controller takes may queue
/// further events that are handled on subsequent iterations.
pub fn pump<S: ReportSink>(controller: &mut Controller<ScriptedRadio, S>) {
    while let Some(event) = controller.radio_mut().take_event() {
        controller.handle_event(event);
    }
}
