// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! End-to-end lifecycle runs: controller plus scripted radio, pumped the
//! way the tutorial programs do it.

use std::cell::RefCell;

use linkward::{Controller, LinkState, Report, ReportSink};
use linkward_core::{
    AccessPointConfig, AccessPointRecord, AuthMode, Bssid, ModeConfig, NetworkEvent, ScanConfig,
    StationConfig, StaticIpConfig,
};
use linkward_sim::{Call, ScriptedRadio, pump};

// Report sink the test can read while the controller holds it.
#[derive(Default)]
struct Recorder(RefCell<Vec<Report>>);

impl Recorder {
    fn reports(&self) -> Vec<Report> {
        self.0.borrow().clone()
    }
}

impl ReportSink for &Recorder {
    fn report(&mut self, report: &Report) {
        self.0.borrow_mut().push(report.clone());
    }
}

fn station_config() -> ModeConfig {
    ModeConfig::Station {
        config: StationConfig::new("Home", "secret123"),
        static_ip: Some(StaticIpConfig {
            address: "10.0.0.5".parse().unwrap(),
            gateway: "10.0.0.1".parse().unwrap(),
            netmask: "255.255.255.0".parse().unwrap(),
        }),
    }
}

fn record(ssid: &str, rssi: i8, auth_mode: AuthMode) -> AccessPointRecord {
    AccessPointRecord {
        bssid: Bssid::default(),
        ssid: ssid.into(),
        channel: 1,
        rssi,
        auth_mode,
    }
}

#[test]
fn station_connects_with_static_address() {
    let recorder = Recorder::default();
    let mut controller =
        Controller::new(station_config(), ScriptedRadio::new(), &recorder).unwrap();

    controller.start().unwrap();
    pump(&mut controller);

    assert_eq!(controller.state(), LinkState::Connected);
    assert_eq!(controller.radio_mut().call_count(Call::Connect), 1);
    assert_eq!(
        recorder.reports(),
        vec![Report::Connected {
            address: "10.0.0.5".parse().unwrap(),
            gateway: "10.0.0.1".parse().unwrap(),
            netmask: "255.255.255.0".parse().unwrap(),
        }]
    );
}

#[test]
fn station_reconnects_after_link_drop() {
    let recorder = Recorder::default();
    let mut controller =
        Controller::new(station_config(), ScriptedRadio::new(), &recorder).unwrap();
    controller.start().unwrap();
    pump(&mut controller);

    controller.radio_mut().drop_link();
    pump(&mut controller);

    // One reconnect per disconnect event, ending connected again.
    assert_eq!(controller.state(), LinkState::Connected);
    assert_eq!(controller.radio_mut().call_count(Call::Connect), 2);
    assert_eq!(
        recorder.reports()[1..],
        [
            Report::Disconnected,
            Report::Connected {
                address: "10.0.0.5".parse().unwrap(),
                gateway: "10.0.0.1".parse().unwrap(),
                netmask: "255.255.255.0".parse().unwrap(),
            },
        ]
    );
}

#[test]
fn access_point_reports_roster_per_join_and_leave() {
    let config = ModeConfig::AccessPoint(AccessPointConfig {
        ssid: "linkward-ap".into(),
        password: "123456789AP".into(),
        auth_mode: AuthMode::Wpa2Psk,
        ..Default::default()
    });
    let recorder = Recorder::default();
    let mut controller = Controller::new(config, ScriptedRadio::new(), &recorder).unwrap();
    controller.start().unwrap();
    pump(&mut controller);
    assert_eq!(controller.state(), LinkState::Serving);

    controller.radio_mut().join_station();
    pump(&mut controller);
    controller.radio_mut().join_station();
    pump(&mut controller);
    controller.radio_mut().leave_station();
    pump(&mut controller);

    // One roster fetch per join/leave event, counts from the live table.
    assert_eq!(controller.radio_mut().call_count(Call::StationRoster), 3);
    let counts: Vec<usize> = recorder
        .reports()
        .iter()
        .filter_map(|report| match report {
            Report::ApStationJoined { roster } | Report::ApStationLeft { roster } => {
                Some(roster.connected)
            }
            _ => None,
        })
        .collect();
    assert_eq!(counts, [1, 2, 1]);
    assert_eq!(controller.roster().connected, 1);
}

#[test]
fn scan_decodes_two_records_in_order() {
    let config = ModeConfig::ScanOnly(ScanConfig {
        show_hidden: true,
        ..Default::default()
    });
    let radio = ScriptedRadio::new().with_neighborhood(vec![
        record("A", -40, AuthMode::Wpa2Psk),
        record("B", -70, AuthMode::Open),
    ]);
    let recorder = Recorder::default();
    let mut controller = Controller::new(config, radio, &recorder).unwrap();
    controller.start().unwrap();
    pump(&mut controller);

    assert_eq!(controller.state(), LinkState::ScanReady);
    assert_eq!(controller.radio_mut().call_count(Call::ScanResults), 1);

    let reports = recorder.reports();
    let Report::ScanReport(entries) = &reports[0] else {
        panic!("expected a scan report");
    };
    assert_eq!(
        entries
            .iter()
            .map(|e| (e.ssid.as_str(), e.rssi, e.auth_label))
            .collect::<Vec<_>>(),
        [
            ("A", -40, "WIFI_AUTH_WPA2_PSK"),
            ("B", -70, "WIFI_AUTH_OPEN"),
        ]
    );
}

#[test]
fn empty_scan_reports_without_fetching() {
    let config = ModeConfig::ScanOnly(ScanConfig::default());
    let recorder = Recorder::default();
    let mut controller =
        Controller::new(config, ScriptedRadio::new(), &recorder).unwrap();
    controller.start().unwrap();
    pump(&mut controller);

    assert_eq!(controller.state(), LinkState::ScanReady);
    assert_eq!(controller.radio_mut().call_count(Call::ScanResults), 0);
    assert_eq!(recorder.reports(), vec![Report::ScanReport(Vec::new())]);
}

#[test]
fn blocking_scan_completes_without_events() {
    let config = ModeConfig::ScanOnly(ScanConfig {
        show_hidden: true,
        blocking: true,
        ..Default::default()
    });
    let radio = ScriptedRadio::new().with_neighborhood(vec![record("A", -40, AuthMode::Wpa2Psk)]);
    let recorder = Recorder::default();
    let mut controller = Controller::new(config, radio, &recorder).unwrap();
    controller.start().unwrap();

    // Only the radio-started event exists; the scan itself completes
    // inside the start action, with no scan-done event.
    assert_eq!(
        controller.radio_mut().take_event(),
        Some(NetworkEvent::RadioStarted)
    );
    controller.handle_event(NetworkEvent::RadioStarted);
    assert_eq!(controller.radio_mut().take_event(), None);
    assert_eq!(controller.state(), LinkState::ScanReady);
    assert_eq!(recorder.reports().len(), 1);
}

#[test]
fn vendor_auth_mode_scans_as_unknown() {
    let config = ModeConfig::ScanOnly(ScanConfig {
        show_hidden: true,
        ..Default::default()
    });
    let radio = ScriptedRadio::new().with_neighborhood(vec![record("odd", -55, AuthMode::from(7))]);
    let recorder = Recorder::default();
    let mut controller = Controller::new(config, radio, &recorder).unwrap();
    controller.start().unwrap();
    pump(&mut controller);

    let reports = recorder.reports();
    let Report::ScanReport(entries) = &reports[0] else {
        panic!("expected a scan report");
    };
    assert_eq!(entries[0].auth_label, "Unknown");
}
