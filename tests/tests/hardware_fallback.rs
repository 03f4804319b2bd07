//! Filesystem-backed discovery against temp-dir stand-ins for
//! `/sys/class/net` and `/dev`.

use std::fs;
use std::path::Path;

use skymap_core::hardware::{inventory_from, HardwareProbe, LinuxProbe};

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

/// Probe whose listing tool cannot exist, forcing the sysfs fallback.
fn probe_with(sysfs: &Path, dev: &Path) -> LinuxProbe {
    LinuxProbe::with_roots(sysfs, dev).with_tool("skymap-no-such-iw")
}

#[test]
fn sysfs_fallback_keeps_wireless_names_only() {
    let sysfs = tempfile::tempdir().unwrap();
    let dev = tempfile::tempdir().unwrap();
    for name in ["eth0", "wlan0", "wlp2s0"] {
        touch(sysfs.path(), name);
    }

    let probe = probe_with(sysfs.path(), dev.path());
    let wifi = probe.wifi_interfaces().unwrap();
    assert_eq!(wifi, vec!["wlan0", "wlp2s0"]);
}

#[test]
fn gps_devices_match_serial_and_gps_names() {
    let sysfs = tempfile::tempdir().unwrap();
    let dev = tempfile::tempdir().unwrap();
    for name in ["ttyUSB0", "ttyACM1", "my-gps-mouse", "sda1", "null"] {
        touch(dev.path(), name);
    }

    let probe = probe_with(sysfs.path(), dev.path());
    let gps = probe.gps_devices().unwrap();

    let expected: Vec<String> = ["my-gps-mouse", "ttyACM1", "ttyUSB0"]
        .iter()
        .map(|name| dev.path().join(name).to_string_lossy().into_owned())
        .collect();
    assert_eq!(gps, expected);
}

#[test]
fn missing_roots_degrade_to_empty_inventory() {
    let probe = LinuxProbe::with_roots("/nonexistent/sys", "/nonexistent/dev")
        .with_tool("skymap-no-such-iw");

    // The probe itself reports the failure...
    assert!(probe.wifi_interfaces().is_err());
    assert!(probe.gps_devices().is_err());

    // ...and the boundary collapses it, as `discover_hardware` would.
    let inventory = inventory_from(&probe);
    assert!(inventory.is_empty());
}
