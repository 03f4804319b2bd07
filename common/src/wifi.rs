//! # Wireless Observation Models
//!
//! What a single scan or hardware sweep produces.
//!
//! Both types are ephemeral: recomputed on every call, never merged across
//! calls, never persisted.

/// One wireless network observed by a scan.
///
/// Field contents follow the source grammar: on the `iwlist` path
/// `encryption` is the literal `"on"` or `"off"`, on the `netsh` path it is
/// the authentication description verbatim (e.g. `"WPA2-Personal"`).
/// `channel` is numeric text, or empty when the scan did not report one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: String,
    pub channel: String,
    pub encryption: String,
}

impl WifiNetwork {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            channel: String::new(),
            encryption: String::new(),
        }
    }
}

/// WiFi interfaces and GPS serial devices present on this host.
///
/// Either list is empty when no matching hardware exists *or* when the
/// discovery tool for that category failed; the two cases are not
/// distinguishable here (see the error module).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareInventory {
    /// WiFi-capable interface names (e.g. `wlan0`).
    pub wifi: Vec<String>,
    /// Serial devices believed to be GPS receivers (paths or COM ports).
    pub gps: Vec<String>,
}

impl HardwareInventory {
    pub fn is_empty(&self) -> bool {
        self.wifi.is_empty() && self.gps.is_empty()
    }
}
