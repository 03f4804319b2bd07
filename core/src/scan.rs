//! # Network Scanning
//!
//! Runs the platform's wireless scan command and parses its text output into
//! [`WifiNetwork`] records, preserving the order the driver reported them.
//!
//! Windows scans system-wide via `netsh`; everything else goes through
//! `iwlist` against the named interface. Both parsers tolerate arbitrary
//! garbage: a line or cell that does not match the grammar is skipped, never
//! an error.

mod iwlist;
mod netsh;

pub use iwlist::parse_iwlist;
pub use netsh::parse_netsh_networks;

use skymap_common::wifi::WifiNetwork;

/// Scans for nearby wireless networks. Never fails.
///
/// On Windows the interface argument is ignored (`netsh` scans system-wide).
/// Any invocation failure is logged and yields an empty list.
pub fn scan_networks(interface: &str) -> Vec<WifiNetwork> {
    #[cfg(target_os = "windows")]
    {
        let _ = interface;
        netsh::scan()
    }
    #[cfg(not(target_os = "windows"))]
    {
        iwlist::scan(interface)
    }
}
