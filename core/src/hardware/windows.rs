//! Windows enumeration via `netsh` and `wmic`.
//!
//! Compiled on every target so the parsers stay testable; invoking the tools
//! off Windows simply fails and the boundary collapses that to empty.

use skymap_common::error::DiscoveryError;

use super::HardwareProbe;
use crate::exec::run_tool;

pub struct WindowsProbe;

impl HardwareProbe for WindowsProbe {
    fn wifi_interfaces(&self) -> Result<Vec<String>, DiscoveryError> {
        let output = run_tool("netsh", &["wlan", "show", "interfaces"])?;
        Ok(parse_netsh_interfaces(&output))
    }

    fn gps_devices(&self) -> Result<Vec<String>, DiscoveryError> {
        let output = run_tool("wmic", &["path", "Win32_SerialPort", "get", "DeviceID,Name"])?;
        Ok(parse_wmic_serial(&output))
    }
}

/// Extracts adapter names from `netsh wlan show interfaces`: the value after
/// the colon on every line carrying the `Name` label.
pub fn parse_netsh_interfaces(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("Name"))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .collect()
}

/// Extracts COM-port identifiers from `wmic path Win32_SerialPort` output.
///
/// A line qualifies when it references a COM port and mentions GPS or GNSS
/// (case-insensitive); the emitted identifier is the line's first token,
/// which is the DeviceID column.
pub fn parse_wmic_serial(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.contains("COM"))
        .filter(|line| {
            let upper = line.to_uppercase();
            upper.contains("GPS") || upper.contains("GNSS")
        })
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
