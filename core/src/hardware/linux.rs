//! Linux enumeration: `iw dev` with a sysfs fallback, plus `/dev` scanning
//! for GPS-looking serial devices.

use std::fs;
use std::path::PathBuf;

use skymap_common::error::DiscoveryError;
use tracing::debug;

use super::HardwareProbe;
use crate::exec::run_tool;

/// Interface name prefixes handed out by the common wireless drivers.
const WIRELESS_PREFIXES: &[&str] = &["wlan", "wifi", "wl", "ath", "wlp"];

pub struct LinuxProbe {
    iw_tool: String,
    sysfs_net: PathBuf,
    dev_dir: PathBuf,
}

impl LinuxProbe {
    pub fn new() -> Self {
        Self {
            iw_tool: "iw".to_string(),
            sysfs_net: PathBuf::from("/sys/class/net"),
            dev_dir: PathBuf::from("/dev"),
        }
    }

    /// Probe against alternative filesystem roots (tests, chroots).
    pub fn with_roots(sysfs_net: impl Into<PathBuf>, dev_dir: impl Into<PathBuf>) -> Self {
        Self {
            iw_tool: "iw".to_string(),
            sysfs_net: sysfs_net.into(),
            dev_dir: dev_dir.into(),
        }
    }

    /// Overrides the wireless listing tool. The sysfs fallback covers hosts
    /// where the tool is absent entirely.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.iw_tool = tool.into();
        self
    }

    fn sysfs_wireless(&self) -> Result<Vec<String>, DiscoveryError> {
        let entries = fs::read_dir(&self.sysfs_net)
            .map_err(|err| DiscoveryError::from_read_dir(&self.sysfs_net.to_string_lossy(), err))?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| WIRELESS_PREFIXES.iter().any(|prefix| name.starts_with(prefix)))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl Default for LinuxProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProbe for LinuxProbe {
    fn wifi_interfaces(&self) -> Result<Vec<String>, DiscoveryError> {
        let mut wifi = match run_tool(&self.iw_tool, &["dev"]) {
            Ok(output) => parse_iw_dev(&output),
            Err(err) => {
                debug!("`{} dev` unavailable: {err}", self.iw_tool);
                Vec::new()
            }
        };

        // No wireless hardware via the tool, or no tool at all: fall back to
        // driver-name matching against sysfs.
        if wifi.is_empty() {
            wifi = self.sysfs_wireless()?;
        }

        Ok(wifi)
    }

    fn gps_devices(&self) -> Result<Vec<String>, DiscoveryError> {
        let entries = fs::read_dir(&self.dev_dir)
            .map_err(|err| DiscoveryError::from_read_dir(&self.dev_dir.to_string_lossy(), err))?;

        let mut devices: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| {
                let lower = name.to_lowercase();
                lower.starts_with("ttyusb") || lower.starts_with("ttyacm") || lower.contains("gps")
            })
            .map(|name| self.dev_dir.join(name).to_string_lossy().into_owned())
            .collect();
        devices.sort();
        Ok(devices)
    }
}

/// Extracts interface names from `iw dev` output: the second field of every
/// line whose trimmed form starts with `Interface`.
pub fn parse_iw_dev(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("Interface"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}
