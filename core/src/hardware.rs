//! # Hardware Discovery
//!
//! Enumerates WiFi-capable interfaces and GPS serial devices on the host.
//!
//! Platform handling is a strategy picked once at startup: [`default_probe`]
//! returns the [`HardwareProbe`] for the compile target, and every call site
//! works against the trait. Probes report real errors internally; the public
//! [`discover_hardware`] boundary logs them and degrades to an empty
//! inventory, so a missing tool and absent hardware look the same to callers.

mod linux;
mod windows;

pub use linux::LinuxProbe;
pub use windows::WindowsProbe;

use skymap_common::error::DiscoveryError;
use skymap_common::wifi::HardwareInventory;
use tracing::warn;

/// A platform-specific hardware enumeration strategy.
pub trait HardwareProbe {
    /// Names of WiFi-capable network interfaces.
    fn wifi_interfaces(&self) -> Result<Vec<String>, DiscoveryError>;

    /// Identifiers of serial devices believed to be GPS receivers.
    fn gps_devices(&self) -> Result<Vec<String>, DiscoveryError>;
}

/// Probe for targets with no discovery strategy. Always empty-handed.
pub struct UnsupportedProbe;

impl HardwareProbe for UnsupportedProbe {
    fn wifi_interfaces(&self) -> Result<Vec<String>, DiscoveryError> {
        Err(DiscoveryError::PlatformUnsupported)
    }

    fn gps_devices(&self) -> Result<Vec<String>, DiscoveryError> {
        Err(DiscoveryError::PlatformUnsupported)
    }
}

/// Returns the probe matching the compile target.
pub fn default_probe() -> Box<dyn HardwareProbe> {
    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxProbe::new())
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsProbe)
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Box::new(UnsupportedProbe)
    }
}

/// Enumerates WiFi interfaces and GPS devices on this host. Never fails.
///
/// Underlying failures are logged and collapse to an empty list for the
/// affected category.
pub fn discover_hardware() -> HardwareInventory {
    inventory_from(default_probe().as_ref())
}

/// [`discover_hardware`] against an explicit probe.
pub fn inventory_from(probe: &dyn HardwareProbe) -> HardwareInventory {
    let wifi = probe.wifi_interfaces().unwrap_or_else(|err| {
        warn!("wifi interface discovery failed: {err}");
        Vec::new()
    });
    let gps = probe.gps_devices().unwrap_or_else(|err| {
        warn!("gps device discovery failed: {err}");
        Vec::new()
    });
    HardwareInventory { wifi, gps }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProbe;

    impl HardwareProbe for FailingProbe {
        fn wifi_interfaces(&self) -> Result<Vec<String>, DiscoveryError> {
            Err(DiscoveryError::ToolMissing {
                tool: "iw".into(),
            })
        }

        fn gps_devices(&self) -> Result<Vec<String>, DiscoveryError> {
            Err(DiscoveryError::PermissionDenied {
                what: "/dev".into(),
            })
        }
    }

    #[test]
    fn unsupported_platform_yields_empty_inventory() {
        let inventory = inventory_from(&UnsupportedProbe);
        assert!(inventory.wifi.is_empty());
        assert!(inventory.gps.is_empty());
        assert!(inventory.is_empty());
    }

    #[test]
    fn probe_failures_collapse_to_empty_categories() {
        let inventory = inventory_from(&FailingProbe);
        assert_eq!(inventory, HardwareInventory::default());
    }
}
