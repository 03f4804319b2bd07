//! # Monitor Mode & Capture
//!
//! Fire-and-forget wrappers around the aircrack-ng tools. No result is
//! interpreted beyond process exit; failures are logged at debug level and
//! swallowed. On Windows (no airmon-ng/airodump-ng) the calls are no-ops.

#[cfg(not(target_os = "windows"))]
use tracing::debug;

#[cfg(not(target_os = "windows"))]
use crate::exec::run_tool_status;

/// Places `interface` into monitor mode, optionally pinned to a channel.
pub fn start_monitor_mode(interface: &str, channel: Option<&str>) {
    #[cfg(not(target_os = "windows"))]
    {
        let mut args = vec!["start", interface];
        if let Some(channel) = channel {
            args.push(channel);
        }
        if let Err(err) = run_tool_status("airmon-ng", &args) {
            debug!("airmon-ng start on {interface} failed: {err}");
        }
    }
    #[cfg(target_os = "windows")]
    {
        let _ = (interface, channel);
    }
}

/// Restores `interface` to managed mode.
pub fn stop_monitor_mode(interface: &str) {
    #[cfg(not(target_os = "windows"))]
    {
        if let Err(err) = run_tool_status("airmon-ng", &["stop", interface]) {
            debug!("airmon-ng stop on {interface} failed: {err}");
        }
    }
    #[cfg(target_os = "windows")]
    {
        let _ = interface;
    }
}

/// Captures frames on `interface`, writing files under `output_prefix`.
///
/// Blocks until airodump-ng exits (typically user interrupt).
pub fn capture_packets(interface: &str, output_prefix: &str) {
    #[cfg(not(target_os = "windows"))]
    {
        if let Err(err) = run_tool_status("airodump-ng", &["-w", output_prefix, interface]) {
            debug!("airodump-ng on {interface} failed: {err}");
        }
    }
    #[cfg(target_os = "windows")]
    {
        let _ = (interface, output_prefix);
    }
}
