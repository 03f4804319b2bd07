//! The `iwlist <iface> scan` cell-block grammar.

use std::sync::LazyLock;

use regex::Regex;
use skymap_common::wifi::WifiNetwork;

static ESSID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"ESSID:"(.*)""#).unwrap());
static CHANNEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Channel:(\d+)").unwrap());
static ENCRYPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Encryption key:(on|off)").unwrap());

#[cfg(not(target_os = "windows"))]
pub(crate) fn scan(interface: &str) -> Vec<WifiNetwork> {
    match crate::exec::run_tool("iwlist", &[interface, "scan"]) {
        Ok(output) => parse_iwlist(&output),
        Err(err) => {
            tracing::debug!("iwlist scan on {interface} failed: {err}");
            Vec::new()
        }
    }
}

/// Parses an `iwlist` scan dump into networks, in source order.
///
/// The output is split on the `"Cell "` delimiter (the preamble before the
/// first cell is discarded). A cell yields a record only when it contains a
/// quoted ESSID; a missing channel becomes the empty string, and a missing
/// encryption marker is reported as `"off"`, indistinguishable from an
/// explicit `Encryption key:off` (longstanding behavior, kept as-is).
pub fn parse_iwlist(output: &str) -> Vec<WifiNetwork> {
    let mut networks = Vec::new();

    for cell in output.split("Cell ").skip(1) {
        let Some(essid) = ESSID_RE.captures(cell) else {
            continue;
        };

        let channel = CHANNEL_RE
            .captures(cell)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        let encryption = match ENCRYPTION_RE.captures(cell) {
            Some(caps) if &caps[1] == "on" => "on",
            _ => "off",
        };

        networks.push(WifiNetwork {
            ssid: essid[1].to_string(),
            channel,
            encryption: encryption.to_string(),
        });
    }

    networks
}
