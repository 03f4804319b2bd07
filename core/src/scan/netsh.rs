//! The `netsh wlan show networks mode=Bssid` label grammar.

use std::sync::LazyLock;

use regex::Regex;
use skymap_common::wifi::WifiNetwork;

static SSID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"SSID\s+\d+\s+:\s+(.*)").unwrap());
// Part of the grammar, but no field in the record stores it.
#[allow(dead_code)]
static BSSID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BSSID\s+\d+\s+:\s+(.*)").unwrap());
static CHANNEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Channel\s+:\s+(\d+)").unwrap());
static AUTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Authentication\s+:\s+(.*)").unwrap());

#[cfg(target_os = "windows")]
pub(crate) fn scan() -> Vec<WifiNetwork> {
    match crate::exec::run_tool("netsh", &["wlan", "show", "networks", "mode=Bssid"]) {
        Ok(output) => parse_netsh_networks(&output),
        Err(err) => {
            tracing::debug!("netsh network scan failed: {err}");
            Vec::new()
        }
    }
}

/// Parses `netsh wlan show networks` output into networks, in source order.
///
/// Runs a line-by-line accumulator: an `SSID <n> :` line flushes the open
/// record (if any) and starts a new one; `Channel` and `Authentication`
/// lines populate the open record, the authentication text kept verbatim.
/// Lines before the first SSID are ignored, and the last open record is
/// flushed when input ends.
pub fn parse_netsh_networks(output: &str) -> Vec<WifiNetwork> {
    let mut networks = Vec::new();
    let mut current: Option<WifiNetwork> = None;

    for line in output.lines() {
        if let Some(caps) = SSID_RE.captures(line) {
            if let Some(done) = current.take() {
                networks.push(done);
            }
            current = Some(WifiNetwork::new(caps[1].to_string()));
            continue;
        }

        let Some(network) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = CHANNEL_RE.captures(line) {
            network.channel = caps[1].to_string();
        }
        if let Some(caps) = AUTH_RE.captures(line) {
            network.encryption = caps[1].to_string();
        }
    }

    if let Some(done) = current {
        networks.push(done);
    }

    networks
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_NETWORKS: &str = "\
Interface name : Wi-Fi
There are 2 networks currently visible.

SSID 1 : HomeLab
    Network type            : Infrastructure
    Authentication          : WPA2-Personal
    Encryption              : CCMP
    Channel                 : 6

SSID 2 : CoffeeShop
    Network type            : Infrastructure
    Authentication          : Open
    Channel                 : 11
";

    #[test]
    fn two_records_attributed_to_correct_ssid() {
        let networks = parse_netsh_networks(TWO_NETWORKS);
        assert_eq!(
            networks,
            vec![
                WifiNetwork {
                    ssid: "HomeLab".into(),
                    channel: "6".into(),
                    encryption: "WPA2-Personal".into(),
                },
                WifiNetwork {
                    ssid: "CoffeeShop".into(),
                    channel: "11".into(),
                    encryption: "Open".into(),
                },
            ]
        );
    }

    #[test]
    fn lines_before_first_ssid_are_ignored() {
        let output = "Channel : 3\nAuthentication : Open\nSSID 1 : Late\n";
        let networks = parse_netsh_networks(output);
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].ssid, "Late");
        assert_eq!(networks[0].channel, "");
    }

    #[test]
    fn trailing_record_is_flushed() {
        let networks = parse_netsh_networks("SSID 1 : Solo\n    Channel : 1\n");
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].channel, "1");
    }

    #[test]
    fn authentication_text_is_verbatim() {
        let networks = parse_netsh_networks("SSID 1 : X\n    Authentication : WPA3-Personal\n");
        assert_eq!(networks[0].encryption, "WPA3-Personal");
    }

    #[test]
    fn empty_output_yields_nothing() {
        assert!(parse_netsh_networks("").is_empty());
    }
}
