//! End-to-end parser fixtures for both scan grammars.

use skymap_common::wifi::WifiNetwork;
use skymap_core::scan::{parse_iwlist, parse_netsh_networks};

#[test]
fn iwlist_fixture_yields_home_and_guest() {
    let output = "Cell 01 - Address: ...\nESSID:\"Home\"\nChannel:6\nEncryption key:on\nCell 02 - Address: ...\nESSID:\"Guest\"\n";

    assert_eq!(
        parse_iwlist(output),
        vec![
            WifiNetwork {
                ssid: "Home".to_string(),
                channel: "6".to_string(),
                encryption: "on".to_string(),
            },
            WifiNetwork {
                ssid: "Guest".to_string(),
                channel: String::new(),
                encryption: "off".to_string(),
            },
        ]
    );
}

#[test]
fn iwlist_three_cells_keep_source_order() {
    let output = "\
preamble that is not a cell
Cell 01 - Address: AA\n  ESSID:\"first\"\n  Channel:1\n
Cell 02 - Address: BB\n  ESSID:\"second\"\n  Channel:2\n
Cell 03 - Address: CC\n  ESSID:\"third\"\n  Channel:3\n";

    let ssids: Vec<String> = parse_iwlist(output).into_iter().map(|n| n.ssid).collect();
    assert_eq!(ssids, vec!["first", "second", "third"]);
}

#[test]
fn netsh_fixture_attributes_fields_to_preceding_ssid() {
    let output = "\
Interface name : Wi-Fi

SSID 1 : Alpha
    Authentication          : WPA2-Personal
    Channel                 : 1

SSID 2 : Beta
    Authentication          : Open
    Channel                 : 36
";

    let networks = parse_netsh_networks(output);
    assert_eq!(networks.len(), 2);
    assert_eq!(
        (networks[0].ssid.as_str(), networks[0].channel.as_str()),
        ("Alpha", "1")
    );
    assert_eq!(networks[0].encryption, "WPA2-Personal");
    assert_eq!(
        (networks[1].ssid.as_str(), networks[1].channel.as_str()),
        ("Beta", "36")
    );
    assert_eq!(networks[1].encryption, "Open");
}

#[test]
fn malformed_input_never_panics() {
    for garbage in [
        "",
        "Cell ",
        "Cell Cell Cell",
        "ESSID:\"orphan\"",
        "SSID : no-index\nChannel : x\n",
        "\u{0}\u{1}\u{2}",
    ] {
        let _ = parse_iwlist(garbage);
        let _ = parse_netsh_networks(garbage);
    }
}
