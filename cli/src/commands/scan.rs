use colored::*;
use skymap_common::config::Config;
use skymap_common::wifi::WifiNetwork;
use skymap_core::scan::scan_networks;

use crate::terminal::{print, spinner};

pub async fn scan(interface: String, cfg: &Config) -> anyhow::Result<()> {
    print::header("wireless scan", cfg.quiet);

    let pb = spinner::start(&format!("Scanning on {interface}..."));
    let iface = interface.clone();
    let networks = tokio::task::spawn_blocking(move || scan_networks(&iface)).await?;
    pb.finish_and_clear();

    if networks.is_empty() {
        print::no_results(&format!("no networks found on {interface}"));
        return Ok(());
    }

    for (idx, network) in networks.iter().enumerate() {
        print_network(idx, network);
    }

    println!(
        "{} {} networks found",
        "[+]".green().bold(),
        networks.len().to_string().bold()
    );

    Ok(())
}

fn print_network(idx: usize, network: &WifiNetwork) {
    let title = if network.ssid.is_empty() {
        "<hidden>".to_string()
    } else {
        network.ssid.clone()
    };
    print::tree_head(idx, &title);

    let channel = if network.channel.is_empty() {
        "unknown".to_string()
    } else {
        network.channel.clone()
    };

    print::tree_details(&[
        ("Channel", channel),
        ("Encryption", network.encryption.clone()),
    ]);
}
