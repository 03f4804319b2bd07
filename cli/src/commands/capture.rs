use tracing::info;

use skymap_core::monitor::capture_packets;

pub async fn capture(interface: String, prefix: String) -> anyhow::Result<()> {
    info!("capturing on {interface}, writing to {prefix}-*");

    // Blocks until airodump-ng exits (usually user interrupt).
    tokio::task::spawn_blocking(move || capture_packets(&interface, &prefix)).await?;

    Ok(())
}
