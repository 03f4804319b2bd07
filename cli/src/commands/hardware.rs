use skymap_common::config::Config;
use skymap_core::hardware::discover_hardware;

use crate::terminal::print;

pub async fn hardware(cfg: &Config) -> anyhow::Result<()> {
    print::header("hardware inventory", cfg.quiet);

    let inventory = tokio::task::spawn_blocking(discover_hardware).await?;

    if inventory.is_empty() {
        print::no_results("no wifi interfaces or gps devices detected");
        return Ok(());
    }

    print::tree_list("WiFi interfaces", &inventory.wifi);
    print::tree_list("GPS devices", &inventory.gps);

    Ok(())
}
