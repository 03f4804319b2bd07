use tracing::info;

use skymap_core::monitor::{start_monitor_mode, stop_monitor_mode};

use crate::commands::MonitorAction;

pub async fn monitor(action: MonitorAction) -> anyhow::Result<()> {
    match action {
        MonitorAction::Start { interface, channel } => {
            info!("enabling monitor mode on {interface}");
            tokio::task::spawn_blocking(move || {
                start_monitor_mode(&interface, channel.as_deref())
            })
            .await?;
        }
        MonitorAction::Stop { interface } => {
            info!("restoring managed mode on {interface}");
            tokio::task::spawn_blocking(move || stop_monitor_mode(&interface)).await?;
        }
    }
    Ok(())
}
