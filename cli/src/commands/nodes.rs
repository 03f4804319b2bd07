use colored::*;
use skymap_common::config::Config;
use skymap_common::survey::NodeReport;
use skymap_core::store::SurveyStore;

use crate::terminal::print;

pub async fn nodes(cfg: &Config) -> anyhow::Result<()> {
    print::header("survey nodes", cfg.quiet);

    let store = SurveyStore::open(&cfg.db_path).await?;
    let reports = store.nodes_with_targets().await?;

    if reports.is_empty() {
        print::no_results("no nodes recorded yet");
        return Ok(());
    }

    for (idx, report) in reports.iter().enumerate() {
        print_report(idx, report);
    }

    Ok(())
}

fn print_report(idx: usize, report: &NodeReport) {
    let node = &report.node;
    print::tree_head(idx, &format!("{} ({:.5}, {:.5})", node.id, node.lat, node.lon));

    if report.targets.is_empty() {
        println!("  {} {}", "└─".bright_black(), "no targets".dimmed());
        return;
    }

    for (t_idx, target) in report.targets.iter().enumerate() {
        let branch = if t_idx + 1 == report.targets.len() {
            "└─"
        } else {
            "├─"
        };
        println!(
            "  {} {}  {} dBm  {} MHz  @{}",
            branch.bright_black(),
            target.mac.cyan(),
            target.rssi,
            target.freq,
            target.timestamp
        );
    }
}
