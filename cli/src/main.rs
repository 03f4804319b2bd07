mod commands;
mod terminal;

use commands::{capture, hardware, monitor, nodes, scan, CommandLine, Commands};
use skymap_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        db_path: commands.db,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Hardware => hardware::hardware(&cfg).await,
        Commands::Scan { interface } => scan::scan(interface, &cfg).await,
        Commands::Monitor { action } => monitor::monitor(action).await,
        Commands::Capture { interface, prefix } => capture::capture(interface, prefix).await,
        Commands::Nodes => nodes::nodes(&cfg).await,
    }
}
