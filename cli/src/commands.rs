pub mod capture;
pub mod hardware;
pub mod monitor;
pub mod nodes;
pub mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skymap")]
#[command(about = "A WiFi survey toolkit.")]
pub struct CommandLine {
    /// Path to the survey database
    #[arg(long, global = true, default_value = "skymap.db")]
    pub db: PathBuf,

    /// Suppress decorative output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List WiFi interfaces and GPS devices on this host
    #[command(alias = "hw")]
    Hardware,
    /// Scan for nearby wireless networks
    #[command(alias = "s")]
    Scan { interface: String },
    /// Toggle monitor mode on an interface
    #[command(alias = "m")]
    Monitor {
        #[command(subcommand)]
        action: MonitorAction,
    },
    /// Capture frames with airodump-ng
    #[command(alias = "c")]
    Capture {
        interface: String,
        /// Prefix for the capture output files
        #[arg(short = 'w', long, default_value = "capture")]
        prefix: String,
    },
    /// Print survey nodes and their recorded targets
    #[command(alias = "n")]
    Nodes,
}

#[derive(Subcommand)]
pub enum MonitorAction {
    /// Enable monitor mode
    Start {
        interface: String,
        /// Lock the interface to a channel
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Restore managed mode
    Stop { interface: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
