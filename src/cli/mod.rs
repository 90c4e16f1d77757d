use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConnectionConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "skytap-setup")]
#[command(about = "Resolve and store SSH connection settings for Skytap VMs", long_about = None)]
#[command(version = env!("SKYTAP_SETUP_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  skytap-setup setup --machine 4521 --inventory env.json
  skytap-setup setup --machine 4521 --vpn https://cloud.skytap.com/vpns/vpn-88
  skytap-setup routes --machine 4521
  skytap-setup show --machine 4521

Logging goes to stderr; set RUST_LOG for fine-grained filtering.")]
pub struct Cli {
    /// Show debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve how to reach a machine and which login to use, then store it
    #[command(long_about = "Resolve how to reach a machine and which login to use, then store it.\n\n\
        Values already stored for the machine, or supplied through configuration\n\
        and flags, are kept. Anything missing is resolved from the inventory,\n\
        asking which option to use when more than one is available.")]
    Setup(SetupCmd),

    /// Show the stored connection settings for a machine
    Show(MachineArgs),

    /// List every connection path for a machine's first network interface
    Routes(RoutesCmd),

    /// Delete the stored connection settings for a machine
    Clean {
        #[command(flatten)]
        machine: MachineArgs,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct MachineArgs {
    /// Machine (VM) id
    #[arg(short = 'm', long = "machine")]
    pub machine_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {
    /// JSON inventory snapshot of VMs and VPNs
    #[arg(short = 'i', long = "inventory")]
    pub inventory: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SetupCmd {
    #[command(flatten)]
    pub machine: MachineArgs,

    #[command(flatten)]
    pub inventory: InventoryArgs,

    /// VPN to connect through (URL or anything containing the VPN id)
    #[arg(long = "vpn")]
    pub vpn_url: Option<String>,

    /// Login username
    #[arg(long)]
    pub username: Option<String>,

    /// Host to connect to
    #[arg(long)]
    pub host: Option<String>,

    /// SSH port
    #[arg(long)]
    pub port: Option<u16>,
}

impl SetupCmd {
    pub fn connection_overrides(&self) -> ConnectionConfig {
        ConnectionConfig {
            vpn_url: self.vpn_url.clone(),
            username: self.username.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RoutesCmd {
    #[command(flatten)]
    pub machine: MachineArgs,

    #[command(flatten)]
    pub inventory: InventoryArgs,
}
