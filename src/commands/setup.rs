use super::helpers;
use crate::cli::SetupCmd;
use crate::config::Config;
use crate::connect::{setup_connection, SetupRequest};
use crate::error::Result;
use crate::prompt::TerminalPrompter;
use crate::storage::KnownConnection;

pub fn execute(config: &Config, cmd: &SetupCmd) -> Result<()> {
    let machine_id = cmd.machine.machine_id.as_str();

    // Fully known connections never consult the inventory
    let inventory =
        helpers::load_inventory(config, cmd.inventory.inventory.as_deref())?.unwrap_or_default();
    let store = helpers::store_for(config, machine_id)?;

    let request = SetupRequest {
        machine_id,
        known: config.known_connection(),
        preferred_vpn: config.connection.vpn_url.as_deref(),
    };

    let mut ui = TerminalPrompter::new();
    let conn = setup_connection(&mut ui, &inventory, &store, request)?;

    println!();
    println!("✓ Connection settings for machine {}:", machine_id);
    helpers::print_connection(&KnownConnection::from(conn));
    println!("  Stored in {}", store.path().display());

    Ok(())
}
