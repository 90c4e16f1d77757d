use super::helpers;
use crate::cli::RoutesCmd;
use crate::config::Config;
use crate::connect::path_options;
use crate::error::{Result, SetupError};
use crate::inventory::Inventory;

pub fn execute(config: &Config, cmd: &RoutesCmd) -> Result<()> {
    let machine_id = cmd.machine.machine_id.as_str();
    let inventory = helpers::require_inventory(config, cmd.inventory.inventory.as_deref())?;

    let vm = inventory
        .find_vm(machine_id)?
        .ok_or_else(|| SetupError::MachineNotFound(machine_id.to_string()))?;

    let Some(interface) = vm.primary_interface() else {
        println!("Machine {} has no network interfaces.", machine_id);
        return Ok(());
    };

    if vm.interfaces.len() > 1 {
        println!(
            "Machine {} has {} interfaces; only the first ({}) is used for routing.",
            machine_id,
            vm.interfaces.len(),
            interface.id
        );
    }

    let vpns = inventory.list_vpns(&vm.region)?;
    let options = path_options(interface, &vpns);

    println!(
        "Connection paths for {} on network {} ({}):",
        machine_id, interface.network_id, interface.network_subnet
    );

    if options.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for option in &options {
        if option.valid() {
            let (host, port) = option.resolve();
            println!("  ✓ {} -> {}:{}", option, host, port);
        } else {
            println!("  ✗ {} (unavailable)", option);
        }
    }

    Ok(())
}
