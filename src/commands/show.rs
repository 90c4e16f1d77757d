use super::helpers;
use crate::cli::MachineArgs;
use crate::config::Config;
use crate::error::Result;

pub fn execute(config: &Config, args: &MachineArgs) -> Result<()> {
    let store = helpers::store_for(config, &args.machine_id)?;

    if !store.exists() {
        println!(
            "No connection settings stored for machine {}. Run 'skytap-setup setup --machine {}' first.",
            args.machine_id, args.machine_id
        );
        return Ok(());
    }

    let known = store.load()?;
    println!("Machine: {}", args.machine_id);
    println!("Record:  {}", store.path().display());
    helpers::print_connection(&known);

    if known.complete().is_none() {
        println!();
        println!("Some fields are missing; the next setup run will resolve them.");
    }

    Ok(())
}
