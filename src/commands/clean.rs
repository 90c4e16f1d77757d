use super::helpers;
use crate::cli::MachineArgs;
use crate::config::Config;
use crate::error::Result;
use std::io::{self, Write};

pub fn execute(config: &Config, args: &MachineArgs, yes: bool) -> Result<()> {
    let store = helpers::store_for(config, &args.machine_id)?;

    if !store.exists() {
        println!(
            "No connection settings stored for machine {}",
            args.machine_id
        );
        return Ok(());
    }

    println!("Record: {}", store.path().display());
    println!("This will delete the stored connection settings.");
    println!();

    // Prompt for confirmation unless --yes was provided
    if !yes {
        print!("Delete connection settings? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.clear()?;
    println!(
        "Connection settings removed for machine {}",
        args.machine_id
    );

    Ok(())
}
