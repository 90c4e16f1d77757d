use crate::cli::ConfigCommands;
use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn execute(command: &ConfigCommands, project_dir: &Path) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => validate(file.as_deref(), project_dir),
        ConfigCommands::Show => show(project_dir),
    }
}

fn validate(file: Option<&Path>, project_dir: &Path) -> Result<()> {
    if let Some(file) = file {
        println!("Validating {}...", file.display());
        return match Config::from_file(file) {
            Ok(_) => {
                println!("✓ Configuration is valid!");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {}", e);
                Err(e)
            }
        };
    }

    let project_config = project_dir.join(CONFIG_FILE);
    let global_config = std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(format!("~/{}", CONFIG_FILE)));

    println!("Validating configuration files...\n");

    for (label, path) in [("Global", &global_config), ("Project", &project_config)] {
        if path.exists() {
            println!("  {} config: {}", label, path.display());
        } else {
            println!(
                "  {} config: {} - not found (optional)",
                label,
                path.display()
            );
        }
    }

    println!("\nLoading and validating configuration...");
    match Config::load(project_dir) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show(project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir)?;

    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("Connection:");
    println!(
        "  vpn_url: {}",
        config.connection.vpn_url.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  username: {}",
        config.connection.username.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  host: {}",
        config.connection.host.as_deref().unwrap_or("(not set)")
    );
    match config.connection.port {
        Some(port) => println!("  port: {}", port),
        None => println!("  port: (not set)"),
    }

    println!("\nStorage:");
    println!("  data_dir: {}", config.data_dir().display());

    println!("\nInventory:");
    match config.inventory_path() {
        Some(path) => println!("  path: {}", path.display()),
        None => println!("  path: (not set)"),
    }

    Ok(())
}
