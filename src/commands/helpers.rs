use crate::config::Config;
use crate::error::{Result, SetupError};
use crate::inventory::SnapshotInventory;
use crate::storage::{ConnectionStore, KnownConnection};
use std::path::Path;

/// Load the inventory snapshot named on the command line or in config.
///
/// Returns `None` when neither source names one.
pub fn load_inventory(config: &Config, flag: Option<&Path>) -> Result<Option<SnapshotInventory>> {
    let path = match flag {
        Some(path) => path.to_path_buf(),
        None => match config.inventory_path() {
            Some(path) => path,
            None => return Ok(None),
        },
    };

    tracing::debug!(path = %path.display(), "loading inventory snapshot");
    SnapshotInventory::from_file(&path).map(Some)
}

/// Like [`load_inventory`], but an inventory must be configured.
pub fn require_inventory(config: &Config, flag: Option<&Path>) -> Result<SnapshotInventory> {
    load_inventory(config, flag)?.ok_or_else(|| {
        SetupError::InvalidConfig(
            "No inventory configured. Pass --inventory or set [inventory] path".to_string(),
        )
    })
}

pub fn store_for(config: &Config, machine_id: &str) -> Result<ConnectionStore> {
    ConnectionStore::new(&config.data_dir(), machine_id)
}

/// Print connection fields, masking the password
pub fn print_connection(known: &KnownConnection) {
    fn field(value: Option<&str>) -> &str {
        value.unwrap_or("(not set)")
    }

    let port = known.port.map(|p| p.to_string());
    let password = known.password.as_ref().map(|_| "********");

    println!("  host:     {}", field(known.host.as_deref()));
    println!("  port:     {}", field(port.as_deref()));
    println!("  username: {}", field(known.username.as_deref()));
    println!("  password: {}", field(password));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_no_inventory_configured() {
        let config = Config::default();
        assert!(load_inventory(&config, None).unwrap().is_none());
        assert!(matches!(
            require_inventory(&config, None),
            Err(SetupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_flag_wins_over_config() {
        let dir = TempDir::new().unwrap();
        let flag_path = dir.path().join("flag.json");
        std::fs::write(&flag_path, r#"{"vms": [{"id": "from-flag", "region": "r"}]}"#).unwrap();

        let mut config = Config::default();
        config.inventory.path = Some("/nonexistent/config.json".to_string());

        let inventory = require_inventory(&config, Some(&flag_path)).unwrap();
        assert_eq!(inventory.vms[0].id, "from-flag");
    }

    #[test]
    fn test_configured_inventory_missing_file() {
        let mut config = Config::default();
        config.inventory.path = Some("/nonexistent/inventory.json".to_string());

        let result = load_inventory(&config, None);
        assert!(matches!(result, Err(SetupError::InventoryNotFound(p)) if p == PathBuf::from("/nonexistent/inventory.json")));
    }
}
