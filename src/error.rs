use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("No connection options found. Attach the VM to a network reachable through a VPN.")]
    NoConnectionOptions,

    #[error("Configured VPN reference not found among the available connection options: {0}")]
    ConfigurationReferenceNotFound(String),

    #[error("Default choice index {index} is out of range for {len} choices")]
    InvalidDefaultIndex { index: usize, len: usize },

    #[error("Machine not found: {0}")]
    MachineNotFound(String),

    #[error("Inventory file not found: {0}")]
    InventoryNotFound(PathBuf),

    #[error("Inventory parse error: {0}")]
    InventoryParse(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to encode connection record: {0}")]
    StorageFormat(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Prompt input exhausted")]
    InputExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;
