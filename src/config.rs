use crate::error::{Result, SetupError};
use crate::storage::KnownConnection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".skytap-setup.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Pre-known connection values. A password is deliberately not accepted
/// here; it only ever comes from the stored record or the operator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// VPN to connect through, usually the VPN's URL; matched by id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one sub-directory per machine
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "~/.skytap-setup/machines".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InventoryConfig {
    /// JSON snapshot of VMs and VPNs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_overrides)
    /// 2. Environment variables
    /// 3. Project config (.skytap-setup.toml in the working directory)
    /// 4. Global config (~/.skytap-setup.toml)
    /// 5. Built-in defaults
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE);
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_dir.join(CONFIG_FILE);
        if project_config.exists() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        config.merge_env()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.connection.vpn_url.is_some() {
            self.connection.vpn_url = other.connection.vpn_url;
        }
        if other.connection.username.is_some() {
            self.connection.username = other.connection.username;
        }
        if other.connection.host.is_some() {
            self.connection.host = other.connection.host;
        }
        if other.connection.port.is_some() {
            self.connection.port = other.connection.port;
        }

        if other.storage.data_dir != default_data_dir() {
            self.storage.data_dir = other.storage.data_dir;
        }

        if other.inventory.path.is_some() {
            self.inventory.path = other.inventory.path;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Result<Self> {
        if let Some(vpn_url) = env_value("SKYTAP_VPN_URL") {
            self.connection.vpn_url = Some(vpn_url);
        }
        if let Some(username) = env_value("SKYTAP_USERNAME") {
            self.connection.username = Some(username);
        }
        if let Some(host) = env_value("SKYTAP_HOST") {
            self.connection.host = Some(host);
        }
        if let Some(port) = env_value("SKYTAP_PORT") {
            let port = port.parse::<u16>().map_err(|_| {
                SetupError::InvalidConfig(format!("SKYTAP_PORT is not a valid port: '{}'", port))
            })?;
            self.connection.port = Some(port);
        }
        if let Some(data_dir) = env_value("SKYTAP_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(path) = env_value("SKYTAP_INVENTORY") {
            self.inventory.path = Some(path);
        }

        Ok(self)
    }

    /// Apply command-line overrides (highest precedence)
    pub fn with_overrides(mut self, overrides: &ConnectionConfig) -> Self {
        self.connection = ConnectionConfig {
            vpn_url: overrides.vpn_url.clone().or(self.connection.vpn_url),
            username: overrides.username.clone().or(self.connection.username),
            host: overrides.host.clone().or(self.connection.host),
            port: overrides.port.or(self.connection.port),
        };
        self
    }

    /// Connection values known before any resolution happens
    pub fn known_connection(&self) -> KnownConnection {
        KnownConnection {
            username: self.connection.username.clone(),
            password: None,
            host: self.connection.host.clone(),
            port: self.connection.port,
        }
    }

    /// Data directory with `~` expanded
    pub fn data_dir(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.storage.data_dir)
            .unwrap_or_else(|| PathBuf::from(&self.storage.data_dir))
    }

    /// Inventory file with `~` expanded, if one is configured
    pub fn inventory_path(&self) -> Option<PathBuf> {
        self.inventory.path.as_ref().map(|path| {
            crate::utils::path::expand_tilde(path).unwrap_or_else(|| PathBuf::from(path))
        })
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
