//! Per-machine persistence of the resolved connection.
//!
//! The record is a flat TOML table with the keys `username`, `password`,
//! `host` and `port`, stored at `<data_dir>/<machine id>/connection.toml`.

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CONNECTION_FILE: &str = "connection.toml";

/// Fully resolved login and address for one machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConnection {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl fmt::Display for ResolvedConnection {
    /// Renders without the password
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.username, self.host, self.port)
    }
}

/// Whatever is already known about a machine's connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl KnownConnection {
    /// Fill in fields from `other` where this one has none.
    ///
    /// Username and password are a pair: when both sides name different
    /// users, `other`'s password is not carried over.
    pub fn or(self, other: KnownConnection) -> Self {
        let other_password = match (&self.username, &other.username) {
            (Some(mine), Some(theirs)) if mine != theirs => None,
            _ => other.password,
        };

        Self {
            username: self.username.or(other.username),
            password: self.password.or(other_password),
            host: self.host.or(other.host),
            port: self.port.or(other.port),
        }
    }

    /// The complete record, if every field is known
    pub fn complete(&self) -> Option<ResolvedConnection> {
        Some(ResolvedConnection {
            username: self.username.clone()?,
            password: self.password.clone()?,
            host: self.host.clone()?,
            port: self.port?,
        })
    }
}

impl From<ResolvedConnection> for KnownConnection {
    fn from(conn: ResolvedConnection) -> Self {
        Self {
            username: Some(conn.username),
            password: Some(conn.password),
            host: Some(conn.host),
            port: Some(conn.port),
        }
    }
}

/// Connection record storage for a single machine.
#[derive(Debug, Clone)]
pub struct ConnectionStore {
    machine_dir: PathBuf,
}

impl ConnectionStore {
    pub fn new(data_dir: &Path, machine_id: &str) -> Result<Self> {
        if machine_id.is_empty()
            || machine_id.contains(['/', '\\', '\0'])
            || machine_id == "."
            || machine_id == ".."
        {
            return Err(SetupError::InvalidConfig(format!(
                "Machine id cannot be used as a directory name: '{}'",
                machine_id
            )));
        }

        Ok(Self {
            machine_dir: data_dir.join(machine_id),
        })
    }

    pub fn machine_dir(&self) -> &Path {
        &self.machine_dir
    }

    pub fn path(&self) -> PathBuf {
        self.machine_dir.join(CONNECTION_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Read back the stored fields; a missing record means nothing is known.
    pub fn load(&self) -> Result<KnownConnection> {
        let path = self.path();
        if !path.exists() {
            return Ok(KnownConnection::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self, conn: &ResolvedConnection) -> Result<()> {
        std::fs::create_dir_all(&self.machine_dir)?;

        let contents = toml::to_string(conn)?;
        let path = self.path();

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&path)?;

        // mode() only applies when the file is created
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents.as_bytes())?;

        tracing::debug!(path = %path.display(), "connection record written");
        Ok(())
    }

    /// Remove the stored record. Returns whether anything was deleted.
    pub fn clear(&self) -> Result<bool> {
        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        Ok(true)
    }
}
