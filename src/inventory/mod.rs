//! Source of VM and VPN metadata.
//!
//! Resolution only ever reads this data; it is treated as a snapshot taken
//! once per resolution step.

pub mod model;

pub use model::{
    CredentialRecord, NatAddress, NetworkInterface, PublishedService, Vm, VpnDefinition,
};

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait Inventory {
    /// Look up a VM by machine id
    fn find_vm(&self, id: &str) -> Result<Option<Vm>>;

    /// All VPNs visible to the account in a region
    fn list_vpns(&self, region: &str) -> Result<Vec<VpnDefinition>>;
}

/// Inventory backed by a JSON export of the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotInventory {
    #[serde(default)]
    pub vms: Vec<Vm>,

    /// VPNs keyed by the region they were listed in
    #[serde(default)]
    pub vpns: Vec<RegionVpn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionVpn {
    pub region: String,

    #[serde(flatten)]
    pub vpn: VpnDefinition,
}

impl SnapshotInventory {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SetupError::InventoryNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

impl Inventory for SnapshotInventory {
    fn find_vm(&self, id: &str) -> Result<Option<Vm>> {
        Ok(self.vms.iter().find(|vm| vm.id == id).cloned())
    }

    fn list_vpns(&self, region: &str) -> Result<Vec<VpnDefinition>> {
        Ok(self
            .vpns
            .iter()
            .filter(|entry| entry.region == region)
            .map(|entry| entry.vpn.clone())
            .collect())
    }
}
