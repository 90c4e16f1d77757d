//! Read-only records describing VMs, their network interfaces and the VPNs
//! visible in a region.

use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vm {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub region: String,

    /// Interfaces in the order the provider reports them
    #[serde(default)]
    pub interfaces: Vec<NetworkInterface>,

    #[serde(default)]
    pub credentials: Vec<CredentialRecord>,
}

impl Vm {
    /// The only interface considered for automatic routing.
    pub fn primary_interface(&self) -> Option<&NetworkInterface> {
        self.interfaces.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInterface {
    pub id: String,

    pub network_id: String,

    /// Address space of the network this interface is attached to
    pub network_subnet: Ipv4Network,

    /// Private address on the VM's network
    #[serde(default)]
    pub ip: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub public_ips: Vec<String>,

    /// Addresses this interface is reachable at through NAT-enabled VPNs
    #[serde(default)]
    pub nat_addresses: Vec<NatAddress>,

    #[serde(default)]
    pub services: Vec<PublishedService>,
}

impl NetworkInterface {
    pub fn nat_address_for(&self, vpn_id: &str) -> Option<&str> {
        self.nat_addresses
            .iter()
            .find(|nat| nat.vpn_id == vpn_id)
            .map(|nat| nat.ip.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NatAddress {
    pub vpn_id: String,
    pub ip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedService {
    pub id: String,
    pub internal_port: u16,
    pub external_ip: String,
    pub external_port: u16,
}

/// A login record as reported by the provider, e.g. `"root / ChangeMe!"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialRecord {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VpnDefinition {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub nat_enabled: bool,

    #[serde(default = "default_true")]
    pub enabled: bool,

    pub local_subnet: Ipv4Network,
}

fn default_true() -> bool {
    true
}

impl VpnDefinition {
    /// True when the VPN's local subnet covers the whole network the
    /// interface sits on.
    pub fn subsumes(&self, interface: &NetworkInterface) -> bool {
        let network = interface.network_subnet;
        self.local_subnet.prefix() <= network.prefix()
            && self.local_subnet.contains(network.network())
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
