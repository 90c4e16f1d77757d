//! Shared fixtures for integration tests.
#![allow(dead_code)]

use skytap_setup::error::Result;
use skytap_setup::inventory::{
    CredentialRecord, Inventory, NatAddress, NetworkInterface, PublishedService, Vm,
    VpnDefinition,
};
use std::cell::Cell;

pub const REGION: &str = "US-West";

/// In-memory inventory that counts how often VPNs are listed.
pub struct TestInventory {
    pub vms: Vec<Vm>,
    pub vpns: Vec<VpnDefinition>,
    vpn_listings: Cell<usize>,
    vm_lookups: Cell<usize>,
}

impl TestInventory {
    pub fn new(vms: Vec<Vm>, vpns: Vec<VpnDefinition>) -> Self {
        Self {
            vms,
            vpns,
            vpn_listings: Cell::new(0),
            vm_lookups: Cell::new(0),
        }
    }

    pub fn vpn_listings(&self) -> usize {
        self.vpn_listings.get()
    }

    pub fn vm_lookups(&self) -> usize {
        self.vm_lookups.get()
    }
}

impl Inventory for TestInventory {
    fn find_vm(&self, id: &str) -> Result<Option<Vm>> {
        self.vm_lookups.set(self.vm_lookups.get() + 1);
        Ok(self.vms.iter().find(|vm| vm.id == id).cloned())
    }

    fn list_vpns(&self, region: &str) -> Result<Vec<VpnDefinition>> {
        self.vpn_listings.set(self.vpn_listings.get() + 1);
        assert_eq!(region, REGION);
        Ok(self.vpns.clone())
    }
}

/// Interface on 10.0.0.0/24 at 10.0.0.5, reachable at 172.16.0.9 through
/// the NAT-enabled VPN "vpn-nat".
pub fn interface() -> NetworkInterface {
    NetworkInterface {
        id: "nic-1".to_string(),
        network_id: "net-1".to_string(),
        network_subnet: "10.0.0.0/24".parse().unwrap(),
        ip: Some("10.0.0.5".to_string()),
        hostname: Some("web".to_string()),
        public_ips: vec!["203.0.113.7".to_string()],
        nat_addresses: vec![NatAddress {
            vpn_id: "vpn-nat".to_string(),
            ip: "172.16.0.9".to_string(),
        }],
        services: vec![PublishedService {
            id: "svc-1".to_string(),
            internal_port: 22,
            external_ip: "198.51.100.4".to_string(),
            external_port: 26011,
        }],
    }
}

pub fn vm(id: &str, credentials: &[&str]) -> Vm {
    Vm {
        id: id.to_string(),
        name: format!("{}-name", id),
        region: REGION.to_string(),
        interfaces: vec![interface()],
        credentials: credentials
            .iter()
            .map(|text| CredentialRecord {
                text: text.to_string(),
            })
            .collect(),
    }
}

/// VPN whose local subnet covers the test interface's network
pub fn direct_vpn(id: &str) -> VpnDefinition {
    VpnDefinition {
        id: id.to_string(),
        name: format!("{} name", id),
        nat_enabled: false,
        enabled: true,
        local_subnet: "10.0.0.0/16".parse().unwrap(),
    }
}

pub fn nat_vpn(id: &str) -> VpnDefinition {
    VpnDefinition {
        id: id.to_string(),
        name: format!("{} name", id),
        nat_enabled: true,
        enabled: true,
        local_subnet: "192.168.0.0/16".parse().unwrap(),
    }
}

/// VPN that neither uses NAT nor covers the test interface's network
pub fn unrelated_vpn(id: &str) -> VpnDefinition {
    VpnDefinition {
        id: id.to_string(),
        name: format!("{} name", id),
        nat_enabled: false,
        enabled: true,
        local_subnet: "192.168.0.0/16".parse().unwrap(),
    }
}
