use super::candidate::PathCandidate;
use super::SetupContext;
use crate::error::{Result, SetupError};
use crate::inventory::{Inventory, NetworkInterface, Vm, VpnDefinition};
use crate::prompt::ask_from_list;
use tracing::{debug, info};

/// Work out the (host, port) pair used to reach `vm`.
///
/// Known values are returned untouched when both are present. Otherwise the
/// VPNs in the VM's region are turned into candidates for the VM's first
/// interface; additional interfaces are not considered.
pub fn resolve_routing(
    ctx: &mut SetupContext<'_>,
    inventory: &dyn Inventory,
    vm: &Vm,
    known_host: Option<&str>,
    known_port: Option<u16>,
    preferred_vpn: Option<&str>,
) -> Result<(String, u16)> {
    let _entered = ctx.span().clone().entered();

    if let (Some(host), Some(port)) = (known_host, known_port) {
        debug!(host, port, "routing already known");
        return Ok((host.to_string(), port));
    }

    let candidates = vpn_candidates(inventory, vm)?;
    debug!(count = candidates.len(), "valid VPN candidates");

    if candidates.is_empty() {
        return Err(SetupError::NoConnectionOptions);
    }

    let chosen = if let Some(reference) = preferred_vpn {
        candidates
            .iter()
            .find(|candidate| {
                candidate
                    .vpn_id()
                    .is_some_and(|id| !id.is_empty() && reference.contains(id))
            })
            .ok_or_else(|| SetupError::ConfigurationReferenceNotFound(reference.to_string()))?
    } else if candidates.len() == 1 {
        &candidates[0]
    } else {
        ctx.ui.say(&format!(
            "Multiple ways to connect to {} were found:",
            vm_display_name(vm)
        ));
        let index = ask_from_list(
            &mut *ctx.ui,
            "Which connection option should be used?",
            &candidates,
            Some(0),
        )?;
        &candidates[index]
    };

    let (host, port) = chosen.resolve();
    info!(option = %chosen, %host, port, "selected connection option");
    Ok((host, port))
}

/// Valid VPN-derived candidates for the VM's first interface.
fn vpn_candidates(inventory: &dyn Inventory, vm: &Vm) -> Result<Vec<PathCandidate>> {
    let Some(interface) = vm.primary_interface() else {
        debug!(vm = %vm.id, "VM has no network interface");
        return Ok(Vec::new());
    };

    let vpns = inventory.list_vpns(&vm.region)?;
    Ok(qualifying_vpns(&vpns, interface)
        .map(|vpn| PathCandidate::from_vpn(vpn, interface))
        .filter(PathCandidate::valid)
        .collect())
}

/// VPNs that could carry traffic to `interface`: NAT-enabled ones, and those
/// whose local subnet covers the interface's network.
fn qualifying_vpns<'a>(
    vpns: &'a [VpnDefinition],
    interface: &'a NetworkInterface,
) -> impl Iterator<Item = &'a VpnDefinition> + 'a {
    vpns.iter()
        .filter(move |vpn| vpn.nat_enabled || vpn.subsumes(interface))
}

/// Every path candidate for an interface regardless of validity: qualifying
/// VPNs, then public IPs, then published services.
pub fn path_options(interface: &NetworkInterface, vpns: &[VpnDefinition]) -> Vec<PathCandidate> {
    let mut options: Vec<PathCandidate> = qualifying_vpns(vpns, interface)
        .map(|vpn| PathCandidate::from_vpn(vpn, interface))
        .collect();

    options.extend(
        interface
            .public_ips
            .iter()
            .map(|ip| PathCandidate::from_public_ip(ip, interface)),
    );
    options.extend(
        interface
            .services
            .iter()
            .map(|service| PathCandidate::from_service(service, interface)),
    );

    options
}

fn vm_display_name(vm: &Vm) -> &str {
    if vm.name.is_empty() {
        &vm.id
    } else {
        &vm.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{NatAddress, PublishedService, SnapshotInventory};
    use crate::prompt::ScriptedPrompter;

    fn interface() -> NetworkInterface {
        NetworkInterface {
            id: "nic-1".to_string(),
            network_id: "net-1".to_string(),
            network_subnet: "10.0.0.0/24".parse().unwrap(),
            ip: Some("10.0.0.5".to_string()),
            hostname: None,
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

    fn vpn(id: &str, nat_enabled: bool, subnet: &str) -> VpnDefinition {
        VpnDefinition {
            id: id.to_string(),
            name: String::new(),
            nat_enabled,
            enabled: true,
            local_subnet: subnet.parse().unwrap(),
        }
    }

    #[test]
    fn test_qualifying_vpns() {
        let vpns = vec![
            vpn("vpn-direct", false, "10.0.0.0/16"),
            vpn("vpn-elsewhere", false, "192.168.0.0/16"),
            vpn("vpn-nat", true, "192.168.0.0/16"),
        ];
        let nic = interface();
        let ids: Vec<&str> = qualifying_vpns(&vpns, &nic)
            .map(|vpn| vpn.id.as_str())
            .collect();
        assert_eq!(ids, ["vpn-direct", "vpn-nat"]);
    }

    #[test]
    fn test_path_options_order() {
        let vpns = vec![vpn("vpn-direct", false, "10.0.0.0/16")];
        let options = path_options(&interface(), &vpns);
        let labels: Vec<String> = options.iter().map(PathCandidate::label).collect();
        assert_eq!(
            labels,
            [
                "VPN: vpn-direct",
                "Public IP: 203.0.113.7",
                "Published service: 198.51.100.4:26011",
            ]
        );
    }

    #[test]
    fn test_vm_without_interfaces_has_no_options() {
        let vm = Vm {
            id: "vm-1".to_string(),
            name: String::new(),
            region: "US-West".to_string(),
            interfaces: vec![],
            credentials: vec![],
        };
        let inventory = SnapshotInventory::default();
        let mut ui = ScriptedPrompter::default();

        let result = {
            let mut ctx = SetupContext::new(&mut ui, "vm-1");
            resolve_routing(&mut ctx, &inventory, &vm, None, None, None)
        };
        assert!(matches!(result, Err(SetupError::NoConnectionOptions)));
    }
}
