//! Displayable connection and login options.

use crate::inventory::{CredentialRecord, NetworkInterface, PublishedService, VpnDefinition};
use std::fmt;
use std::net::IpAddr;

pub const SSH_PORT: u16 = 22;

/// One way of reaching a VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCandidate {
    Vpn {
        vpn: VpnDefinition,
        interface: NetworkInterface,
    },
    PublicIp {
        ip: String,
        interface: NetworkInterface,
    },
    PublishedService {
        service: PublishedService,
        interface: NetworkInterface,
    },
}

impl PathCandidate {
    pub fn from_vpn(vpn: &VpnDefinition, interface: &NetworkInterface) -> Self {
        Self::Vpn {
            vpn: vpn.clone(),
            interface: interface.clone(),
        }
    }

    pub fn from_public_ip(ip: &str, interface: &NetworkInterface) -> Self {
        Self::PublicIp {
            ip: ip.to_string(),
            interface: interface.clone(),
        }
    }

    pub fn from_service(service: &PublishedService, interface: &NetworkInterface) -> Self {
        Self::PublishedService {
            service: service.clone(),
            interface: interface.clone(),
        }
    }

    /// The VPN this candidate routes through, if any
    pub fn vpn_id(&self) -> Option<&str> {
        match self {
            Self::Vpn { vpn, .. } => Some(vpn.id.as_str()),
            _ => None,
        }
    }

    pub fn valid(&self) -> bool {
        match self {
            Self::Vpn { vpn, interface } => {
                vpn.enabled
                    && if vpn.nat_enabled {
                        interface.nat_address_for(&vpn.id).is_some()
                    } else {
                        interface.ip.as_deref().is_some_and(|ip| !ip.is_empty())
                    }
            }
            Self::PublicIp { ip, .. } => ip.parse::<IpAddr>().is_ok(),
            Self::PublishedService { service, .. } => {
                service.internal_port == SSH_PORT && !service.external_ip.is_empty()
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Vpn { vpn, .. } if vpn.nat_enabled => {
                format!("VPN: {} (NAT)", vpn.display_name())
            }
            Self::Vpn { vpn, .. } => format!("VPN: {}", vpn.display_name()),
            Self::PublicIp { ip, .. } => format!("Public IP: {}", ip),
            Self::PublishedService { service, .. } => format!(
                "Published service: {}:{}",
                service.external_ip, service.external_port
            ),
        }
    }

    /// The concrete (host, port) pair this candidate leads to.
    ///
    /// Only meaningful for valid candidates; an invalid VPN candidate
    /// resolves to an empty host.
    pub fn resolve(&self) -> (String, u16) {
        match self {
            Self::Vpn { vpn, interface } => {
                let host = if vpn.nat_enabled {
                    interface.nat_address_for(&vpn.id)
                } else {
                    interface.ip.as_deref()
                };
                (host.unwrap_or_default().to_string(), SSH_PORT)
            }
            Self::PublicIp { ip, .. } => (ip.clone(), SSH_PORT),
            Self::PublishedService { service, .. } => {
                (service.external_ip.clone(), service.external_port)
            }
        }
    }
}

impl fmt::Display for PathCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A login record offered by the provider, parsed from `"user / password"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCandidate {
    username: String,
    password: String,
}

impl CredentialCandidate {
    pub fn from_record(record: &CredentialRecord) -> Self {
        let (username, password) = match record.text.split_once('/') {
            Some((user, pass)) => (user.trim(), pass.trim()),
            None => (record.text.trim(), ""),
        };
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the record parsed into a usable username and password
    pub fn recognized(&self) -> bool {
        !self.username.is_empty()
            && !self.username.chars().any(char::is_whitespace)
            && !self.password.is_empty()
    }

    pub fn label(&self) -> String {
        format!("{} via Skytap", self.username)
    }
}

impl fmt::Display for CredentialCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
