use crate::serde_util::option_duration_ms;
use crate::validity::ValidityWindow;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// An authoritative nameserver and the addresses it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameServerAddress {
    pub name: String,
    pub addresses: Vec<IpAddr>,
}

impl NameServerAddress {
    pub fn new(name: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        let mut unique: Vec<IpAddr> = Vec::with_capacity(addresses.len());
        for ip in addresses {
            if !unique.contains(&ip) {
                unique.push(ip);
            }
        }
        Self {
            name: name.into(),
            addresses: unique,
        }
    }
}

/// Flattens a nameserver set into every address it serves on.
pub fn all_addresses(nameservers: &[NameServerAddress]) -> Vec<IpAddr> {
    let mut ips = Vec::new();
    for ns in nameservers {
        for ip in &ns.addresses {
            if !ips.contains(ip) {
                ips.push(*ip);
            }
        }
    }
    ips
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnssecStatus {
    pub signed: bool,
    pub valid: bool,
    pub window: Option<ValidityWindow>,
}

/// What one address of one nameserver answered for the apex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameserverStatus {
    pub name: String,
    pub address: IpAddr,
    #[serde(rename = "rtt_ms", with = "option_duration_ms")]
    pub rtt: Option<Duration>,
    pub serial: Option<u32>,
    pub authoritative: bool,
    pub recursion_available: bool,
    pub dnssec: DnssecStatus,
    pub error: Option<String>,
}

impl NameserverStatus {
    pub fn unreachable(name: &str, address: IpAddr, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            address,
            rtt: None,
            serial: None,
            authoritative: false,
            recursion_available: false,
            dnssec: DnssecStatus::default(),
            error: Some(error.into()),
        }
    }

    /// Answered without the AA bit.
    pub fn is_lame(&self) -> bool {
        self.error.is_none() && !self.authoritative
    }
}
