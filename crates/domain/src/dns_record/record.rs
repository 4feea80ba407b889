use super::dnssec::{DnskeyData, DsData, RrsigData};
use super::RecordType;
use crate::dns_name::name_to_wire;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    Mx {
        preference: u16,
        exchange: String,
    },
    Soa(SoaData),
    Txt(Vec<String>),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Caa {
        flags: u8,
        tag: String,
        value: Vec<u8>,
    },
    Dnskey(DnskeyData),
    Ds(DsData),
    Rrsig(RrsigData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Soa(_) => RecordType::SOA,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Srv { .. } => RecordType::SRV,
            RecordData::Caa { .. } => RecordType::CAA,
            RecordData::Dnskey(_) => RecordType::DNSKEY,
            RecordData::Ds(_) => RecordType::DS,
            RecordData::Rrsig(_) => RecordType::RRSIG,
        }
    }

    /// RDATA in canonical wire form: embedded names uncompressed and lowercased.
    pub fn canonical_rdata(&self) -> Result<Vec<u8>, DomainError> {
        let wire = match self {
            RecordData::A(addr) => addr.octets().to_vec(),
            RecordData::Aaaa(addr) => addr.octets().to_vec(),
            RecordData::Ns(name) | RecordData::Cname(name) => name_to_wire(name)?,
            RecordData::Mx {
                preference,
                exchange,
            } => {
                let mut wire = preference.to_be_bytes().to_vec();
                wire.extend_from_slice(&name_to_wire(exchange)?);
                wire
            }
            RecordData::Soa(soa) => {
                let mut wire = name_to_wire(&soa.mname)?;
                wire.extend_from_slice(&name_to_wire(&soa.rname)?);
                for field in [soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum] {
                    wire.extend_from_slice(&field.to_be_bytes());
                }
                wire
            }
            RecordData::Txt(strings) => {
                let mut wire = Vec::new();
                for s in strings {
                    let bytes = s.as_bytes();
                    if bytes.len() > 255 {
                        return Err(DomainError::InvalidDnsResponse(
                            "TXT character-string longer than 255 bytes".into(),
                        ));
                    }
                    wire.push(bytes.len() as u8);
                    wire.extend_from_slice(bytes);
                }
                wire
            }
            RecordData::Srv {
                priority,
                weight,
                port,
                target,
            } => {
                let mut wire = Vec::with_capacity(6);
                wire.extend_from_slice(&priority.to_be_bytes());
                wire.extend_from_slice(&weight.to_be_bytes());
                wire.extend_from_slice(&port.to_be_bytes());
                wire.extend_from_slice(&name_to_wire(target)?);
                wire
            }
            RecordData::Caa { flags, tag, value } => {
                let mut wire = vec![*flags, tag.len() as u8];
                wire.extend_from_slice(tag.as_bytes());
                wire.extend_from_slice(value);
                wire
            }
            RecordData::Dnskey(key) => key.rdata(),
            RecordData::Ds(ds) => ds.rdata(),
            RecordData::Rrsig(sig) => {
                let mut wire = sig.signed_prefix()?;
                wire.extend_from_slice(&sig.signature);
                wire
            }
        };
        Ok(wire)
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => write!(f, "{}", name),
            RecordData::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RecordData::Txt(strings) => {
                let quoted: Vec<String> = strings.iter().map(|s| format!("{:?}", s)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            RecordData::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
            RecordData::Caa { flags, tag, value } => {
                write!(f, "{} {} {:?}", flags, tag, String::from_utf8_lossy(value))
            }
            RecordData::Dnskey(key) => write!(f, "{}", key),
            RecordData::Ds(ds) => write!(f, "{}", ds),
            RecordData::Rrsig(sig) => write!(f, "{}", sig),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::A(addr) => Some(IpAddr::V4(addr)),
            RecordData::Aaaa(addr) => Some(IpAddr::V6(addr)),
            _ => None,
        }
    }

    pub fn as_dnskey(&self) -> Option<&DnskeyData> {
        match &self.data {
            RecordData::Dnskey(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_ds(&self) -> Option<&DsData> {
        match &self.data {
            RecordData::Ds(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn as_rrsig(&self) -> Option<&RrsigData> {
        match &self.data {
            RecordData::Rrsig(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn as_soa(&self) -> Option<&SoaData> {
        match &self.data {
            RecordData::Soa(soa) => Some(soa),
            _ => None,
        }
    }

    pub fn as_ns(&self) -> Option<&str> {
        match &self.data {
            RecordData::Ns(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t{}",
            self.name,
            self.ttl,
            self.record_type(),
            self.data
        )
    }
}

/// Keeps only records of the given types, preserving order.
pub fn filter_by_type(records: &[ResourceRecord], types: &[RecordType]) -> Vec<ResourceRecord> {
    records
        .iter()
        .filter(|r| types.contains(&r.record_type()))
        .cloned()
        .collect()
}
