use super::RecordType;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub fn algorithm_name(algorithm: u8) -> &'static str {
    match algorithm {
        5 => "RSA/SHA-1",
        7 => "RSASHA1-NSEC3-SHA1",
        8 => "RSA/SHA-256",
        10 => "RSA/SHA-512",
        12 => "GOST R 34.10-2001",
        13 => "ECDSA P-256/SHA-256",
        14 => "ECDSA P-384/SHA-384",
        15 => "Ed25519",
        16 => "Ed448",
        _ => "Unknown",
    }
}

pub fn digest_type_name(digest_type: u8) -> &'static str {
    match digest_type {
        1 => "SHA-1",
        2 => "SHA-256",
        3 => "GOST R 34.11-94",
        4 => "SHA-384",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnskeyData {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Vec<u8>,
}

impl DnskeyData {
    pub fn is_ksk(&self) -> bool {
        self.flags & 0x0001 != 0
    }

    pub fn is_zone_key(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    pub fn rdata(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(4 + self.public_key.len());
        wire.extend_from_slice(&self.flags.to_be_bytes());
        wire.push(self.protocol);
        wire.push(self.algorithm);
        wire.extend_from_slice(&self.public_key);
        wire
    }

    /// RFC 4034 Appendix B checksum.
    pub fn key_tag(&self) -> u16 {
        let wire = self.rdata();

        let mut accumulator: u32 = 0;

        for chunk in wire.chunks(2) {
            if chunk.len() == 2 {
                accumulator += u32::from(u16::from_be_bytes([chunk[0], chunk[1]]));
            } else {
                accumulator += u32::from(chunk[0]) << 8;
            }
        }

        accumulator += accumulator >> 16;
        (accumulator & 0xFFFF) as u16
    }

    pub fn algorithm_name(&self) -> &'static str {
        algorithm_name(self.algorithm)
    }
}

impl fmt::Display for DnskeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use base64::{engine::general_purpose::STANDARD, Engine};
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm,
            STANDARD.encode(&self.public_key)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsData {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl DsData {
    pub fn rdata(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(4 + self.digest.len());
        wire.extend_from_slice(&self.key_tag.to_be_bytes());
        wire.push(self.algorithm);
        wire.push(self.digest_type);
        wire.extend_from_slice(&self.digest);
        wire
    }

    pub fn digest_type_name(&self) -> &'static str {
        digest_type_name(self.digest_type)
    }

    pub fn digest_hex(&self) -> String {
        self.digest.iter().map(|b| format!("{:02X}", b)).collect()
    }
}

impl fmt::Display for DsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag,
            self.algorithm,
            self.digest_type,
            self.digest_hex()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrsigData {
    pub type_covered: RecordType,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: u32,
    pub inception: u32,
    pub key_tag: u16,
    pub signer_name: String,
    pub signature: Vec<u8>,
}

impl RrsigData {
    /// RRSIG RDATA without the signature field (RFC 4034 §3.1.8.1).
    pub fn signed_prefix(&self) -> Result<Vec<u8>, DomainError> {
        let signer = crate::dns_name::name_to_wire(&self.signer_name)?;
        let mut wire = Vec::with_capacity(18 + signer.len());
        wire.extend_from_slice(&self.type_covered.to_u16().to_be_bytes());
        wire.push(self.algorithm);
        wire.push(self.labels);
        wire.extend_from_slice(&self.original_ttl.to_be_bytes());
        wire.extend_from_slice(&self.expiration.to_be_bytes());
        wire.extend_from_slice(&self.inception.to_be_bytes());
        wire.extend_from_slice(&self.key_tag.to_be_bytes());
        wire.extend_from_slice(&signer);
        Ok(wire)
    }

    pub fn algorithm_name(&self) -> &'static str {
        algorithm_name(self.algorithm)
    }
}

impl fmt::Display for RrsigData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use base64::{engine::general_purpose::STANDARD, Engine};
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name,
            STANDARD.encode(&self.signature)
        )
    }
}

/// DNSKEYs of one zone indexed by key tag.
///
/// A second key with an already known tag is only accepted when its public
/// key is byte-identical; anything else is a forged tag collision.
#[derive(Debug, Clone, Default)]
pub struct KeyTagMap {
    keys: BTreeMap<u16, DnskeyData>,
}

impl KeyTagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: &str, key: DnskeyData) -> Result<(), DomainError> {
        let key_tag = key.key_tag();
        if let Some(existing) = self.keys.get(&key_tag) {
            if existing.public_key != key.public_key {
                return Err(DomainError::KeyTagCollision {
                    zone: zone.to_string(),
                    key_tag,
                });
            }
        }
        self.keys.insert(key_tag, key);
        Ok(())
    }

    pub fn get(&self, key_tag: u16) -> Option<&DnskeyData> {
        self.keys.get(&key_tag)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DnskeyData> {
        self.keys.values()
    }
}
