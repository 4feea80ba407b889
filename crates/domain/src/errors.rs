use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Connection refused by {server}")]
    ConnectionRefused { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("failure: {rcode} for {name} ({record_type}) from {server}")]
    ProtocolError {
        rcode: String,
        name: String,
        record_type: String,
        server: String,
    },

    #[error("no records for {name} ({record_type}) on {server}")]
    NoData {
        name: String,
        record_type: String,
        server: String,
    },

    #[error("no NS found for {domain}")]
    NoNameservers { domain: String },

    #[error("Validation failed. No DNSKEY found for {zone} on {server}")]
    NoDnskey { zone: String, server: String },

    #[error("Validation failed. DNSKEY with same keytag {key_tag} differ in {zone}")]
    KeyTagCollision { zone: String, key_tag: u16 },

    #[error("Validation failed. RRSIG on DNSKEY could not be validated by any DNSKEY for {zone} on {server}")]
    DnskeySignatureInvalid { zone: String, server: String },

    #[error("Validation failed. No DS records found for {zone} on {server}")]
    NoDsRecords { zone: String, server: String },

    #[error("Validation failed. DS digest mismatch for {zone} (keytag {key_tag})")]
    DigestMismatch { zone: String, key_tag: u16 },

    #[error("Validation failed. No DNSKEY in {zone} found that matches DS in {parent}")]
    NoMatchingDnskey { zone: String, parent: String },

    #[error("Unsupported DNSSEC algorithm: {0}")]
    UnsupportedAlgorithm(u8),

    #[error("Unsupported DS digest type: {0}")]
    UnsupportedDigestType(u8),

    #[error("Validation failed for {zone}: {source}")]
    ZoneQueryFailed {
        zone: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Scan aborted after {received} of {expected} responses")]
    ScanAborted { expected: usize, received: usize },
}

impl DomainError {
    /// Empty answer or NXDOMAIN: the name was queried and simply has nothing.
    pub fn is_no_data(&self) -> bool {
        match self {
            Self::NoData { .. } => true,
            Self::ProtocolError { rcode, .. } => rcode == "NXDOMAIN",
            Self::ZoneQueryFailed { source, .. } => source.is_no_data(),
            _ => false,
        }
    }

    pub fn is_transport(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused { .. } | Self::Transport { .. } => true,
            Self::ZoneQueryFailed { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Zone named by a DNSSEC validation failure, if any.
    pub fn zone(&self) -> Option<&str> {
        match self {
            Self::NoDnskey { zone, .. }
            | Self::KeyTagCollision { zone, .. }
            | Self::DnskeySignatureInvalid { zone, .. }
            | Self::NoDsRecords { zone, .. }
            | Self::DigestMismatch { zone, .. }
            | Self::NoMatchingDnskey { zone, .. }
            | Self::ZoneQueryFailed { zone, .. } => Some(zone),
            _ => None,
        }
    }

    pub fn in_zone(self, zone: &str) -> Self {
        if self.zone().is_some() {
            return self;
        }
        Self::ZoneQueryFailed {
            zone: zone.to_string(),
            source: Box::new(self),
        }
    }
}
