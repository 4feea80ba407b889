#![allow(dead_code)]
use zonewarden_domain::{DnskeyData, RecordData, RecordType, ResourceRecord, RrsigData};

pub struct DnskeyBuilder {
    flags: u16,
    algorithm: u8,
    public_key: Vec<u8>,
}

impl DnskeyBuilder {
    pub fn new() -> Self {
        Self {
            flags: 257,
            algorithm: 8,
            public_key: vec![0x03, 0x01, 0x00, 0x01, 0xAB, 0xCD, 0xEF, 0x42],
        }
    }

    pub fn zsk(mut self) -> Self {
        self.flags = 256;
        self
    }

    pub fn algorithm(mut self, algorithm: u8) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn public_key(mut self, public_key: &[u8]) -> Self {
        self.public_key = public_key.to_vec();
        self
    }

    pub fn build(self) -> DnskeyData {
        DnskeyData {
            flags: self.flags,
            protocol: 3,
            algorithm: self.algorithm,
            public_key: self.public_key,
        }
    }

    pub fn record(self, owner: &str) -> ResourceRecord {
        ResourceRecord::new(owner, 3600, RecordData::Dnskey(self.build()))
    }
}

pub fn rrsig(covered: RecordType, signer: &str, key_tag: u16) -> RrsigData {
    RrsigData {
        type_covered: covered,
        algorithm: 8,
        labels: 2,
        original_ttl: 3600,
        expiration: 1_700_003_600,
        inception: 1_699_996_400,
        key_tag,
        signer_name: signer.to_string(),
        signature: vec![1, 2, 3, 4],
    }
}
