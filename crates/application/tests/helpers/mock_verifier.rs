use zonewarden_application::ports::DnssecVerifier;
use zonewarden_domain::dns_name::name_to_wire;
use zonewarden_domain::{DnskeyData, DomainError, ResourceRecord, RrsigData};

/// A signature "verifies" when its bytes equal the key's public key.
pub struct MockVerifier;

pub fn fake_digest(key: &DnskeyData, owner: &str, digest_type: u8) -> Vec<u8> {
    let mut digest = vec![digest_type];
    digest.extend_from_slice(&name_to_wire(owner).unwrap());
    digest.extend_from_slice(&key.rdata());
    digest
}

impl DnssecVerifier for MockVerifier {
    fn verify_rrsig(
        &self,
        rrsig: &RrsigData,
        key: &DnskeyData,
        _owner: &str,
        rrset: &[ResourceRecord],
    ) -> Result<bool, DomainError> {
        if rrset.is_empty() {
            return Ok(false);
        }
        Ok(rrsig.key_tag == key.key_tag() && rrsig.signature == key.public_key)
    }

    fn ds_digest(
        &self,
        key: &DnskeyData,
        owner: &str,
        digest_type: u8,
    ) -> Result<Vec<u8>, DomainError> {
        match digest_type {
            1 | 2 | 4 => Ok(fake_digest(key, owner, digest_type)),
            other => Err(DomainError::UnsupportedDigestType(other)),
        }
    }
}
