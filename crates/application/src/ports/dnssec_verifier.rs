use zonewarden_domain::{DnskeyData, DomainError, ResourceRecord, RrsigData};

pub trait DnssecVerifier: Send + Sync {
    /// Checks `rrsig` over `rrset` (owned by `owner`) with `key`.
    ///
    /// `Ok(false)` means the signature does not verify with this key.
    fn verify_rrsig(
        &self,
        rrsig: &RrsigData,
        key: &DnskeyData,
        owner: &str,
        rrset: &[ResourceRecord],
    ) -> Result<bool, DomainError>;

    /// DS digest of `key` owned by `owner`; `UnsupportedDigestType` when the
    /// digest algorithm is not implemented.
    fn ds_digest(
        &self,
        key: &DnskeyData,
        owner: &str,
        digest_type: u8,
    ) -> Result<Vec<u8>, DomainError>;
}
