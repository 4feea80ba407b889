//! Signed data construction (RFC 4034 §3.1.8.1, §6).

use zonewarden_domain::dns_name::{label_count, name_to_wire};
use zonewarden_domain::{DomainError, ResourceRecord, RrsigData};

/// Builds `RRSIG_RDATA | RR(1) | RR(2) ...` with every RR in canonical form
/// and the RRset in canonical order.
///
/// Owner names longer than the RRSIG label count were synthesized from a
/// wildcard and are signed as `*.<closest encloser>`.
pub fn signed_data(
    rrsig: &RrsigData,
    owner: &str,
    rrset: &[ResourceRecord],
) -> Result<Vec<u8>, DomainError> {
    let owner_wire = name_to_wire(&signing_owner(owner, rrsig.labels))?;

    let mut rdatas = rrset
        .iter()
        .filter(|rr| rr.record_type() == rrsig.type_covered)
        .map(|rr| rr.data.canonical_rdata())
        .collect::<Result<Vec<_>, _>>()?;
    rdatas.sort();
    rdatas.dedup();

    let mut data = rrsig.signed_prefix()?;
    let type_bytes = rrsig.type_covered.to_u16().to_be_bytes();

    for rdata in rdatas {
        let rdlength = u16::try_from(rdata.len()).map_err(|_| {
            DomainError::InvalidDnsResponse("RDATA longer than 65535 bytes".into())
        })?;
        data.extend_from_slice(&owner_wire);
        data.extend_from_slice(&type_bytes);
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&rrsig.original_ttl.to_be_bytes());
        data.extend_from_slice(&rdlength.to_be_bytes());
        data.extend_from_slice(&rdata);
    }

    Ok(data)
}

fn signing_owner(owner: &str, rrsig_labels: u8) -> String {
    let labels = rrsig_labels as usize;
    if label_count(owner) <= labels {
        return owner.to_string();
    }

    let trimmed = owner.trim_end_matches('.');
    let parts: Vec<&str> = trimmed.split('.').collect();
    let suffix = parts[parts.len() - labels..].join(".");
    if suffix.is_empty() {
        "*.".to_string()
    } else {
        format!("*.{}.", suffix)
    }
}
