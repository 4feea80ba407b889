//! Helpers for presentation-format domain names.
//!
//! Names are handled as fully qualified strings (`example.com.`); the root is
//! `"."`.

use crate::DomainError;

pub const ROOT: &str = ".";

/// Appends the trailing dot if missing. Empty input is the root.
pub fn fqdn(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() || name == ROOT {
        return ROOT.to_string();
    }
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Strips the leftmost label. The parent of a TLD and of the root is the root.
pub fn parent_zone(name: &str) -> String {
    let name = fqdn(name);
    if name == ROOT {
        return name;
    }
    match name.find('.') {
        Some(idx) if idx + 1 < name.len() => name[idx + 1..].to_string(),
        _ => ROOT.to_string(),
    }
}

pub fn is_root(name: &str) -> bool {
    fqdn(name) == ROOT
}

/// Number of labels, not counting the root label (RFC 4034 §3.1.3).
pub fn label_count(name: &str) -> usize {
    let name = fqdn(name);
    if name == ROOT {
        return 0;
    }
    name.trim_end_matches('.').split('.').count()
}

/// Uncompressed, lowercased wire form (RFC 4034 §6.2 canonical form).
pub fn name_to_wire(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut wire = Vec::new();

    let name = name.trim_end_matches('.');

    if name.is_empty() {
        wire.push(0);
        return Ok(wire);
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "Empty DNS label in {}",
                name
            )));
        }

        if label.len() > 63 {
            return Err(DomainError::InvalidDomainName(format!(
                "DNS label too long in {}",
                name
            )));
        }

        wire.push(label.len() as u8);
        wire.extend_from_slice(label.to_ascii_lowercase().as_bytes());
    }

    wire.push(0);

    if wire.len() > 255 {
        return Err(DomainError::InvalidDomainName(format!(
            "Domain name too long: {}",
            name
        )));
    }

    Ok(wire)
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fqdn(a).eq_ignore_ascii_case(&fqdn(b))
}
