use super::canonical::signed_data;
use ring::signature;
use sha1::Digest as Sha1Digest;
use sha2::{Sha256, Sha384};
use zonewarden_application::ports::DnssecVerifier;
use zonewarden_domain::dns_name::name_to_wire;
use zonewarden_domain::{DnskeyData, DomainError, ResourceRecord, RrsigData};

/// DNSSEC signature and DS digest checks backed by `ring`.
///
/// Supports RSA/SHA-1 (5, 7), RSA/SHA-256 (8), RSA/SHA-512 (10),
/// ECDSA P-256 (13), ECDSA P-384 (14) and Ed25519 (15).
#[derive(Debug, Default, Clone, Copy)]
pub struct RingDnssecVerifier;

impl RingDnssecVerifier {
    pub fn new() -> Self {
        Self
    }

    fn verify_rsa(
        &self,
        algorithm: &'static signature::RsaParameters,
        data: &[u8],
        sig: &[u8],
        dnskey: &DnskeyData,
    ) -> Result<bool, DomainError> {
        let (exponent, modulus) = parse_rsa_key(&dnskey.public_key)?;
        let public_key = signature::RsaPublicKeyComponents {
            n: modulus,
            e: exponent,
        };
        Ok(public_key.verify(algorithm, data, sig).is_ok())
    }

    fn verify_ecdsa(
        &self,
        algorithm: &'static signature::EcdsaVerificationAlgorithm,
        point_len: usize,
        data: &[u8],
        sig: &[u8],
        dnskey: &DnskeyData,
    ) -> Result<bool, DomainError> {
        if dnskey.public_key.len() != point_len {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Invalid ECDSA public key length {} for algorithm {}",
                dnskey.public_key.len(),
                dnskey.algorithm
            )));
        }

        if sig.len() != point_len {
            return Ok(false);
        }

        // DNSKEY carries the bare X||Y point; ring wants the SEC1 uncompressed form.
        let mut pk = Vec::with_capacity(point_len + 1);
        pk.push(0x04);
        pk.extend_from_slice(&dnskey.public_key);

        let public_key = signature::UnparsedPublicKey::new(algorithm, &pk);
        Ok(public_key.verify(data, sig).is_ok())
    }

    fn verify_ed25519(
        &self,
        data: &[u8],
        sig: &[u8],
        dnskey: &DnskeyData,
    ) -> Result<bool, DomainError> {
        if dnskey.public_key.len() != 32 {
            return Err(DomainError::InvalidDnsResponse(
                "Invalid Ed25519 public key length".into(),
            ));
        }

        if sig.len() != 64 {
            return Ok(false);
        }

        let public_key = signature::UnparsedPublicKey::new(&signature::ED25519, &dnskey.public_key);
        Ok(public_key.verify(data, sig).is_ok())
    }
}

impl DnssecVerifier for RingDnssecVerifier {
    fn verify_rrsig(
        &self,
        rrsig: &RrsigData,
        key: &DnskeyData,
        owner: &str,
        rrset: &[ResourceRecord],
    ) -> Result<bool, DomainError> {
        if key.key_tag() != rrsig.key_tag || key.algorithm != rrsig.algorithm {
            return Ok(false);
        }

        let data = signed_data(rrsig, owner, rrset)?;
        let sig = rrsig.signature.as_slice();

        match rrsig.algorithm {
            5 | 7 => self.verify_rsa(
                &signature::RSA_PKCS1_1024_8192_SHA1_FOR_LEGACY_USE_ONLY,
                &data,
                sig,
                key,
            ),
            8 => self.verify_rsa(
                &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY,
                &data,
                sig,
                key,
            ),
            10 => self.verify_rsa(
                &signature::RSA_PKCS1_1024_8192_SHA512_FOR_LEGACY_USE_ONLY,
                &data,
                sig,
                key,
            ),
            13 => self.verify_ecdsa(&signature::ECDSA_P256_SHA256_FIXED, 64, &data, sig, key),
            14 => self.verify_ecdsa(&signature::ECDSA_P384_SHA384_FIXED, 96, &data, sig, key),
            15 => self.verify_ed25519(&data, sig, key),
            other => Err(DomainError::UnsupportedAlgorithm(other)),
        }
    }

    fn ds_digest(
        &self,
        key: &DnskeyData,
        owner: &str,
        digest_type: u8,
    ) -> Result<Vec<u8>, DomainError> {
        let mut dnskey_data = name_to_wire(owner)?;
        dnskey_data.extend_from_slice(&key.rdata());

        let digest = match digest_type {
            1 => {
                let mut hasher = sha1::Sha1::new();
                hasher.update(&dnskey_data);
                hasher.finalize().to_vec()
            }
            2 => {
                let mut hasher = Sha256::new();
                hasher.update(&dnskey_data);
                hasher.finalize().to_vec()
            }
            4 => {
                let mut hasher = Sha384::new();
                hasher.update(&dnskey_data);
                hasher.finalize().to_vec()
            }
            other => return Err(DomainError::UnsupportedDigestType(other)),
        };

        Ok(digest)
    }
}

/// Splits an RFC 3110 public key into exponent and modulus.
fn parse_rsa_key(key_data: &[u8]) -> Result<(&[u8], &[u8]), DomainError> {
    if key_data.is_empty() {
        return Err(DomainError::InvalidDnsResponse(
            "Empty RSA public key".into(),
        ));
    }

    let (exp_len, exp_start) = if key_data[0] == 0 {
        if key_data.len() < 3 {
            return Err(DomainError::InvalidDnsResponse(
                "RSA key too short for long form".into(),
            ));
        }
        (u16::from_be_bytes([key_data[1], key_data[2]]) as usize, 3)
    } else {
        (key_data[0] as usize, 1)
    };

    let exp_end = exp_start + exp_len;
    if exp_end > key_data.len() {
        return Err(DomainError::InvalidDnsResponse(
            "RSA exponent extends beyond key data".into(),
        ));
    }

    let modulus = &key_data[exp_end..];
    if modulus.is_empty() {
        return Err(DomainError::InvalidDnsResponse(
            "RSA modulus is empty".into(),
        ));
    }

    Ok((&key_data[exp_start..exp_end], modulus))
}
