use tracing::debug;
use zonewarden_domain::dns_record::filter_by_type;
use zonewarden_domain::{DnskeyData, RecordType, ResourceRecord, ValidityWindow};

use crate::ports::DnssecVerifier;

/// Result of checking the RRSIGs over one RRset against a key set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureCheck {
    /// Window of the first signature that verified, current or not.
    pub window: Option<ValidityWindow>,
    /// A signature verified and `now` falls inside its window.
    pub valid: bool,
}

/// Tries every RRSIG covering `covered` in `answers` with every key until one
/// verifies with a window containing `now`.
pub fn check_rrset_signature<'a>(
    verifier: &dyn DnssecVerifier,
    keys: impl IntoIterator<Item = &'a DnskeyData>,
    owner: &str,
    covered: RecordType,
    answers: &[ResourceRecord],
    now: i64,
) -> SignatureCheck {
    let rrset = filter_by_type(answers, &[covered]);
    let signatures: Vec<_> = answers
        .iter()
        .filter_map(ResourceRecord::as_rrsig)
        .filter(|sig| sig.type_covered == covered)
        .collect();

    let mut outcome = SignatureCheck::default();
    if rrset.is_empty() || signatures.is_empty() {
        return outcome;
    }

    let keys: Vec<&DnskeyData> = keys.into_iter().collect();
    for sig in &signatures {
        for key in &keys {
            debug!(
                owner = %owner,
                key_tag = key.key_tag(),
                flags = key.flags,
                sig_key_tag = sig.key_tag,
                "Trying RRSIG with DNSKEY"
            );
            match verifier.verify_rrsig(sig, key, owner, &rrset) {
                Ok(true) => {
                    let window = ValidityWindow::from_rrsig(sig.inception, sig.expiration, now);
                    if window.contains(now) {
                        debug!(owner = %owner, window = %window, "RRSIG validated");
                        return SignatureCheck {
                            window: Some(window),
                            valid: true,
                        };
                    }
                    debug!(owner = %owner, window = %window, "RRSIG outside validity window");
                    outcome.window.get_or_insert(window);
                }
                Ok(false) => {}
                Err(e) => debug!(owner = %owner, error = %e, "RRSIG verification error"),
            }
        }
    }

    outcome
}
