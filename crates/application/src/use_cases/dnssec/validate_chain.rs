use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use zonewarden_domain::dns_name::{fqdn, is_root, parent_zone};
use zonewarden_domain::validity::unix_now;
use zonewarden_domain::{DomainError, KeyTagMap, RecordType, ValidityWindow};

use super::signature::check_rrset_signature;
use crate::ports::{DnsClient, DnssecVerifier, QueryOptions};
use crate::services::NameserverResolver;

/// Outcome of one successfully validated zone.
#[derive(Debug, Clone)]
pub struct ZoneValidation {
    pub zone: String,
    pub key_count: usize,
    pub window: Option<ValidityWindow>,
    pub matched_key_tags: Vec<u16>,
}

/// Walks the delegation chain from a domain up to the root.
pub struct ValidateChainUseCase {
    client: Arc<dyn DnsClient>,
    resolver: Arc<NameserverResolver>,
    verifier: Arc<dyn DnssecVerifier>,
    clock: fn() -> i64,
}

impl ValidateChainUseCase {
    pub fn new(
        client: Arc<dyn DnsClient>,
        resolver: Arc<NameserverResolver>,
        verifier: Arc<dyn DnssecVerifier>,
    ) -> Self {
        Self {
            client,
            resolver,
            verifier,
            clock: unix_now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// `Ok(true)` only when every zone below the root validates.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<bool, DomainError> {
        let mut zone = fqdn(domain);

        while !is_root(&zone) {
            debug!(zone = %zone, "Validating zone");
            let validation = self.validate_zone(&zone).await?;
            debug!(
                zone = %zone,
                keys = validation.key_count,
                ds = ?validation.matched_key_tags,
                "Zone validated"
            );
            zone = parent_zone(&zone);
        }

        info!(domain = %domain, "DNSSEC chain validated");
        Ok(true)
    }

    pub async fn validate_zone(&self, zone: &str) -> Result<ZoneValidation, DomainError> {
        let zone = fqdn(zone);
        let now = (self.clock)();

        let servers = self
            .resolver
            .find_ns_ips(&zone)
            .await
            .map_err(|e| e.in_zone(&zone))?;

        let (keys, window) = self.collect_keys(&zone, &servers, now).await?;
        debug!(zone = %zone, count = keys.len(), "Found valid DNSKEYs");

        let matched_key_tags = self.match_parent_ds(&zone, &keys).await?;

        Ok(ZoneValidation {
            zone,
            key_count: keys.len(),
            window,
            matched_key_tags,
        })
    }

    async fn collect_keys(
        &self,
        zone: &str,
        servers: &[IpAddr],
        now: i64,
    ) -> Result<(KeyTagMap, Option<ValidityWindow>), DomainError> {
        let mut keys = KeyTagMap::new();
        let mut window = None;

        for &server in servers {
            debug!(zone = %zone, server = %server, "Asking for DNSKEY");
            let answer = self
                .client
                .query(zone, RecordType::DNSKEY, server, QueryOptions::secure())
                .await
                .map_err(|e| e.in_zone(zone))?;

            let mut found = false;
            for record in &answer.answers {
                if let Some(key) = record.as_dnskey() {
                    found = true;
                    keys.insert(zone, key.clone())?;
                }
            }
            if !found {
                return Err(DomainError::NoDnskey {
                    zone: zone.to_string(),
                    server: server.to_string(),
                });
            }

            let signed_keys: Vec<_> = answer
                .answers
                .iter()
                .filter_map(|r| r.as_dnskey())
                .collect();
            let check = check_rrset_signature(
                self.verifier.as_ref(),
                signed_keys,
                zone,
                RecordType::DNSKEY,
                &answer.answers,
                now,
            );
            if !check.valid {
                return Err(DomainError::DnskeySignatureInvalid {
                    zone: zone.to_string(),
                    server: server.to_string(),
                });
            }
            window = check.window;
        }

        Ok((keys, window))
    }

    async fn match_parent_ds(&self, zone: &str, keys: &KeyTagMap) -> Result<Vec<u16>, DomainError> {
        let parent = parent_zone(zone);
        debug!(zone = %zone, parent = %parent, "Finding NS of parent");

        let parent_servers = self
            .resolver
            .find_ns_ips(&parent)
            .await
            .map_err(|e| e.in_zone(zone))?;

        let mut matched = Vec::new();

        for server in parent_servers {
            debug!(zone = %zone, server = %server, "Asking parent for DS");
            let answer = match self
                .client
                .query(zone, RecordType::DS, server, QueryOptions::secure())
                .await
            {
                Ok(answer) => answer,
                Err(e) if e.is_no_data() => {
                    return Err(DomainError::NoDsRecords {
                        zone: zone.to_string(),
                        server: server.to_string(),
                    })
                }
                Err(e) => return Err(e.in_zone(zone)),
            };

            let ds_records: Vec<_> = answer.answers.iter().filter_map(|r| r.as_ds()).collect();
            if ds_records.is_empty() {
                return Err(DomainError::NoDsRecords {
                    zone: zone.to_string(),
                    server: server.to_string(),
                });
            }

            for ds in ds_records {
                let Some(key) = keys.get(ds.key_tag) else {
                    debug!(zone = %zone, key_tag = ds.key_tag, server = %server, "No DNSKEY matches DS key tag");
                    continue;
                };

                let digest = match self.verifier.ds_digest(key, zone, ds.digest_type) {
                    Ok(digest) => digest,
                    Err(DomainError::UnsupportedDigestType(digest_type)) => {
                        warn!(
                            zone = %zone,
                            key_tag = ds.key_tag,
                            digest_type,
                            "Skipping DS with unsupported digest type"
                        );
                        continue;
                    }
                    Err(e) => return Err(e.in_zone(zone)),
                };

                if digest != ds.digest {
                    debug!(zone = %zone, key_tag = ds.key_tag, "DS digest mismatch");
                    return Err(DomainError::DigestMismatch {
                        zone: zone.to_string(),
                        key_tag: ds.key_tag,
                    });
                }

                debug!(zone = %zone, key_tag = ds.key_tag, digest_type = ds.digest_type, "DS digest matches");
                if !matched.contains(&ds.key_tag) {
                    matched.push(ds.key_tag);
                }
            }
        }

        if matched.is_empty() {
            return Err(DomainError::NoMatchingDnskey {
                zone: zone.to_string(),
                parent,
            });
        }

        Ok(matched)
    }
}
