use futures::future::join_all;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonewarden_domain::dns_name::fqdn;
use zonewarden_domain::validity::unix_now;
use zonewarden_domain::{
    DnskeyData, DnssecStatus, DomainError, NameServerAddress, NameserverStatus, RecordType,
};

use crate::ports::{DnsClient, DnssecVerifier, QueryOptions};
use crate::services::NameserverResolver;
use crate::use_cases::dnssec::check_rrset_signature;

/// Per-address SOA serial, AA/RA flags and NS signature state.
pub struct InspectNameserversUseCase {
    client: Arc<dyn DnsClient>,
    resolver: Arc<NameserverResolver>,
    verifier: Arc<dyn DnssecVerifier>,
    clock: fn() -> i64,
}

impl InspectNameserversUseCase {
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

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<Vec<NameserverStatus>, DomainError> {
        let domain = fqdn(domain);
        let nameservers = self.resolver.find_ns(&domain).await?;

        let per_ns = join_all(
            nameservers
                .iter()
                .map(|ns| self.inspect_nameserver(&domain, ns)),
        )
        .await;

        Ok(per_ns.into_iter().flatten().collect())
    }

    async fn inspect_nameserver(
        &self,
        domain: &str,
        nameserver: &NameServerAddress,
    ) -> Vec<NameserverStatus> {
        let mut statuses = Vec::with_capacity(nameserver.addresses.len());
        for &address in &nameserver.addresses {
            statuses.push(self.inspect_address(domain, &nameserver.name, address).await);
        }
        statuses
    }

    async fn inspect_address(&self, domain: &str, name: &str, address: IpAddr) -> NameserverStatus {
        let soa = match self
            .client
            .query(domain, RecordType::SOA, address, QueryOptions::insecure())
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                debug!(nameserver = %name, address = %address, error = %e, "SOA query failed");
                return NameserverStatus::unreachable(name, address, e.to_string());
            }
        };

        let serial = soa
            .answers
            .iter()
            .find_map(|r| r.as_soa())
            .map(|s| s.serial);

        let keys: Vec<DnskeyData> = match self
            .client
            .query_rrset(domain, RecordType::DNSKEY, address, QueryOptions::secure())
            .await
        {
            Ok(answer) => answer
                .records
                .iter()
                .filter_map(|r| r.as_dnskey().cloned())
                .collect(),
            Err(e) => {
                debug!(nameserver = %name, address = %address, error = %e, "No DNSKEY");
                Vec::new()
            }
        };

        let dnssec = match self
            .client
            .query(domain, RecordType::NS, address, QueryOptions::secure())
            .await
        {
            Ok(answer) => {
                let check = check_rrset_signature(
                    self.verifier.as_ref(),
                    &keys,
                    domain,
                    RecordType::NS,
                    &answer.answers,
                    (self.clock)(),
                );
                DnssecStatus {
                    signed: !keys.is_empty() || check.window.is_some(),
                    valid: check.valid,
                    window: check.window,
                }
            }
            Err(e) => {
                debug!(nameserver = %name, address = %address, error = %e, "NS query failed");
                DnssecStatus {
                    signed: !keys.is_empty(),
                    ..DnssecStatus::default()
                }
            }
        };

        NameserverStatus {
            name: name.to_string(),
            address,
            rtt: Some(soa.rtt),
            serial,
            authoritative: soa.authoritative,
            recursion_available: soa.recursion_available,
            dnssec,
            error: None,
        }
    }
}
