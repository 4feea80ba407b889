use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonewarden_domain::dns_name::fqdn;
use zonewarden_domain::nameserver::all_addresses;
use zonewarden_domain::{DomainError, NameServerAddress, RecordType};

use crate::ports::{DnsClient, QueryOptions};

/// Authoritative nameserver discovery through a recursive resolver.
///
/// Results are cached per FQDN for the lifetime of the resolver.
pub struct NameserverResolver {
    client: Arc<dyn DnsClient>,
    resolver: IpAddr,
    cache: DashMap<String, Arc<[NameServerAddress]>>,
}

impl NameserverResolver {
    pub fn new(client: Arc<dyn DnsClient>, resolver: IpAddr) -> Self {
        Self {
            client,
            resolver,
            cache: DashMap::new(),
        }
    }

    pub fn resolver(&self) -> IpAddr {
        self.resolver
    }

    #[instrument(skip(self))]
    pub async fn find_ns(&self, domain: &str) -> Result<Arc<[NameServerAddress]>, DomainError> {
        let domain = fqdn(domain);

        if let Some(cached) = self.cache.get(&domain) {
            debug!(domain = %domain, "Nameserver cache hit");
            return Ok(Arc::clone(cached.value()));
        }

        let answer = self
            .client
            .query_rrset(&domain, RecordType::NS, self.resolver, QueryOptions::insecure())
            .await?;

        let mut nameservers = Vec::with_capacity(answer.records.len());
        for record in &answer.records {
            let Some(ns) = record.as_ns() else { continue };
            let mut addresses = self.lookup(ns, RecordType::A).await;
            addresses.extend(self.lookup(ns, RecordType::AAAA).await);
            nameservers.push(NameServerAddress::new(ns, addresses));
        }

        if nameservers.is_empty() {
            return Err(DomainError::NoNameservers { domain });
        }

        debug!(domain = %domain, count = nameservers.len(), "Resolved nameservers");

        let nameservers: Arc<[NameServerAddress]> = nameservers.into();
        // Another caller may have raced us; keep whichever landed first.
        let entry = self
            .cache
            .entry(domain)
            .or_insert_with(|| Arc::clone(&nameservers));
        Ok(Arc::clone(entry.value()))
    }

    pub async fn find_ns_ips(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let nameservers = self.find_ns(domain).await?;
        Ok(all_addresses(&nameservers))
    }

    pub fn cached_domains(&self) -> usize {
        self.cache.len()
    }

    async fn lookup(&self, host: &str, record_type: RecordType) -> Vec<IpAddr> {
        match self
            .client
            .query_rrset(host, record_type, self.resolver, QueryOptions::insecure())
            .await
        {
            Ok(answer) => answer
                .records
                .iter()
                .filter_map(|r| r.ip_addr())
                .collect(),
            Err(e) => {
                debug!(host = %host, record_type = %record_type, error = %e, "Address lookup failed");
                Vec::new()
            }
        }
    }
}
