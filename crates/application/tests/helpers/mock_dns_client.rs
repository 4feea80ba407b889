use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::time::Instant;
use zonewarden_application::ports::{DnsAnswer, DnsClient, QueryOptions};
use zonewarden_domain::dns_name::fqdn;
use zonewarden_domain::{DomainError, RecordType, ResourceRecord};

type QueryKey = (String, RecordType, IpAddr);

pub fn answer(server: IpAddr, records: Vec<ResourceRecord>) -> DnsAnswer {
    DnsAnswer {
        answers: records,
        authority: vec![],
        authoritative: true,
        recursion_available: false,
        server,
        rtt: Duration::from_millis(5),
    }
}

/// Scripted DNS client. Unscripted questions get an empty authoritative
/// answer; unscripted transfers are refused.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    responses: Arc<RwLock<HashMap<QueryKey, Result<DnsAnswer, DomainError>>>>,
    transfers: Arc<RwLock<HashMap<IpAddr, Vec<ResourceRecord>>>>,
    calls: Arc<RwLock<Vec<(QueryKey, QueryOptions)>>>,
    call_times: Arc<RwLock<Vec<(QueryKey, Instant)>>>,
    transfer_calls: Arc<AtomicUsize>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str, record_type: RecordType, server: IpAddr) -> QueryKey {
        (fqdn(name).to_ascii_lowercase(), record_type, server)
    }

    pub fn set_records(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        records: Vec<ResourceRecord>,
    ) {
        self.set_answer(name, record_type, server, answer(server, records));
    }

    pub fn set_answer(&self, name: &str, record_type: RecordType, server: IpAddr, dns: DnsAnswer) {
        self.responses
            .write()
            .unwrap()
            .insert(Self::key(name, record_type, server), Ok(dns));
    }

    pub fn set_error(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        error: DomainError,
    ) {
        self.responses
            .write()
            .unwrap()
            .insert(Self::key(name, record_type, server), Err(error));
    }

    pub fn allow_transfer(&self, server: IpAddr, records: Vec<ResourceRecord>) {
        self.transfers.write().unwrap().insert(server, records);
    }

    pub fn query_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn queries_to(&self, server: IpAddr) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|((_, _, s), _)| *s == server)
            .count()
    }

    pub fn queries_of(&self, record_type: RecordType) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|((_, t, _), _)| *t == record_type)
            .count()
    }

    pub fn options_for(&self, name: &str, record_type: RecordType) -> Vec<QueryOptions> {
        let name = fqdn(name).to_ascii_lowercase();
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|((n, t, _), _)| *n == name && *t == record_type)
            .map(|(_, o)| *o)
            .collect()
    }

    /// When each scan tick reached `server`: every question except the AAAA
    /// follow-up of an A lookup and the wildcard check.
    pub fn tick_times(&self, server: IpAddr) -> Vec<Instant> {
        self.call_times
            .read()
            .unwrap()
            .iter()
            .filter(|((n, t, s), _)| *s == server && *t != RecordType::AAAA && !n.starts_with("*."))
            .map(|(_, at)| *at)
            .collect()
    }

    pub fn transfer_count(&self) -> usize {
        self.transfer_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        options: QueryOptions,
    ) -> Result<DnsAnswer, DomainError> {
        let key = Self::key(name, record_type, server);
        self.calls.write().unwrap().push((key.clone(), options));
        self.call_times
            .write()
            .unwrap()
            .push((key.clone(), Instant::now()));

        self.responses
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(answer(server, vec![])))
    }

    async fn zone_transfer(
        &self,
        zone: &str,
        server: IpAddr,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.transfer_calls.fetch_add(1, Ordering::SeqCst);
        self.transfers
            .read()
            .unwrap()
            .get(&server)
            .cloned()
            .ok_or_else(|| DomainError::ProtocolError {
                rcode: "REFUSED".into(),
                name: zone.to_string(),
                record_type: "AXFR".into(),
                server: server.to_string(),
            })
    }
}
