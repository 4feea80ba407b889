use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use zonewarden_domain::dns_record::filter_by_type;
use zonewarden_domain::{DomainError, RecordType, ResourceRecord};

/// Flags for a single outgoing question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// EDNS0 with DO=1 and CD=0; otherwise CD=1 without EDNS0.
    pub dnssec: bool,
}

impl QueryOptions {
    pub const fn secure() -> Self {
        Self { dnssec: true }
    }

    pub const fn insecure() -> Self {
        Self { dnssec: false }
    }
}

#[derive(Debug, Clone)]
pub struct DnsAnswer {
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub authoritative: bool,
    pub recursion_available: bool,
    pub server: IpAddr,
    pub rtt: Duration,
}

impl DnsAnswer {
    pub fn records_of(&self, record_type: RecordType) -> Vec<ResourceRecord> {
        filter_by_type(&self.answers, &[record_type])
    }
}

#[derive(Debug, Clone)]
pub struct RrsetAnswer {
    pub records: Vec<ResourceRecord>,
    pub rtt: Duration,
}

#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Sends one question to `server`. A non-zero rcode is an error.
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        options: QueryOptions,
    ) -> Result<DnsAnswer, DomainError>;

    /// Answer records of exactly `record_type`; an empty set is `NoData`.
    async fn query_rrset(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        options: QueryOptions,
    ) -> Result<RrsetAnswer, DomainError> {
        let answer = self.query(name, record_type, server, options).await?;
        let records = answer.records_of(record_type);
        if records.is_empty() {
            return Err(DomainError::NoData {
                name: name.to_string(),
                record_type: record_type.to_string(),
                server: server.to_string(),
            });
        }
        Ok(RrsetAnswer {
            records,
            rtt: answer.rtt,
        })
    }

    /// Full AXFR of `zone` from `server`.
    async fn zone_transfer(
        &self,
        zone: &str,
        server: IpAddr,
    ) -> Result<Vec<ResourceRecord>, DomainError>;
}
