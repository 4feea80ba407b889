use crate::dns_name::fqdn;
use crate::dns_record::{RecordType, ResourceRecord};
use crate::serde_util::duration_ms;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;
use std::time::Duration;

/// One planned probe: `<prefix>.<domain>` (or the apex when `prefix` is empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanRequest {
    pub record_type: RecordType,
    pub prefix: String,
    pub domain: String,
}

impl ScanRequest {
    pub fn new(record_type: RecordType, prefix: impl Into<String>, domain: &str) -> Self {
        Self {
            record_type,
            prefix: prefix.into(),
            domain: fqdn(domain),
        }
    }

    pub fn qname(&self) -> String {
        if self.prefix.is_empty() {
            self.domain.clone()
        } else {
            format!("{}.{}", self.prefix, self.domain)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ProbeStatus {
    Answered,
    NoData,
    Failed(String),
}

impl ProbeStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub request: ScanRequest,
    pub records: Vec<ResourceRecord>,
    pub server: IpAddr,
    #[serde(rename = "rtt_ms", with = "duration_ms")]
    pub rtt: Duration,
    pub status: ProbeStatus,
}

impl ScanResponse {
    pub fn failed(request: ScanRequest, server: IpAddr, reason: impl Into<String>) -> Self {
        Self {
            request,
            records: Vec::new(),
            server,
            rtt: Duration::ZERO,
            status: ProbeStatus::Failed(reason.into()),
        }
    }
}

/// Addresses returned for the synthetic `*.<domain>` name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildcardIpSet {
    addresses: HashSet<String>,
}

impl WildcardIpSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[ResourceRecord]) -> Self {
        let addresses = records
            .iter()
            .filter_map(ResourceRecord::ip_addr)
            .map(|ip| ip.to_string())
            .collect();
        Self { addresses }
    }

    pub fn insert(&mut self, ip: IpAddr) {
        self.addresses.insert(ip.to_string());
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.addresses.contains(&ip.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Drops A/AAAA records pointing at a wildcard address; other records pass.
    pub fn filter(&self, records: Vec<ResourceRecord>) -> Vec<ResourceRecord> {
        if self.addresses.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|r| r.ip_addr().map_or(true, |ip| !self.contains(&ip)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanMethod {
    ZoneTransfer { server: IpAddr },
    BruteForce,
}

const MIN_WORKER_INTERVAL: Duration = Duration::from_nanos(1);

/// Pacing of a brute-force sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPlan {
    pub entries: usize,
    pub workers: usize,
    pub qps: u32,
}

impl ScanPlan {
    pub fn new(entries: usize, workers: usize, qps: u32) -> Self {
        Self {
            entries,
            workers,
            qps,
        }
    }

    /// The budget is per server, so more servers mean more total throughput.
    pub fn aggregate_qps(&self) -> f64 {
        f64::from(self.qps.max(1)) * self.workers.max(1) as f64
    }

    /// Never zero: a budget beyond nanosecond resolution ticks every 1ns.
    pub fn worker_interval(&self) -> Duration {
        Duration::from_secs_f64(self.workers.max(1) as f64 / self.aggregate_qps())
            .max(MIN_WORKER_INTERVAL)
    }

    pub fn estimated_duration(&self) -> Duration {
        Duration::from_secs_f64(self.entries as f64 / self.aggregate_qps())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub domain: String,
    pub method: ScanMethod,
    pub responses: Vec<ScanResponse>,
    pub wildcard_records: Vec<ResourceRecord>,
    pub probes_sent: usize,
    pub probes_received: usize,
    pub probes_failed: usize,
    #[serde(rename = "elapsed_ms", with = "duration_ms")]
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.responses.iter().flat_map(|r| r.records.iter())
    }

    /// Presentation lines of every record found, sorted and deduplicated.
    pub fn sorted_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.records().map(|r| r.to_string()).collect();
        lines.sort();
        lines.dedup();
        lines
    }
}
