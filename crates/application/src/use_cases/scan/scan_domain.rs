use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};
use zonewarden_domain::config::ScanConfig;
use zonewarden_domain::dns_name::fqdn;
use zonewarden_domain::dns_record::filter_by_type;
use zonewarden_domain::{
    DomainError, ProbeStatus, RecordType, ResourceRecord, ScanMethod, ScanPlan, ScanReport,
    ScanRequest, ScanResponse, WildcardIpSet,
};

use super::dictionary::build_requests;
use crate::ports::{DnsClient, QueryOptions};
use crate::services::NameserverResolver;

/// Enumerates records of a domain across all of its authoritative servers.
pub struct ScanDomainUseCase {
    client: Arc<dyn DnsClient>,
    resolver: Arc<NameserverResolver>,
    config: ScanConfig,
}

struct SweepResult {
    responses: Vec<ScanResponse>,
    received: usize,
    failed: usize,
}

impl ScanDomainUseCase {
    pub fn new(
        client: Arc<dyn DnsClient>,
        resolver: Arc<NameserverResolver>,
        config: ScanConfig,
    ) -> Self {
        Self {
            client,
            resolver,
            config,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<ScanReport, DomainError> {
        let started = Instant::now();
        let domain = fqdn(domain);

        let servers = self.resolver.find_ns_ips(&domain).await?;
        if servers.is_empty() {
            return Err(DomainError::NoNameservers { domain });
        }

        if let Some(report) = self.try_zone_transfer(&domain, &servers, started).await {
            return Ok(report);
        }
        info!(domain = %domain, servers = servers.len(), "AXFR denied");

        let wildcard_records = self.detect_wildcard(&domain, servers[0]).await;
        let wildcard = WildcardIpSet::from_records(&wildcard_records);
        if !wildcard.is_empty() {
            info!(domain = %domain, addresses = wildcard.len(), "Wildcard record detected");
        }

        let requests = build_requests(&domain);
        let probes_sent = requests.len();
        let sweep = self.sweep(requests, &servers, &wildcard).await?;

        Ok(ScanReport {
            domain,
            method: ScanMethod::BruteForce,
            responses: sweep.responses,
            wildcard_records,
            probes_sent,
            probes_received: sweep.received,
            probes_failed: sweep.failed,
            elapsed: started.elapsed(),
        })
    }

    async fn try_zone_transfer(
        &self,
        domain: &str,
        servers: &[IpAddr],
        started: Instant,
    ) -> Option<ScanReport> {
        for &server in servers {
            let attempt = Instant::now();
            match self.client.zone_transfer(domain, server).await {
                Ok(records) if !records.is_empty() => {
                    info!(domain = %domain, server = %server, records = records.len(), "AXFR allowed");
                    let response = ScanResponse {
                        request: ScanRequest::new(RecordType::AXFR, "", domain),
                        records,
                        server,
                        rtt: attempt.elapsed(),
                        status: ProbeStatus::Answered,
                    };
                    return Some(ScanReport {
                        domain: domain.to_string(),
                        method: ScanMethod::ZoneTransfer { server },
                        responses: vec![response],
                        wildcard_records: Vec::new(),
                        probes_sent: 0,
                        probes_received: 0,
                        probes_failed: 0,
                        elapsed: started.elapsed(),
                    });
                }
                Ok(_) => debug!(domain = %domain, server = %server, "AXFR returned no records"),
                Err(e) => debug!(domain = %domain, server = %server, error = %e, "AXFR denied"),
            }
        }
        None
    }

    async fn detect_wildcard(&self, domain: &str, server: IpAddr) -> Vec<ResourceRecord> {
        let name = format!("*.{}", domain);
        match self
            .client
            .query_rrset(&name, RecordType::A, server, QueryOptions::secure())
            .await
        {
            Ok(answer) => answer.records,
            Err(e) => {
                debug!(name = %name, error = %e, "No wildcard record");
                Vec::new()
            }
        }
    }

    async fn sweep(
        &self,
        requests: Vec<ScanRequest>,
        servers: &[IpAddr],
        wildcard: &WildcardIpSet,
    ) -> Result<SweepResult, DomainError> {
        let expected = requests.len();
        let plan = ScanPlan::new(expected, servers.len(), self.config.qps);
        info!(
            probes = expected,
            workers = servers.len(),
            aggregate_qps = plan.aggregate_qps(),
            estimate_secs = plan.estimated_duration().as_secs_f64(),
            "Starting brute-force scan"
        );

        let (result_tx, mut result_rx) = mpsc::channel(self.config.result_buffer.max(1));

        let mut queues = Vec::with_capacity(servers.len());
        for &server in servers {
            let (tx, rx) = mpsc::channel(expected.max(1));
            tokio::spawn(run_worker(
                Arc::clone(&self.client),
                server,
                plan.worker_interval(),
                rx,
                result_tx.clone(),
            ));
            queues.push(tx);
        }
        drop(result_tx);

        for (i, request) in requests.into_iter().enumerate() {
            if queues[i % queues.len()].send(request).await.is_err() {
                warn!(worker = i % queues.len(), "Scan worker exited early");
            }
        }
        drop(queues);

        let mut responses = Vec::new();
        let mut received = 0;
        let mut failed = 0;

        while received < expected {
            let Some(mut response) = result_rx.recv().await else {
                return Err(DomainError::ScanAborted { expected, received });
            };
            received += 1;
            if response.status.is_failed() {
                failed += 1;
            }
            response.records = wildcard.filter(response.records);
            if !response.records.is_empty() {
                responses.push(response);
            }
        }

        debug!(received, failed, found = responses.len(), "Scan collected");
        Ok(SweepResult {
            responses,
            received,
            failed,
        })
    }
}

async fn run_worker(
    client: Arc<dyn DnsClient>,
    server: IpAddr,
    interval: Duration,
    mut requests: mpsc::Receiver<ScanRequest>,
    results: mpsc::Sender<ScanResponse>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while let Some(request) = requests.recv().await {
        ticker.tick().await;
        let response = probe(client.as_ref(), server, request).await;
        if results.send(response).await.is_err() {
            break;
        }
    }
}

/// Exactly one response per request; failures become `ProbeStatus::Failed`.
async fn probe(client: &dyn DnsClient, server: IpAddr, request: ScanRequest) -> ScanResponse {
    let qname = request.qname();
    let mut records = Vec::new();
    let mut rtt = Duration::ZERO;
    let mut failure: Option<String> = None;

    if request.record_type == RecordType::A {
        match client
            .query(&qname, RecordType::A, server, QueryOptions::secure())
            .await
        {
            Ok(answer) => {
                records.extend(filter_by_type(
                    &answer.answers,
                    &[RecordType::A, RecordType::CNAME],
                ));
                rtt = answer.rtt;
            }
            Err(e) if e.is_no_data() => {}
            Err(e) => failure = Some(e.to_string()),
        }

        match client
            .query_rrset(&qname, RecordType::AAAA, server, QueryOptions::secure())
            .await
        {
            Ok(answer) => {
                records.extend(answer.records);
                rtt = rtt.max(answer.rtt);
            }
            Err(e) if e.is_no_data() => {}
            Err(e) => {
                failure.get_or_insert_with(|| e.to_string());
            }
        }
    } else {
        match client
            .query_rrset(&qname, request.record_type, server, QueryOptions::secure())
            .await
        {
            Ok(answer) => {
                records = answer.records;
                rtt = answer.rtt;
            }
            Err(e) if e.is_no_data() => {}
            Err(e) => failure = Some(e.to_string()),
        }
    }

    let status = match (records.is_empty(), failure) {
        (false, _) => ProbeStatus::Answered,
        (true, Some(reason)) => ProbeStatus::Failed(reason),
        (true, None) => ProbeStatus::NoData,
    };

    ScanResponse {
        request,
        records,
        server,
        rtt,
        status,
    }
}
