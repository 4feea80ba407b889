use crate::di::{DnsServices, UseCases};
use serde::Serialize;
use std::net::IpAddr;
use tracing::{info, warn};
use zonewarden_application::use_cases::scan::DICTIONARY_SIZE;
use zonewarden_domain::dns_name::fqdn;
use zonewarden_domain::nameserver::all_addresses;
use zonewarden_domain::{
    Config, DomainError, NameServerAddress, NameserverStatus, ScanPlan, ScanReport,
};

/// Result of the DNSSEC chain walk as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ChainVerdict {
    pub valid: bool,
    pub failed_zone: Option<String>,
    pub error: Option<String>,
}

impl ChainVerdict {
    pub fn from_result(result: &Result<bool, DomainError>) -> Self {
        match result {
            Ok(valid) => Self {
                valid: *valid,
                failed_zone: None,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                failed_zone: e.zone().map(str::to_string),
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    pub domain: String,
    pub resolver: IpAddr,
    pub nameservers: Vec<NameServerAddress>,
    pub nameserver_status: Vec<NameserverStatus>,
    pub dnssec: ChainVerdict,
    pub scan_estimate_ms: Option<u64>,
    pub scan: Option<ScanReport>,
}

/// Runs every diagnostic against `domain`. Only a failed nameserver lookup
/// or an aborted scan stops the run; DNSSEC failures end up in the report.
pub async fn diagnose(
    domain: &str,
    services: &DnsServices,
    use_cases: &UseCases,
    scan: bool,
    config: &Config,
) -> anyhow::Result<DomainReport> {
    let domain = fqdn(domain);

    let nameservers = services.resolver.find_ns(&domain).await?;
    info!(domain = %domain, nameservers = nameservers.len(), "Nameservers found");

    let nameserver_status = use_cases.inspect_nameservers.execute(&domain).await?;

    let chain = use_cases.validate_chain.execute(&domain).await;
    if let Err(e) = &chain {
        warn!(domain = %domain, error = %e, "DNSSEC chain did not validate");
    }
    let dnssec = ChainVerdict::from_result(&chain);

    let (scan_estimate_ms, scan) = if scan {
        let plan = ScanPlan::new(
            DICTIONARY_SIZE,
            all_addresses(&nameservers).len(),
            config.scan.qps,
        );
        let estimate = plan.estimated_duration();
        info!(
            domain = %domain,
            probes = plan.entries,
            workers = plan.workers,
            estimate_secs = estimate.as_secs_f64(),
            "Starting scan"
        );
        let report = use_cases.scan_domain.execute(&domain).await?;
        (Some(estimate.as_millis() as u64), Some(report))
    } else {
        (None, None)
    };

    Ok(DomainReport {
        domain,
        resolver: services.resolver.resolver(),
        nameservers: nameservers.to_vec(),
        nameserver_status,
        dnssec,
        scan_estimate_ms,
        scan,
    })
}
