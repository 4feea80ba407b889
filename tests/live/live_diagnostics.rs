use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use zonewarden_application::ports::{DnsClient, DnssecVerifier, QueryOptions};
use zonewarden_application::services::NameserverResolver;
use zonewarden_application::use_cases::{InspectNameserversUseCase, ValidateChainUseCase};
use zonewarden_domain::RecordType;
use zonewarden_infrastructure::{NetworkDnsClient, RingDnssecVerifier};

const PUBLIC_RESOLVER: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

struct Live {
    client: Arc<dyn DnsClient>,
    verifier: Arc<dyn DnssecVerifier>,
    resolver: Arc<NameserverResolver>,
}

fn live() -> Live {
    let client: Arc<dyn DnsClient> = Arc::new(NetworkDnsClient::new(53, Duration::from_secs(5)));
    Live {
        resolver: Arc::new(NameserverResolver::new(client.clone(), PUBLIC_RESOLVER)),
        verifier: Arc::new(RingDnssecVerifier::new()),
        client,
    }
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_root_dnskey_is_signed() {
    let live = live();
    let root_servers = live.resolver.find_ns_ips(".").await.unwrap();
    assert!(!root_servers.is_empty());

    let answer = live
        .client
        .query(".", RecordType::DNSKEY, root_servers[0], QueryOptions::secure())
        .await
        .unwrap();

    assert!(!answer.records_of(RecordType::DNSKEY).is_empty());
    assert!(!answer.records_of(RecordType::RRSIG).is_empty());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_signed_domain_chain_validates() {
    let live = live();
    let use_case = ValidateChainUseCase::new(live.client, live.resolver, live.verifier);

    assert!(use_case.execute("ietf.org").await.unwrap());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_nameserver_inspection_reports_serials() {
    let live = live();
    let use_case = InspectNameserversUseCase::new(live.client, live.resolver, live.verifier);

    let statuses = use_case.execute("example.com").await.unwrap();

    assert!(!statuses.is_empty());
    assert!(statuses
        .iter()
        .any(|s| s.error.is_none() && s.serial.is_some() && s.authoritative));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_public_transfers_are_refused() {
    let live = live();
    let servers = live.resolver.find_ns_ips("example.com").await.unwrap();

    let result = live.client.zone_transfer("example.com.", servers[0]).await;

    assert!(result.map(|records| records.is_empty()).unwrap_or(true));
}
