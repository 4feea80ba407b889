mod helpers;

use helpers::{
    answer, delegate, fixed_now, ip, rrsig_by, zone_key, MockDnsClient, MockVerifier, NOW,
    RESOLVER,
};
use std::sync::Arc;
use zonewarden_application::services::NameserverResolver;
use zonewarden_application::use_cases::InspectNameserversUseCase;
use zonewarden_domain::{DomainError, RecordData, RecordType, ResourceRecord, SoaData};

fn soa(serial: u32) -> ResourceRecord {
    ResourceRecord::new(
        "example.com.",
        3600,
        RecordData::Soa(SoaData {
            mname: "ns1.example.com.".into(),
            rname: "hostmaster.example.com.".into(),
            serial,
            refresh: 7200,
            retry: 3600,
            expire: 1_209_600,
            minimum: 300,
        }),
    )
}

fn inspector(client: &Arc<MockDnsClient>) -> InspectNameserversUseCase {
    let resolver = Arc::new(NameserverResolver::new(client.clone(), RESOLVER));
    InspectNameserversUseCase::new(client.clone(), resolver, Arc::new(MockVerifier))
        .with_clock(fixed_now)
}

#[tokio::test]
async fn test_signed_authoritative_nameserver() {
    let client = Arc::new(MockDnsClient::new());
    let server = ip(3);
    delegate(&client, "example.com.", server);
    let key = zone_key("example.com.");

    client.set_records("example.com.", RecordType::SOA, server, vec![soa(2024010101)]);
    client.set_records(
        "example.com.",
        RecordType::DNSKEY,
        server,
        vec![ResourceRecord::new(
            "example.com.",
            3600,
            RecordData::Dnskey(key.clone()),
        )],
    );
    client.set_records(
        "example.com.",
        RecordType::NS,
        server,
        vec![
            ResourceRecord::new(
                "example.com.",
                3600,
                RecordData::Ns("ns1.example.com.".into()),
            ),
            rrsig_by(&key, "example.com.", RecordType::NS, NOW - 60, NOW + 86_400),
        ],
    );

    let statuses = inspector(&client).execute("example.com").await.unwrap();

    assert_eq!(statuses.len(), 1);
    let status = &statuses[0];
    assert_eq!(status.name, "ns1.example.com.");
    assert_eq!(status.address, server);
    assert_eq!(status.serial, Some(2024010101));
    assert!(status.authoritative);
    assert!(!status.is_lame());
    assert!(status.dnssec.signed);
    assert!(status.dnssec.valid);
    assert_eq!(status.dnssec.window.map(|w| w.end), Some(NOW + 86_400));
}

#[tokio::test]
async fn test_unsigned_lame_nameserver() {
    let client = Arc::new(MockDnsClient::new());
    let server = ip(3);
    delegate(&client, "example.com.", server);

    let mut lame = answer(server, vec![soa(7)]);
    lame.authoritative = false;
    lame.recursion_available = true;
    client.set_answer("example.com.", RecordType::SOA, server, lame);

    let statuses = inspector(&client).execute("example.com.").await.unwrap();

    let status = &statuses[0];
    assert!(status.is_lame());
    assert!(status.recursion_available);
    assert!(!status.dnssec.signed);
    assert!(!status.dnssec.valid);
    assert!(status.dnssec.window.is_none());
}

#[tokio::test]
async fn test_unreachable_nameserver_is_reported_not_fatal() {
    let client = Arc::new(MockDnsClient::new());
    let server = ip(3);
    delegate(&client, "example.com.", server);
    client.set_error(
        "example.com.",
        RecordType::SOA,
        server,
        DomainError::Timeout {
            server: server.to_string(),
        },
    );

    let statuses = inspector(&client).execute("example.com.").await.unwrap();

    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].error.is_some());
    assert!(statuses[0].serial.is_none());
    assert!(!statuses[0].is_lame());
}
