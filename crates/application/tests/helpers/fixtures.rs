use super::{fake_digest, MockDnsClient};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use zonewarden_application::services::NameserverResolver;
use zonewarden_domain::dns_name::{fqdn, is_root};
use zonewarden_domain::{
    DnskeyData, DsData, RecordData, RecordType, ResourceRecord, RrsigData,
};

pub const NOW: i64 = 1_700_000_000;
pub const RESOLVER: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53));

pub fn fixed_now() -> i64 {
    NOW
}

pub fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(198, 51, 100, last))
}

pub fn a_record(name: &str, addr: Ipv4Addr) -> ResourceRecord {
    ResourceRecord::new(fqdn(name), 300, RecordData::A(addr))
}

pub fn zone_key(zone: &str) -> DnskeyData {
    let mut public_key = vec![0x03, 0x01, 0x00, 0x01];
    public_key.extend_from_slice(zone.as_bytes());
    DnskeyData {
        flags: 257,
        protocol: 3,
        algorithm: 8,
        public_key,
    }
}

pub fn rrsig_by(
    key: &DnskeyData,
    zone: &str,
    covered: RecordType,
    inception: i64,
    expiration: i64,
) -> ResourceRecord {
    ResourceRecord::new(
        fqdn(zone),
        3600,
        RecordData::Rrsig(RrsigData {
            type_covered: covered,
            algorithm: key.algorithm,
            labels: zonewarden_domain::dns_name::label_count(zone) as u8,
            original_ttl: 3600,
            expiration: expiration as u32,
            inception: inception as u32,
            key_tag: key.key_tag(),
            signer_name: fqdn(zone),
            signature: key.public_key.clone(),
        }),
    )
}

pub fn dnskey_answer(zone: &str, keys: &[DnskeyData], signer: &DnskeyData) -> Vec<ResourceRecord> {
    let mut records: Vec<ResourceRecord> = keys
        .iter()
        .map(|k| ResourceRecord::new(fqdn(zone), 3600, RecordData::Dnskey(k.clone())))
        .collect();
    records.push(rrsig_by(signer, zone, RecordType::DNSKEY, NOW - 3600, NOW + 3600));
    records
}

pub fn ds_record(zone: &str, key_tag: u16, digest_type: u8, digest: Vec<u8>) -> ResourceRecord {
    ResourceRecord::new(
        fqdn(zone),
        86400,
        RecordData::Ds(DsData {
            key_tag,
            algorithm: 8,
            digest_type,
            digest,
        }),
    )
}

pub fn valid_ds(zone: &str, key: &DnskeyData) -> ResourceRecord {
    ds_record(zone, key.key_tag(), 2, fake_digest(key, &fqdn(zone), 2))
}

fn ns_host(zone: &str) -> String {
    if is_root(zone) {
        "a.root-servers.net.".to_string()
    } else {
        format!("ns1.{}", fqdn(zone))
    }
}

/// Publishes one nameserver for `zone` at `server` through the resolver.
pub fn delegate(client: &MockDnsClient, zone: &str, server: IpAddr) {
    let host = ns_host(zone);
    client.set_records(
        zone,
        RecordType::NS,
        RESOLVER,
        vec![ResourceRecord::new(fqdn(zone), 3600, RecordData::Ns(host.clone()))],
    );
    let IpAddr::V4(v4) = server else {
        panic!("fixtures use IPv4 servers")
    };
    client.set_records(&host, RecordType::A, RESOLVER, vec![a_record(&host, v4)]);
}

/// A correctly signed `.` -> `com.` -> `example.com.` chain.
pub struct SignedChain {
    pub client: Arc<MockDnsClient>,
    pub resolver: Arc<NameserverResolver>,
    pub root_server: IpAddr,
    pub com_server: IpAddr,
    pub example_server: IpAddr,
}

impl SignedChain {
    pub fn new() -> Self {
        let client = Arc::new(MockDnsClient::new());
        let root_server = ip(1);
        let com_server = ip(2);
        let example_server = ip(3);

        for (zone, server) in [
            (".", root_server),
            ("com.", com_server),
            ("example.com.", example_server),
        ] {
            delegate(&client, zone, server);
            let key = zone_key(zone);
            client.set_records(
                zone,
                RecordType::DNSKEY,
                server,
                dnskey_answer(zone, &[key.clone()], &key),
            );
        }

        client.set_records(
            "com.",
            RecordType::DS,
            root_server,
            vec![valid_ds("com.", &zone_key("com."))],
        );
        client.set_records(
            "example.com.",
            RecordType::DS,
            com_server,
            vec![valid_ds("example.com.", &zone_key("example.com."))],
        );

        let resolver = Arc::new(NameserverResolver::new(client.clone(), RESOLVER));

        Self {
            client,
            resolver,
            root_server,
            com_server,
            example_server,
        }
    }
}

pub trait DnskeyBuilderExt {
    fn with_public_key(&self, public_key: &[u8]) -> DnskeyData;
}

impl DnskeyBuilderExt for DnskeyData {
    fn with_public_key(&self, public_key: &[u8]) -> DnskeyData {
        DnskeyData {
            public_key: public_key.to_vec(),
            ..self.clone()
        }
    }
}
