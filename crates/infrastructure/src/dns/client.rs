use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use super::wire::{MessageBuilder, ParsedResponse, ResponseParser};
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use zonewarden_application::ports::{DnsAnswer, DnsClient, QueryOptions};
use zonewarden_domain::config::ResolverConfig;
use zonewarden_domain::{DomainError, RecordType, ResourceRecord};

/// Stub client talking plain DNS over UDP, falling back to TCP on truncation.
pub struct NetworkDnsClient {
    port: u16,
    timeout: Duration,
}

impl NetworkDnsClient {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.port, config.timeout())
    }

    async fn exchange(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        options: QueryOptions,
    ) -> Result<(ParsedResponse, Duration), DomainError> {
        let server_addr = SocketAddr::new(server, self.port);
        let (id, query_bytes) = MessageBuilder::build_query(name, record_type, options)?;

        let start = Instant::now();

        let response = UdpTransport::new(server_addr)
            .send(&query_bytes, self.timeout)
            .await?;
        let mut parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.truncated {
            debug!(name = %name, record_type = %record_type, server = %server_addr, "Response truncated, retrying over TCP");
            let response = TcpTransport::new(server_addr)
                .send(&query_bytes, self.timeout)
                .await?;
            parsed = ResponseParser::parse(&response.bytes)?;
        }

        let rtt = start.elapsed();

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {} from {}",
                parsed.id, id, server_addr
            )));
        }

        Ok((parsed, rtt))
    }
}

fn protocol_error(
    parsed: &ParsedResponse,
    name: &str,
    record_type: RecordType,
    server: IpAddr,
) -> DomainError {
    DomainError::ProtocolError {
        rcode: parsed.rcode_name().to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        server: server.to_string(),
    }
}

#[async_trait]
impl DnsClient for NetworkDnsClient {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
        options: QueryOptions,
    ) -> Result<DnsAnswer, DomainError> {
        let (parsed, rtt) = self.exchange(name, record_type, server, options).await?;

        if !parsed.is_success() {
            return Err(protocol_error(&parsed, name, record_type, server));
        }

        debug!(
            name = %name,
            record_type = %record_type,
            server = %server,
            answers = parsed.answers.len(),
            rtt_ms = rtt.as_millis() as u64,
            "Query answered"
        );

        Ok(DnsAnswer {
            answers: parsed.answers,
            authority: parsed.authority,
            authoritative: parsed.authoritative,
            recursion_available: parsed.recursion_available,
            server,
            rtt,
        })
    }

    async fn zone_transfer(
        &self,
        zone: &str,
        server: IpAddr,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let server_addr = SocketAddr::new(server, self.port);
        let (id, query_bytes) = MessageBuilder::build_transfer(zone)?;

        let transport = TcpTransport::new(server_addr);
        let mut stream = transport.connect(self.timeout).await?;
        transport
            .write_message(&mut stream, &query_bytes, self.timeout)
            .await?;

        let mut records = Vec::new();
        let mut soa_seen = 0usize;

        // The transfer is complete once the opening SOA shows up again.
        while soa_seen < 2 {
            let bytes = transport.read_message(&mut stream, self.timeout).await?;
            let parsed = ResponseParser::parse(&bytes)?;

            if parsed.id != id {
                return Err(DomainError::InvalidDnsResponse(format!(
                    "AXFR response ID {} does not match query ID {}",
                    parsed.id, id
                )));
            }
            if !parsed.is_success() {
                return Err(protocol_error(&parsed, zone, RecordType::AXFR, server));
            }
            if parsed.answers.is_empty() {
                if records.is_empty() {
                    break;
                }
                warn!(zone = %zone, server = %server, "Empty message in the middle of AXFR");
                continue;
            }

            for record in parsed.answers {
                if record.record_type() == RecordType::SOA {
                    soa_seen += 1;
                } else if soa_seen == 0 {
                    return Err(DomainError::InvalidDnsResponse(format!(
                        "AXFR of {} did not start with SOA",
                        zone
                    )));
                }
                records.push(record);
                if soa_seen == 2 {
                    break;
                }
            }
        }

        debug!(zone = %zone, server = %server, records = records.len(), "Zone transfer finished");
        Ok(records)
    }
}
