pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use zonewarden_domain::DomainError;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub(crate) fn io_error(server: SocketAddr, error: io::Error) -> DomainError {
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::ConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::TimedOut => DomainError::Timeout {
            server: server.to_string(),
        },
        _ => DomainError::Transport {
            server: server.to_string(),
            reason: error.to_string(),
        },
    }
}

pub(crate) fn timed_out(server: SocketAddr) -> DomainError {
    DomainError::Timeout {
        server: server.to_string(),
    }
}
