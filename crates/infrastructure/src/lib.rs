//! Zonewarden Infrastructure Layer
pub mod dns;

pub use dns::client::NetworkDnsClient;
pub use dns::dnssec::RingDnssecVerifier;
