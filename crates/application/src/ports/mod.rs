mod dns_client;
mod dnssec_verifier;

pub use dns_client::{DnsAnswer, DnsClient, QueryOptions, RrsetAnswer};
pub use dnssec_verifier::DnssecVerifier;
