#![allow(dead_code)]

mod fixtures;
mod mock_dns_client;
mod mock_verifier;

pub use fixtures::*;
pub use mock_dns_client::*;
pub use mock_verifier::*;
