pub mod client;
pub mod dnssec;
pub mod transport;
pub mod wire;
