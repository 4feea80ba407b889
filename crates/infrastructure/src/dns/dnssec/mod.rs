pub mod canonical;
pub mod crypto;

pub use crypto::RingDnssecVerifier;
