//! Zonewarden Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_record;
pub mod errors;
pub mod nameserver;
pub mod scan;
mod serde_util;
pub mod validity;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{
    DnskeyData, DsData, KeyTagMap, RecordData, RecordType, ResourceRecord, RrsigData, SoaData,
};
pub use errors::DomainError;
pub use nameserver::{DnssecStatus, NameServerAddress, NameserverStatus};
pub use scan::{
    ProbeStatus, ScanMethod, ScanPlan, ScanReport, ScanRequest, ScanResponse, WildcardIpSet,
};
pub use validity::ValidityWindow;
