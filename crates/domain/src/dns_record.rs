mod dnssec;
mod record;
mod record_type;

pub use dnssec::{algorithm_name, digest_type_name, DnskeyData, DsData, KeyTagMap, RrsigData};
pub use record::{filter_by_type, RecordData, ResourceRecord, SoaData};
pub use record_type::RecordType;
