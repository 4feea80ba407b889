mod dictionary;
mod scan_domain;

pub use dictionary::{build_requests, DICTIONARY_SIZE};
pub use scan_domain::ScanDomainUseCase;
