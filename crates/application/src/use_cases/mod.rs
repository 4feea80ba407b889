pub mod dnssec;
pub mod nameservers;
pub mod scan;

pub use dnssec::{ValidateChainUseCase, ZoneValidation};
pub use nameservers::InspectNameserversUseCase;
pub use scan::ScanDomainUseCase;
