mod signature;
mod validate_chain;

pub use signature::{check_rrset_signature, SignatureCheck};
pub use validate_chain::{ValidateChainUseCase, ZoneValidation};
