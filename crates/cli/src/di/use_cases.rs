use super::DnsServices;
use std::sync::Arc;
use zonewarden_application::use_cases::{
    InspectNameserversUseCase, ScanDomainUseCase, ValidateChainUseCase,
};
use zonewarden_domain::Config;

pub struct UseCases {
    pub inspect_nameservers: Arc<InspectNameserversUseCase>,
    pub validate_chain: Arc<ValidateChainUseCase>,
    pub scan_domain: Arc<ScanDomainUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, services: &DnsServices) -> Self {
        Self {
            inspect_nameservers: Arc::new(InspectNameserversUseCase::new(
                services.client.clone(),
                services.resolver.clone(),
                services.verifier.clone(),
            )),
            validate_chain: Arc::new(ValidateChainUseCase::new(
                services.client.clone(),
                services.resolver.clone(),
                services.verifier.clone(),
            )),
            scan_domain: Arc::new(ScanDomainUseCase::new(
                services.client.clone(),
                services.resolver.clone(),
                config.scan.clone(),
            )),
        }
    }
}
