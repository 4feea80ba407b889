use std::sync::Arc;
use tracing::debug;
use zonewarden_application::ports::{DnsClient, DnssecVerifier};
use zonewarden_application::services::NameserverResolver;
use zonewarden_domain::{Config, ConfigError};
use zonewarden_infrastructure::{NetworkDnsClient, RingDnssecVerifier};

pub struct DnsServices {
    pub client: Arc<dyn DnsClient>,
    pub verifier: Arc<dyn DnssecVerifier>,
    pub resolver: Arc<NameserverResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let resolver_ip = config.resolver.ip().ok_or_else(|| {
            ConfigError::Validation(format!(
                "Resolver address '{}' is not an IP address",
                config.resolver.address
            ))
        })?;

        let client: Arc<dyn DnsClient> = Arc::new(NetworkDnsClient::from_config(&config.resolver));
        let verifier: Arc<dyn DnssecVerifier> = Arc::new(RingDnssecVerifier::new());
        let resolver = Arc::new(NameserverResolver::new(client.clone(), resolver_ip));

        debug!(
            resolver = %resolver_ip,
            port = config.resolver.port,
            timeout_ms = config.resolver.timeout_ms,
            "DNS services ready"
        );

        Ok(Self {
            client,
            verifier,
            resolver,
        })
    }
}
