use ferrous_dig_application::use_cases::LookupHostUseCase;
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::UdpTransport;
use ferrous_dig_infrastructure::system::ResolvConfReader;
use std::sync::Arc;
use tracing::debug;

pub struct LookupServices {
    pub lookup: LookupHostUseCase,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        debug!(resolv_conf = %config.resolver.resolv_conf, "Wiring lookup services");

        let transport = Arc::new(UdpTransport::new());
        let nameservers = Arc::new(ResolvConfReader::new(
            config.resolver.resolv_conf.clone(),
            config.resolver.port,
        ));

        Self {
            lookup: LookupHostUseCase::new(transport, nameservers, config.query_timeout()),
        }
    }
}
