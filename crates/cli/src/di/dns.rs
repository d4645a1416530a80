use anyhow::anyhow;
use ferrous_nscheck_domain::Config;
use ferrous_nscheck_infrastructure::dns::{AuthoritativeClient, UpstreamResolver};
use std::sync::Arc;
use tracing::debug;

pub struct DnsServices {
    pub resolver: Arc<UpstreamResolver>,
    pub client: Arc<AuthoritativeClient>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstreams = config
            .resolver
            .upstream_addrs()
            .map_err(|e| anyhow!("Invalid upstream server: {}", e))?;

        let resolver = UpstreamResolver::new(upstreams, config.resolver.query_timeout());
        debug!(upstreams = ?resolver.servers(), "Using upstream resolvers");

        let client = AuthoritativeClient::new(config.query.nameserver_port, config.query.timeout())
            .with_tcp_fallback(config.query.tcp_fallback);

        Ok(Self {
            resolver: Arc::new(resolver),
            client: Arc::new(client),
        })
    }
}
