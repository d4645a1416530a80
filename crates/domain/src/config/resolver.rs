use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Recursive resolvers used for NS and A lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// `ip:port` or bare `ip` (port 53 assumed), tried in order.
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Parses the upstream list; the first invalid entry is returned as `Err`.
    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.upstream_servers
            .iter()
            .map(|server| parse_server_addr(server).ok_or_else(|| server.clone()))
            .collect()
    }
}

fn parse_server_addr(server: &str) -> Option<SocketAddr> {
    let server = server.trim();
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Some(addr);
    }
    server
        .parse::<std::net::IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, 53))
}

fn default_upstream_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    5000
}
