use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Direct queries sent to authoritative nameservers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,

    /// Bound on each send and each receive.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Re-send over TCP when a UDP answer comes back truncated.
    #[serde(default = "default_tcp_fallback")]
    pub tcp_fallback: bool,

    /// Bound on a whole inspection, discovery included.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            nameserver_port: default_nameserver_port(),
            timeout_ms: default_timeout_ms(),
            tcp_fallback: default_tcp_fallback(),
            deadline_ms: None,
        }
    }
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

fn default_nameserver_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_tcp_fallback() -> bool {
    true
}
