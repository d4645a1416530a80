use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// A single authoritative server instance that was actually queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Endpoint {
    pub nameserver: String,
    pub ip: IpAddr,
}

impl Endpoint {
    pub fn new(nameserver: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            nameserver: nameserver.into(),
            ip,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nameserver, self.ip)
    }
}
