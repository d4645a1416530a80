use async_trait::async_trait;
use ferrous_nscheck_domain::{DnsQuery, DomainError, EndpointReport};
use std::net::IpAddr;

/// Direct, non-recursive exchange with one authoritative server address.
///
/// The response code is reported as received; only transport and decoding
/// failures are errors.
#[async_trait]
pub trait NameserverClient: Send + Sync {
    async fn query(&self, ip: IpAddr, query: &DnsQuery) -> Result<EndpointReport, DomainError>;
}
