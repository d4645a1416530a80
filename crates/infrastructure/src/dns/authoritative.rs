use super::conversion::RecordConverter;
use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_nscheck_application::ports::NameserverClient;
use ferrous_nscheck_domain::{DnsQuery, DomainError, EndpointReport};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

const DEFAULT_PORT: u16 = 53;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// [`NameserverClient`] that asks one authoritative server directly, with
/// recursion disabled.
pub struct AuthoritativeClient {
    port: u16,
    timeout: Duration,
    tcp_fallback: bool,
}

impl Default for AuthoritativeClient {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_TIMEOUT)
    }
}

impl AuthoritativeClient {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            tcp_fallback: true,
        }
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }
}

#[async_trait]
impl NameserverClient for AuthoritativeClient {
    async fn query(&self, ip: IpAddr, query: &DnsQuery) -> Result<EndpointReport, DomainError> {
        let server = SocketAddr::new(ip, self.port);
        let (id, request) = MessageBuilder::build_query(&query.domain, &query.record_type, false)?;

        let reply = Transport::udp(server).send(&request, self.timeout).await?;
        let mut response = ResponseParser::parse(&reply.bytes, id)?;
        let mut protocol = reply.protocol_used;

        if response.truncated && self.tcp_fallback {
            debug!(server = %server, domain = %query.domain, "Truncated answer, retrying over TCP");
            let transport = Transport::tcp(server);
            let reply = transport.send(&request, self.timeout).await?;
            response = ResponseParser::parse(&reply.bytes, id)?;
            protocol = transport.protocol_name();
        }

        let records = RecordConverter::convert_all(&response.answers)?;

        debug!(
            server = %server,
            domain = %query.domain,
            record_type = %query.record_type,
            rcode = ?response.rcode,
            answers = records.len(),
            protocol = protocol,
            "Authoritative answer received"
        );

        Ok(EndpointReport::new(response.rcode_value(), records))
    }
}
