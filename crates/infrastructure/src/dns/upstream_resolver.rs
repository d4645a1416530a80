use super::conversion::RecordConverter;
use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_nscheck_application::ports::{NameResolver, ResolvedRecord};
use ferrous_nscheck_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// [`NameResolver`] backed by recursive resolvers.
///
/// Servers are tried in order. A server that cannot be reached, answers
/// garbage, or reports SERVFAIL/REFUSED hands over to the next one; the
/// first usable answer wins.
pub struct UpstreamResolver {
    servers: Vec<SocketAddr>,
    timeout: Duration,
}

impl UpstreamResolver {
    pub fn new(servers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self { servers, timeout }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query(&query.domain, &query.record_type, true)?;

        let transport = Transport::udp(server);
        let reply = transport.send(&request, self.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes, id)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, "Truncated upstream response, retrying over TCP");
        let reply = Transport::tcp(server).send(&request, self.timeout).await?;
        ResponseParser::parse(&reply.bytes, id)
    }
}

#[async_trait]
impl NameResolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedRecord>, DomainError> {
        let mut last_error = String::from("no upstream servers configured");

        for &server in &self.servers {
            let response = match self.exchange(server, query).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(server = %server, domain = %query.domain, error = %e, "Upstream query failed");
                    last_error = format!("{}: {}", server, e);
                    continue;
                }
            };

            if response.is_server_error() {
                warn!(
                    server = %server,
                    domain = %query.domain,
                    rcode = ?response.rcode,
                    "Upstream refused to answer"
                );
                last_error = format!("{}: {}", server, response.rcode);
                continue;
            }

            if response.is_nxdomain() || response.is_nodata() {
                debug!(
                    server = %server,
                    domain = %query.domain,
                    record_type = %query.record_type,
                    rcode = ?response.rcode,
                    "No records upstream"
                );
                return Ok(Vec::new());
            }

            let records = RecordConverter::convert_all(&response.answers)?;

            debug!(
                server = %server,
                domain = %query.domain,
                record_type = %query.record_type,
                answers = records.len(),
                "Upstream resolution complete"
            );

            return Ok(records
                .into_iter()
                .map(|rr| ResolvedRecord::new(rr.record_type, rr.value))
                .collect());
        }

        Err(DomainError::ResolutionFailed(format!(
            "{} {} via all upstreams ({})",
            query.domain, query.record_type, last_error
        )))
    }
}
