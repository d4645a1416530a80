use crate::ports::{NameResolver, NameserverClient};
use ferrous_nscheck_domain::fqdn::fqdn;
use ferrous_nscheck_domain::{DnsQuery, DomainError, Endpoint, RecordType, Report};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::debug;

/// Queries every address of every nameserver, one after the other.
///
/// The first failure of any step aborts the whole run: a report is only
/// produced when every endpoint answered and every answer was decoded.
pub struct QueryNameserversUseCase {
    resolver: Arc<dyn NameResolver>,
    client: Arc<dyn NameserverClient>,
}

impl QueryNameserversUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>, client: Arc<dyn NameserverClient>) -> Self {
        Self { resolver, client }
    }

    pub async fn execute(
        &self,
        qname: &str,
        qtype: &str,
        nameservers: &[String],
    ) -> Result<Report, DomainError> {
        let mut result = Report::new();

        for nameserver in nameservers {
            let report = self.query_nameserver(qname, qtype, nameserver).await?;
            result = result.merge(report);
        }

        Ok(result)
    }

    pub async fn query_nameserver(
        &self,
        qname: &str,
        qtype: &str,
        nameserver: &str,
    ) -> Result<Report, DomainError> {
        let query = DnsQuery::new(fqdn(qname), RecordType::parse_or_default(qtype));

        let ips = self.nameserver_ips(nameserver).await?;
        let mut report = Report::new();

        for ip in ips {
            debug!(
                nameserver = %nameserver,
                ip = %ip,
                qname = %query.domain,
                qtype = %query.record_type,
                "Querying authoritative nameserver"
            );

            let endpoint_report = self.client.query(ip, &query).await?;
            report.insert(Endpoint::new(nameserver, ip), endpoint_report);
        }

        Ok(report)
    }

    async fn nameserver_ips(&self, nameserver: &str) -> Result<Vec<IpAddr>, DomainError> {
        let answers = self
            .resolver
            .resolve(&DnsQuery::new(nameserver, RecordType::A))
            .await?;

        // The A lookup may walk a CNAME chain; only the addresses matter here.
        answers
            .into_iter()
            .filter(|rr| rr.record_type == RecordType::A.as_str())
            .map(|rr| {
                rr.value.parse::<Ipv4Addr>().map(IpAddr::V4).map_err(|_| {
                    DomainError::ResolutionFailed(format!(
                        "Invalid A record '{}' for nameserver {}",
                        rr.value, nameserver
                    ))
                })
            })
            .collect()
    }
}
