use crate::ports::NameResolver;
use ferrous_nscheck_domain::fqdn::parent;
use ferrous_nscheck_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Finds the authoritative nameservers of a name by climbing its hierarchy.
///
/// A name without NS records of its own, including one that does not exist,
/// yields the nameservers of its closest ancestor that has some.
pub struct FindNameserversUseCase {
    resolver: Arc<dyn NameResolver>,
}

impl FindNameserversUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, qname: &str) -> Result<Vec<String>, DomainError> {
        let mut current = Some(qname.to_string());

        while let Some(name) = current {
            let query = DnsQuery::new(name.as_str(), RecordType::NS);
            let answers = self.resolver.resolve(&query).await?;

            let nameservers: Vec<String> = answers
                .into_iter()
                .filter(|rr| rr.record_type == RecordType::NS.as_str())
                .map(|rr| rr.value)
                .collect();

            if !nameservers.is_empty() {
                debug!(
                    qname = %qname,
                    zone = %name,
                    nameservers = nameservers.len(),
                    "Authoritative nameservers found"
                );
                return Ok(nameservers);
            }

            debug!(name = %name, "No NS records, climbing to parent");
            current = parent(&name);
        }

        Err(DomainError::NameserversNotFound(qname.to_string()))
    }
}
