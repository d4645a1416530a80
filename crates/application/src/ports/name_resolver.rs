use async_trait::async_trait;
use ferrous_nscheck_domain::{DnsQuery, DomainError};

/// One answer from a general-purpose resolution, reduced to its type and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub record_type: String,
    pub value: String,
}

impl ResolvedRecord {
    pub fn new(record_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            value: value.into(),
        }
    }
}

/// Recursive (possibly caching) resolution of a name and type.
///
/// A name that does not exist resolves to an empty list, not an error.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResolvedRecord>, DomainError>;
}
