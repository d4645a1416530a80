use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Nameservers not found for {0}")]
    NameserversNotFound(String),

    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to convert records: {0}")]
    RecordConversion(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Inspection cancelled")]
    Cancelled,
}

impl DomainError {
    /// Errors raised by the network exchange itself rather than by the data it carried.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportError(_)
        )
    }
}
