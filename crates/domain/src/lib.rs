//! Ferrous NS Check Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod endpoint;
pub mod errors;
pub mod fqdn;
pub mod report;
pub mod response_code;
pub mod validation;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{Record, RecordType};
pub use endpoint::Endpoint;
pub use errors::DomainError;
pub use report::{EndpointReport, Report};
pub use response_code::rcode_to_string;
pub use validation::{FailureKind, ValidationError, ValidationFailure};
