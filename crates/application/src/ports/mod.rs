mod name_resolver;
mod nameserver_client;

pub use name_resolver::{NameResolver, ResolvedRecord};
pub use nameserver_client::NameserverClient;

// Re-export for convenience
pub use ferrous_nscheck_domain::DnsQuery;
