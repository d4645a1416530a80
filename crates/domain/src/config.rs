pub mod errors;
pub mod logging;
pub mod query;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
