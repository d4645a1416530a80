pub mod authoritative;
pub mod conversion;
pub mod forwarding;
pub mod transport;
pub mod upstream_resolver;

pub use authoritative::AuthoritativeClient;
pub use conversion::RecordConverter;
pub use forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use upstream_resolver::UpstreamResolver;
