use super::DnsServices;
use ferrous_nscheck_application::use_cases::InspectUseCase;
use ferrous_nscheck_domain::Config;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct UseCases {
    pub inspect: Arc<InspectUseCase>,
}

impl UseCases {
    pub fn new(services: &DnsServices, config: &Config, cancellation: CancellationToken) -> Self {
        let mut inspect = InspectUseCase::new(services.resolver.clone(), services.client.clone())
            .with_cancellation(cancellation);

        if let Some(deadline) = config.query.deadline() {
            inspect = inspect.with_deadline(deadline);
        }

        Self {
            inspect: Arc::new(inspect),
        }
    }
}
