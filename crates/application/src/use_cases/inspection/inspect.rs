use super::{FindNameserversUseCase, QueryNameserversUseCase};
use crate::ports::{NameResolver, NameserverClient};
use ferrous_nscheck_domain::fqdn::is_fqdn;
use ferrous_nscheck_domain::{DomainError, Record, Report, ValidationError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// A collected report together with its validation verdict.
#[derive(Debug)]
pub struct InspectionOutcome {
    pub report: Report,
    pub validation: Result<(), ValidationError>,
}

impl InspectionOutcome {
    pub fn is_valid(&self) -> bool {
        self.validation.is_ok()
    }
}

/// Discovers the authoritative nameservers of a name and queries each of
/// them for the given type.
pub struct InspectUseCase {
    find_nameservers: FindNameserversUseCase,
    query_nameservers: QueryNameserversUseCase,
    cancellation: CancellationToken,
    deadline: Option<Duration>,
}

impl InspectUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>, client: Arc<dyn NameserverClient>) -> Self {
        Self {
            find_nameservers: FindNameserversUseCase::new(Arc::clone(&resolver)),
            query_nameservers: QueryNameserversUseCase::new(resolver, client),
            cancellation: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Bounds a whole inspection, discovery included.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub async fn execute(&self, qname: &str, qtype: &str) -> Result<Report, DomainError> {
        if !is_fqdn(qname) {
            return Err(DomainError::InvalidDomainName(format!(
                "qname is not FQDN: {}",
                qname
            )));
        }

        let start = Instant::now();
        info!(qname = %qname, qtype = %qtype, "Inspecting authoritative nameservers");

        let pipeline = self.run(qname, qtype);
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout(deadline, pipeline).await {
                    Ok(result) => result,
                    Err(_) => Err(DomainError::QueryTimeout),
                },
                None => pipeline.await,
            }
        };

        let report = tokio::select! {
            _ = self.cancellation.cancelled() => Err(DomainError::Cancelled),
            result = bounded => result,
        }?;

        info!(
            qname = %qname,
            endpoints = report.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inspection complete"
        );

        Ok(report)
    }

    /// Runs [`Self::execute`] and validates the report against `expected`.
    pub async fn inspect_and_validate(
        &self,
        qname: &str,
        qtype: &str,
        expected: &[Record],
    ) -> Result<InspectionOutcome, DomainError> {
        let report = self.execute(qname, qtype).await?;
        let validation = report.validate(expected);
        Ok(InspectionOutcome { report, validation })
    }

    async fn run(&self, qname: &str, qtype: &str) -> Result<Report, DomainError> {
        let nameservers = self.find_nameservers.execute(qname).await?;
        self.query_nameservers
            .execute(qname, qtype, &nameservers)
            .await
    }
}
