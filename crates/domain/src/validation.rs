use crate::Endpoint;
use std::fmt;

pub const MSG_NAMESERVERS_NOT_FOUND: &str = "nameservers not found";
pub const MSG_ALL_FAILED: &str = "all nameservers failed the validation";
pub const MSG_SOME_FAILED: &str = "some nameservers failed the validation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    UnsuccessfulResponseCode,
    UnexpectedType,
    UnexpectedData,
    RecordsNotFound,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::UnsuccessfulResponseCode => "unsuccessful response code",
            FailureKind::UnexpectedType => "unexpected type",
            FailureKind::UnexpectedData => "unexpected data",
            FailureKind::RecordsNotFound => "records not found",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint-level reason for a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub endpoint: Endpoint,
    pub kind: FailureKind,
    /// Observed value backing the failure; empty when there is nothing to show.
    pub detail: String,
}

impl ValidationFailure {
    fn render(&self) -> String {
        let mut line = format!("- {}: {}", self.endpoint, self.kind);
        if !self.detail.is_empty() {
            line.push_str(&format!(" ({})", self.detail));
        }
        line
    }
}

/// Outcome of a failed [`crate::Report::validate`].
///
/// This is a diagnostic report rather than a pipeline failure: it carries
/// every endpoint-level mismatch and renders them in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
    failures: Vec<ValidationFailure>,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn add_failure(
        &mut self,
        endpoint: &Endpoint,
        kind: FailureKind,
        detail: impl Into<String>,
    ) {
        self.failures.push(ValidationFailure {
            endpoint: endpoint.clone(),
            kind,
            detail: detail.into(),
        });
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// True when no endpoint data was available at all.
    pub fn is_nameservers_not_found(&self) -> bool {
        self.failures.is_empty() && self.message == MSG_NAMESERVERS_NOT_FOUND
    }

    /// Rendered sub-error lines, sorted lexicographically.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.failures.iter().map(ValidationFailure::render).collect();
        lines.sort();
        lines
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        let lines = self.detail_lines();
        if lines.is_empty() {
            return Ok(());
        }
        f.write_str(". detail:")?;
        for line in lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
