use crate::response_code::{rcode_to_string, NOERROR};
use crate::validation::{
    FailureKind, ValidationError, MSG_ALL_FAILED, MSG_NAMESERVERS_NOT_FOUND, MSG_SOME_FAILED,
};
use crate::{Endpoint, Record};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::hash_map::Iter;
use std::collections::HashMap;

/// One response as observed from a single endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointReport {
    pub response_code: u16,
    pub records: Vec<Record>,
}

impl EndpointReport {
    pub fn new(response_code: u16, records: Vec<Record>) -> Self {
        Self {
            response_code,
            records,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == NOERROR
    }
}

/// Answers collected from every queried endpoint, keyed by endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: HashMap<Endpoint, EndpointReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: Endpoint, report: EndpointReport) -> Self {
        self.entries.insert(endpoint, report);
        self
    }

    pub fn insert(&mut self, endpoint: Endpoint, report: EndpointReport) {
        self.entries.insert(endpoint, report);
    }

    /// Folds `other` into `self`; entries of `other` win on equal endpoints.
    pub fn merge(mut self, other: Report) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, endpoint: &Endpoint) -> Option<&EndpointReport> {
        self.entries.get(endpoint)
    }

    pub fn iter(&self) -> Iter<'_, Endpoint, EndpointReport> {
        self.entries.iter()
    }

    /// Endpoints in sorted order.
    pub fn endpoints(&self) -> Vec<&Endpoint> {
        let mut endpoints: Vec<&Endpoint> = self.entries.keys().collect();
        endpoints.sort();
        endpoints
    }

    /// Entries in sorted endpoint order, for rendering.
    pub fn sorted(&self) -> Vec<(&Endpoint, &EndpointReport)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Checks every endpoint's answer against `expected`.
    ///
    /// Each endpoint is judged on its own: a non-NOERROR response code is a
    /// single failure, otherwise each expected record is looked up by name
    /// (first match wins) and compared on type, then on value.
    pub fn validate(&self, expected: &[Record]) -> Result<(), ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::new(MSG_NAMESERVERS_NOT_FOUND));
        }

        let mut err = ValidationError::new("");
        let mut failed_endpoints = 0;

        for (endpoint, report) in &self.entries {
            let before = err.failures().len();
            check_endpoint(&mut err, endpoint, report, expected);
            if err.failures().len() > before {
                failed_endpoints += 1;
            }
        }

        if failed_endpoints == 0 {
            return Ok(());
        }

        if failed_endpoints == self.entries.len() {
            err.set_message(MSG_ALL_FAILED);
        } else {
            err.set_message(MSG_SOME_FAILED);
        }
        Err(err)
    }
}

fn check_endpoint(
    err: &mut ValidationError,
    endpoint: &Endpoint,
    report: &EndpointReport,
    expected: &[Record],
) {
    if !report.is_success() {
        err.add_failure(
            endpoint,
            FailureKind::UnsuccessfulResponseCode,
            rcode_to_string(report.response_code),
        );
        return;
    }

    for want in expected {
        match report.records.iter().find(|rr| rr.name == want.name) {
            None => err.add_failure(endpoint, FailureKind::RecordsNotFound, ""),
            Some(rr) if rr.record_type != want.record_type => {
                err.add_failure(endpoint, FailureKind::UnexpectedType, rr.record_type.as_str())
            }
            Some(rr) if rr.value != want.value => {
                err.add_failure(endpoint, FailureKind::UnexpectedData, rr.value.as_str())
            }
            Some(_) => {}
        }
    }
}

impl FromIterator<(Endpoint, EndpointReport)> for Report {
    fn from_iter<I: IntoIterator<Item = (Endpoint, EndpointReport)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a Endpoint, &'a EndpointReport);
    type IntoIter = Iter<'a, Endpoint, EndpointReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Serialize)]
struct SerializedEntry<'a> {
    nameserver: &'a str,
    ip: String,
    response_code: u16,
    response_status: String,
    records: &'a [Record],
}

/// Serialized as a list sorted by endpoint, since JSON maps cannot carry
/// composite keys.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.sorted();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for (endpoint, report) in entries {
            seq.serialize_element(&SerializedEntry {
                nameserver: &endpoint.nameserver,
                ip: endpoint.ip.to_string(),
                response_code: report.response_code,
                response_status: rcode_to_string(report.response_code),
                records: &report.records,
            })?;
        }
        seq.end()
    }
}
