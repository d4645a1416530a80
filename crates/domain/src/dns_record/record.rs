use crate::fqdn::to_lower_fqdn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS resource record in its canonical, comparable form.
///
/// `name` is always lowercase and fully qualified. `record_type` stays
/// textual because answers of types outside [`super::RecordType`] are kept
/// as they were presented on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub value: String,

    pub ttl: u32,
}

impl Record {
    pub fn new(
        name: impl AsRef<str>,
        record_type: impl Into<String>,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: to_lower_fqdn(name.as_ref()),
            record_type: record_type.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Record without TTL, as used for expectations.
    pub fn expected(
        name: impl AsRef<str>,
        record_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(name, record_type, value, 0)
    }

    /// Equality on (name, type, value). TTL is informational only.
    pub fn matches(&self, other: &Record) -> bool {
        self.name == other.name && self.record_type == other.record_type && self.value == other.value
    }
}

/// Zone-file style line: `name`, TTL right-aligned to 10, `type`, `value`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:>10}\t{}\t{}",
            self.name, self.ttl, self.record_type, self.value
        )
    }
}
