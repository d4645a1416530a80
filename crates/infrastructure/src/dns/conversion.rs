//! Conversion of wire records into domain [`Record`]s.
//!
//! The types that matter for validation (SOA, NS, CNAME, A, AAAA, TXT) are
//! reduced to a single comparable value. Every other type falls back to the
//! record's presentation form, split on whitespace.

use ferrous_nscheck_domain::fqdn::to_lower_fqdn;
use ferrous_nscheck_domain::{DomainError, Record};
use hickory_proto::rr::{RData, Record as WireRecord};

pub struct RecordConverter;

impl RecordConverter {
    /// Convert one record, or `None` when it has no usable textual form.
    pub fn convert(record: &WireRecord) -> Option<Record> {
        let name = record.name().to_utf8();
        let ttl = record.ttl();

        let typed = match record.data() {
            RData::SOA(soa) => Some(("SOA", to_lower_fqdn(&soa.mname().to_utf8()))),
            RData::NS(ns) => Some(("NS", to_lower_fqdn(&ns.0.to_utf8()))),
            RData::CNAME(cname) => Some(("CNAME", to_lower_fqdn(&cname.0.to_utf8()))),
            RData::A(a) => Some(("A", a.0.to_string())),
            RData::AAAA(aaaa) => Some(("AAAA", aaaa.0.to_string())),
            RData::TXT(txt) => {
                let strings: Vec<String> = txt
                    .txt_data()
                    .iter()
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .collect();
                Some(("TXT", strings.join("\t")))
            }
            _ => None,
        };

        match typed {
            Some((record_type, value)) => Some(Record::new(name, record_type, value, ttl)),
            None => Self::from_presentation(&record.to_string(), ttl),
        }
    }

    /// Convert a whole answer section. One bad record fails the batch.
    pub fn convert_all(records: &[WireRecord]) -> Result<Vec<Record>, DomainError> {
        records
            .iter()
            .map(|rr| {
                Self::convert(rr).ok_or_else(|| {
                    DomainError::RecordConversion(format!(
                        "Unable to convert {} record for {}",
                        rr.record_type(),
                        rr.name()
                    ))
                })
            })
            .collect()
    }

    // `<name> <ttl> <class> <type> <rdata...>`
    fn from_presentation(text: &str, ttl: u32) -> Option<Record> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 4 {
            return None;
        }

        Some(Record::new(tokens[0], tokens[3], tokens[4..].join("\t"), ttl))
    }
}
