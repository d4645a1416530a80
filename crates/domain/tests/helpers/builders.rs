#![allow(dead_code)]
use ferrous_nscheck_domain::{Endpoint, EndpointReport, Record, Report};
use std::net::IpAddr;
use std::str::FromStr;

pub const NOERROR: u16 = 0;
pub const SERVFAIL: u16 = 2;
pub const NXDOMAIN: u16 = 3;
pub const REFUSED: u16 = 5;

pub fn endpoint(nameserver: &str, ip: &str) -> Endpoint {
    Endpoint::new(nameserver, IpAddr::from_str(ip).unwrap())
}

/// The four Google Cloud DNS endpoints serving the `dnstest.pior.dev.` zone.
pub fn cloud_dns_endpoints() -> Vec<Endpoint> {
    vec![
        endpoint("ns-cloud-e1.googledomains.com.", "216.239.32.110"),
        endpoint("ns-cloud-e2.googledomains.com.", "216.239.34.110"),
        endpoint("ns-cloud-e3.googledomains.com.", "216.239.36.110"),
        endpoint("ns-cloud-e4.googledomains.com.", "216.239.38.110"),
    ]
}

pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: Report::new(),
        }
    }

    pub fn endpoint(mut self, endpoint: Endpoint, rcode: u16, records: Vec<Record>) -> Self {
        self.report.insert(endpoint, EndpointReport::new(rcode, records));
        self
    }

    /// Every endpoint answers with the same code and records.
    pub fn uniform(mut self, endpoints: Vec<Endpoint>, rcode: u16, records: Vec<Record>) -> Self {
        for endpoint in endpoints {
            self.report
                .insert(endpoint, EndpointReport::new(rcode, records.clone()));
        }
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}

pub struct RecordBuilder {
    name: String,
    record_type: String,
    value: String,
    ttl: u32,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: "A".to_string(),
            value: "192.0.2.1".to_string(),
            ttl: 300,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Record {
        Record::new(self.name, self.record_type, self.value, self.ttl)
    }
}
