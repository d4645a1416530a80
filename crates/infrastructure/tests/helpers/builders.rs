#![allow(dead_code)]
use hickory_proto::rr::rdata::{A, CNAME, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;

pub struct RecordBuilder;

impl RecordBuilder {
    // Case is kept as written, like names decoded off the wire.
    fn name(s: &str) -> Name {
        Name::from_ascii(s).unwrap()
    }

    pub fn a(owner: &str, ip: &str) -> Record {
        let ip: Ipv4Addr = ip.parse().unwrap();
        Record::from_rdata(Self::name(owner), 300, RData::A(A(ip)))
    }

    pub fn cname(owner: &str, target: &str) -> Record {
        Record::from_rdata(
            Self::name(owner),
            300,
            RData::CNAME(CNAME(Self::name(target))),
        )
    }

    pub fn ns(zone: &str, nameserver: &str) -> Record {
        Record::from_rdata(
            Self::name(zone),
            3600,
            RData::NS(NS(Self::name(nameserver))),
        )
    }

    pub fn txt(owner: &str, strings: &[&str]) -> Record {
        let txt = TXT::new(strings.iter().map(|s| s.to_string()).collect());
        Record::from_rdata(Self::name(owner), 300, RData::TXT(txt))
    }
}
