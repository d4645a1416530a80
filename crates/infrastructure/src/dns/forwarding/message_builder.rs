//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.
//! The same builder serves both sides of an inspection: recursive lookups
//! against upstream resolvers and non-recursive questions put directly to
//! authoritative nameservers.

use super::record_type_map::RecordTypeMapper;
use ferrous_nscheck_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it to wire format.
    ///
    /// Returns the random message ID alongside the bytes so the caller can
    /// match the response against it.
    ///
    /// # Arguments
    /// * `domain` - Name to query, e.g. `"example.com."`
    /// * `record_type` - Question type
    /// * `recursion_desired` - Sets the RD bit. Authoritative queries clear it.
    pub fn build_query(
        domain: &str,
        record_type: &RecordType,
        recursion_desired: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
