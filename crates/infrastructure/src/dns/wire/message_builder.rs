use super::RecordTypeMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use zonewarden_application::ports::QueryOptions;
use zonewarden_domain::{DomainError, RecordType};

/// EDNS(0) UDP payload size advertised on DNSSEC queries.
pub const EDNS_PAYLOAD_SIZE: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Returns the random message ID together with the serialized query.
    ///
    /// RD is always set. Secure queries carry EDNS(0) with DO=1 and leave CD
    /// clear; insecure ones set CD and carry no OPT record.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        options: QueryOptions,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_ascii(domain)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .set_checking_disabled(!options.dnssec);

        message.add_query(Query::query(name, RecordTypeMapper::to_hickory(record_type)));

        if options.dnssec {
            let mut edns = Edns::new();
            edns.set_max_payload(EDNS_PAYLOAD_SIZE);
            edns.set_dnssec_ok(true);
            message.set_edns(edns);
        }

        let bytes = message
            .to_vec()
            .map_err(|e| DomainError::InvalidDnsResponse(format!("failed to serialize query: {}", e)))?;

        Ok((id, bytes))
    }

    pub fn build_transfer(zone: &str) -> Result<(u16, Vec<u8>), DomainError> {
        Self::build_query(zone, RecordType::AXFR, QueryOptions::insecure())
    }
}
