use super::rdata::convert_records;
use hickory_proto::op::{Message, MessageType};
use tracing::debug;
use zonewarden_domain::{DomainError, ResourceRecord};

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub rcode: u16,
    pub truncated: bool,
    pub authoritative: bool,
    pub recursion_available: bool,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
}

impl ParsedResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == 0
    }

    pub fn rcode_name(&self) -> &'static str {
        rcode_name(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(format!("failed to parse response: {}", e)))?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "received a query instead of a response".into(),
            ));
        }

        let rcode = u16::from(message.response_code());
        let answers = convert_records(message.answers());
        let authority = convert_records(message.name_servers());

        debug!(
            id = message.id(),
            rcode = rcode_name(rcode),
            answers = answers.len(),
            authority = authority.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            truncated: message.truncated(),
            authoritative: message.authoritative(),
            recursion_available: message.recursion_available(),
            answers,
            authority,
        })
    }
}

/// Mnemonic of a response code (RFC 6895 §2.3).
pub fn rcode_name(rcode: u16) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADVERS",
        _ => "UNKNOWN",
    }
}
