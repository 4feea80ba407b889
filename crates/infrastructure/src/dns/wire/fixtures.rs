//! Signed negative answers as served by DNSSEC zones.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{NULL, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType};

fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

fn raw(owner: &str, ttl: u32, code: RecordType, rdata: Vec<u8>) -> Record {
    Record::from_rdata(
        name(owner),
        ttl,
        RData::Unknown {
            code,
            rdata: NULL::with(rdata),
        },
    )
}

fn rrsig_rdata(covered: u16) -> Vec<u8> {
    let mut wire = covered.to_be_bytes().to_vec();
    wire.extend_from_slice(&[13, 2]);
    wire.extend_from_slice(&3600u32.to_be_bytes());
    wire.extend_from_slice(&1_700_100_000u32.to_be_bytes());
    wire.extend_from_slice(&1_699_900_000u32.to_be_bytes());
    wire.extend_from_slice(&31589u16.to_be_bytes());
    wire.extend_from_slice(b"\x07example\x03com\x00");
    wire.extend_from_slice(&[0xAB; 64]);
    wire
}

/// RRSIG RDATA covering NSEC (47), signed by example.com.
pub fn nsec_rrsig_rdata() -> Vec<u8> {
    rrsig_rdata(47)
}

/// NOERROR/NODATA for `example.com.`: SOA, NSEC and their RRSIGs in the
/// authority section, nothing in the answer.
pub fn nsec_signed_nodata(id: u16) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_authoritative(true)
        .set_response_code(ResponseCode::NoError);

    message.add_name_server(Record::from_rdata(
        name("example.com."),
        3600,
        RData::SOA(SOA::new(
            name("ns1.example.com."),
            name("hostmaster.example.com."),
            7,
            7200,
            3600,
            1209600,
            300,
        )),
    ));
    message.add_name_server(raw("example.com.", 3600, RecordType::RRSIG, rrsig_rdata(6)));

    // next owner www.example.com., bitmap: A NS SOA RRSIG NSEC DNSKEY
    let mut nsec = b"\x03www\x07example\x03com\x00".to_vec();
    nsec.extend_from_slice(&[0x00, 0x07, 0x62, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80]);
    message.add_name_server(raw("example.com.", 3600, RecordType::NSEC, nsec));
    message.add_name_server(raw("example.com.", 3600, RecordType::RRSIG, nsec_rrsig_rdata()));

    message
}
