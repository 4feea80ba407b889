//! A loopback DNS server answering on UDP and TCP with the same port.

use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{NULL, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

pub type Handler = Arc<dyn Fn(&Message) -> Vec<Message> + Send + Sync>;

pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(&Message) -> Vec<Message> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub struct FakeServer {
    pub addr: SocketAddr,
}

impl FakeServer {
    /// `truncate_udp` answers every UDP query with an empty TC=1 response.
    pub async fn start(handler: Handler, truncate_udp: bool) -> Self {
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = tcp.local_addr().unwrap();
        let udp = UdpSocket::bind(addr).await.unwrap();

        let udp_handler = handler.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                let Ok((n, peer)) = udp.recv_from(&mut buf).await else {
                    return;
                };
                let query = Message::from_vec(&buf[..n]).unwrap();
                let reply = if truncate_udp {
                    let mut reply = reply_to(&query, ResponseCode::NoError, vec![]);
                    reply.set_truncated(true);
                    reply
                } else {
                    match udp_handler(&query).into_iter().next() {
                        Some(reply) => reply,
                        None => continue,
                    }
                };
                let _ = udp.send_to(&reply.to_vec().unwrap(), peer).await;
            }
        });

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = tcp.accept().await else {
                    return;
                };
                let handler = handler.clone();
                tokio::spawn(async move {
                    let mut len = [0u8; 2];
                    if stream.read_exact(&mut len).await.is_err() {
                        return;
                    }
                    let mut buf = vec![0u8; u16::from_be_bytes(len) as usize];
                    if stream.read_exact(&mut buf).await.is_err() {
                        return;
                    }
                    let query = Message::from_vec(&buf).unwrap();
                    for reply in handler(&query) {
                        let bytes = reply.to_vec().unwrap();
                        let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                        let _ = stream.write_all(&bytes).await;
                    }
                });
            }
        });

        Self { addr }
    }
}

pub fn reply_to(query: &Message, rcode: ResponseCode, answers: Vec<Record>) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_authoritative(true)
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(rcode);
    for q in query.queries() {
        reply.add_query(q.clone());
    }
    reply.add_answers(answers);
    reply
}

fn unknown(owner: &str, code: RecordType, rdata: Vec<u8>) -> Record {
    Record::from_rdata(
        Name::from_ascii(owner).unwrap(),
        3600,
        RData::Unknown {
            code,
            rdata: NULL::with(rdata),
        },
    )
}

fn rrsig_over(covered: u16) -> Vec<u8> {
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

/// NOERROR with an empty answer and an NSEC proof signed by example.com.
pub fn signed_nodata(query: &Message) -> Message {
    let mut reply = reply_to(query, ResponseCode::NoError, vec![]);
    reply.add_name_server(Record::from_rdata(
        Name::from_ascii("example.com.").unwrap(),
        3600,
        RData::SOA(SOA::new(
            Name::from_ascii("ns1.example.com.").unwrap(),
            Name::from_ascii("hostmaster.example.com.").unwrap(),
            7,
            7200,
            3600,
            1209600,
            300,
        )),
    ));
    reply.add_name_server(unknown("example.com.", RecordType::RRSIG, rrsig_over(6)));

    // next owner www.example.com., bitmap: A NS SOA RRSIG NSEC DNSKEY
    let mut nsec = b"\x03www\x07example\x03com\x00".to_vec();
    nsec.extend_from_slice(&[0x00, 0x07, 0x62, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80]);
    reply.add_name_server(unknown("example.com.", RecordType::NSEC, nsec));
    reply.add_name_server(unknown("example.com.", RecordType::RRSIG, rrsig_over(47)));
    reply
}
