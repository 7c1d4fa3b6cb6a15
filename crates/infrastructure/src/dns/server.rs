use crate::dns::codec::{decode_message, encode_message, encode_message_with_limit, to_resource_record};
use bytes::Bytes;
use prionis_dns_application::use_cases::HandleDnsQueryUseCase;
use prionis_dns_domain::{Message, Opcode, ProtocolError, ResponseCode};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Target of the one event logged per handled request.
pub const QUERY_LOG_TARGET: &str = "prionis_dns::query";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Udp,
    Tcp,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The bytes did not decode as a message.
    Malformed(ProtocolError),
    /// QR was already set; responses are never answered.
    NotAQuery,
    /// The reply could not be encoded.
    Unencodable(ProtocolError),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Malformed(e) => write!(f, "malformed message: {}", e),
            DropReason::NotAQuery => f.write_str("message is a response"),
            DropReason::Unencodable(e) => write!(f, "reply could not be encoded: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Bytes),
    Dropped(DropReason),
}

/// Turns one inbound message into the bytes of its reply.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    udp_max_response_size: usize,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self {
            use_case,
            udp_max_response_size: 512,
        }
    }

    pub fn with_udp_max_response_size(mut self, size: usize) -> Self {
        self.udp_max_response_size = size;
        self
    }

    pub async fn handle_datagram(&self, bytes: &[u8], client: SocketAddr) -> Outcome {
        self.handle(bytes, client, Transport::Udp).await
    }

    pub async fn handle_stream_message(&self, bytes: &[u8], client: SocketAddr) -> Outcome {
        self.handle(bytes, client, Transport::Tcp).await
    }

    async fn handle(&self, bytes: &[u8], client: SocketAddr, transport: Transport) -> Outcome {
        let start = Instant::now();

        let query = match decode_message(bytes) {
            Ok(query) => query,
            Err(e) => return dropped(client, transport, DropReason::Malformed(e)),
        };
        if query.header.flags.is_response() {
            return dropped(client, transport, DropReason::NotAQuery);
        }

        let reply = self.resolve(&query).await;
        let encoded = match transport {
            Transport::Udp => encode_message_with_limit(&reply, self.udp_max_response_size),
            Transport::Tcp => encode_message(&reply),
        };
        let encoded = match encoded {
            Ok(encoded) => encoded,
            Err(e) => return dropped(client, transport, DropReason::Unencodable(e)),
        };

        info!(
            target: QUERY_LOG_TARGET,
            client = %client,
            transport = %transport,
            id = query.header.id,
            flags = format_args!("{:#06x}", query.header.flags.0),
            questions = %describe_questions(&reply),
            answers = reply.answers.len(),
            rcode = %reply.header.flags.response_code(),
            truncated = encoded.len() > 2 && encoded[2] & 0x02 != 0,
            bytes = encoded.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "request handled"
        );

        Outcome::Reply(encoded)
    }

    /// Builds the reply message for a decoded query.
    pub async fn resolve(&self, query: &Message) -> Message {
        let mut reply = Message::reply_to(query);

        let opcode = query.header.flags.opcode();
        if opcode != Opcode::Query {
            debug!(id = query.header.id, opcode = ?opcode, "Unsupported opcode");
            reply.header.flags.set_response_code(ResponseCode::NotImp);
            return reply;
        }

        let resolution = self.use_case.execute(&query.questions).await;
        reply
            .header
            .flags
            .set_response_code(resolution.response_code());

        for record in &resolution.answers {
            match to_resource_record(record) {
                Ok(rr) => reply.answers.push(rr),
                Err(e) => warn!(
                    id = ?record.id,
                    domain = %record.domain,
                    record_type = %record.record_type,
                    error = %e,
                    "Skipping stored record that cannot be encoded"
                ),
            }
        }

        reply
    }
}

fn dropped(client: SocketAddr, transport: Transport, reason: DropReason) -> Outcome {
    info!(
        target: QUERY_LOG_TARGET,
        client = %client,
        transport = %transport,
        reason = %reason,
        "request dropped"
    );
    Outcome::Dropped(reason)
}

fn describe_questions(message: &Message) -> String {
    message
        .questions
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
