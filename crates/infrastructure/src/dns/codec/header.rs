use super::WireReader;
use bytes::BufMut;
use prionis_dns_domain::{Flags, Header, ProtocolError};

pub const HEADER_LEN: usize = 12;

pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, ProtocolError> {
    let bytes = reader.read_bytes(HEADER_LEN)?;
    let word = |i: usize| u16::from_be_bytes([bytes[i], bytes[i + 1]]);

    Ok(Header {
        id: word(0),
        flags: Flags(word(2)),
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    })
}

pub fn encode_header<B: BufMut>(header: &Header, buf: &mut B) {
    buf.put_u16(header.id);
    buf.put_u16(header.flags.0);
    buf.put_u16(header.question_count);
    buf.put_u16(header.answer_count);
    buf.put_u16(header.authority_count);
    buf.put_u16(header.additional_count);
}
