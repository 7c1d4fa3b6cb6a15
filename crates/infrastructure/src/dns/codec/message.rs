use super::{decode_header, decode_name, encode_header, encode_name, WireReader};
use bytes::{BufMut, Bytes, BytesMut};
use prionis_dns_domain::{
    Message, ProtocolError, Question, RecordClass, RecordType, ResourceRecord, Section,
};

const MAX_SECTION_LEN: usize = u16::MAX as usize;
const MAX_RDATA_LEN: usize = u16::MAX as usize;

pub fn decode_question(reader: &mut WireReader<'_>) -> Result<Question, ProtocolError> {
    let name = decode_name(reader)?;
    let record_type = RecordType(reader.read_u16()?);
    let class = RecordClass(reader.read_u16()?);
    Ok(Question {
        name,
        record_type,
        class,
    })
}

pub fn decode_rr(reader: &mut WireReader<'_>) -> Result<ResourceRecord, ProtocolError> {
    let name = decode_name(reader)?;
    let record_type = RecordType(reader.read_u16()?);
    let class = RecordClass(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let data_len = reader.read_u16()? as usize;
    let data = reader.read_bytes(data_len)?.to_vec();

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        data,
    })
}

/// Decodes a whole message. Each section holds exactly as many entries as
/// its header count; bytes after the last section are ignored.
pub fn decode_message(bytes: &[u8]) -> Result<Message, ProtocolError> {
    let mut reader = WireReader::new(bytes);

    let header = decode_header(&mut reader).map_err(|e| e.in_section(Section::Header, 0))?;
    let questions = decode_section(
        &mut reader,
        header.question_count,
        Section::Question,
        decode_question,
    )?;
    let answers = decode_section(&mut reader, header.answer_count, Section::Answer, decode_rr)?;
    let authorities = decode_section(
        &mut reader,
        header.authority_count,
        Section::Authority,
        decode_rr,
    )?;
    let additionals = decode_section(
        &mut reader,
        header.additional_count,
        Section::Additional,
        decode_rr,
    )?;

    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

fn decode_section<'a, T>(
    reader: &mut WireReader<'a>,
    count: u16,
    section: Section,
    decode: fn(&mut WireReader<'a>) -> Result<T, ProtocolError>,
) -> Result<Vec<T>, ProtocolError> {
    let mut entries = Vec::new();
    for index in 0..count as usize {
        entries.push(decode(reader).map_err(|e| e.in_section(section, index))?);
    }
    Ok(entries)
}

pub fn encode_question<B: BufMut>(question: &Question, buf: &mut B) -> Result<(), ProtocolError> {
    encode_name(&question.name, buf)?;
    buf.put_u16(question.record_type.code());
    buf.put_u16(question.class.code());
    Ok(())
}

pub fn encode_rr<B: BufMut>(rr: &ResourceRecord, buf: &mut B) -> Result<(), ProtocolError> {
    if rr.data.len() > MAX_RDATA_LEN {
        return Err(ProtocolError::DataTooLong {
            len: rr.data.len(),
        });
    }
    encode_name(&rr.name, buf)?;
    buf.put_u16(rr.record_type.code());
    buf.put_u16(rr.class.code());
    buf.put_u32(rr.ttl);
    buf.put_u16(rr.data.len() as u16);
    buf.put_slice(&rr.data);
    Ok(())
}

/// Encodes `message` as a response: QR is set and the four counts are taken
/// from the sections actually written.
pub fn encode_message(message: &Message) -> Result<Bytes, ProtocolError> {
    let mut header = message.header;
    header.flags.set_response(true);
    header.question_count = section_count(Section::Question, message.questions.len())?;
    header.answer_count = section_count(Section::Answer, message.answers.len())?;
    header.authority_count = section_count(Section::Authority, message.authorities.len())?;
    header.additional_count = section_count(Section::Additional, message.additionals.len())?;

    let mut buf = BytesMut::with_capacity(512);
    encode_header(&header, &mut buf);

    for (index, question) in message.questions.iter().enumerate() {
        encode_question(question, &mut buf).map_err(|e| e.in_section(Section::Question, index))?;
    }
    for (section, records) in [
        (Section::Answer, &message.answers),
        (Section::Authority, &message.authorities),
        (Section::Additional, &message.additionals),
    ] {
        for (index, rr) in records.iter().enumerate() {
            encode_rr(rr, &mut buf).map_err(|e| e.in_section(section, index))?;
        }
    }

    Ok(buf.freeze())
}

/// Like [`encode_message`], but a reply longer than `max_len` is re-encoded
/// with only header and questions and the TC bit set.
pub fn encode_message_with_limit(message: &Message, max_len: usize) -> Result<Bytes, ProtocolError> {
    let encoded = encode_message(message)?;
    if encoded.len() <= max_len {
        return Ok(encoded);
    }

    let mut truncated = Message {
        header: message.header,
        questions: message.questions.clone(),
        ..Message::default()
    };
    truncated.header.flags.set_truncated(true);
    encode_message(&truncated)
}

fn section_count(section: Section, len: usize) -> Result<u16, ProtocolError> {
    if len > MAX_SECTION_LEN {
        return Err(ProtocolError::SectionTooLarge { section, len });
    }
    Ok(len as u16)
}
