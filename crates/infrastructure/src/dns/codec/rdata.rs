use super::encode_name;
use bytes::BufMut;
use prionis_dns_domain::dns_record::rdata::{MAX_CHARACTER_STRING, MAX_RDATA_LEN};
use prionis_dns_domain::{DnsRecord, DomainError, ProtocolError, RecordData, ResourceRecord};

/// Wire RDATA for typed record data (RFC 1035 §3.3).
pub fn encode_rdata(data: &RecordData) -> Result<Vec<u8>, ProtocolError> {
    let mut buf = Vec::new();

    match data {
        RecordData::A(addr) => buf.put_slice(&addr.octets()),
        RecordData::Name(name) => encode_name(name, &mut buf)?,
        RecordData::Mx {
            preference,
            exchange,
        } => {
            buf.put_u16(*preference);
            encode_name(exchange, &mut buf)?;
        }
        RecordData::Txt(text) => {
            if text.is_empty() {
                buf.put_u8(0);
            }
            for chunk in text.as_bytes().chunks(MAX_CHARACTER_STRING) {
                put_character_string(&mut buf, chunk);
            }
        }
        RecordData::Hinfo { cpu, os } => {
            put_character_string(&mut buf, cpu.as_bytes());
            put_character_string(&mut buf, os.as_bytes());
        }
        RecordData::Null(bytes) => buf.put_slice(bytes),
        RecordData::Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => {
            encode_name(mname, &mut buf)?;
            encode_name(rname, &mut buf)?;
            for value in [serial, refresh, retry, expire, minimum] {
                buf.put_u32(*value);
            }
        }
    }

    Ok(buf)
}

/// Converts a stored record into its wire form under its normalized owner
/// name. Fails when the RDATA would not fit the 16-bit RDLENGTH.
pub fn to_resource_record(record: &DnsRecord) -> Result<ResourceRecord, DomainError> {
    let data = encode_rdata(&record.rdata()?)?;
    if data.len() > MAX_RDATA_LEN {
        return Err(ProtocolError::DataTooLong { len: data.len() }.into());
    }
    Ok(ResourceRecord {
        name: record.lookup_key(),
        record_type: record.record_type,
        class: record.class,
        ttl: record.ttl,
        data,
    })
}

fn put_character_string(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.put_u8(bytes.len() as u8);
    buf.put_slice(bytes);
}
