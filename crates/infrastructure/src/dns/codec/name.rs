use super::WireReader;
use bytes::BufMut;
use prionis_dns_domain::dns_name::{labels, validate_domain, MAX_DOMAIN_LEN, MAX_LABEL_LEN};
use prionis_dns_domain::ProtocolError;

/// Reads a length-prefixed label sequence up to and including the zero
/// terminator.
///
/// Labels are lowercased and joined with dots, without a trailing dot; the
/// root decodes to `""`. Compression pointers are not followed: any length
/// byte above 63 is rejected.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, ProtocolError> {
    let mut name = String::new();
    let mut wire_len = 1;

    loop {
        let len = reader.read_u8()? as usize;
        if len == 0 {
            break;
        }
        if len > MAX_LABEL_LEN {
            return Err(ProtocolError::InvalidLabel {
                label: format!("<length byte {:#04x} at offset {}>", len, reader.position() - 1),
            });
        }

        let label = reader.read_bytes(len)?;
        wire_len += len + 1;
        if wire_len > MAX_DOMAIN_LEN {
            return Err(ProtocolError::DomainTooLong { len: wire_len });
        }

        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label).to_ascii_lowercase());
    }

    validate_domain(&name)?;
    Ok(name)
}

/// Writes `name` as labels plus terminator. Nothing is written when the name
/// is invalid.
pub fn encode_name<B: BufMut>(name: &str, buf: &mut B) -> Result<(), ProtocolError> {
    validate_domain(name)?;

    for label in labels(name) {
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    buf.put_u8(0);
    Ok(())
}
