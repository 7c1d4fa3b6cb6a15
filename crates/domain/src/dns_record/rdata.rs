use super::RecordType;
use crate::dns_name::validate_domain;
use crate::errors::ProtocolError;
use std::net::Ipv4Addr;

/// Longest character-string RFC 1035 allows (one length octet).
pub const MAX_CHARACTER_STRING: usize = 255;

/// RDLENGTH is a 16-bit field.
pub const MAX_RDATA_LEN: usize = u16::MAX as usize;

/// Typed RDATA parsed from the presentation form a repository stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    /// NS, CNAME, PTR, MD, MF, MB, MG and MR all carry one domain name.
    Name(String),
    Mx {
        preference: u16,
        exchange: String,
    },
    /// Split into 255-byte character-strings when encoded.
    Txt(String),
    Hinfo {
        cpu: String,
        os: String,
    },
    Null(Vec<u8>),
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

impl RecordData {
    pub fn parse(record_type: RecordType, text: &str) -> Result<Self, ProtocolError> {
        let invalid = |reason: String| ProtocolError::InvalidRecordData {
            record_type: record_type.to_string(),
            reason,
        };
        let text = text.trim();

        match record_type {
            RecordType::A => text
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|e| invalid(format!("{text:?} is not an IPv4 address: {e}"))),

            RecordType::NS
            | RecordType::CNAME
            | RecordType::PTR
            | RecordType::MD
            | RecordType::MF
            | RecordType::MB
            | RecordType::MG
            | RecordType::MR => {
                validate_domain(text)?;
                Ok(RecordData::Name(text.to_string()))
            }

            RecordType::MX => {
                let (preference, exchange) = text
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| invalid("expected \"<preference> <exchange>\"".into()))?;
                let preference = preference
                    .parse::<u16>()
                    .map_err(|e| invalid(format!("bad preference {preference:?}: {e}")))?;
                let exchange = exchange.trim();
                validate_domain(exchange)?;
                Ok(RecordData::Mx {
                    preference,
                    exchange: exchange.to_string(),
                })
            }

            RecordType::TXT => {
                let len = txt_wire_len(text);
                if len > MAX_RDATA_LEN {
                    return Err(ProtocolError::DataTooLong { len });
                }
                Ok(RecordData::Txt(text.to_string()))
            }

            RecordType::HINFO => {
                let (cpu, os) = text
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| invalid("expected \"<cpu> <os>\"".into()))?;
                let os = os.trim();
                if cpu.len() > MAX_CHARACTER_STRING || os.len() > MAX_CHARACTER_STRING {
                    return Err(invalid("character-string longer than 255 bytes".into()));
                }
                Ok(RecordData::Hinfo {
                    cpu: cpu.to_string(),
                    os: os.to_string(),
                })
            }

            RecordType::NULL => {
                if text.len() > MAX_RDATA_LEN {
                    return Err(ProtocolError::DataTooLong { len: text.len() });
                }
                Ok(RecordData::Null(text.as_bytes().to_vec()))
            }

            RecordType::SOA => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                let &[mname, rname, serial, refresh, retry, expire, minimum] = fields.as_slice() else {
                    return Err(invalid(format!(
                        "expected 7 fields, got {}",
                        fields.len()
                    )));
                };
                validate_domain(mname)?;
                validate_domain(rname)?;
                let number = |field: &str| {
                    field
                        .parse::<u32>()
                        .map_err(|e| invalid(format!("bad number {field:?}: {e}")))
                };
                Ok(RecordData::Soa {
                    mname: mname.to_string(),
                    rname: rname.to_string(),
                    serial: number(serial)?,
                    refresh: number(refresh)?,
                    retry: number(retry)?,
                    expire: number(expire)?,
                    minimum: number(minimum)?,
                })
            }

            other => Err(invalid(format!(
                "presentation format for {other} records is not supported"
            ))),
        }
    }
}

/// Encoded size of TXT data: one length octet per 255-byte character-string,
/// and a lone empty string for empty text.
pub fn txt_wire_len(text: &str) -> usize {
    text.len() + text.len().div_ceil(MAX_CHARACTER_STRING).max(1)
}
