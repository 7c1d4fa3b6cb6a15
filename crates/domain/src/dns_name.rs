//! Textual domain-name rules (RFC 1035 §2.3.1 preferred syntax).

use crate::errors::ProtocolError;

pub const MAX_LABEL_LEN: usize = 63;
/// Limit on the encoded form: length octets, label bytes and the terminator.
pub const MAX_DOMAIN_LEN: usize = 255;

/// Checks one label against `^[a-z0-9]+(-[a-z0-9]+)*$` and the 63-byte limit.
pub fn validate_label(label: &str) -> Result<(), ProtocolError> {
    let bytes = label.as_bytes();
    let well_formed = !bytes.is_empty()
        && bytes.len() <= MAX_LABEL_LEN
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes[0] != b'-'
        && bytes[bytes.len() - 1] != b'-'
        && !label.contains("--");

    if well_formed {
        Ok(())
    } else {
        Err(ProtocolError::InvalidLabel {
            label: label.to_string(),
        })
    }
}

/// Validates a dotted name. A single trailing dot is accepted; `""` and `"."`
/// are the root.
pub fn validate_domain(name: &str) -> Result<(), ProtocolError> {
    let len = encoded_len(name);
    if len > MAX_DOMAIN_LEN {
        return Err(ProtocolError::DomainTooLong { len });
    }
    labels(name).try_for_each(validate_label)
}

/// Size of `name` on the wire. Each dot stands in for the length octet of the
/// label after it, so a non-root name takes its text length plus two.
pub fn encoded_len(name: &str) -> usize {
    let relative = strip_root(name);
    if relative.is_empty() {
        1
    } else {
        relative.len() + 2
    }
}

/// Iterates the labels of a name, yielding nothing for the root.
pub fn labels(name: &str) -> impl Iterator<Item = &str> {
    let relative = strip_root(name);
    relative.split('.').filter(move |_| !relative.is_empty())
}

/// Lowercases and drops the trailing dot: the key form used for lookups.
pub fn normalize_domain(name: &str) -> String {
    strip_root(name).to_ascii_lowercase()
}

fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
