use prionis_dns_domain::ProtocolError;
use prionis_dns_infrastructure::dns::codec::{decode_name, encode_name, WireReader};

fn encode(name: &str) -> Result<Vec<u8>, ProtocolError> {
    let mut buf = Vec::new();
    encode_name(name, &mut buf).map(|_| buf)
}

fn decode(wire: &[u8]) -> Result<String, ProtocolError> {
    decode_name(&mut WireReader::new(wire))
}

/// A dotted name whose labels have exactly the given lengths.
fn name_from_labels(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(|&len| "a".repeat(len))
        .collect::<Vec<_>>()
        .join(".")
}

/// Wire form of a name with the given label lengths, built without validation.
fn wire_from_labels(lengths: &[usize]) -> Vec<u8> {
    let mut wire = Vec::new();
    for &len in lengths {
        wire.push(len as u8);
        wire.extend(std::iter::repeat(b'a').take(len));
    }
    wire.push(0);
    wire
}

// ── encoding ───────────────────────────────────────────────────────────────

#[test]
fn test_encode_writes_length_prefixed_labels() {
    let wire = encode("www.example.com").unwrap();
    assert_eq!(wire, b"\x03www\x07example\x03com\x00".to_vec());
}

#[test]
fn test_trailing_dot_encodes_identically() {
    assert_eq!(encode("example.com.").unwrap(), encode("example.com").unwrap());
}

#[test]
fn test_root_is_single_zero_byte() {
    assert_eq!(encode("").unwrap(), vec![0]);
    assert_eq!(encode(".").unwrap(), vec![0]);
}

#[test]
fn test_invalid_name_writes_nothing() {
    let mut buf = vec![0xAA];
    let result = encode_name("bad_label.example.com", &mut buf);

    assert!(matches!(result, Err(ProtocolError::InvalidLabel { .. })));
    assert_eq!(buf, vec![0xAA]);
}

// ── label and name boundaries ──────────────────────────────────────────────

#[test]
fn test_63_byte_label_accepted_64_rejected() {
    assert!(encode(&name_from_labels(&[63, 3])).is_ok());
    assert!(matches!(
        encode(&name_from_labels(&[64, 3])),
        Err(ProtocolError::InvalidLabel { .. })
    ));
}

#[test]
fn test_255_byte_encoded_name_accepted_256_rejected() {
    let longest = name_from_labels(&[63, 63, 63, 61]);
    assert_eq!(encode(&longest).map(|wire| wire.len()), Ok(255));

    let too_long = name_from_labels(&[63, 63, 63, 62]);
    assert_eq!(
        encode(&too_long),
        Err(ProtocolError::DomainTooLong { len: 256 })
    );

    let four_full_labels = name_from_labels(&[63, 63, 63, 63]);
    assert_eq!(
        encode(&four_full_labels),
        Err(ProtocolError::DomainTooLong { len: 257 })
    );
}

#[test]
fn test_decode_accepts_255_byte_name() {
    let wire = wire_from_labels(&[63, 63, 63, 61]);
    assert_eq!(wire.len(), 255);
    assert_eq!(decode(&wire).map(|name| name.len()), Ok(253));
}

#[test]
fn test_decode_stops_growing_name_past_255() {
    let wire = wire_from_labels(&[63, 63, 63, 62]);
    assert_eq!(wire.len(), 256);
    assert_eq!(decode(&wire), Err(ProtocolError::DomainTooLong { len: 256 }));
}

#[test]
fn test_decode_rejects_oversized_length_byte() {
    let mut wire = vec![64];
    wire.extend([b'a'; 64]);
    wire.push(0);

    assert!(matches!(decode(&wire), Err(ProtocolError::InvalidLabel { .. })));
}

#[test]
fn test_decode_rejects_compression_pointer() {
    assert!(matches!(
        decode(&[0xC0, 0x0C]),
        Err(ProtocolError::InvalidLabel { .. })
    ));
}

// ── decoding ───────────────────────────────────────────────────────────────

#[test]
fn test_round_trip() {
    let longest = name_from_labels(&[63, 63, 63, 63]);
    for name in ["", "com", "example.com", "a-1.b2.example.org", longest.as_str()] {
        let wire = encode(name).unwrap();
        assert_eq!(decode(&wire).unwrap(), name, "{name:?}");
    }
}

#[test]
fn test_decode_lowercases_labels() {
    let wire = b"\x07ExAmPlE\x03COM\x00";
    assert_eq!(decode(wire).unwrap(), "example.com");
}

#[test]
fn test_decode_consumes_exactly_the_name() {
    let wire = b"\x03foo\x00\xAB\xCD";
    let mut reader = WireReader::new(wire);

    assert_eq!(decode_name(&mut reader).unwrap(), "foo");
    assert_eq!(reader.position(), 5);
    assert_eq!(reader.remaining(), 2);
}

#[test]
fn test_every_prefix_is_truncated_input() {
    let wire = encode("mail.example.com").unwrap();

    for len in 0..wire.len() {
        let err = decode(&wire[..len]).unwrap_err();
        assert!(err.is_truncated(), "prefix {len}: {err:?}");
    }
}

#[test]
fn test_decode_rejects_invalid_characters() {
    assert!(matches!(
        decode(b"\x04a_b-\x00"),
        Err(ProtocolError::InvalidLabel { .. })
    ));
}
