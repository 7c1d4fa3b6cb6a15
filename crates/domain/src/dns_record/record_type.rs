use crate::errors::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// TYPE field of a question or resource record.
///
/// Any 16-bit code can be carried; the static table below names the RFC 1035
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(pub u16);

pub const RECORD_TYPES: [(&str, RecordType); 16] = [
    ("A", RecordType::A),
    ("NS", RecordType::NS),
    ("MD", RecordType::MD),
    ("MF", RecordType::MF),
    ("CNAME", RecordType::CNAME),
    ("SOA", RecordType::SOA),
    ("MB", RecordType::MB),
    ("MG", RecordType::MG),
    ("MR", RecordType::MR),
    ("NULL", RecordType::NULL),
    ("WKS", RecordType::WKS),
    ("PTR", RecordType::PTR),
    ("HINFO", RecordType::HINFO),
    ("MINFO", RecordType::MINFO),
    ("MX", RecordType::MX),
    ("TXT", RecordType::TXT),
];

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const MD: RecordType = RecordType(3);
    pub const MF: RecordType = RecordType(4);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const MB: RecordType = RecordType(7);
    pub const MG: RecordType = RecordType(8);
    pub const MR: RecordType = RecordType(9);
    pub const NULL: RecordType = RecordType(10);
    pub const WKS: RecordType = RecordType(11);
    pub const PTR: RecordType = RecordType(12);
    pub const HINFO: RecordType = RecordType(13);
    pub const MINFO: RecordType = RecordType(14);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);

    pub const fn code(self) -> u16 {
        self.0
    }

    pub fn mnemonic(self) -> Option<&'static str> {
        RECORD_TYPES
            .iter()
            .find(|(_, rt)| *rt == self)
            .map(|(name, _)| *name)
    }

    pub fn is_known(self) -> bool {
        self.mnemonic().is_some()
    }

    pub fn from_mnemonic(s: &str) -> Result<Self, ProtocolError> {
        let upper = s.to_ascii_uppercase();
        RECORD_TYPES
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|(_, rt)| *rt)
            .ok_or_else(|| ProtocolError::UnknownSymbol {
                kind: "type",
                symbol: s.to_string(),
            })
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}

impl FromStr for RecordType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s)
    }
}
