use crate::errors::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// CLASS field of a question or resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordClass(pub u16);

pub const RECORD_CLASSES: [(&str, RecordClass); 4] = [
    ("IN", RecordClass::IN),
    ("CS", RecordClass::CS),
    ("CH", RecordClass::CH),
    ("HS", RecordClass::HS),
];

impl RecordClass {
    pub const IN: RecordClass = RecordClass(1);
    pub const CS: RecordClass = RecordClass(2);
    pub const CH: RecordClass = RecordClass(3);
    pub const HS: RecordClass = RecordClass(4);

    pub const fn code(self) -> u16 {
        self.0
    }

    pub fn mnemonic(self) -> Option<&'static str> {
        RECORD_CLASSES
            .iter()
            .find(|(_, class)| *class == self)
            .map(|(name, _)| *name)
    }

    pub fn from_mnemonic(s: &str) -> Result<Self, ProtocolError> {
        let upper = s.to_ascii_uppercase();
        RECORD_CLASSES
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|(_, class)| *class)
            .ok_or_else(|| ProtocolError::UnknownSymbol {
                kind: "class",
                symbol: s.to_string(),
            })
    }
}

impl Default for RecordClass {
    fn default() -> Self {
        RecordClass::IN
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        RecordClass(code)
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "CLASS{}", self.0),
        }
    }
}

impl FromStr for RecordClass {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s)
    }
}
