use crate::dns_message::Section;
use thiserror::Error;

/// Failures of the wire codec and of the symbol tables.
///
/// Every variant is recoverable at request granularity: the dispatcher drops
/// the offending message and keeps serving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid label {label:?}")]
    InvalidLabel { label: String },

    #[error("encoded domain name is {len} bytes long (max 255)")]
    DomainTooLong { len: usize },

    #[error("unknown {kind} mnemonic: {symbol}")]
    UnknownSymbol { kind: &'static str, symbol: String },

    #[error("record data is {len} bytes long (max 65535)")]
    DataTooLong { len: usize },

    #[error("{section} section holds {len} entries (max 65535)")]
    SectionTooLarge { section: Section, len: usize },

    #[error("invalid {record_type} record data: {reason}")]
    InvalidRecordData { record_type: String, reason: String },

    #[error("{section}[{index}]: {source}")]
    Section {
        section: Section,
        index: usize,
        #[source]
        source: Box<ProtocolError>,
    },
}

impl ProtocolError {
    pub fn in_section(self, section: Section, index: usize) -> Self {
        ProtocolError::Section {
            section,
            index,
            source: Box::new(self),
        }
    }

    /// Innermost cause, with positional wrappers stripped.
    pub fn root(&self) -> &ProtocolError {
        match self {
            ProtocolError::Section { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.root(), ProtocolError::TruncatedInput { .. })
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Resource record not found: {0}")]
    RecordNotFound(i64),

    #[error("Invalid resource record: {0}")]
    InvalidRecord(String),

    #[error("Cannot bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
