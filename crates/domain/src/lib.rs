//! Prionis DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_name;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config};
pub use dns_message::{Flags, Header, Message, Opcode, Question, ResourceRecord, ResponseCode, Section};
pub use dns_record::{DnsRecord, RecordClass, RecordData, RecordType};
pub use errors::{DomainError, ProtocolError};
