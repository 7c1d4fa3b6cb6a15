//! RFC 1035 wire format.
//!
//! Decoders read from a [`WireReader`], which checks the remaining length
//! before every read and reports the offset of a short read. Encoders
//! validate their input before writing anything.

pub mod header;
pub mod message;
pub mod name;
pub mod rdata;
mod reader;

pub use header::{decode_header, encode_header, HEADER_LEN};
pub use message::{
    decode_message, decode_question, decode_rr, encode_message, encode_message_with_limit,
    encode_question, encode_rr,
};
pub use name::{decode_name, encode_name};
pub use rdata::{encode_rdata, to_resource_record};
pub use reader::WireReader;
