//! In-memory form of an RFC 1035 message (§4.1).

use crate::dns_record::{RecordClass, RecordType};
use std::fmt;

/// Header FLAGS word.
///
/// ```text
///  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(pub u16);

const QR: u16 = 0x8000;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x7800;
const AA: u16 = 0x0400;
const TC: u16 = 0x0200;
const RD: u16 = 0x0100;
const RA: u16 = 0x0080;
const Z_MASK: u16 = 0x0070;
const RCODE_MASK: u16 = 0x000F;

impl Flags {
    pub fn is_response(self) -> bool {
        self.0 & QR != 0
    }

    pub fn opcode(self) -> Opcode {
        Opcode::from(((self.0 & OPCODE_MASK) >> OPCODE_SHIFT) as u8)
    }

    pub fn authoritative(self) -> bool {
        self.0 & AA != 0
    }

    pub fn truncated(self) -> bool {
        self.0 & TC != 0
    }

    pub fn recursion_desired(self) -> bool {
        self.0 & RD != 0
    }

    pub fn recursion_available(self) -> bool {
        self.0 & RA != 0
    }

    pub fn reserved(self) -> u8 {
        ((self.0 & Z_MASK) >> 4) as u8
    }

    pub fn response_code(self) -> ResponseCode {
        ResponseCode::from((self.0 & RCODE_MASK) as u8)
    }

    pub fn set_response(&mut self, on: bool) {
        self.set(QR, on);
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.0 = (self.0 & !OPCODE_MASK) | ((u16::from(u8::from(opcode)) << OPCODE_SHIFT) & OPCODE_MASK);
    }

    pub fn set_authoritative(&mut self, on: bool) {
        self.set(AA, on);
    }

    pub fn set_truncated(&mut self, on: bool) {
        self.set(TC, on);
    }

    pub fn set_recursion_desired(&mut self, on: bool) {
        self.set(RD, on);
    }

    pub fn set_recursion_available(&mut self, on: bool) {
        self.set(RA, on);
    }

    pub fn set_response_code(&mut self, code: ResponseCode) {
        self.0 = (self.0 & !RCODE_MASK) | u16::from(u8::from(code) & 0x0F);
    }

    fn set(&mut self, bit: u16, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    InverseQuery,
    Status,
    Reserved(u8),
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        match value {
            0 => Opcode::Query,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            n => Opcode::Reserved(n),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> Self {
        match value {
            Opcode::Query => 0,
            Opcode::InverseQuery => 1,
            Opcode::Status => 2,
            Opcode::Reserved(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Reserved(u8),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Reserved(_) => "RESERVED",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            n => ResponseCode::Reserved(n),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(value: ResponseCode) -> Self {
        match value {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Reserved(n) => n,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.class, self.record_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    /// RDATA; its length is the RDLENGTH written on the wire.
    pub data: Vec<u8>,
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({} bytes)",
            self.name,
            self.ttl,
            self.class,
            self.record_type,
            self.data.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Starts a reply to `query`: same id and questions, QR and AA set,
    /// opcode and RD echoed, empty record sections.
    pub fn reply_to(query: &Message) -> Self {
        let mut flags = Flags::default();
        flags.set_response(true);
        flags.set_opcode(query.header.flags.opcode());
        flags.set_authoritative(true);
        flags.set_recursion_desired(query.header.flags.recursion_desired());

        Self {
            header: Header {
                id: query.header.id,
                flags,
                question_count: query.header.question_count,
                ..Header::default()
            },
            questions: query.questions.clone(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Question,
    Answer,
    Authority,
    Additional,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Header => "header",
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        })
    }
}
