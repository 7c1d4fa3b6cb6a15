#![allow(dead_code)]
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_application::use_cases::HandleDnsQueryUseCase;
use prionis_dns_domain::{Flags, Header, Opcode, Question, RecordClass, RecordType};
use prionis_dns_infrastructure::dns::codec::{encode_header, encode_question};
use prionis_dns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;

/// Builds raw query bytes the way a stub resolver would send them.
pub struct QueryBuilder {
    id: u16,
    flags: Flags,
    questions: Vec<Question>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        let mut flags = Flags::default();
        flags.set_recursion_desired(true);
        Self {
            id,
            flags,
            questions: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions
            .push(Question::new(name, record_type, RecordClass::IN));
        self
    }

    pub fn opcode(mut self, opcode: Opcode) -> Self {
        self.flags.set_opcode(opcode);
        self
    }

    pub fn response(mut self) -> Self {
        self.flags.set_response(true);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let header = Header {
            id: self.id,
            flags: self.flags,
            question_count: self.questions.len() as u16,
            ..Header::default()
        };

        let mut buf = Vec::new();
        encode_header(&header, &mut buf);
        for question in &self.questions {
            encode_question(question, &mut buf).unwrap();
        }
        buf
    }
}

pub fn handler_with(repository: Arc<dyn RecordRepository>) -> DnsServerHandler {
    DnsServerHandler::new(Arc::new(HandleDnsQueryUseCase::new(repository)))
}
