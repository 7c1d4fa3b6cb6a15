#![allow(dead_code)]
use prionis_dns_domain::{DnsRecord, RecordClass, RecordType};

pub struct DnsRecordBuilder {
    domain: String,
    record_type: RecordType,
    class: RecordClass,
    ttl: u32,
    data: String,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 3600,
            data: "127.0.0.1".to_string(),
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(self.domain, self.record_type, self.ttl, self.data).with_class(self.class)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
