use crate::dns_record::{DnsRecord, RecordClass, RecordType};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// One `[[records]]` entry of the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordEntry {
    pub domain: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default = "default_class")]
    pub class: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    pub data: String,
}

impl RecordEntry {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    pub fn to_record(&self) -> Result<DnsRecord, DomainError> {
        let record_type = RecordType::from_mnemonic(&self.record_type)?;
        let class = RecordClass::from_mnemonic(&self.class)?;
        let record = DnsRecord::new(
            self.domain.clone(),
            record_type,
            self.ttl_or_default(),
            self.data.clone(),
        )
        .with_class(class);
        record.validate()?;
        Ok(record)
    }
}

fn default_class() -> String {
    "IN".to_string()
}
