use super::{RecordClass, RecordData, RecordType};
use crate::dns_name::{normalize_domain, validate_domain};
use crate::errors::DomainError;

/// A resource record as a repository stores it: presentation-format data,
/// optional storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: Option<i64>,

    pub domain: String,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: String,
}

impl DnsRecord {
    pub fn new(
        domain: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            domain: domain.into(),
            record_type,
            class: RecordClass::IN,
            ttl,
            data: data.into(),
        }
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Lowercased domain without trailing dot, the form lookups match on.
    pub fn lookup_key(&self) -> String {
        normalize_domain(&self.domain)
    }

    pub fn rdata(&self) -> Result<RecordData, DomainError> {
        Ok(RecordData::parse(self.record_type, &self.data)?)
    }

    /// Checks everything a repository should refuse to store.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.record_type.is_known() {
            return Err(DomainError::InvalidRecord(format!(
                "unsupported record type {}",
                self.record_type
            )));
        }
        if self.class.mnemonic().is_none() {
            return Err(DomainError::InvalidRecord(format!(
                "unsupported record class {}",
                self.class
            )));
        }
        validate_domain(&self.lookup_key())?;
        self.rdata()?;
        Ok(())
    }
}
