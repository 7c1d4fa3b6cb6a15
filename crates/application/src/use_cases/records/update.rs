use std::sync::Arc;

use prionis_dns_domain::{DnsRecord, DomainError, RecordClass, RecordType};
use tracing::info;

use crate::ports::RecordRepository;

/// Fields to change; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct RecordChanges {
    pub domain: Option<String>,
    pub record_type: Option<String>,
    pub class: Option<String>,
    pub ttl: Option<u32>,
    pub data: Option<String>,
}

pub struct UpdateRecordUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl UpdateRecordUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64, changes: RecordChanges) -> Result<DnsRecord, DomainError> {
        let mut record = self
            .repository
            .get_record(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        if let Some(domain) = changes.domain {
            record.domain = domain;
        }
        if let Some(record_type) = changes.record_type {
            record.record_type = RecordType::from_mnemonic(&record_type)?;
        }
        if let Some(class) = changes.class {
            record.class = RecordClass::from_mnemonic(&class)?;
        }
        if let Some(ttl) = changes.ttl {
            record.ttl = ttl;
        }
        if let Some(data) = changes.data {
            record.data = data;
        }
        record.validate()?;

        let updated = self.repository.update_record(record).await?;
        info!(id, domain = %updated.domain, "Resource record updated");
        Ok(updated)
    }
}
