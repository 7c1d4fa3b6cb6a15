use std::sync::Arc;

use prionis_dns_domain::{DnsRecord, DomainError, RecordClass, RecordType};
use tracing::info;

use crate::ports::RecordRepository;

pub struct CreateRecordUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        domain: String,
        record_type: &str,
        class: Option<&str>,
        data: String,
        ttl: Option<u32>,
    ) -> Result<DnsRecord, DomainError> {
        let record_type = RecordType::from_mnemonic(record_type)?;
        let class = match class {
            Some(class) => RecordClass::from_mnemonic(class)?,
            None => RecordClass::IN,
        };

        let record = DnsRecord::new(domain, record_type, ttl.unwrap_or(300), data).with_class(class);
        record.validate()?;

        let created = self.repository.add_record(record).await?;
        info!(
            id = ?created.id,
            domain = %created.domain,
            record_type = %created.record_type,
            "Resource record created"
        );
        Ok(created)
    }
}
