use std::sync::Arc;

use prionis_dns_domain::{DnsRecord, DomainError};
use tracing::info;

use crate::ports::RecordRepository;

pub struct DeleteRecordUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Deletes the record and returns what was removed.
    pub async fn execute(&self, id: i64) -> Result<DnsRecord, DomainError> {
        let existing = self
            .repository
            .get_record(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        self.repository.delete_record(id).await?;
        info!(id, domain = %existing.domain, "Resource record deleted");
        Ok(existing)
    }
}
