use std::sync::Arc;

use prionis_dns_domain::{DnsRecord, DomainError};

use crate::ports::RecordRepository;

pub struct ListRecordsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.repository.get_all_records().await
    }

    pub async fn get(&self, id: i64) -> Result<DnsRecord, DomainError> {
        self.repository
            .get_record(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))
    }
}
