#![allow(dead_code)]
use async_trait::async_trait;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::{DnsRecord, DomainError, RecordType};
use prionis_dns_infrastructure::repositories::InMemoryRecordRepository;

/// Wraps an in-memory store; lookups for one domain fail.
pub struct FailingRecordRepository {
    inner: InMemoryRecordRepository,
    failing_domain: String,
}

impl FailingRecordRepository {
    pub fn new(records: Vec<DnsRecord>, failing_domain: &str) -> Self {
        Self {
            inner: InMemoryRecordRepository::with_records(records).unwrap(),
            failing_domain: failing_domain.to_string(),
        }
    }
}

#[async_trait]
impl RecordRepository for FailingRecordRepository {
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        if domain == self.failing_domain {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        self.inner.find_records(domain, record_type).await
    }

    async fn add_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        self.inner.add_record(record).await
    }

    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        self.inner.get_record(id).await
    }

    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.inner.get_all_records().await
    }

    async fn update_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        self.inner.update_record(record).await
    }

    async fn delete_record(&self, id: i64) -> Result<(), DomainError> {
        self.inner.delete_record(id).await
    }
}
