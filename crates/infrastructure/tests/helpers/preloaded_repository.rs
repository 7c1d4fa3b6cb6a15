#![allow(dead_code)]
use async_trait::async_trait;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::{DnsRecord, DomainError, RecordType};

/// Serves records exactly as given, skipping the checks a real store applies
/// on write. Stands in for rows that predate those checks.
pub struct PreloadedRecordRepository {
    records: Vec<DnsRecord>,
}

impl PreloadedRecordRepository {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordRepository for PreloadedRecordRepository {
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.lookup_key() == domain && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn add_record(&self, _record: DnsRecord) -> Result<DnsRecord, DomainError> {
        Err(DomainError::DatabaseError("read-only store".to_string()))
    }

    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        Ok(self.records.iter().find(|r| r.id == Some(id)).cloned())
    }

    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self.records.clone())
    }

    async fn update_record(&self, _record: DnsRecord) -> Result<DnsRecord, DomainError> {
        Err(DomainError::DatabaseError("read-only store".to_string()))
    }

    async fn delete_record(&self, _id: i64) -> Result<(), DomainError> {
        Err(DomainError::DatabaseError("read-only store".to_string()))
    }
}
