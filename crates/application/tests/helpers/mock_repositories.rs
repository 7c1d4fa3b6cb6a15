#![allow(dead_code)]

use async_trait::async_trait;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::{DnsRecord, DomainError, RecordType};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
    failing_domains: Arc<RwLock<HashSet<String>>>,
    lookups: Arc<RwLock<Vec<(String, RecordType)>>>,
    next_id: Arc<AtomicUsize>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DnsRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.insert(record);
        }
        repo
    }

    pub fn insert(&self, record: DnsRecord) -> DnsRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let record = record.with_id(id);
        self.records.write().unwrap().push(record.clone());
        record
    }

    /// Lookups for this (normalized) domain fail with a database error.
    pub fn fail_on(&self, domain: &str) {
        self.failing_domains
            .write()
            .unwrap()
            .insert(domain.to_string());
    }

    pub fn lookups(&self) -> Vec<(String, RecordType)> {
        self.lookups.read().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.lookups
            .write()
            .unwrap()
            .push((domain.to_string(), record_type));

        if self.failing_domains.read().unwrap().contains(domain) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }

        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.lookup_key() == domain && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn add_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        Ok(self.insert(record))
    }

    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn update_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        let id = record
            .id
            .ok_or_else(|| DomainError::InvalidRecord("record has no id".to_string()))?;
        let mut records = self.records.write().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or(DomainError::RecordNotFound(id))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete_record(&self, id: i64) -> Result<(), DomainError> {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        if records.len() == before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }
}
