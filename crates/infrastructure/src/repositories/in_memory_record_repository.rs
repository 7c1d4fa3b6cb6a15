use async_trait::async_trait;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::config::RecordEntry;
use prionis_dns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Records held in process memory, typically seeded from the `[[records]]`
/// table of the config file. Contents are lost on exit.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<Vec<DnsRecord>>,
    next_id: AtomicI64,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DnsRecord>) -> Result<Self, DomainError> {
        let mut stored = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            record.validate()?;
            stored.push(Self::normalized(record, index as i64 + 1));
        }

        Ok(Self {
            next_id: AtomicI64::new(stored.len() as i64),
            records: RwLock::new(stored),
        })
    }

    pub fn from_config(entries: &[RecordEntry]) -> Result<Self, DomainError> {
        let records = entries
            .iter()
            .map(RecordEntry::to_record)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = records.len(), "Seeding in-memory record store");
        Self::with_records(records)
    }

    fn normalized(mut record: DnsRecord, id: i64) -> DnsRecord {
        record.domain = record.lookup_key();
        record.id = Some(id);
        record
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    #[instrument(skip(self))]
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.record_type == record_type && r.domain == domain)
            .cloned()
            .collect())
    }

    #[instrument(skip(self), fields(domain = %record.domain))]
    async fn add_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        record.validate()?;
        let record = Self::normalized(record, self.allocate_id());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == Some(id)).cloned())
    }

    #[instrument(skip(self))]
    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    #[instrument(skip(self), fields(id = ?record.id))]
    async fn update_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        let id = record
            .id
            .ok_or_else(|| DomainError::InvalidRecord("record has no id".to_string()))?;
        record.validate()?;

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or(DomainError::RecordNotFound(id))?;
        *slot = Self::normalized(record, id);
        Ok(slot.clone())
    }

    #[instrument(skip(self))]
    async fn delete_record(&self, id: i64) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        if records.len() == before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }
}
