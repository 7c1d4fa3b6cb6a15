use async_trait::async_trait;
use prionis_dns_domain::{DnsRecord, DomainError, RecordType};

/// Record store consulted by the dispatcher and by record management.
///
/// Implementations must be safe to call from many tasks at once; callers do
/// no locking of their own.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Records whose normalized domain equals `domain` (already lowercased,
    /// no trailing dot) and whose type is `record_type`, in storage order.
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    /// Stores a new record and returns it with its assigned id.
    async fn add_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError>;

    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError>;

    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError>;

    /// Replaces the record with `record.id`. Fails with `RecordNotFound`.
    async fn update_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError>;

    async fn delete_record(&self, id: i64) -> Result<(), DomainError>;
}
