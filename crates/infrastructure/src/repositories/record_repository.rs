use async_trait::async_trait;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::{DnsRecord, DomainError, RecordClass, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (i64, String, String, String, i64, String);

/// Records kept in the `resource_records` table. Type and class are stored as
/// mnemonics, domains in lookup form.
pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<DnsRecord, DomainError> {
        let (id, domain, record_type, class, ttl, data) = row;
        let ttl = u32::try_from(ttl).map_err(|_| {
            DomainError::InvalidRecord(format!("record {} has out of range ttl {}", id, ttl))
        })?;

        Ok(DnsRecord {
            id: Some(id),
            domain,
            record_type: RecordType::from_mnemonic(&record_type)?,
            class: RecordClass::from_mnemonic(&class)?,
            ttl,
            data,
        })
    }

    fn rows_to_records(rows: Vec<RecordRow>) -> Result<Vec<DnsRecord>, DomainError> {
        rows.into_iter().map(Self::row_to_record).collect()
    }
}

fn mnemonics(record: &DnsRecord) -> Result<(&'static str, &'static str), DomainError> {
    let record_type = record.record_type.mnemonic().ok_or_else(|| {
        DomainError::InvalidRecord(format!("unsupported record type {}", record.record_type))
    })?;
    let class = record.class.mnemonic().ok_or_else(|| {
        DomainError::InvalidRecord(format!("unsupported record class {}", record.class))
    })?;
    Ok((record_type, class))
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn find_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let Some(type_name) = record_type.mnemonic() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, domain, type, class, ttl, data
             FROM resource_records WHERE domain = ? AND type = ?
             ORDER BY id",
        )
        .bind(domain)
        .bind(type_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to look up resource records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self), fields(domain = %record.domain))]
    async fn add_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        record.validate()?;
        let (record_type, class) = mnemonics(&record)?;

        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO resource_records (domain, type, class, ttl, data)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, domain, type, class, ttl, data",
        )
        .bind(record.lookup_key())
        .bind(record_type)
        .bind(class)
        .bind(i64::from(record.ttl))
        .bind(&record.data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert resource record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::row_to_record(row)
    }

    #[instrument(skip(self))]
    async fn get_record(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, domain, type, class, ttl, data FROM resource_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self))]
    async fn get_all_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, domain, type, class, ttl, data FROM resource_records ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list resource records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self), fields(id = ?record.id))]
    async fn update_record(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        let id = record
            .id
            .ok_or_else(|| DomainError::InvalidRecord("record has no id".to_string()))?;
        record.validate()?;
        let (record_type, class) = mnemonics(&record)?;

        let row = sqlx::query_as::<_, RecordRow>(
            "UPDATE resource_records
             SET domain = ?, type = ?, class = ?, ttl = ?, data = ?
             WHERE id = ?
             RETURNING id, domain, type, class, ttl, data",
        )
        .bind(record.lookup_key())
        .bind(record_type)
        .bind(class)
        .bind(i64::from(record.ttl))
        .bind(&record.data)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update resource record");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record)
            .transpose()?
            .ok_or(DomainError::RecordNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete_record(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM resource_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete resource record");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }
}
