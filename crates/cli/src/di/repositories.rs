use crate::bootstrap;
use prionis_dns_application::ports::RecordRepository;
use prionis_dns_domain::config::DatabaseBackend;
use prionis_dns_domain::Config;
use prionis_dns_infrastructure::repositories::{InMemoryRecordRepository, SqliteRecordRepository};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Repositories {
    pub records: Arc<dyn RecordRepository>,
}

impl Repositories {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let records: Arc<dyn RecordRepository> = match config.database.backend {
            DatabaseBackend::Memory => {
                let repository = InMemoryRecordRepository::from_config(&config.records)?;
                info!(records = config.records.len(), "Using in-memory record store");
                Arc::new(repository)
            }
            DatabaseBackend::Sqlite => {
                if !config.records.is_empty() {
                    warn!(
                        records = config.records.len(),
                        "[[records]] entries are only served by the memory backend; ignoring them"
                    );
                }
                let pool = bootstrap::init_database(&config.database).await?;
                Arc::new(SqliteRecordRepository::new(pool))
            }
        };

        Ok(Self { records })
    }
}
