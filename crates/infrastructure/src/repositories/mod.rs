pub mod in_memory_record_repository;
pub mod record_repository;

pub use in_memory_record_repository::InMemoryRecordRepository;
pub use record_repository::SqliteRecordRepository;
