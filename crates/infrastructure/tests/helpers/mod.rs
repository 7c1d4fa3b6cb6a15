pub mod builders;
pub mod failing_repository;
pub mod preloaded_repository;

pub use builders::{handler_with, QueryBuilder};
pub use failing_repository::FailingRecordRepository;
pub use preloaded_repository::PreloadedRecordRepository;
