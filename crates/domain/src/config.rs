pub mod database;
pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use database::{DatabaseBackend, DatabaseConfig};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use records::RecordEntry;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
