//! Write-only storage gateway for abuse records.
//!
//! Reports submitted to the intake endpoint are normalized into
//! [`AbuseRecord`] values and handed to a [`RecordStore`]. The store is
//! intake-only: records go in, nothing comes back out. Review tooling reads
//! the database directly.

pub mod record;
pub mod store;

pub use record::AbuseRecord;
pub use store::{connect, RecordStore, SqliteStore};

/// Result type for abused-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while opening the store or writing a record
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported database engine: {0}")]
    UnsupportedEngine(String),
}
