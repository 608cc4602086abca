//! SQLite-backed record store.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection};

use crate::record::AbuseRecord;
use crate::{Result, StoreError};

/// Schema version written to `PRAGMA user_version` after the DDL runs.
const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS abuse_records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        "when" TEXT NOT NULL,
        type TEXT NOT NULL,
        requestor TEXT NOT NULL,
        apiserver TEXT NOT NULL,
        attrdisjlist TEXT NOT NULL,
        reporteremail TEXT
    );
"#;

/// Write-only storage for abuse records.
///
/// Implementations must be safe to share across concurrent handler tasks;
/// any locking or pooling is theirs to arrange.
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Bring the schema up to date. Called once at startup; idempotent.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert one record. `when` must already be set by the caller.
    /// Atomic: either the full record is durably stored or nothing is.
    fn create(&self, record: &AbuseRecord) -> Result<()>;
}

/// Open the store named by the configured engine selector.
///
/// `sqlite` (alias `sqlite3`) is the supported engine; the DSN is the
/// database path. Anything else refuses at startup.
pub fn connect(engine: &str, dsn: &str) -> Result<Arc<dyn RecordStore>> {
    match engine {
        "sqlite" | "sqlite3" => Ok(Arc::new(SqliteStore::open(Path::new(dsn))?)),
        other => Err(StoreError::UnsupportedEngine(other.to_string())),
    }
}

/// [`RecordStore`] backed by a single SQLite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl RecordStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < SCHEMA_VERSION {
            conn.execute_batch(SCHEMA)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tracing::info!("created abuse record schema (version {})", SCHEMA_VERSION);
        }

        Ok(())
    }

    fn create(&self, record: &AbuseRecord) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"INSERT INTO abuse_records ("when", type, requestor, apiserver, attrdisjlist, reporteremail)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            params![
                record.when.to_rfc3339(),
                record.kind,
                record.requestor,
                record.api_server,
                record.attr_disj_list,
                record.reporter_email,
            ],
        )?;

        Ok(())
    }
}
