//! The durable form of an abuse report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted abuse report.
///
/// Derived from an inbound report at submission time and immutable after
/// that. `when` is assigned by the server when the record is built, never
/// taken from the client. The disjunction list is stored re-encoded as an
/// opaque blob; the stored schema does not depend on its in-memory shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbuseRecord {
    /// Server-assigned submission timestamp (UTC)
    pub when: DateTime<Utc>,
    /// "disclosure" or "signing"
    pub kind: String,
    /// Party that issued the original attribute request
    pub requestor: String,
    /// Server that relayed the request
    pub api_server: String,
    /// Opaque serialized attribute disjunction list
    pub attr_disj_list: String,
    /// Contact address of the reporter, if not anonymous
    pub reporter_email: Option<String>,
}
