//! Wire model for inbound abuse reports.

use serde::{Deserialize, Serialize};

/// One alternative set of attribute type identifiers.
pub type AttributeDisjunction = Vec<String>;

/// The attribute sets a verifier asked for, as a sequence of alternatives.
pub type AttributeDisjunctionList = Vec<AttributeDisjunction>;

/// An abuse report as submitted by the app.
///
/// Field names follow the wire format the apps already send. Decoding is
/// lenient: fields the client leaves out come through as zero values, since
/// we would rather store a thin report than drop it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AbuseReport {
    /// "disclosure" or "signing"
    #[serde(rename = "Type")]
    pub kind: String,
    pub requestor: String,
    #[serde(rename = "APIServer")]
    pub api_server: String,
    pub attr_disj_list: AttributeDisjunctionList,
    /// Absent means an anonymous report
    pub reporter_email: Option<String>,
}
