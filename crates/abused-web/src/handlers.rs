//! Route handlers for the intake endpoint.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use abused_store::AbuseRecord;

use crate::report::AbuseReport;
use crate::state::AppState;

/// Identity string for the root route
pub async fn index() -> &'static str {
    "Hi, this is irma-abused."
}

#[derive(Deserialize)]
pub struct SubmitForm {
    report: Option<String>,
}

/// Handle `POST /submit` requests used to submit abuse reports.
///
/// A missing or malformed `report` field comes back as a 400 and nothing is
/// stored. A storage failure is logged for operators; the client still gets
/// a 200.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    form: Option<Form<SubmitForm>>,
) -> Response {
    let raw = form.and_then(|Form(f)| f.report).unwrap_or_default();

    let report: AbuseReport = match serde_json::from_str(&raw) {
        Ok(report) => report,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Missing or malformed report form field: {}", err),
            )
                .into_response();
        }
    };

    // Re-encode the disjunction list for storage. Best-effort: a report is
    // never rejected at this step, an unencodable list is stored empty.
    let attr_disj_list = serde_json::to_string(&report.attr_disj_list).unwrap_or_default();

    let record = AbuseRecord {
        when: Utc::now(),
        kind: report.kind,
        requestor: report.requestor,
        api_server: report.api_server,
        attr_disj_list,
        reporter_email: report.reporter_email,
    };

    if let Err(err) = state.store.create(&record) {
        tracing::error!("failed to store abuse report: {}", err);
    }

    StatusCode::OK.into_response()
}
