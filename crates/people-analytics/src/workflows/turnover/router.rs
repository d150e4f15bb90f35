use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{FactorKind, ProfileSubmission};
use super::scoring::RiskAssessment;
use super::service::{TurnoverRiskService, TurnoverServiceError};
use crate::workflows::roster::RosterImporter;

/// Single-profile scoring request; `today` defaults to the service's reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRequest {
    #[serde(flatten)]
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Batch scoring request carrying a roster CSV inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    pub csv: String,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Per-row outcome of a roster scoring run. Rows are numbered from 1.
#[derive(Debug, Clone, Serialize)]
pub struct RosterRowView {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_factors: Option<Vec<FactorKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Router builder exposing the turnover risk endpoints.
pub fn turnover_router(service: Arc<TurnoverRiskService>) -> Router {
    Router::new()
        .route("/api/v1/turnover/assess", post(assess_handler))
        .route("/api/v1/turnover/roster", post(roster_handler))
        .with_state(service)
}

fn could_not_compute(status: StatusCode, detail: String) -> Response {
    let payload = json!({
        "error": "could not compute risk",
        "detail": detail,
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<TurnoverRiskService>>,
    payload: Result<axum::Json<AssessRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "could not compute risk");
            return could_not_compute(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let today = service.resolve_today(request.today);
    match service.assess(request.profile, today) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment.view())).into_response(),
        Err(TurnoverServiceError::Validation(violation)) => {
            could_not_compute(StatusCode::UNPROCESSABLE_ENTITY, violation.to_string())
        }
        Err(other) => could_not_compute(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn roster_handler(
    State(service): State<Arc<TurnoverRiskService>>,
    payload: Result<axum::Json<RosterRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let today = service.resolve_today(request.today);
    let entries = match RosterImporter::from_reader(Cursor::new(request.csv.into_bytes())) {
        Ok(entries) => entries,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let rows: Vec<RosterRowView> = service
        .assess_batch(entries, today)
        .into_iter()
        .enumerate()
        .map(|(index, result)| roster_row_view(index + 1, result))
        .collect();

    (StatusCode::OK, axum::Json(json!({ "rows": rows }))).into_response()
}

/// Collapse one batch result into its row view.
pub fn roster_row_view(
    row: usize,
    result: Result<RiskAssessment, TurnoverServiceError>,
) -> RosterRowView {
    match result {
        Ok(assessment) => {
            let view = assessment.view();
            RosterRowView {
                row,
                risk_score: Some(view.risk_score),
                tier: Some(view.tier),
                top_factors: Some(view.top_factors),
                error: None,
            }
        }
        Err(err) => RosterRowView {
            row,
            risk_score: None,
            tier: None,
            top_factors: None,
            error: Some(err.to_string()),
        },
    }
}
