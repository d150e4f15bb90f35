use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{employee_nps, turnover_rate, AbsenteeismInputs, MetricsError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnoverRateRequest {
    pub terminations: u32,
    pub average_headcount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnpsRequest {
    pub scores: Vec<u8>,
}

/// Stateless router for the workforce KPI calculators.
pub fn workforce_router() -> Router {
    Router::new()
        .route("/api/v1/workforce/turnover-rate", post(turnover_rate_handler))
        .route("/api/v1/workforce/enps", post(enps_handler))
        .route("/api/v1/workforce/absenteeism", post(absenteeism_handler))
}

fn metric_error(error: MetricsError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

pub(crate) async fn turnover_rate_handler(
    axum::Json(request): axum::Json<TurnoverRateRequest>,
) -> Response {
    match turnover_rate(request.terminations, request.average_headcount) {
        Ok(rate) => {
            let payload = json!({
                "terminations": request.terminations,
                "average_headcount": request.average_headcount,
                "turnover_rate_pct": rate,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => metric_error(err),
    }
}

pub(crate) async fn enps_handler(axum::Json(request): axum::Json<EnpsRequest>) -> Response {
    match employee_nps(&request.scores) {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(err) => metric_error(err),
    }
}

pub(crate) async fn absenteeism_handler(
    axum::Json(inputs): axum::Json<AbsenteeismInputs>,
) -> Response {
    match inputs.rate() {
        Ok(rate) => {
            let payload = json!({
                "effective_agreed_hours": inputs.effective_agreed_hours(),
                "absenteeism_rate_pct": rate,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => metric_error(err),
    }
}
