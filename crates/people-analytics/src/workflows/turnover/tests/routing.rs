use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::turnover::router::{assess_handler, roster_handler};
use crate::workflows::turnover::{AssessRequest, RosterRequest};

const ROSTER_HEADER: &str = "sanctions_count,birth_year,age,is_new_hire,prior_experience_months,contract_start_date,tenure_years,tenure_months,initial_salary_2020,current_salary_2020";

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize")))
        .expect("request builds")
}

#[tokio::test]
async fn assess_handler_returns_assessment_view() {
    let request = AssessRequest {
        profile: baseline_submission(),
        today: Some(today()),
    };

    let response = assess_handler(State(service()), Ok(axum::Json(request))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["tier"], "Low");
    assert_eq!(body["risk_score"], 0.08);
    assert_eq!(body["top_factors"], json!(["SalaryGrowth", "Tenure", "Age"]));
    assert_eq!(body["factors"].as_array().expect("factors").len(), 7);
    assert!(body["headline"]
        .as_str()
        .expect("headline")
        .starts_with("low turnover risk"));
}

#[tokio::test]
async fn assess_handler_returns_unprocessable_for_invalid_profile() {
    let mut profile = baseline_submission();
    profile.age = 12;
    let request = AssessRequest {
        profile,
        today: Some(today()),
    };

    let response = assess_handler(State(service()), Ok(axum::Json(request))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "could not compute risk");
    assert!(body["detail"].as_str().expect("detail").contains("age"));
}

#[tokio::test]
async fn assess_route_accepts_flat_json_payloads() {
    let payload = json!({
        "sanctions_count": 8,
        "birth_year": 1985,
        "age": 40,
        "is_new_hire": false,
        "prior_experience_months": 24,
        "contract_start_date": "2015-04-01",
        "tenure_years": 10,
        "tenure_months": 2,
        "initial_salary_2020": 42000,
        "current_salary_2020": 41000,
        "today": "2025-06-30"
    });

    let response = router()
        .oneshot(post("/api/v1/turnover/assess", &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let sanctions = body["factors"]
        .as_array()
        .expect("factors")
        .iter()
        .find(|factor| factor["name"] == "Sanctions")
        .expect("sanctions factor");
    let raw = sanctions["raw_score"].as_f64().expect("raw score");
    assert_close(raw, 0.66, 1e-12);
    assert_eq!(body["top_factors"][0], "Sanctions");
}

#[tokio::test]
async fn assess_route_rejects_malformed_dates() {
    let mut payload = serde_json::to_value(AssessRequest {
        profile: baseline_submission(),
        today: None,
    })
    .expect("serialize");
    payload["contract_start_date"] = json!("June 2022");

    let response = router()
        .oneshot(post("/api/v1/turnover/assess", &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "could not compute risk");
    assert!(body["detail"]
        .as_str()
        .expect("detail")
        .contains("deserialize"));
}

#[tokio::test]
async fn assess_route_reports_missing_fields_as_json() {
    let payload = json!({ "sanctions_count": 0, "age": 35 });

    let response = router()
        .oneshot(post("/api/v1/turnover/assess", &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "could not compute risk");
    assert!(body["detail"].as_str().expect("detail").contains("missing field"));
}

#[tokio::test]
async fn roster_handler_scores_each_row() {
    let csv = format!(
        "{ROSTER_HEADER}\n0,1990,35,no,36,2022-06-01,3,0,30000,35000\n0,1990,35,no,36,2022-06-01,3,0,30000,200000\n"
    );
    let request = RosterRequest {
        csv,
        today: Some(today()),
    };

    let response = roster_handler(State(service()), Ok(axum::Json(request))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let rows = body["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["row"], 1);
    assert_eq!(rows[0]["tier"], "Low");
    assert!(rows[0].get("error").is_none());
    assert_eq!(rows[1]["row"], 2);
    assert!(rows[1]["error"]
        .as_str()
        .expect("error")
        .contains("current_salary_2020"));
}

#[tokio::test]
async fn roster_route_scores_rows_around_a_malformed_one() {
    let payload = json!({
        "csv": format!(
            "{ROSTER_HEADER}\n0,1990,35,no,36,2022-06-01,3,0,30000,35000\n0,1990,35,no,36,01/06/2022,3,0,30000,35000\n0,1990,35,perhaps,36,2022-06-01,3,0,30000,35000\n0,1990,35,yes,36,2022-06-01,3,0,30000,35000\n"
        ),
        "today": "2025-06-30"
    });

    let response = router()
        .oneshot(post("/api/v1/turnover/roster", &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let rows = body["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["tier"], "Low");
    assert!(rows[1]["error"]
        .as_str()
        .expect("row 2 error")
        .contains("roster row 2"));
    assert!(rows[1].get("tier").is_none());
    assert!(rows[2]["error"]
        .as_str()
        .expect("row 3 error")
        .contains("is_new_hire"));
    assert!(rows[3]["risk_score"].is_number());
}

#[tokio::test]
async fn roster_route_rejects_headers_missing_profile_columns() {
    let payload = json!({
        "csv": "sanctions_count,age\n0,35\n",
        "today": "2025-06-30"
    });

    let response = router()
        .oneshot(post("/api/v1/turnover/roster", &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error")
        .contains("birth_year"));
}
