use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::workflows::intake::RawIncomeEntry;
use crate::workflows::sliding_fee::{sliding_fee_router, EvaluationRequest, SlidingFeeService};

pub(super) fn hourly_row(
    member: &str,
    label: &str,
    rate: f64,
    hours_per_week: f64,
) -> RawIncomeEntry {
    RawIncomeEntry {
        member: member.to_string(),
        source: "Warehouse".to_string(),
        frequency: label.to_string(),
        amount: None,
        rate: Some(rate),
        hours_per_week: Some(hours_per_week),
    }
}

pub(super) fn amount_row(member: &str, label: &str, amount: f64) -> RawIncomeEntry {
    RawIncomeEntry {
        member: member.to_string(),
        source: "Benefits".to_string(),
        frequency: label.to_string(),
        amount: Some(amount),
        rate: None,
        hours_per_week: None,
    }
}

/// Family of four earning 31,200 from one hourly job and 24,000 from a monthly benefit.
pub(super) fn household_request() -> EvaluationRequest {
    EvaluationRequest {
        family_size: 4,
        entries: vec![
            hourly_row("Ana", "Hourly (Weekly)", 15.0, 40.0),
            amount_row("Luis", "Monthly", 2000.0),
        ],
    }
}

pub(super) fn household_payload() -> Value {
    json!({
        "family_size": 4,
        "entries": [
            {
                "member": "Ana",
                "source": "Warehouse",
                "frequency": "Hourly (Weekly)",
                "rate": 15,
                "hours_per_week": 40
            },
            {
                "member": "Luis",
                "source": "Benefits",
                "frequency": "monthly",
                "amount": 2000
            }
        ]
    })
}

pub(super) fn service() -> SlidingFeeService {
    SlidingFeeService::new("household_income.csv")
}

pub(super) fn router() -> axum::Router {
    sliding_fee_router(Arc::new(service()))
}

pub(super) fn json_request(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn assert_unprocessable(response: Response, fragment: &str) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(
        message.contains(fragment),
        "expected '{fragment}' in '{message}'"
    );
}
