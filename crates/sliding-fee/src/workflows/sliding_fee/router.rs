use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::service::{EvaluationRequest, SlidingFeeService, SlidingFeeServiceError};
use super::views::{EvaluationView, ThresholdScheduleView};

/// Router builder exposing household evaluation, export and threshold lookup.
pub fn sliding_fee_router(service: Arc<SlidingFeeService>) -> Router {
    Router::new()
        .route("/api/v1/sliding-fee/evaluate", post(evaluate_handler))
        .route("/api/v1/sliding-fee/export", post(export_handler))
        .route(
            "/api/v1/sliding-fee/thresholds/:family_size",
            get(thresholds_handler),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<SlidingFeeService>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };

    match service.evaluate(request) {
        Ok(evaluation) => (StatusCode::OK, Json(EvaluationView::from(&evaluation))).into_response(),
        Err(error) => unprocessable(error.to_string()),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<SlidingFeeService>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };

    match service.export(request) {
        Ok(artifact) => {
            let headers = [
                (header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", artifact.file_name),
                ),
            ];
            (StatusCode::OK, headers, artifact.content).into_response()
        }
        Err(SlidingFeeServiceError::Evaluation(error)) => unprocessable(error.to_string()),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn thresholds_handler(
    State(service): State<Arc<SlidingFeeService>>,
    family_size: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(family_size) = match family_size {
        Ok(family_size) => family_size,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };

    match service.thresholds(family_size) {
        Ok(schedule) => {
            (StatusCode::OK, Json(ThresholdScheduleView::from(&schedule))).into_response()
        }
        Err(error) => unprocessable(error.to_string()),
    }
}

fn unprocessable(message: String) -> Response {
    rejected(StatusCode::UNPROCESSABLE_ENTITY, message)
}

/// Extractor failures keep axum's status but use the JSON error body.
fn rejected(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (status, Json(payload)).into_response()
}
