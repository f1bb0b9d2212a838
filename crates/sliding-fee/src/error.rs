use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::intake::IncomeImportError;
use crate::workflows::sliding_fee::{EvaluationError, SlidingFeeServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Evaluation(EvaluationError),
    Import(IncomeImportError),
    Export(csv::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Evaluation(err) => write!(f, "evaluation error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Evaluation(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Import(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<EvaluationError> for AppError {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

impl From<IncomeImportError> for AppError {
    fn from(value: IncomeImportError) -> Self {
        Self::Import(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}

impl From<SlidingFeeServiceError> for AppError {
    fn from(value: SlidingFeeServiceError) -> Self {
        match value {
            SlidingFeeServiceError::Evaluation(err) => Self::Evaluation(err),
            SlidingFeeServiceError::Export(err) => Self::Export(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_unprocessable() {
        let response = AppError::from(EvaluationError::InvalidFamilySize(0)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn import_failures_map_to_bad_request() {
        let error = AppError::from(IncomeImportError::Row {
            row: 3,
            source: EvaluationError::InvalidFrequency("Daily".to_string()),
        });
        assert_eq!(
            error.to_string(),
            "import error: income row 3 rejected: unrecognized income frequency 'Daily'"
        );
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn service_errors_keep_their_category() {
        let error = AppError::from(SlidingFeeServiceError::Evaluation(
            EvaluationError::InvalidFrequency("x".to_string()),
        ));
        assert!(matches!(error, AppError::Evaluation(_)));
    }

    #[test]
    fn io_failures_map_to_internal_error() {
        let error = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert_eq!(error.to_string(), "io error: port taken");
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
