use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::roster::RosterImportError;
use crate::workflows::turnover::TurnoverServiceError;
use crate::workflows::workforce::MetricsError;
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
    Server(axum::Error),
    Roster(RosterImportError),
    Turnover(TurnoverServiceError),
    Metrics(MetricsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Roster(err) => write!(f, "roster error: {}", err),
            AppError::Turnover(err) => write!(f, "{}", err),
            AppError::Metrics(err) => write!(f, "metrics error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Turnover(err) => Some(err),
            AppError::Metrics(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Roster(_) => StatusCode::BAD_REQUEST,
            AppError::Metrics(_)
            | AppError::Turnover(TurnoverServiceError::Validation(_))
            | AppError::Turnover(TurnoverServiceError::UnreadableRow(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Turnover(TurnoverServiceError::Computation(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::Roster(value)
    }
}

impl From<TurnoverServiceError> for AppError {
    fn from(value: TurnoverServiceError) -> Self {
        Self::Turnover(value)
    }
}

impl From<MetricsError> for AppError {
    fn from(value: MetricsError) -> Self {
        Self::Metrics(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::roster::RosterRowError;
    use crate::workflows::turnover::ProfileViolation;

    #[test]
    fn validation_failures_map_to_unprocessable_entity() {
        let error = AppError::from(TurnoverServiceError::Validation(
            ProfileViolation::OutOfRange {
                field: "age",
                min: 20,
                max: 70,
                found: 12,
            },
        ));
        assert!(error.to_string().starts_with("could not compute risk"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn unreadable_roster_rows_map_to_unprocessable_entity() {
        let error = AppError::from(TurnoverServiceError::UnreadableRow(RosterRowError {
            row: 2,
            detail: "contract_start_date '01/06/2022' is not formatted as YYYY-MM-DD".to_string(),
        }));
        assert!(error
            .to_string()
            .starts_with("could not compute risk: roster row 2"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn missing_roster_columns_map_to_bad_request() {
        let error = AppError::from(RosterImportError::MissingColumn { column: "age" });
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_failures_map_to_internal_error() {
        let error = AppError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk unavailable",
        ));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
