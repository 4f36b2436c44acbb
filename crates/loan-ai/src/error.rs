use crate::config::ConfigError;
use crate::scoring::artifacts::ArtifactError;
use crate::scoring::service::PredictError;
use crate::telemetry::TelemetryError;
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
    Artifacts(ArtifactError),
    Scoring(PredictError),
}

impl AppError {
    fn kind(&self) -> Option<&'static str> {
        match self {
            AppError::Artifacts(_) => Some("artifact"),
            AppError::Scoring(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Artifacts(err) => write!(f, "artifact error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
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
            AppError::Artifacts(err) => Some(err),
            AppError::Scoring(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Scoring(PredictError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Artifacts(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self.kind() {
            Some(kind) => Json(json!({ "error": self.to_string(), "kind": kind })),
            None => Json(json!({ "error": self.to_string() })),
        };
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

impl From<ArtifactError> for AppError {
    fn from(value: ArtifactError) -> Self {
        Self::Artifacts(value)
    }
}

impl From<PredictError> for AppError {
    fn from(value: PredictError) -> Self {
        Self::Scoring(value)
    }
}
