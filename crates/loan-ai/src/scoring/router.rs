use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::artifacts::{Classifier, Scaler};
use super::domain::ApplicantInput;
use super::service::{PredictError, ScoringService};

/// Router builder exposing the decision endpoint.
pub fn decision_router<S, C>(service: Arc<ScoringService<S, C>>) -> Router
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/loans/decisions", post(decide_handler::<S, C>))
        .with_state(service)
}

pub(crate) async fn decide_handler<S, C>(
    State(service): State<Arc<ScoringService<S, C>>>,
    axum::Json(input): axum::Json<ApplicantInput>,
) -> Response
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    match service.predict(&input) {
        Ok(decision) => (StatusCode::OK, axum::Json(decision)).into_response(),
        Err(err @ PredictError::Validation(_)) => {
            let payload = json!({
                "error": err.to_string(),
                "kind": err.kind(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
                "kind": other.kind(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
