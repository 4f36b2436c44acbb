use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::config::FallbackMode;
use crate::scoring::artifacts::{Classifier, InferenceError, LogisticModel, Scaler, StandardScaler};
use crate::scoring::domain::{
    ApplicantInput, CreditHistory, Dependents, Education, Gender, MaritalStatus, PropertyArea,
    SelfEmployment,
};
use crate::scoring::features::{FeatureVector, FEATURE_COUNT};
use crate::scoring::router::decision_router;
use crate::scoring::service::ScoringService;

/// sigmoid(2.0), the confidence produced by the constant classifiers below.
pub(super) const CONSTANT_CONFIDENCE: f64 = 0.880_797_077_977_882_3;

pub(super) fn sample_input() -> ApplicantInput {
    ApplicantInput {
        gender: Gender::Male,
        married: MaritalStatus::Married,
        dependents: Dependents::Two,
        education: Education::Graduate,
        self_employed: SelfEmployment::No,
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 100.0,
        loan_term_months: 360,
        credit_history: CreditHistory::Good,
        property_area: PropertyArea::Urban,
    }
}

pub(super) fn identity_scaler() -> StandardScaler {
    serde_json::from_value(json!({
        "mean": vec![0.0; FEATURE_COUNT],
        "scale": vec![1.0; FEATURE_COUNT],
    }))
    .expect("scaler json")
}

/// Classifier whose logit ignores the features entirely; intercept 2.0
/// always approves, -2.0 always rejects, both with `CONSTANT_CONFIDENCE`.
pub(super) fn constant_classifier(intercept: f64) -> LogisticModel {
    serde_json::from_value(json!({
        "coefficients": vec![0.0; FEATURE_COUNT],
        "intercept": intercept,
    }))
    .expect("model json")
}

/// Classifier that approves exactly when credit history is good: the only
/// nonzero weight sits on the credit-history column.
pub(super) fn credit_gated_classifier() -> LogisticModel {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[9] = 4.0;
    serde_json::from_value(json!({
        "coefficients": coefficients,
        "intercept": -2.0,
    }))
    .expect("model json")
}

pub(super) struct FailingScaler;

impl Scaler for FailingScaler {
    fn transform(&self, _features: &FeatureVector) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        Err(InferenceError::NonFiniteFeature { index: 0 })
    }
}

pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _scaled: &[f64; FEATURE_COUNT]) -> Result<[f64; 2], InferenceError> {
        Err(InferenceError::NonFiniteScore)
    }
}

pub(super) fn approving_service() -> ScoringService {
    ScoringService::new(
        identity_scaler(),
        constant_classifier(2.0),
        FallbackMode::Disabled,
    )
}

pub(super) fn credit_gated_service() -> ScoringService {
    ScoringService::new(
        identity_scaler(),
        credit_gated_classifier(),
        FallbackMode::Disabled,
    )
}

pub(super) fn decision_router_with_service<S, C>(service: ScoringService<S, C>) -> axum::Router
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    decision_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
