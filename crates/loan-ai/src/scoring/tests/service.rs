use super::common::*;
use crate::config::FallbackMode;
use crate::scoring::domain::{CreditHistory, DecisionLabel, DecisionSource};
use crate::scoring::service::{PredictError, ScoringService};
use crate::scoring::validate::ValidationError;

#[test]
fn model_decision_carries_predicted_class_mass() {
    let service = approving_service();
    let decision = service.predict(&sample_input()).expect("prediction");

    assert_eq!(decision.label, DecisionLabel::Approved);
    assert_eq!(decision.source, DecisionSource::Model);
    assert!((decision.probability - CONSTANT_CONFIDENCE).abs() < 1e-12);
}

#[test]
fn rejection_reports_confidence_in_the_rejection() {
    let service = ScoringService::new(
        identity_scaler(),
        constant_classifier(-2.0),
        FallbackMode::Disabled,
    );
    let decision = service.predict(&sample_input()).expect("prediction");

    assert_eq!(decision.label, DecisionLabel::Rejected);
    assert!((decision.probability - CONSTANT_CONFIDENCE).abs() < 1e-12);
}

#[test]
fn credit_history_flips_the_gated_model() {
    let service = credit_gated_service();

    let good = service.predict(&sample_input()).expect("prediction");
    assert_eq!(good.label, DecisionLabel::Approved);

    let mut input = sample_input();
    input.credit_history = CreditHistory::Bad;
    let bad = service.predict(&input).expect("prediction");
    assert_eq!(bad.label, DecisionLabel::Rejected);
    assert_eq!(bad.source, DecisionSource::Model);
}

#[test]
fn probability_stays_in_unit_interval() {
    let service = credit_gated_service();
    for credit_history in [CreditHistory::Good, CreditHistory::Bad] {
        let mut input = sample_input();
        input.credit_history = credit_history;
        let decision = service.predict(&input).expect("prediction");
        assert!((0.0..=1.0).contains(&decision.probability));
    }
}

#[test]
fn inference_failure_falls_back_when_policy_allows() {
    let service = ScoringService::new(identity_scaler(), FailingClassifier, FallbackMode::Enabled);
    let decision = service.predict(&sample_input()).expect("fallback decision");

    assert_eq!(decision.source, DecisionSource::Fallback);
    assert!((0.0..=1.0).contains(&decision.probability));
}

#[test]
fn inference_failure_surfaces_when_fallback_disabled() {
    let service = ScoringService::new(identity_scaler(), FailingClassifier, FallbackMode::Disabled);

    match service.predict(&sample_input()) {
        Err(PredictError::Inference(_)) => {}
        other => panic!("expected inference error, got {other:?}"),
    }
}

#[test]
fn degraded_service_issues_tagged_stand_ins() {
    let service: ScoringService = ScoringService::degraded("scaler file missing".to_string());

    assert!(service.is_degraded());
    assert_eq!(service.degraded_reason(), Some("scaler file missing"));

    let decision = service.predict(&sample_input()).expect("stand-in decision");
    assert_eq!(decision.source, DecisionSource::Fallback);
    assert!(matches!(
        decision.label,
        DecisionLabel::Approved | DecisionLabel::Rejected
    ));
}

#[test]
fn stand_in_confidence_stays_inside_its_bands() {
    let service: ScoringService = ScoringService::degraded("unavailable".to_string());

    for _ in 0..50 {
        let decision = service.predict(&sample_input()).expect("stand-in decision");
        match decision.label {
            DecisionLabel::Approved => {
                assert!((0.80..=0.98).contains(&decision.probability));
            }
            DecisionLabel::Rejected => {
                assert!((0.60..=0.75).contains(&decision.probability));
            }
        }
    }
}

#[test]
fn validation_short_circuits_before_inference() {
    let service = ScoringService::new(FailingScaler, FailingClassifier, FallbackMode::Enabled);

    let mut input = sample_input();
    input.coapplicant_income = -250.0;

    match service.predict(&input) {
        Err(PredictError::Validation(ValidationError::InvalidAmount { field, .. })) => {
            assert_eq!(field, "coapplicant_income");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
