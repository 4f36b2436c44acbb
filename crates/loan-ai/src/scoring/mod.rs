//! Applicant intake, feature derivation, and model-backed decisioning.
//!
//! The scaler and classifier are pre-trained artifacts consumed as opaque
//! parameter files; nothing in this module fits or updates them.

pub mod artifacts;
pub mod batch;
pub mod domain;
pub mod features;
pub mod router;
pub mod service;
pub mod validate;

#[cfg(test)]
mod tests;

pub use artifacts::{
    ArtifactBundle, ArtifactError, Classifier, InferenceError, LogisticModel, Scaler,
    StandardScaler,
};
pub use batch::{score_applicants, BatchOutcome, BatchRowError};
pub use domain::{
    ApplicantInput, CreditHistory, Decision, DecisionLabel, DecisionSource, Dependents, Education,
    Gender, MaritalStatus, PropertyArea, SelfEmployment, ALLOWED_LOAN_TERMS,
};
pub use features::{FeatureVector, FEATURE_COUNT};
pub use router::decision_router;
pub use service::{PredictError, ScoringService};
pub use validate::{validate, ValidationError};
