use tracing::{debug, warn};

use super::artifacts::{
    ArtifactBundle, ArtifactError, Classifier, InferenceError, LogisticModel, Scaler,
    StandardScaler,
};
use super::domain::{ApplicantInput, Decision, DecisionLabel, DecisionSource};
use super::features::FeatureVector;
use super::validate::{validate, ValidationError};
use crate::config::{ArtifactConfig, FallbackMode};

/// Stateless scoring facade over the loaded artifacts.
///
/// Whether the service holds real artifacts or runs degraded is fixed at
/// construction.
pub struct ScoringService<S = StandardScaler, C = LogisticModel> {
    mode: ServiceMode<S, C>,
    fallback: FallbackMode,
}

enum ServiceMode<S, C> {
    Inference { scaler: S, classifier: C },
    Degraded { reason: String },
}

impl ScoringService<StandardScaler, LogisticModel> {
    /// Load both artifacts or fail; nothing is served from a partial load.
    pub fn load(config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let bundle = ArtifactBundle::load(config)?;
        Ok(Self::new(bundle.scaler, bundle.classifier, config.fallback))
    }

    /// Load the artifacts, falling back to an explicit degraded service when
    /// the configured policy allows it.
    pub fn load_or_degraded(config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        match Self::load(config) {
            Ok(service) => Ok(service),
            Err(err) if config.fallback == FallbackMode::Enabled => {
                warn!(error = %err, "artifacts unavailable, starting in degraded mode");
                Ok(Self::degraded(err.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}

impl<S, C> ScoringService<S, C>
where
    S: Scaler,
    C: Classifier,
{
    pub fn new(scaler: S, classifier: C, fallback: FallbackMode) -> Self {
        Self {
            mode: ServiceMode::Inference { scaler, classifier },
            fallback,
        }
    }

    /// A service with no usable artifacts; every decision it issues is a
    /// tagged stand-in.
    pub fn degraded(reason: String) -> Self {
        Self {
            mode: ServiceMode::Degraded { reason },
            fallback: FallbackMode::Enabled,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.mode, ServiceMode::Degraded { .. })
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match &self.mode {
            ServiceMode::Degraded { reason } => Some(reason),
            ServiceMode::Inference { .. } => None,
        }
    }

    /// Validate, derive features, scale, and classify one applicant.
    pub fn predict(&self, input: &ApplicantInput) -> Result<Decision, PredictError> {
        validate(input)?;
        let features = FeatureVector::derive(input);

        match &self.mode {
            ServiceMode::Inference { scaler, classifier } => {
                match infer(scaler, classifier, &features) {
                    Ok(decision) => Ok(decision),
                    Err(err) if self.fallback == FallbackMode::Enabled => {
                        warn!(error = %err, "inference failed on a well-formed vector, issuing fallback decision");
                        Ok(stand_in_decision())
                    }
                    Err(err) => Err(PredictError::Inference(err)),
                }
            }
            ServiceMode::Degraded { reason } => {
                debug!(reason = %reason, "serving stand-in decision while degraded");
                Ok(stand_in_decision())
            }
        }
    }
}

/// Error raised by a single prediction call.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl PredictError {
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::Validation(_) => "validation",
            PredictError::Inference(_) => "inference",
        }
    }
}

fn infer<S, C>(scaler: &S, classifier: &C, features: &FeatureVector) -> Result<Decision, InferenceError>
where
    S: Scaler,
    C: Classifier,
{
    let scaled = scaler.transform(features)?;
    let proba = classifier.predict_proba(&scaled)?;
    let class = classifier.predict(&scaled)?;

    // The reported probability is the mass of whichever class was chosen,
    // not the approval probability.
    let (label, probability) = if class == 1 {
        (DecisionLabel::Approved, proba[1])
    } else {
        (DecisionLabel::Rejected, proba[0])
    };

    Ok(Decision {
        label,
        probability,
        source: DecisionSource::Model,
    })
}

// Stand-in draw used while real inference is unavailable: approval odds
// 0.7, with a fixed confidence band per label.
fn stand_in_decision() -> Decision {
    let label = if fastrand::f64() > 0.3 {
        DecisionLabel::Approved
    } else {
        DecisionLabel::Rejected
    };
    let probability = match label {
        DecisionLabel::Approved => 0.80 + fastrand::f64() * 0.18,
        DecisionLabel::Rejected => 0.60 + fastrand::f64() * 0.15,
    };

    Decision {
        label,
        probability,
        source: DecisionSource::Fallback,
    }
}
