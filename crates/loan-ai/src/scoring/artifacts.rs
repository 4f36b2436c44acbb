use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::features::{FeatureVector, FEATURE_COUNT};
use crate::config::ArtifactConfig;

/// Normalization seam so the service can be exercised with canned or failing
/// implementations in tests.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<[f64; FEATURE_COUNT], InferenceError>;
}

/// Binary classifier seam. Probability mass is ordered `[rejected, approved]`.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<[f64; 2], InferenceError>;

    /// Discrete class, 1 meaning approval.
    fn predict(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<u8, InferenceError> {
        let proba = self.predict_proba(scaled)?;
        Ok(u8::from(proba[1] >= proba[0]))
    }
}

/// Errors raised while loading or checking artifact files.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact {} carries {found} `{field}` entries, expected {expected}", path.display())]
    Dimension {
        path: PathBuf,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("artifact {} has a non-positive scale entry at dimension {index}", path.display())]
    InvalidScale { path: PathBuf, index: usize },
}

/// Failures from the scaler or classifier on a well-formed vector.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("scaling produced a non-finite value at dimension {index}")]
    NonFiniteFeature { index: usize },
    #[error("classifier produced a non-finite score")]
    NonFiniteScore,
}

/// Pre-fitted standardization parameters, one centre/spread pair per column.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        read_artifact::<Self>(path)?.checked(path)
    }

    fn checked(self, path: &Path) -> Result<Self, ArtifactError> {
        for (field, params) in [("mean", &self.mean), ("scale", &self.scale)] {
            if params.len() != FEATURE_COUNT {
                return Err(ArtifactError::Dimension {
                    path: path.to_path_buf(),
                    field,
                    expected: FEATURE_COUNT,
                    found: params.len(),
                });
            }
        }

        if let Some(index) = self
            .scale
            .iter()
            .position(|spread| !spread.is_finite() || *spread <= 0.0)
        {
            return Err(ArtifactError::InvalidScale {
                path: path.to_path_buf(),
                index,
            });
        }

        Ok(self)
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (index, value) in features.values().iter().enumerate() {
            let normalized = (value - self.mean[index]) / self.scale[index];
            if !normalized.is_finite() {
                return Err(InferenceError::NonFiniteFeature { index });
            }
            scaled[index] = normalized;
        }
        Ok(scaled)
    }
}

/// Pre-fitted binary logistic model over the scaled feature columns.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let model = read_artifact::<Self>(path)?;
        if model.coefficients.len() != FEATURE_COUNT {
            return Err(ArtifactError::Dimension {
                path: path.to_path_buf(),
                field: "coefficients",
                expected: FEATURE_COUNT,
                found: model.coefficients.len(),
            });
        }
        Ok(model)
    }
}

impl Classifier for LogisticModel {
    fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<[f64; 2], InferenceError> {
        let logit = self
            .coefficients
            .iter()
            .zip(scaled)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;

        if !logit.is_finite() {
            return Err(InferenceError::NonFiniteScore);
        }

        let approved = 1.0 / (1.0 + (-logit).exp());
        Ok([1.0 - approved, approved])
    }
}

/// The scaler and classifier loaded together, once, at startup.
///
/// The label-encoder file the training pipeline exports alongside these is
/// not part of the scoring path and is never read.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub scaler: StandardScaler,
    pub classifier: LogisticModel,
}

impl ArtifactBundle {
    pub fn load(config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let scaler = StandardScaler::from_path(&config.scaler_path)?;
        let classifier = LogisticModel::from_path(&config.model_path)?;
        Ok(Self { scaler, classifier })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
