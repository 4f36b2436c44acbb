//! Loan decision service core.
//!
//! Validates raw applicant attributes, derives the engineered feature vector
//! the classifier was fitted on, and turns scaler + classifier artifacts into
//! structured approval decisions.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
