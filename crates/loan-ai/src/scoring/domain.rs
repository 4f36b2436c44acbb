use serde::{Deserialize, Serialize};

/// Loan terms the product actually offers, in months.
pub const ALLOWED_LOAN_TERMS: [u32; 5] = [12, 60, 120, 180, 360];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub(crate) fn indicator(self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub(crate) fn indicator(self) -> f64 {
        match self {
            MaritalStatus::Married => 1.0,
            MaritalStatus::Single => 0.0,
        }
    }
}

/// Dependent counts as collected on the application form; everything past
/// two is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependents {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3+")]
    ThreePlus,
}

impl Dependents {
    pub(crate) fn count(self) -> f64 {
        match self {
            Dependents::Zero => 0.0,
            Dependents::One => 1.0,
            Dependents::Two => 2.0,
            Dependents::ThreePlus => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Graduate,
    #[serde(rename = "Not Graduate", alias = "NotGraduate")]
    NotGraduate,
}

impl Education {
    pub(crate) fn indicator(self) -> f64 {
        match self {
            Education::Graduate => 1.0,
            Education::NotGraduate => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfEmployment {
    Yes,
    No,
}

impl SelfEmployment {
    pub(crate) fn indicator(self) -> f64 {
        match self {
            SelfEmployment::Yes => 1.0,
            SelfEmployment::No => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditHistory {
    Good,
    Bad,
}

impl CreditHistory {
    pub(crate) fn indicator(self) -> f64 {
        match self {
            CreditHistory::Good => 1.0,
            CreditHistory::Bad => 0.0,
        }
    }
}

/// Collected with every application. Not part of the trained feature set;
/// the classifier was fitted on 14 columns that do not include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

impl PropertyArea {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyArea::Urban => "Urban",
            PropertyArea::Semiurban => "Semiurban",
            PropertyArea::Rural => "Rural",
        }
    }
}

/// Raw applicant attributes as submitted, one request per applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub gender: Gender,
    pub married: MaritalStatus,
    pub dependents: Dependents,
    pub education: Education,
    pub self_employed: SelfEmployment,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    /// Requested principal, in thousands.
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_history: CreditHistory,
    pub property_area: PropertyArea,
}

/// Adjudication outcome returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub label: DecisionLabel,
    /// Probability mass of the predicted class, whichever class that is.
    pub probability: f64,
    pub source: DecisionSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionLabel {
    Approved,
    Rejected,
}

impl DecisionLabel {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionLabel::Approved => "Approved",
            DecisionLabel::Rejected => "Rejected",
        }
    }
}

/// Where a decision came from. Fallback decisions are randomized stand-ins
/// issued while real inference is unavailable and must never be read as
/// calibrated probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    Model,
    Fallback,
}

impl DecisionSource {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionSource::Model => "model",
            DecisionSource::Fallback => "fallback",
        }
    }
}
