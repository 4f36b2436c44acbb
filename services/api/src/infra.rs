use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use loan_ai::scoring::{
    CreditHistory, Dependents, Education, Gender, MaritalStatus, PropertyArea, SelfEmployment,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        _ => Err(format!("expected Male or Female, got '{raw}'")),
    }
}

pub(crate) fn parse_marital_status(raw: &str) -> Result<MaritalStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "married" => Ok(MaritalStatus::Married),
        "single" => Ok(MaritalStatus::Single),
        _ => Err(format!("expected Single or Married, got '{raw}'")),
    }
}

pub(crate) fn parse_dependents(raw: &str) -> Result<Dependents, String> {
    match raw.trim() {
        "0" => Ok(Dependents::Zero),
        "1" => Ok(Dependents::One),
        "2" => Ok(Dependents::Two),
        "3+" => Ok(Dependents::ThreePlus),
        _ => Err(format!("expected 0, 1, 2, or 3+, got '{raw}'")),
    }
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "graduate" => Ok(Education::Graduate),
        "not graduate" | "not-graduate" => Ok(Education::NotGraduate),
        _ => Err(format!("expected Graduate or 'Not Graduate', got '{raw}'")),
    }
}

pub(crate) fn parse_self_employment(raw: &str) -> Result<SelfEmployment, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(SelfEmployment::Yes),
        "no" => Ok(SelfEmployment::No),
        _ => Err(format!("expected Yes or No, got '{raw}'")),
    }
}

pub(crate) fn parse_credit_history(raw: &str) -> Result<CreditHistory, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "good" => Ok(CreditHistory::Good),
        "bad" => Ok(CreditHistory::Bad),
        _ => Err(format!("expected Good or Bad, got '{raw}'")),
    }
}

pub(crate) fn parse_property_area(raw: &str) -> Result<PropertyArea, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "urban" => Ok(PropertyArea::Urban),
        "semiurban" => Ok(PropertyArea::Semiurban),
        "rural" => Ok(PropertyArea::Rural),
        _ => Err(format!("expected Urban, Semiurban, or Rural, got '{raw}'")),
    }
}
