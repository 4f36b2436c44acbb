use super::domain::{ApplicantInput, ALLOWED_LOAN_TERMS};

/// Rejections raised before any feature derivation or inference happens.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a non-negative finite number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("loan term of {months} months is not offered (allowed: 12, 60, 120, 180, 360)")]
    UnsupportedLoanTerm { months: u32 },
}

/// Check the numeric invariants of a submission. Categorical domains are
/// closed enums and cannot hold out-of-domain values past deserialization.
pub fn validate(input: &ApplicantInput) -> Result<(), ValidationError> {
    check_amount("applicant_income", input.applicant_income)?;
    check_amount("coapplicant_income", input.coapplicant_income)?;
    check_amount("loan_amount", input.loan_amount)?;

    if !ALLOWED_LOAN_TERMS.contains(&input.loan_term_months) {
        return Err(ValidationError::UnsupportedLoanTerm {
            months: input.loan_term_months,
        });
    }

    Ok(())
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}
