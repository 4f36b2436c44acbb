use super::domain::ApplicantInput;

/// Number of columns the scaler and classifier were fitted on.
pub const FEATURE_COUNT: usize = 14;

/// Ordered numeric encoding of one applicant.
///
/// Column order is load-bearing: the scaler and classifier were fitted
/// against exactly this sequence, so reordering silently corrupts every
/// downstream score. Built fresh per request and discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn derive(input: &ApplicantInput) -> Self {
        let loan_term = f64::from(input.loan_term_months);

        let total_income = input.applicant_income + input.coapplicant_income;
        let loan_income_ratio = ratio_or_zero(input.loan_amount, total_income);
        let emi = ratio_or_zero(input.loan_amount, loan_term);
        let income_emi_ratio = ratio_or_zero(total_income, emi);

        Self {
            values: [
                input.gender.indicator(),
                input.married.indicator(),
                input.dependents.count(),
                input.education.indicator(),
                input.self_employed.indicator(),
                input.applicant_income,
                input.coapplicant_income,
                input.loan_amount,
                loan_term,
                input.credit_history.indicator(),
                total_income,
                loan_income_ratio,
                emi,
                income_emi_ratio,
            ],
        }
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

// A zero denominator degrades the ratio to 0 instead of failing.
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
