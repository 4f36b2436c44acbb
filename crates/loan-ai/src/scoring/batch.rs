use std::io::Read;

use serde::Deserialize;

use super::artifacts::{Classifier, Scaler};
use super::domain::{
    ApplicantInput, CreditHistory, Decision, Dependents, Education, Gender, MaritalStatus,
    PropertyArea, SelfEmployment,
};
use super::service::{PredictError, ScoringService};

/// One scored row from an applicant export. `record` is the 1-based CSV line
/// the row came from, counting the header.
#[derive(Debug)]
pub struct BatchOutcome {
    pub record: u64,
    pub result: Result<Decision, BatchRowError>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchRowError {
    #[error("row is not a valid applicant record: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Predict(#[from] PredictError),
}

/// Score every row of an applicant CSV export. Bad rows are reported in
/// place rather than aborting the remainder of the file.
pub fn score_applicants<R, S, C>(service: &ScoringService<S, C>, reader: R) -> Vec<BatchOutcome>
where
    R: Read,
    S: Scaler,
    C: Classifier,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    for (index, row) in csv_reader.deserialize::<ApplicantRow>().enumerate() {
        let record = index as u64 + 2;
        let result = match row {
            Ok(row) => service
                .predict(&row.into_input())
                .map_err(BatchRowError::from),
            Err(err) => Err(BatchRowError::Malformed(err)),
        };
        outcomes.push(BatchOutcome { record, result });
    }

    outcomes
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(rename = "Gender")]
    gender: Gender,
    #[serde(rename = "Married")]
    married: MaritalStatus,
    #[serde(rename = "Dependents")]
    dependents: Dependents,
    #[serde(rename = "Education")]
    education: Education,
    #[serde(rename = "Self_Employed")]
    self_employed: SelfEmployment,
    #[serde(rename = "ApplicantIncome")]
    applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    loan_amount: f64,
    #[serde(rename = "Loan_Amount_Term")]
    loan_term_months: u32,
    #[serde(rename = "Credit_History")]
    credit_history: CreditHistory,
    #[serde(rename = "Property_Area")]
    property_area: PropertyArea,
}

impl ApplicantRow {
    fn into_input(self) -> ApplicantInput {
        ApplicantInput {
            gender: self.gender,
            married: self.married,
            dependents: self.dependents,
            education: self.education,
            self_employed: self.self_employed,
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term_months,
            credit_history: self.credit_history,
            property_area: self.property_area,
        }
    }
}
