use chrono::Local;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::scoring::{
    score_applicants, ApplicantInput, CreditHistory, Decision, DecisionLabel, Dependents,
    Education, Gender, MaritalStatus, PropertyArea, ScoringService, SelfEmployment,
};

/// Flags describing one applicant; defaults mirror the intake form.
#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[arg(long, default_value = "Male", value_parser = crate::infra::parse_gender)]
    gender: Gender,
    #[arg(long, default_value = "Single", value_parser = crate::infra::parse_marital_status)]
    married: MaritalStatus,
    #[arg(long, default_value = "0", value_parser = crate::infra::parse_dependents)]
    dependents: Dependents,
    #[arg(long, default_value = "Graduate", value_parser = crate::infra::parse_education)]
    education: Education,
    #[arg(long, default_value = "No", value_parser = crate::infra::parse_self_employment)]
    self_employed: SelfEmployment,
    /// Monthly applicant income in dollars
    #[arg(long, default_value_t = 5000.0)]
    applicant_income: f64,
    /// Monthly co-applicant income in dollars
    #[arg(long, default_value_t = 0.0)]
    coapplicant_income: f64,
    /// Requested principal in thousands of dollars
    #[arg(long, default_value_t = 100.0)]
    loan_amount: f64,
    /// Repayment window in months (12, 60, 120, 180, or 360)
    #[arg(long, default_value_t = 360)]
    loan_term_months: u32,
    #[arg(long, default_value = "Good", value_parser = crate::infra::parse_credit_history)]
    credit_history: CreditHistory,
    #[arg(long, default_value = "Urban", value_parser = crate::infra::parse_property_area)]
    property_area: PropertyArea,
}

impl ScoreArgs {
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

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of applicant rows to score
    #[arg(long)]
    input: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = ScoringService::load_or_degraded(&config.artifacts)?;
    let input = args.into_input();

    let decision = service.predict(&input)?;

    println!("Loan decision demo");
    println!(
        "Scored at {} for a {} applicant in {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        input.property_area.label().to_lowercase(),
        match input.married {
            MaritalStatus::Married => "a married household",
            MaritalStatus::Single => "a single household",
        }
    );
    render_decision(&decision);

    if service.is_degraded() {
        println!("\nNote: artifacts were unavailable; this is a stand-in decision, not model output.");
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = ScoringService::load_or_degraded(&config.artifacts)?;

    let file = File::open(&args.input)?;
    let outcomes = score_applicants(&service, file);

    let mut approved = 0u64;
    let mut rejected = 0u64;
    let mut failed = 0u64;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(decision) => {
                match decision.label {
                    DecisionLabel::Approved => approved += 1,
                    DecisionLabel::Rejected => rejected += 1,
                }
                println!(
                    "line {}: {} ({:.2}% confidence, {})",
                    outcome.record,
                    decision.label.label(),
                    decision.probability * 100.0,
                    decision.source.label()
                );
            }
            Err(err) => {
                failed += 1;
                println!("line {}: failed ({err})", outcome.record);
            }
        }
    }

    println!(
        "\n{} rows: {approved} approved, {rejected} rejected, {failed} failed",
        outcomes.len()
    );

    if service.is_degraded() {
        println!("Note: artifacts were unavailable; these are stand-in decisions, not model output.");
    }

    Ok(())
}

fn render_decision(decision: &Decision) {
    println!(
        "- Verdict: {} ({:.2}% confidence)",
        decision.label.label(),
        decision.probability * 100.0
    );
    println!("- Source: {}", decision.source.label());
}
