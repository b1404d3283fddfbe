//! Financing eligibility engine

use super::advisory;
use super::estimates::{self, RateRange};
use super::scoring::score_applicant;
use super::types::{
    AssessmentResult, EmploymentStatus, FinancingInput, LikelihoodLabel, ResidencyStatus, SchufaRating,
};
use crate::rounding::{round_currency, round_ratio, round_to};

/// Assessment constants
#[derive(Debug, Clone)]
pub struct FinancingConfig {
    /// Property price the down payment is scored against
    pub reference_property_price: f64,

    /// Loan capacity per unit of disposable monthly income
    pub income_multiplier: f64,

    /// Upper bound for the recommended down payment, percent
    pub max_down_payment_percent: f64,
}

impl Default for FinancingConfig {
    fn default() -> Self {
        Self {
            reference_property_price: 300_000.0,
            income_multiplier: 100.0,
            max_down_payment_percent: 40.0,
        }
    }
}

fn warn_unrecognized(input: &FinancingInput) {
    if let EmploymentStatus::Unrecognized(raw) = &input.employment_status {
        log::warn!("unrecognized employment status {:?}, using fallback score", raw);
    }
    if let SchufaRating::Unrecognized(raw) = &input.schufa_rating {
        log::warn!("unrecognized SCHUFA rating {:?}, using fallback score", raw);
    }
    if let ResidencyStatus::Unrecognized(raw) = &input.residency_status {
        log::warn!("unrecognized residency status {:?}, using fallback score", raw);
    }
}

/// Eligibility assessor
#[derive(Debug, Clone, Default)]
pub struct FinancingEngine {
    config: FinancingConfig,
}

impl FinancingEngine {
    pub fn new(config: FinancingConfig) -> Self {
        Self { config }
    }

    /// Score an applicant and estimate loan terms
    pub fn assess(&self, input: &FinancingInput) -> AssessmentResult {
        warn_unrecognized(input);
        let scores = score_applicant(input, self.config.reference_property_price);
        let total_score = round_to(scores.total(), 1);
        let likelihood_label = LikelihoodLabel::from_score(total_score);

        let max_loan_estimate = round_currency(estimates::max_loan_estimate(
            input.monthly_net_income,
            input.monthly_debt,
            self.config.income_multiplier,
        ));
        let recommended_down_payment_percent = estimates::recommended_down_payment_percent(
            &input.residency_status,
            &input.schufa_rating,
            self.config.max_down_payment_percent,
        );
        let rates = RateRange::for_score(total_score);
        let ltv_ratio = round_ratio(estimates::ltv_ratio(max_loan_estimate, input.available_down_payment));

        log::debug!(
            "financing score {} ({}), max loan {:.2}",
            total_score, likelihood_label, max_loan_estimate
        );

        AssessmentResult {
            strengths: advisory::strengths(&scores),
            improvements: advisory::improvements(&scores),
            document_checklist: advisory::document_checklist(input),
            score_breakdown: scores,
            total_score,
            likelihood_label,
            max_loan_estimate,
            recommended_down_payment_percent,
            expected_rate_min: rates.min,
            expected_rate_max: rates.max,
            ltv_ratio,
        }
    }
}
