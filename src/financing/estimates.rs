//! Loan, equity and rate estimates

use super::types::{ResidencyStatus, SchufaRating};
use serde::{Deserialize, Serialize};

/// Bank rule of thumb: loan capacity as a multiple of disposable monthly income
pub(crate) fn max_loan_estimate(monthly_net_income: f64, monthly_debt: f64, income_multiplier: f64) -> f64 {
    let disposable = monthly_net_income - monthly_debt;
    if disposable <= 0.0 {
        0.0
    } else {
        disposable * income_multiplier
    }
}

/// Suggested equity share in percent of the purchase price
pub(crate) fn recommended_down_payment_percent(
    residency: &ResidencyStatus,
    schufa: &SchufaRating,
    max_percent: f64,
) -> f64 {
    let mut percent: f64 = 20.0;

    if residency.needs_permit() {
        percent += 10.0;
    }
    if matches!(schufa, SchufaRating::Poor | SchufaRating::Unknown) {
        percent += 5.0;
    }

    // Replaces the adjustments above, not added to them
    if *residency == ResidencyStatus::GermanCitizen
        && matches!(schufa, SchufaRating::Excellent | SchufaRating::Good)
    {
        percent = 15.0;
    }

    percent.min(max_percent)
}

/// Expected annual interest band in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

impl RateRange {
    pub fn for_score(total_score: f64) -> Self {
        let (min, max) = if total_score >= 80.0 {
            (3.0, 3.8)
        } else if total_score >= 60.0 {
            (3.5, 4.5)
        } else if total_score >= 40.0 {
            (4.0, 5.5)
        } else if total_score >= 20.0 {
            (5.0, 7.0)
        } else {
            (6.0, 8.5)
        };
        Self { min, max }
    }
}

/// Loan share of loan plus equity
pub(crate) fn ltv_ratio(max_loan: f64, available_down_payment: f64) -> f64 {
    let total = available_down_payment + max_loan;
    if total == 0.0 {
        0.0
    } else {
        max_loan / total
    }
}
