//! Composite 0-10 investment grade

use crate::rounding::round_to;

const WEIGHT_GROSS_YIELD: f64 = 0.25;
const WEIGHT_CAP_RATE: f64 = 0.25;
const WEIGHT_CASH_ON_CASH: f64 = 0.25;
const WEIGHT_CASH_FLOW: f64 = 0.15;
const WEIGHT_VACANCY: f64 = 0.10;

/// Unrounded metrics the grade is computed from
#[derive(Debug, Clone, Copy)]
pub struct GradeInputs {
    /// Ratio
    pub gross_yield: f64,
    /// Ratio
    pub cap_rate: f64,
    /// Ratio
    pub cash_on_cash_return: f64,
    pub annual_cash_flow: f64,
    /// Percent, 0-100
    pub vacancy_rate: f64,
}

fn gross_yield_score(gross_yield: f64) -> f64 {
    if gross_yield >= 0.08 {
        10.0
    } else if gross_yield >= 0.06 {
        8.0
    } else if gross_yield >= 0.04 {
        6.0
    } else if gross_yield >= 0.02 {
        3.0
    } else {
        0.0
    }
}

fn cap_rate_score(cap_rate: f64) -> f64 {
    if cap_rate >= 0.07 {
        10.0
    } else if cap_rate >= 0.05 {
        7.0
    } else if cap_rate >= 0.03 {
        4.0
    } else {
        0.0
    }
}

fn cash_on_cash_score(cash_on_cash: f64) -> f64 {
    if cash_on_cash >= 0.15 {
        10.0
    } else if cash_on_cash >= 0.10 {
        8.0
    } else if cash_on_cash >= 0.05 {
        6.0
    } else if cash_on_cash >= 0.0 {
        3.0
    } else {
        0.0
    }
}

fn cash_flow_score(annual_cash_flow: f64) -> f64 {
    if annual_cash_flow > 0.0 {
        10.0
    } else if annual_cash_flow == 0.0 {
        5.0
    } else {
        0.0
    }
}

/// Lower vacancy earns more
fn vacancy_score(vacancy_rate: f64) -> f64 {
    if vacancy_rate < 5.0 {
        10.0
    } else if vacancy_rate <= 15.0 {
        6.0
    } else {
        2.0
    }
}

/// Weighted grade on a 0-10 scale, rounded to one decimal
pub fn investment_grade(inputs: &GradeInputs) -> f64 {
    let weighted = gross_yield_score(inputs.gross_yield) * WEIGHT_GROSS_YIELD
        + cap_rate_score(inputs.cap_rate) * WEIGHT_CAP_RATE
        + cash_on_cash_score(inputs.cash_on_cash_return) * WEIGHT_CASH_ON_CASH
        + cash_flow_score(inputs.annual_cash_flow) * WEIGHT_CASH_FLOW
        + vacancy_score(inputs.vacancy_rate) * WEIGHT_VACANCY;

    round_to(weighted, 1)
}
