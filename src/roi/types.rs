//! ROI input and output records
//!
//! Unit conventions matter here: `annual_appreciation`, `vacancy_rate` and
//! `mortgage_rate` are percents on a 0-100 scale, while `gross_yield`,
//! `net_yield`, `cap_rate` and `cash_on_cash_return` are ratios (0.08 = 8%).

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Rental property scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub monthly_rent: f64,
    pub monthly_expenses: f64,

    /// Annual property appreciation, percent (0-100)
    pub annual_appreciation: f64,

    /// Expected vacancy, percent (0-100)
    pub vacancy_rate: f64,

    /// Annual mortgage interest, percent (0-100)
    pub mortgage_rate: f64,

    /// Mortgage term in years
    pub mortgage_term: u32,
}

impl RoiInput {
    /// Financed amount; negative when the down payment exceeds the price
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// Schema-level checks a caller applies before invoking the engine
    ///
    /// `down_payment <= purchase_price` is deliberately not checked.
    pub fn validate(&self) -> Result<(), EngineError> {
        positive("purchase_price", self.purchase_price)?;
        non_negative("down_payment", self.down_payment)?;
        non_negative("monthly_rent", self.monthly_rent)?;
        non_negative("monthly_expenses", self.monthly_expenses)?;
        percent("annual_appreciation", self.annual_appreciation)?;
        percent("vacancy_rate", self.vacancy_rate)?;
        percent("mortgage_rate", self.mortgage_rate)?;

        if !(5..=40).contains(&self.mortgage_term) {
            return Err(EngineError::invalid("mortgage_term", "must be between 5 and 40 years"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(field, "must be a positive amount"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(field, "must not be negative"))
    }
}

fn percent(field: &'static str, value: f64) -> Result<(), EngineError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::invalid(field, "must be between 0 and 100"))
    }
}

/// Qualitative band for the investment grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeLabel {
    Excellent,
    Good,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl GradeLabel {
    pub fn from_grade(grade: f64) -> Self {
        if grade >= 8.0 {
            GradeLabel::Excellent
        } else if grade >= 6.0 {
            GradeLabel::Good
        } else if grade >= 4.0 {
            GradeLabel::Moderate
        } else if grade >= 2.0 {
            GradeLabel::Poor
        } else {
            GradeLabel::VeryPoor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLabel::Excellent => "Excellent",
            GradeLabel::Good => "Good",
            GradeLabel::Moderate => "Moderate",
            GradeLabel::Poor => "Poor",
            GradeLabel::VeryPoor => "Very Poor",
        }
    }
}

impl std::fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First-year return metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiBreakdown {
    pub loan_amount: f64,
    pub monthly_mortgage_payment: f64,
    pub gross_rental_income: f64,
    pub effective_rental_income: f64,
    pub net_operating_income: f64,
    pub annual_cash_flow: f64,

    // Ratios
    pub gross_yield: f64,
    pub net_yield: f64,
    pub cap_rate: f64,
    pub cash_on_cash_return: f64,

    /// 0.0-10.0, one decimal
    pub investment_grade: f64,
    pub investment_grade_label: GradeLabel,
}

/// Projected position at the end of a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub property_value: f64,
    pub equity: f64,
    pub cumulative_cash_flow: f64,
    pub total_return: f64,
    /// Ratio of total return to down payment
    pub total_return_percent: f64,
}

/// Breakdown plus projection for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub breakdown: RoiBreakdown,
    pub projections: Vec<ProjectionYear>,
}
