//! Applicant records and assessment output
//!
//! Status fields arrive as free-form strings from upstream forms. Anything not
//! in the known set becomes `Unrecognized` and scores conservatively instead
//! of failing.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Type of employment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentStatus {
    /// Beamter
    CivilServant,
    Permanent,
    FixedTerm,
    SelfEmployed,
    Freelance,
    Other,
    Unrecognized(String),
}

impl EmploymentStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "civil_servant" => EmploymentStatus::CivilServant,
            "permanent" => EmploymentStatus::Permanent,
            "fixed_term" => EmploymentStatus::FixedTerm,
            "self_employed" => EmploymentStatus::SelfEmployed,
            "freelance" => EmploymentStatus::Freelance,
            "other" => EmploymentStatus::Other,
            other => EmploymentStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EmploymentStatus::CivilServant => "civil_servant",
            EmploymentStatus::Permanent => "permanent",
            EmploymentStatus::FixedTerm => "fixed_term",
            EmploymentStatus::SelfEmployed => "self_employed",
            EmploymentStatus::Freelance => "freelance",
            EmploymentStatus::Other => "other",
            EmploymentStatus::Unrecognized(raw) => raw,
        }
    }

    /// Self-employed and freelance applicants document business income
    pub fn is_self_employed(&self) -> bool {
        matches!(self, EmploymentStatus::SelfEmployed | EmploymentStatus::Freelance)
    }
}

impl From<String> for EmploymentStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EmploymentStatus> for String {
    fn from(value: EmploymentStatus) -> Self {
        value.as_str().to_string()
    }
}

/// SCHUFA credit tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchufaRating {
    Excellent,
    Good,
    Satisfactory,
    Adequate,
    Poor,
    /// No SCHUFA history (e.g. recently arrived)
    Unknown,
    Unrecognized(String),
}

impl SchufaRating {
    pub fn parse(value: &str) -> Self {
        match value {
            "excellent" => SchufaRating::Excellent,
            "good" => SchufaRating::Good,
            "satisfactory" => SchufaRating::Satisfactory,
            "adequate" => SchufaRating::Adequate,
            "poor" => SchufaRating::Poor,
            "unknown" => SchufaRating::Unknown,
            other => SchufaRating::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SchufaRating::Excellent => "excellent",
            SchufaRating::Good => "good",
            SchufaRating::Satisfactory => "satisfactory",
            SchufaRating::Adequate => "adequate",
            SchufaRating::Poor => "poor",
            SchufaRating::Unknown => "unknown",
            SchufaRating::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for SchufaRating {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SchufaRating> for String {
    fn from(value: SchufaRating) -> Self {
        value.as_str().to_string()
    }
}

/// Residency status in Germany
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResidencyStatus {
    GermanCitizen,
    EuCitizen,
    /// Niederlassungserlaubnis or equivalent
    PermanentResident,
    TemporaryResident,
    NonEu,
    Unrecognized(String),
}

impl ResidencyStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "german_citizen" => ResidencyStatus::GermanCitizen,
            "eu_citizen" => ResidencyStatus::EuCitizen,
            "permanent_resident" => ResidencyStatus::PermanentResident,
            "temporary_resident" => ResidencyStatus::TemporaryResident,
            "non_eu" => ResidencyStatus::NonEu,
            other => ResidencyStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResidencyStatus::GermanCitizen => "german_citizen",
            ResidencyStatus::EuCitizen => "eu_citizen",
            ResidencyStatus::PermanentResident => "permanent_resident",
            ResidencyStatus::TemporaryResident => "temporary_resident",
            ResidencyStatus::NonEu => "non_eu",
            ResidencyStatus::Unrecognized(raw) => raw,
        }
    }

    /// Statuses that need residence permit documents
    pub fn needs_permit(&self) -> bool {
        matches!(self, ResidencyStatus::TemporaryResident | ResidencyStatus::NonEu)
    }
}

impl From<String> for ResidencyStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ResidencyStatus> for String {
    fn from(value: ResidencyStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Applicant profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingInput {
    pub employment_status: EmploymentStatus,
    pub employment_years: u32,
    pub monthly_net_income: f64,
    pub monthly_debt: f64,
    pub available_down_payment: f64,
    pub schufa_rating: SchufaRating,
    pub residency_status: ResidencyStatus,
}

impl FinancingInput {
    /// Schema-level checks a caller applies before invoking the engine
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("monthly_net_income", self.monthly_net_income),
            ("monthly_debt", self.monthly_debt),
            ("available_down_payment", self.available_down_payment),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EngineError::invalid(field, "must not be negative"));
            }
        }
        if let EmploymentStatus::Unrecognized(raw) = &self.employment_status {
            return Err(EngineError::invalid("employment_status", format!("unknown value {}", raw)));
        }
        if let SchufaRating::Unrecognized(raw) = &self.schufa_rating {
            return Err(EngineError::invalid("schufa_rating", format!("unknown value {}", raw)));
        }
        if let ResidencyStatus::Unrecognized(raw) = &self.residency_status {
            return Err(EngineError::invalid("residency_status", format!("unknown value {}", raw)));
        }
        Ok(())
    }
}

/// Sub-scores; their sum is the total score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0-20
    pub employment: f64,
    /// 0-20
    pub income_ratio: f64,
    /// 0-20
    pub down_payment: f64,
    /// 0-15
    pub schufa: f64,
    /// 0-15
    pub residency: f64,
    /// 0-10
    pub years_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.employment
            + self.income_ratio
            + self.down_payment
            + self.schufa
            + self.residency
            + self.years_bonus
    }
}

/// Qualitative approval likelihood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikelihoodLabel {
    High,
    Good,
    Moderate,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl LikelihoodLabel {
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= 80.0 {
            LikelihoodLabel::High
        } else if total_score >= 60.0 {
            LikelihoodLabel::Good
        } else if total_score >= 40.0 {
            LikelihoodLabel::Moderate
        } else if total_score >= 20.0 {
            LikelihoodLabel::Low
        } else {
            LikelihoodLabel::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikelihoodLabel::High => "High",
            LikelihoodLabel::Good => "Good",
            LikelihoodLabel::Moderate => "Moderate",
            LikelihoodLabel::Low => "Low",
            LikelihoodLabel::VeryLow => "Very Low",
        }
    }
}

impl std::fmt::Display for LikelihoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete eligibility assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score_breakdown: ScoreBreakdown,
    /// 0-100, one decimal
    pub total_score: f64,
    pub likelihood_label: LikelihoodLabel,
    pub max_loan_estimate: f64,
    /// Percent of purchase price (20.0 means 20%)
    pub recommended_down_payment_percent: f64,
    /// Annual percent
    pub expected_rate_min: f64,
    /// Annual percent
    pub expected_rate_max: f64,
    /// Ratio
    pub ltv_ratio: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub document_checklist: Vec<String>,
}
