//! Mortgage financing eligibility assessment
//!
//! Six weighted sub-scores (0-100 in total), loan and rate estimates, and
//! advisory text for the applicant.

mod types;
mod scoring;
mod estimates;
mod advisory;
mod engine;

pub use types::{
    EmploymentStatus, SchufaRating, ResidencyStatus, FinancingInput,
    ScoreBreakdown, LikelihoodLabel, AssessmentResult,
};
pub use scoring::score_applicant;
pub use estimates::RateRange;
pub use engine::{FinancingEngine, FinancingConfig};
