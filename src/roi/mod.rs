//! Rental investment return calculator
//!
//! Mortgage amortization, yield metrics, a 0-10 investment grade and a
//! year-by-year projection of equity and cash flow.

mod types;
mod amortization;
mod grading;
mod projection;
mod engine;
pub mod loader;

pub use types::{RoiInput, RoiBreakdown, ProjectionYear, RoiResult, GradeLabel};
pub use amortization::{monthly_payment, total_interest, AmortizationState};
pub use grading::{investment_grade, GradeInputs};
pub use engine::{RoiEngine, RoiConfig};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
