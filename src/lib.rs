//! Homebuyer Finance - calculators for buying property in Germany
//!
//! This library provides:
//! - Purchase side costs (transfer tax, notary, land registry, agent, renovation, moving)
//!   and a cross-state comparison
//! - Rental ROI metrics, a 0-10 investment grade and a 10-year projection
//! - Mortgage eligibility scoring with loan, rate and document guidance
//!
//! All calculators are pure: no I/O, no shared mutable state.

pub mod error;
pub mod rounding;
pub mod tables;
pub mod hidden_costs;
pub mod roi;
pub mod financing;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, LoadError};
pub use tables::{RateTables, StateRate};
pub use hidden_costs::{HiddenCostEngine, HiddenCostInput, HiddenCostBreakdown, StateComparisonItem};
pub use roi::{RoiEngine, RoiInput, RoiBreakdown, ProjectionYear, RoiResult};
pub use financing::{FinancingEngine, FinancingInput, AssessmentResult};
pub use scenario::{ScenarioRunner, ScenarioComparison};
