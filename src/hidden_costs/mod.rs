//! Purchase side costs (Kaufnebenkosten) for a German property purchase

mod types;
mod engine;

pub use types::{HiddenCostInput, HiddenCostBreakdown, RenovationLevel, StateComparisonItem};
pub use engine::{HiddenCostEngine, HiddenCostConfig};
