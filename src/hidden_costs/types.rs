//! Input and output records for the purchase-cost calculator

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Expected renovation scope after purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenovationLevel {
    #[default]
    None,
    Light,
    Medium,
    Full,
}

impl RenovationLevel {
    /// Renovation estimate as a share of the purchase price
    pub fn multiplier(&self) -> f64 {
        match self {
            RenovationLevel::None => 0.0,
            RenovationLevel::Light => 0.03,
            RenovationLevel::Medium => 0.08,
            RenovationLevel::Full => 0.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenovationLevel::None => "none",
            RenovationLevel::Light => "light",
            RenovationLevel::Medium => "medium",
            RenovationLevel::Full => "full",
        }
    }
}

impl std::str::FromStr for RenovationLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(RenovationLevel::None),
            "light" => Ok(RenovationLevel::Light),
            "medium" => Ok(RenovationLevel::Medium),
            "full" => Ok(RenovationLevel::Full),
            other => Err(EngineError::invalid(
                "renovation_level",
                format!("expected none, light, medium or full, got {}", other),
            )),
        }
    }
}

/// Purchase-cost calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCostInput {
    pub property_price: f64,

    /// Two-letter federal state code (e.g. "BY")
    pub state_code: String,

    /// Informational only; does not affect any cost component
    #[serde(default)]
    pub property_type: String,

    #[serde(default)]
    pub include_agent: bool,

    #[serde(default)]
    pub renovation_level: RenovationLevel,

    #[serde(default)]
    pub include_moving: bool,
}

impl HiddenCostInput {
    /// Schema-level checks a caller applies before invoking the engine
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.property_price.is_finite() && self.property_price > 0.0) {
            return Err(EngineError::invalid("property_price", "must be a positive amount"));
        }
        if self.state_code.len() != 2 {
            return Err(EngineError::invalid("state_code", "must be a two-letter code"));
        }
        Ok(())
    }
}

/// Itemized purchase side costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCostBreakdown {
    pub property_price: f64,
    pub state_code: String,
    pub state_name: String,
    /// Transfer-tax rate in percent
    pub transfer_tax_rate: f64,

    pub transfer_tax: f64,
    pub notary_fee: f64,
    pub land_registry_fee: f64,
    pub agent_commission: f64,
    pub renovation_estimate: f64,
    pub moving_costs: f64,

    /// Sum of the six components above
    pub total_additional_costs: f64,
    /// Price plus all side costs
    pub total_purchase_cost: f64,
    /// Side costs as percent of price
    pub additional_cost_percent: f64,
}

/// One state's row in a cross-state comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateComparisonItem {
    pub state_code: String,
    pub state_name: String,
    pub transfer_tax_rate: f64,
    pub transfer_tax: f64,
    pub notary_fee: f64,
    pub land_registry_fee: f64,
    pub agent_commission: f64,
    pub total_cost: f64,
}
