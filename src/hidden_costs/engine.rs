//! Purchase-cost calculation and cross-state comparison

use super::types::{HiddenCostBreakdown, HiddenCostInput, StateComparisonItem};
use crate::error::EngineError;
use crate::rounding::round_currency;
use crate::tables::RateTables;

/// Fixed fee rates that do not vary by state
#[derive(Debug, Clone)]
pub struct HiddenCostConfig {
    /// Notary fee in percent of price
    pub notary_fee_percent: f64,

    /// Land registry (Grundbuch) fee in percent of price
    pub land_registry_percent: f64,

    /// Buyer's share of the agent commission in percent of price (incl. VAT)
    pub agent_commission_percent: f64,

    /// Flat moving cost estimate
    pub moving_cost: f64,
}

impl Default for HiddenCostConfig {
    fn default() -> Self {
        Self {
            notary_fee_percent: 1.5,
            land_registry_percent: 0.5,
            agent_commission_percent: 3.57,
            moving_cost: 3000.0,
        }
    }
}

/// Components shared by every state for a given price
struct FixedFees {
    notary_fee: f64,
    land_registry_fee: f64,
    agent_commission: f64,
}

/// Purchase-cost calculator
#[derive(Debug, Clone, Default)]
pub struct HiddenCostEngine {
    tables: RateTables,
    config: HiddenCostConfig,
}

impl HiddenCostEngine {
    pub fn new(tables: RateTables, config: HiddenCostConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Itemize the side costs of a purchase
    ///
    /// Fails only when `state_code` is not in the transfer-tax table.
    pub fn calculate(&self, input: &HiddenCostInput) -> Result<HiddenCostBreakdown, EngineError> {
        let state = self.tables.transfer_tax.get(&input.state_code)?;
        let price = input.property_price;

        let transfer_tax = round_currency(price * state.rate_percent / 100.0);
        let fees = self.fixed_fees(price, input.include_agent);
        let renovation_estimate = round_currency(price * input.renovation_level.multiplier());
        let moving_costs = if input.include_moving {
            self.config.moving_cost
        } else {
            0.0
        };

        let total_additional_costs = transfer_tax
            + fees.notary_fee
            + fees.land_registry_fee
            + fees.agent_commission
            + renovation_estimate
            + moving_costs;

        let additional_cost_percent = if price > 0.0 {
            round_currency(total_additional_costs / price * 100.0)
        } else {
            0.0
        };

        log::debug!(
            "side costs for {} in {}: {:.2} ({}%)",
            price, state.code, total_additional_costs, additional_cost_percent
        );

        Ok(HiddenCostBreakdown {
            property_price: price,
            state_code: state.code.clone(),
            state_name: state.name.clone(),
            transfer_tax_rate: state.rate_percent,
            transfer_tax,
            notary_fee: fees.notary_fee,
            land_registry_fee: fees.land_registry_fee,
            agent_commission: fees.agent_commission,
            renovation_estimate,
            moving_costs,
            total_additional_costs,
            total_purchase_cost: round_currency(price + total_additional_costs),
            additional_cost_percent,
        })
    }

    /// Compare transfer tax plus fixed fees across all states, cheapest first
    ///
    /// Ties keep table order.
    pub fn compare_states(&self, property_price: f64, include_agent: bool) -> Vec<StateComparisonItem> {
        let fees = self.fixed_fees(property_price, include_agent);

        let mut items: Vec<StateComparisonItem> = self
            .tables
            .states()
            .iter()
            .map(|state| {
                let transfer_tax = round_currency(property_price * state.rate_percent / 100.0);
                StateComparisonItem {
                    state_code: state.code.clone(),
                    state_name: state.name.clone(),
                    transfer_tax_rate: state.rate_percent,
                    transfer_tax,
                    notary_fee: fees.notary_fee,
                    land_registry_fee: fees.land_registry_fee,
                    agent_commission: fees.agent_commission,
                    total_cost: transfer_tax
                        + fees.notary_fee
                        + fees.land_registry_fee
                        + fees.agent_commission,
                }
            })
            .collect();

        // Vec::sort_by is stable
        items.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
        items
    }

    fn fixed_fees(&self, price: f64, include_agent: bool) -> FixedFees {
        FixedFees {
            notary_fee: round_currency(price * self.config.notary_fee_percent / 100.0),
            land_registry_fee: round_currency(price * self.config.land_registry_percent / 100.0),
            agent_commission: if include_agent {
                round_currency(price * self.config.agent_commission_percent / 100.0)
            } else {
                0.0
            },
        }
    }
}
