//! Year-by-year projection of value, equity and cash flow

use super::amortization::AmortizationState;
use super::types::{ProjectionYear, RoiInput};
use crate::rounding::{round_currency, round_ratio};

/// Project `years` years forward from purchase
///
/// Each year's equity depends on the mortgage balance carried over from the
/// previous year, so the years are produced in order from a single running
/// amortization state.
pub(crate) fn project_years(
    input: &RoiInput,
    annual_cash_flow: f64,
    monthly_mortgage_payment: f64,
    years: u32,
    cash_flow_growth: f64,
) -> Vec<ProjectionYear> {
    let appreciation_factor = 1.0 + input.annual_appreciation / 100.0;
    let mut mortgage = AmortizationState::new(
        input.loan_amount(),
        input.mortgage_rate,
        monthly_mortgage_payment,
    );
    let mut cumulative_cash_flow = 0.0;
    let mut projections = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let property_value = input.purchase_price * appreciation_factor.powf(year as f64);

        mortgage.advance_year();
        let equity = property_value - mortgage.remaining_balance;

        let year_cash_flow = annual_cash_flow * (1.0 + cash_flow_growth).powf((year - 1) as f64);
        cumulative_cash_flow += year_cash_flow;

        let appreciation = property_value - input.purchase_price;
        let total_return = appreciation + cumulative_cash_flow;
        let total_return_percent = if input.down_payment == 0.0 {
            0.0
        } else {
            total_return / input.down_payment
        };

        projections.push(ProjectionYear {
            year,
            property_value: round_currency(property_value),
            equity: round_currency(equity),
            cumulative_cash_flow: round_currency(cumulative_cash_flow),
            total_return: round_currency(total_return),
            total_return_percent: round_ratio(total_return_percent),
        });
    }

    projections
}
