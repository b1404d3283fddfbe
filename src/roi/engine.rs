//! ROI calculation engine

use super::amortization::monthly_payment;
use super::grading::{investment_grade, GradeInputs};
use super::projection::project_years;
use super::types::{GradeLabel, ProjectionYear, RoiBreakdown, RoiInput, RoiResult};
use crate::rounding::{round_currency, round_ratio};

/// Projection settings
#[derive(Debug, Clone)]
pub struct RoiConfig {
    /// Number of projected years
    pub projection_years: u32,

    /// Annual growth applied to the first-year cash flow (0.02 = 2%)
    pub cash_flow_growth: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            projection_years: 10,
            cash_flow_growth: 0.02,
        }
    }
}

/// Rental investment calculator
#[derive(Debug, Clone, Default)]
pub struct RoiEngine {
    config: RoiConfig,
}

impl RoiEngine {
    pub fn new(config: RoiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoiConfig {
        &self.config
    }

    /// First-year metrics and investment grade
    ///
    /// Never fails: a down payment above the price yields a negative loan and a
    /// zero mortgage payment rather than an error.
    pub fn calculate_roi(&self, input: &RoiInput) -> RoiBreakdown {
        let loan_amount = input.loan_amount();
        if loan_amount < 0.0 {
            log::warn!(
                "down payment {} exceeds purchase price {}",
                input.down_payment, input.purchase_price
            );
        }

        let monthly_mortgage = monthly_payment(loan_amount, input.mortgage_rate, input.mortgage_term);

        let gross_rental_income = input.monthly_rent * 12.0;
        let effective_rental_income = gross_rental_income * (1.0 - input.vacancy_rate / 100.0);
        let net_operating_income = effective_rental_income - input.monthly_expenses * 12.0;
        let annual_cash_flow = net_operating_income - monthly_mortgage * 12.0;

        let gross_yield = ratio(gross_rental_income, input.purchase_price);
        // Net yield and cap rate share one definition
        let cap_rate = ratio(net_operating_income, input.purchase_price);
        let cash_on_cash_return = ratio(annual_cash_flow, input.down_payment);

        let grade = investment_grade(&GradeInputs {
            gross_yield,
            cap_rate,
            cash_on_cash_return,
            annual_cash_flow,
            vacancy_rate: input.vacancy_rate,
        });
        let label = GradeLabel::from_grade(grade);

        log::debug!("roi grade {} ({}), cash flow {:.2}", grade, label, annual_cash_flow);

        RoiBreakdown {
            loan_amount: round_currency(loan_amount),
            monthly_mortgage_payment: round_currency(monthly_mortgage),
            gross_rental_income: round_currency(gross_rental_income),
            effective_rental_income: round_currency(effective_rental_income),
            net_operating_income: round_currency(net_operating_income),
            annual_cash_flow: round_currency(annual_cash_flow),
            gross_yield: round_ratio(gross_yield),
            net_yield: round_ratio(cap_rate),
            cap_rate: round_ratio(cap_rate),
            cash_on_cash_return: round_ratio(cash_on_cash_return),
            investment_grade: grade,
            investment_grade_label: label,
        }
    }

    /// Year-by-year projection from the first-year cash flow and mortgage payment
    pub fn calculate_projections(
        &self,
        input: &RoiInput,
        annual_cash_flow: f64,
        monthly_mortgage_payment: f64,
    ) -> Vec<ProjectionYear> {
        project_years(
            input,
            annual_cash_flow,
            monthly_mortgage_payment,
            self.config.projection_years,
            self.config.cash_flow_growth,
        )
    }

    /// Breakdown plus projection, projecting from the reported figures
    pub fn evaluate(&self, input: &RoiInput) -> RoiResult {
        let breakdown = self.calculate_roi(input);
        let projections = self.calculate_projections(
            input,
            breakdown.annual_cash_flow,
            breakdown.monthly_mortgage_payment,
        );

        RoiResult {
            breakdown,
            projections,
        }
    }
}

/// Division guarded against a zero denominator
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> RoiInput {
        RoiInput {
            purchase_price: 300_000.0,
            down_payment: 60_000.0,
            monthly_rent: 1_200.0,
            monthly_expenses: 250.0,
            annual_appreciation: 2.0,
            vacancy_rate: 5.0,
            mortgage_rate: 3.5,
            mortgage_term: 25,
        }
    }

    /// 8% gross yield, 7% cap rate, 15% cash-on-cash, 4% vacancy
    fn top_scenario() -> RoiInput {
        RoiInput {
            purchase_price: 300_000.0,
            down_payment: 140_000.0,
            monthly_rent: 2_000.0,
            monthly_expenses: 170.0,
            annual_appreciation: 2.0,
            vacancy_rate: 4.0,
            mortgage_rate: 0.0,
            mortgage_term: 20,
        }
    }

    #[test]
    fn test_sample_breakdown() {
        let engine = RoiEngine::default();
        let r = engine.calculate_roi(&sample());

        assert_eq!(r.loan_amount, 240_000.0);
        assert_eq!(r.monthly_mortgage_payment, 1201.5);
        assert_eq!(r.gross_rental_income, 14_400.0);
        assert_eq!(r.effective_rental_income, 13_680.0);
        assert_eq!(r.net_operating_income, 10_680.0);
        assert_eq!(r.annual_cash_flow, -3737.96);
        assert_eq!(r.gross_yield, 0.048);
        assert_eq!(r.net_yield, 0.0356);
        assert_eq!(r.cap_rate, r.net_yield);
        assert_eq!(r.cash_on_cash_return, -0.0623);

        // 6*0.25 + 4*0.25 + 0 + 0 + 6*0.10
        assert_eq!(r.investment_grade, 3.1);
        assert_eq!(r.investment_grade_label, GradeLabel::Poor);
    }

    #[test]
    fn test_ratios_are_not_percents() {
        let r = RoiEngine::default().calculate_roi(&sample());
        for value in [r.gross_yield, r.net_yield, r.cap_rate] {
            assert!(value > 0.0 && value < 1.0, "expected a ratio, got {}", value);
        }
    }

    #[test]
    fn test_top_grade_scenario() {
        let r = RoiEngine::default().calculate_roi(&top_scenario());

        assert_eq!(r.gross_yield, 0.08);
        assert_eq!(r.cap_rate, 0.07);
        assert_eq!(r.cash_on_cash_return, 0.15);
        assert_eq!(r.monthly_mortgage_payment, 0.0);
        assert_eq!(r.investment_grade, 10.0);
        assert_eq!(r.investment_grade_label, GradeLabel::Excellent);
    }

    #[test]
    fn test_bottom_grade_scenario() {
        let input = RoiInput {
            purchase_price: 500_000.0,
            down_payment: 50_000.0,
            monthly_rent: 600.0,
            monthly_expenses: 300.0,
            annual_appreciation: 1.0,
            vacancy_rate: 20.0,
            mortgage_rate: 5.0,
            mortgage_term: 30,
        };
        let r = RoiEngine::default().calculate_roi(&input);

        assert!(r.gross_yield < 0.02);
        assert!(r.cap_rate < 0.03);
        assert!(r.cash_on_cash_return < 0.0);
        assert!(r.annual_cash_flow < 0.0);
        // Only the vacancy floor (2 points at 10%) remains
        assert_eq!(r.investment_grade, 0.2);
        assert_eq!(r.investment_grade_label, GradeLabel::VeryPoor);
    }

    #[test]
    fn test_zero_down_payment_guard() {
        let input = RoiInput {
            down_payment: 0.0,
            ..sample()
        };
        let engine = RoiEngine::default();
        let r = engine.calculate_roi(&input);
        assert_eq!(r.cash_on_cash_return, 0.0);

        let projections = engine.calculate_projections(&input, r.annual_cash_flow, r.monthly_mortgage_payment);
        assert!(projections.iter().all(|p| p.total_return_percent == 0.0));
    }

    #[test]
    fn test_down_payment_above_price() {
        let input = RoiInput {
            down_payment: 320_000.0,
            ..sample()
        };
        let r = RoiEngine::default().calculate_roi(&input);

        assert_eq!(r.loan_amount, -20_000.0);
        assert_eq!(r.monthly_mortgage_payment, 0.0);
        assert_eq!(r.annual_cash_flow, r.net_operating_income);
    }

    #[test]
    fn test_sample_projection() {
        let engine = RoiEngine::default();
        let result = engine.evaluate(&sample());
        let p = &result.projections;

        assert_eq!(p.len(), 10);
        assert_eq!(p.iter().map(|y| y.year).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());

        assert_abs_diff_eq!(p[0].property_value, 306_000.0, epsilon = 0.005);
        assert_abs_diff_eq!(p[0].equity, 72_115.48, epsilon = 0.011);
        assert_abs_diff_eq!(p[0].cumulative_cash_flow, -3_737.96, epsilon = 0.005);
        assert_abs_diff_eq!(p[0].total_return, 2_262.04, epsilon = 0.011);
        assert_abs_diff_eq!(p[0].total_return_percent, 0.0377, epsilon = 1e-6);

        assert_abs_diff_eq!(p[9].property_value, 365_698.33, epsilon = 0.011);
        assert_abs_diff_eq!(p[9].equity, 197_629.73, epsilon = 0.011);
        assert_abs_diff_eq!(p[9].cumulative_cash_flow, -40_929.62, epsilon = 0.011);
        assert_abs_diff_eq!(p[9].total_return, 24_768.71, epsilon = 0.011);
        assert_abs_diff_eq!(p[9].total_return_percent, 0.4128, epsilon = 1e-6);
    }

    #[test]
    fn test_projection_monotonicity() {
        let engine = RoiEngine::default();
        let result = engine.evaluate(&top_scenario());
        let p = &result.projections;

        assert!(result.breakdown.annual_cash_flow >= 0.0);
        for pair in p.windows(2) {
            assert!(pair[1].property_value > pair[0].property_value);
            assert!(pair[1].cumulative_cash_flow >= pair[0].cumulative_cash_flow);
        }
    }

    #[test]
    fn test_cash_flow_grows_two_percent() {
        let engine = RoiEngine::default();
        let input = top_scenario();
        let p = engine.calculate_projections(&input, 10_000.0, 0.0);

        assert_eq!(p[0].cumulative_cash_flow, 10_000.0);
        assert_eq!(p[1].cumulative_cash_flow, 20_200.0);
        assert_eq!(p[2].cumulative_cash_flow, 30_604.0);
    }

    #[test]
    fn test_zero_rate_equity_is_value_minus_loan() {
        let engine = RoiEngine::default();
        let input = top_scenario();
        let p = engine.calculate_projections(&input, 0.0, 0.0);

        // No payment, no amortization: the full loan stays outstanding
        assert_eq!(p[0].equity, 306_000.0 - 160_000.0);
    }

    #[test]
    fn test_custom_projection_length() {
        let engine = RoiEngine::new(RoiConfig {
            projection_years: 3,
            ..Default::default()
        });
        assert_eq!(engine.evaluate(&sample()).projections.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let engine = RoiEngine::default();
        assert_eq!(engine.evaluate(&sample()), engine.evaluate(&sample()));
    }
}
