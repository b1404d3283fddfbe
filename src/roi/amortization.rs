//! Annuity mortgage arithmetic

/// Level monthly payment for an annuity mortgage
///
/// `annual_rate` is a percent (3.5 means 3.5%). Returns 0.0 when principal,
/// rate or term is not positive.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    if principal <= 0.0 || annual_rate <= 0.0 || term_years == 0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let months = (term_years * 12) as f64;
    let growth = (1.0 + monthly_rate).powf(months);

    principal * monthly_rate * growth / (growth - 1.0)
}

/// Interest paid over the full term (0.0 for degenerate inputs)
pub fn total_interest(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let payment = monthly_payment(principal, annual_rate, term_years);
    if payment == 0.0 {
        return 0.0;
    }
    payment * (term_years * 12) as f64 - principal
}

/// Outstanding balance tracked month by month
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Remaining principal, never below zero after a payment
    pub remaining_balance: f64,

    /// Monthly interest rate as a ratio
    pub monthly_rate: f64,

    /// Payment applied each month
    pub payment: f64,
}

impl AmortizationState {
    pub fn new(principal: f64, annual_rate: f64, payment: f64) -> Self {
        Self {
            remaining_balance: principal,
            monthly_rate: annual_rate / 100.0 / 12.0,
            payment,
        }
    }

    /// Apply one monthly payment
    pub fn advance_month(&mut self) {
        let interest = self.remaining_balance * self.monthly_rate;
        let principal_paid = self.payment - interest;
        self.remaining_balance = (self.remaining_balance - principal_paid).max(0.0);
    }

    /// Apply twelve monthly payments
    pub fn advance_year(&mut self) {
        for _ in 0..12 {
            self.advance_month();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_payment() {
        // 200k at 6% over 30 years
        let payment = monthly_payment(200_000.0, 6.0, 30);
        assert_abs_diff_eq!(payment, 1199.10, epsilon = 0.01);

        // 240k at 3.5% over 25 years
        let payment = monthly_payment(240_000.0, 3.5, 25);
        assert_abs_diff_eq!(payment, 1201.50, epsilon = 0.01);
    }

    #[test]
    fn test_degenerate_inputs_give_zero() {
        assert_eq!(monthly_payment(0.0, 4.0, 20), 0.0);
        assert_eq!(monthly_payment(-50_000.0, 4.0, 20), 0.0);
        assert_eq!(monthly_payment(100_000.0, 0.0, 20), 0.0);
        assert_eq!(monthly_payment(100_000.0, 4.0, 0), 0.0);
        assert_eq!(total_interest(100_000.0, 0.0, 20), 0.0);
    }

    #[test]
    fn test_payment_retires_balance_over_term() {
        for &(principal, rate, term) in &[
            (100_000.0, 1.0, 5_u32),
            (240_000.0, 3.5, 25),
            (500_000.0, 7.25, 40),
            (1_000.0, 12.0, 10),
        ] {
            let payment = monthly_payment(principal, rate, term);
            let mut state = AmortizationState::new(principal, rate, payment);
            for _ in 0..term {
                state.advance_year();
            }
            assert_abs_diff_eq!(state.remaining_balance, 0.0, epsilon = 0.01);
        }
    }

    #[test]
    fn test_balance_declines_and_floors_at_zero() {
        let payment = monthly_payment(100_000.0, 4.0, 10);
        let mut state = AmortizationState::new(100_000.0, 4.0, payment);

        let mut previous = state.remaining_balance;
        for _ in 0..10 {
            state.advance_year();
            assert!(state.remaining_balance < previous || state.remaining_balance == 0.0);
            previous = state.remaining_balance;
        }

        // Paying past the term never goes negative
        state.advance_year();
        assert!(state.remaining_balance >= 0.0);
    }

    #[test]
    fn test_total_interest() {
        let interest = total_interest(200_000.0, 6.0, 30);
        assert_abs_diff_eq!(interest, 1199.10 * 360.0 - 200_000.0, epsilon = 5.0);
    }

    #[test]
    fn test_zero_rate_keeps_balance() {
        let mut state = AmortizationState::new(80_000.0, 0.0, 0.0);
        state.advance_year();
        assert_eq!(state.remaining_balance, 80_000.0);
    }
}
