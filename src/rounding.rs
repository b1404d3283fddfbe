//! Decimal rounding for reported figures
//!
//! Figures are rounded on the exact binary value of the float, with exact ties
//! going to even. Fixed-precision float formatting follows the same rule, so
//! rounding goes through it.

/// Round to `digits` decimal places, ties to even on the exact binary value
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Round a currency amount to cents
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round a ratio (0-1 scale) to four places
pub fn round_ratio(value: f64) -> f64 {
    round_to(value, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ties_go_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.25, 1), 0.2);
    }

    #[test]
    fn test_inexact_halves_follow_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to(2.675, 2), 2.67);
        // 1.005 is stored as 1.00499999...
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(round_currency(14280.000000000002), 14280.0);
        assert_eq!(round_ratio(0.123456), 0.1235);
        assert_eq!(round_currency(-1234.5678), -1234.57);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
