//! Sub-score lookup tables

use super::types::{EmploymentStatus, FinancingInput, ResidencyStatus, SchufaRating, ScoreBreakdown};

/// Stability of income source (0-20)
pub(crate) fn employment_score(status: &EmploymentStatus) -> f64 {
    match status {
        EmploymentStatus::CivilServant => 20.0,
        EmploymentStatus::Permanent => 18.0,
        EmploymentStatus::FixedTerm => 10.0,
        EmploymentStatus::SelfEmployed => 8.0,
        EmploymentStatus::Freelance => 6.0,
        EmploymentStatus::Other | EmploymentStatus::Unrecognized(_) => 5.0,
    }
}

/// Debt service relative to income (0-20); no income scores nothing
pub(crate) fn income_ratio_score(monthly_net_income: f64, monthly_debt: f64) -> f64 {
    if monthly_net_income <= 0.0 {
        return 0.0;
    }

    let ratio = monthly_debt / monthly_net_income;
    if ratio <= 0.15 {
        20.0
    } else if ratio <= 0.25 {
        16.0
    } else if ratio <= 0.35 {
        12.0
    } else if ratio <= 0.45 {
        6.0
    } else {
        2.0
    }
}

/// Equity relative to a reference property price (0-20)
pub(crate) fn down_payment_score(available_down_payment: f64, reference_price: f64) -> f64 {
    let share = if reference_price > 0.0 {
        available_down_payment / reference_price
    } else {
        0.0
    };

    if share >= 0.30 {
        20.0
    } else if share >= 0.20 {
        16.0
    } else if share >= 0.10 {
        12.0
    } else if share >= 0.05 {
        6.0
    } else {
        2.0
    }
}

/// Credit history (0-15)
pub(crate) fn schufa_score(rating: &SchufaRating) -> f64 {
    match rating {
        SchufaRating::Excellent => 15.0,
        SchufaRating::Good => 12.0,
        SchufaRating::Satisfactory => 9.0,
        SchufaRating::Adequate => 5.0,
        SchufaRating::Poor => 2.0,
        SchufaRating::Unknown | SchufaRating::Unrecognized(_) => 3.0,
    }
}

/// Residency (0-15)
pub(crate) fn residency_score(status: &ResidencyStatus) -> f64 {
    match status {
        ResidencyStatus::GermanCitizen => 15.0,
        ResidencyStatus::EuCitizen => 13.0,
        ResidencyStatus::PermanentResident => 11.0,
        ResidencyStatus::TemporaryResident => 6.0,
        ResidencyStatus::NonEu | ResidencyStatus::Unrecognized(_) => 4.0,
    }
}

/// Tenure with current employer (0-10)
pub(crate) fn years_bonus_score(employment_years: u32) -> f64 {
    match employment_years {
        5.. => 10.0,
        3..=4 => 8.0,
        2 => 6.0,
        1 => 4.0,
        0 => 2.0,
    }
}

/// All six sub-scores for an applicant
pub fn score_applicant(input: &FinancingInput, reference_price: f64) -> ScoreBreakdown {
    ScoreBreakdown {
        employment: employment_score(&input.employment_status),
        income_ratio: income_ratio_score(input.monthly_net_income, input.monthly_debt),
        down_payment: down_payment_score(input.available_down_payment, reference_price),
        schufa: schufa_score(&input.schufa_rating),
        residency: residency_score(&input.residency_status),
        years_bonus: years_bonus_score(input.employment_years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_table() {
        assert_eq!(employment_score(&EmploymentStatus::CivilServant), 20.0);
        assert_eq!(employment_score(&EmploymentStatus::Permanent), 18.0);
        assert_eq!(employment_score(&EmploymentStatus::FixedTerm), 10.0);
        assert_eq!(employment_score(&EmploymentStatus::SelfEmployed), 8.0);
        assert_eq!(employment_score(&EmploymentStatus::Freelance), 6.0);
        assert_eq!(employment_score(&EmploymentStatus::Other), 5.0);
        assert_eq!(employment_score(&EmploymentStatus::parse("retired")), 5.0);
    }

    #[test]
    fn test_income_ratio_table() {
        assert_eq!(income_ratio_score(4000.0, 600.0), 20.0); // 0.15
        assert_eq!(income_ratio_score(4000.0, 1000.0), 16.0); // 0.25
        assert_eq!(income_ratio_score(4000.0, 1400.0), 12.0); // 0.35
        assert_eq!(income_ratio_score(4000.0, 1800.0), 6.0); // 0.45
        assert_eq!(income_ratio_score(4000.0, 1801.0), 2.0);
        assert_eq!(income_ratio_score(4000.0, 0.0), 20.0);
    }

    #[test]
    fn test_no_income_scores_zero() {
        assert_eq!(income_ratio_score(0.0, 0.0), 0.0);
        assert_eq!(income_ratio_score(-100.0, 50.0), 0.0);
    }

    #[test]
    fn test_down_payment_table() {
        assert_eq!(down_payment_score(90_000.0, 300_000.0), 20.0);
        assert_eq!(down_payment_score(89_999.0, 300_000.0), 16.0);
        assert_eq!(down_payment_score(60_000.0, 300_000.0), 16.0);
        assert_eq!(down_payment_score(30_000.0, 300_000.0), 12.0);
        assert_eq!(down_payment_score(15_000.0, 300_000.0), 6.0);
        assert_eq!(down_payment_score(14_999.0, 300_000.0), 2.0);
        assert_eq!(down_payment_score(0.0, 300_000.0), 2.0);
    }

    #[test]
    fn test_schufa_and_residency_tables() {
        assert_eq!(schufa_score(&SchufaRating::Excellent), 15.0);
        assert_eq!(schufa_score(&SchufaRating::Good), 12.0);
        assert_eq!(schufa_score(&SchufaRating::Satisfactory), 9.0);
        assert_eq!(schufa_score(&SchufaRating::Adequate), 5.0);
        assert_eq!(schufa_score(&SchufaRating::Poor), 2.0);
        assert_eq!(schufa_score(&SchufaRating::Unknown), 3.0);
        assert_eq!(schufa_score(&SchufaRating::parse("AAA")), 3.0);

        assert_eq!(residency_score(&ResidencyStatus::GermanCitizen), 15.0);
        assert_eq!(residency_score(&ResidencyStatus::EuCitizen), 13.0);
        assert_eq!(residency_score(&ResidencyStatus::PermanentResident), 11.0);
        assert_eq!(residency_score(&ResidencyStatus::TemporaryResident), 6.0);
        assert_eq!(residency_score(&ResidencyStatus::NonEu), 4.0);
        assert_eq!(residency_score(&ResidencyStatus::parse("stateless")), 4.0);
    }

    #[test]
    fn test_years_bonus_table() {
        assert_eq!(years_bonus_score(0), 2.0);
        assert_eq!(years_bonus_score(1), 4.0);
        assert_eq!(years_bonus_score(2), 6.0);
        assert_eq!(years_bonus_score(3), 8.0);
        assert_eq!(years_bonus_score(4), 8.0);
        assert_eq!(years_bonus_score(5), 10.0);
        assert_eq!(years_bonus_score(30), 10.0);
    }
}
