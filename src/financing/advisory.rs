//! Applicant-facing advice derived from the sub-scores

use super::types::{FinancingInput, ResidencyStatus, ScoreBreakdown};

const BASE_DOCUMENTS: [&str; 6] = [
    "Valid passport or national ID card",
    "Payslips for the last three months",
    "Employment contract or proof of employment",
    "Bank statements for the last three months",
    "Current SCHUFA credit report",
    "Income tax assessment (Einkommensteuerbescheid) for the last two years",
];

pub(crate) fn strengths(scores: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();

    if scores.employment >= 16.0 {
        out.push("Stable employment that lenders rate highly".to_string());
    }
    if scores.income_ratio >= 16.0 {
        out.push("Low existing debt relative to income".to_string());
    }
    if scores.down_payment >= 16.0 {
        out.push("Substantial equity for the down payment".to_string());
    }
    if scores.schufa >= 12.0 {
        out.push("Strong SCHUFA credit rating".to_string());
    }
    if scores.residency >= 11.0 {
        out.push("Residency status accepted by most German banks".to_string());
    }
    if scores.years_bonus >= 8.0 {
        out.push("Long tenure with current employer".to_string());
    }

    out
}

pub(crate) fn improvements(scores: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();

    if scores.employment < 12.0 {
        out.push("Banks prefer permanent employment; consider applying after probation or with a permanent contract".to_string());
    }
    if scores.income_ratio < 12.0 {
        out.push("Pay down existing loans to lower your debt-to-income ratio".to_string());
    }
    if scores.down_payment < 12.0 {
        out.push("Save more equity; aim for at least 10-20% of the purchase price plus side costs".to_string());
    }
    if scores.schufa < 9.0 {
        out.push("Check your SCHUFA report for errors and build a positive credit history".to_string());
    }
    if scores.residency < 11.0 {
        out.push("A permanent residence permit widens the range of lenders".to_string());
    }
    if scores.years_bonus < 6.0 {
        out.push("Longer time with your current employer strengthens the application".to_string());
    }

    out
}

pub(crate) fn document_checklist(input: &FinancingInput) -> Vec<String> {
    let mut docs: Vec<String> = BASE_DOCUMENTS.iter().map(|d| d.to_string()).collect();

    if input.employment_status.is_self_employed() {
        docs.push("Business financial statements (BWA and balance sheets) for the last two to three years".to_string());
        docs.push("Income tax returns for the last three years".to_string());
    }
    if input.residency_status.needs_permit() {
        docs.push("Residence permit (Aufenthaltstitel) with remaining validity".to_string());
        docs.push("Work permit, if not included in the residence permit".to_string());
    }
    if input.residency_status == ResidencyStatus::EuCitizen {
        docs.push("EU registration certificate (Anmeldebescheinigung)".to_string());
    }
    if input.available_down_payment > 0.0 {
        docs.push("Proof of equity (savings or investment account statements)".to_string());
    }

    docs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financing::{EmploymentStatus, SchufaRating};

    fn scores(values: [f64; 6]) -> ScoreBreakdown {
        ScoreBreakdown {
            employment: values[0],
            income_ratio: values[1],
            down_payment: values[2],
            schufa: values[3],
            residency: values[4],
            years_bonus: values[5],
        }
    }

    fn applicant(employment: EmploymentStatus, residency: ResidencyStatus, down_payment: f64) -> FinancingInput {
        FinancingInput {
            employment_status: employment,
            employment_years: 3,
            monthly_net_income: 3_500.0,
            monthly_debt: 200.0,
            available_down_payment: down_payment,
            schufa_rating: SchufaRating::Good,
            residency_status: residency,
        }
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(strengths(&scores([16.0, 16.0, 16.0, 12.0, 11.0, 8.0])).len(), 6);
        assert!(strengths(&scores([15.0, 12.0, 12.0, 9.0, 6.0, 6.0])).is_empty());
    }

    #[test]
    fn test_improvement_thresholds() {
        assert_eq!(improvements(&scores([10.0, 6.0, 6.0, 5.0, 6.0, 4.0])).len(), 6);
        assert!(improvements(&scores([12.0, 12.0, 12.0, 9.0, 11.0, 6.0])).is_empty());
    }

    #[test]
    fn test_middle_band_is_in_neither_list() {
        // Between the improvement and strength thresholds
        let s = scores([12.0, 12.0, 12.0, 9.0, 11.0, 6.0]);
        assert!(improvements(&s).is_empty());
        // Residency 11 is both the strength threshold and not an improvement
        assert_eq!(strengths(&s).len(), 1);
    }

    #[test]
    fn test_checklist_baseline() {
        let docs = document_checklist(&applicant(EmploymentStatus::Permanent, ResidencyStatus::GermanCitizen, 0.0));
        assert_eq!(docs.len(), 6);
    }

    #[test]
    fn test_checklist_conditional_entries() {
        let docs = document_checklist(&applicant(EmploymentStatus::Freelance, ResidencyStatus::NonEu, 20_000.0));
        assert_eq!(docs.len(), 6 + 2 + 2 + 1);
        assert!(docs.iter().any(|d| d.contains("BWA")));
        assert!(docs.iter().any(|d| d.contains("Aufenthaltstitel")));
        assert!(docs.iter().any(|d| d.contains("Proof of equity")));

        let docs = document_checklist(&applicant(EmploymentStatus::Permanent, ResidencyStatus::EuCitizen, 0.0));
        assert_eq!(docs.len(), 7);
        assert!(docs.last().unwrap().contains("Anmeldebescheinigung"));
    }
}
