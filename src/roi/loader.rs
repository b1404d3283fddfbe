//! Load ROI scenarios from CSV
//!
//! Header row uses the `RoiInput` field names; an optional `name` column labels
//! each scenario.

use super::RoiInput;
use crate::error::LoadError;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: Option<String>,
    purchase_price: f64,
    down_payment: f64,
    monthly_rent: f64,
    monthly_expenses: f64,
    annual_appreciation: f64,
    vacancy_rate: f64,
    mortgage_rate: f64,
    mortgage_term: u32,
}

/// Scenario with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub input: RoiInput,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<NamedScenario, LoadError> {
        let input = RoiInput {
            purchase_price: self.purchase_price,
            down_payment: self.down_payment,
            monthly_rent: self.monthly_rent,
            monthly_expenses: self.monthly_expenses,
            annual_appreciation: self.annual_appreciation,
            vacancy_rate: self.vacancy_rate,
            mortgage_rate: self.mortgage_rate,
            mortgage_term: self.mortgage_term,
        };
        input.validate().map_err(|e| LoadError::InvalidRow {
            row,
            message: e.to_string(),
        })?;

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("Scenario {}", row),
        };

        Ok(NamedScenario { name, input })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>, LoadError> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedScenario>, LoadError> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(idx + 1)?);
    }

    Ok(scenarios)
}
