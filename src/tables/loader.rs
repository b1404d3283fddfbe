//! CSV-based rate table loader
//!
//! Loads rate overrides from CSV files in data/tables/

use super::StateRate;
use crate::error::LoadError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Default path to the rate tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

/// File holding `code,name,rate_percent` rows
pub const TRANSFER_TAX_FILE: &str = "transfer_tax_rates.csv";

/// Load transfer-tax rates from `transfer_tax_rates.csv` in the given directory
pub fn load_transfer_tax_rates(path: &Path) -> Result<Vec<StateRate>, LoadError> {
    let file = File::open(path.join(TRANSFER_TAX_FILE))?;
    load_transfer_tax_rates_from_reader(file)
}

/// Load transfer-tax rates from any reader
///
/// Rows keep file order, which becomes the table iteration order.
pub fn load_transfer_tax_rates_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<StateRate>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();
    let mut seen = HashSet::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: StateRate = result?;
        let row_number = idx + 1;

        if row.code.trim().is_empty() {
            return Err(LoadError::InvalidRow {
                row: row_number,
                message: "empty state code".to_string(),
            });
        }
        if !(row.rate_percent > 0.0 && row.rate_percent <= 100.0) {
            return Err(LoadError::InvalidRow {
                row: row_number,
                message: format!("rate {} for {} is outside (0, 100]", row.rate_percent, row.code),
            });
        }
        if !seen.insert(row.code.clone()) {
            return Err(LoadError::InvalidRow {
                row: row_number,
                message: format!("duplicate state code {}", row.code),
            });
        }

        rates.push(row);
    }

    if rates.is_empty() {
        return Err(LoadError::Empty(TRANSFER_TAX_FILE.to_string()));
    }

    Ok(rates)
}
