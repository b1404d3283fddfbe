//! Rate tables used by the purchase-cost calculator
//!
//! The built-in table is the process-wide default. Operators can load a
//! replacement from CSV when a state changes its transfer-tax rate.

mod transfer_tax;
pub mod loader;

pub use transfer_tax::{StateRate, TransferTaxTable};

use crate::error::LoadError;
use std::path::Path;

/// Container for all rate tables
#[derive(Debug, Clone)]
pub struct RateTables {
    pub transfer_tax: TransferTaxTable,
}

impl RateTables {
    /// Built-in rates for the 16 federal states
    pub fn default_rates() -> Self {
        Self {
            transfer_tax: TransferTaxTable::default(),
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let rates = loader::load_transfer_tax_rates(path)?;
        log::info!("loaded {} transfer-tax rates from {}", rates.len(), path.display());

        Ok(Self {
            transfer_tax: TransferTaxTable::from_loaded(rates),
        })
    }

    /// All states in table order
    pub fn states(&self) -> &[StateRate] {
        self.transfer_tax.states()
    }
}

impl Default for RateTables {
    fn default() -> Self {
        Self::default_rates()
    }
}
