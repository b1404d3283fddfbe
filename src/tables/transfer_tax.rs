//! Grunderwerbsteuer (real-estate transfer tax) rates by federal state

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// (code, name, rate in percent of purchase price)
const DEFAULT_RATES: [(&str, &str, f64); 16] = [
    ("BW", "Baden-Württemberg", 5.0),
    ("BY", "Bayern", 3.5),
    ("BE", "Berlin", 6.0),
    ("BB", "Brandenburg", 6.5),
    ("HB", "Bremen", 5.0),
    ("HH", "Hamburg", 5.5),
    ("HE", "Hessen", 6.0),
    ("MV", "Mecklenburg-Vorpommern", 6.0),
    ("NI", "Niedersachsen", 5.0),
    ("NW", "Nordrhein-Westfalen", 6.5),
    ("RP", "Rheinland-Pfalz", 5.0),
    ("SL", "Saarland", 6.5),
    ("SN", "Sachsen", 5.5),
    ("ST", "Sachsen-Anhalt", 5.0),
    ("SH", "Schleswig-Holstein", 6.5),
    ("TH", "Thüringen", 5.0),
];

/// Transfer-tax entry for one federal state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRate {
    /// Two-letter state code (e.g. "BE")
    pub code: String,
    pub name: String,
    /// Rate in percent (6.0 means 6%)
    pub rate_percent: f64,
}

/// Ordered transfer-tax table
#[derive(Debug, Clone)]
pub struct TransferTaxTable {
    states: Vec<StateRate>,
}

impl Default for TransferTaxTable {
    fn default() -> Self {
        Self {
            states: DEFAULT_RATES
                .iter()
                .map(|&(code, name, rate_percent)| StateRate {
                    code: code.to_string(),
                    name: name.to_string(),
                    rate_percent,
                })
                .collect(),
        }
    }
}

impl TransferTaxTable {
    /// Create from loaded CSV data
    pub fn from_loaded(states: Vec<StateRate>) -> Self {
        Self { states }
    }

    /// Look up a state by its code (exact match, e.g. "BY")
    pub fn get(&self, code: &str) -> Result<&StateRate, EngineError> {
        self.states
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| EngineError::UnknownState(code.to_string()))
    }

    pub fn states(&self) -> &[StateRate] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
