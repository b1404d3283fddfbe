//! Scenario runner for side-by-side and batch ROI evaluation
//!
//! Holds one configured engine and evaluates any number of scenarios against
//! it. Comparisons stay in input order; large batches fan out over rayon.

use crate::error::EngineError;
use crate::roi::{RoiConfig, RoiEngine, RoiInput, RoiResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Smallest and largest scenario count accepted by `compare_scenarios`
pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 4;

/// Side-by-side results, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub results: Vec<RoiResult>,
    /// First scenario with the highest investment grade
    pub best_index: usize,
}

/// Pre-configured runner for ROI scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let comparison = runner.compare_scenarios(&[cheap_flat, city_house])?;
/// println!("best: {}", comparison.best_index);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: RoiEngine,
}

impl ScenarioRunner {
    /// Runner with the default 10-year projection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RoiConfig) -> Self {
        Self {
            engine: RoiEngine::new(config),
        }
    }

    /// Evaluate a single scenario
    pub fn run(&self, input: &RoiInput) -> RoiResult {
        self.engine.evaluate(input)
    }

    /// Compare 2 to 4 scenarios
    pub fn compare_scenarios(&self, inputs: &[RoiInput]) -> Result<ScenarioComparison, EngineError> {
        if !(MIN_COMPARE..=MAX_COMPARE).contains(&inputs.len()) {
            return Err(EngineError::ScenarioCount(inputs.len()));
        }

        let results: Vec<RoiResult> = inputs.iter().map(|input| self.engine.evaluate(input)).collect();

        let mut best_index = 0;
        for (idx, result) in results.iter().enumerate() {
            if result.breakdown.investment_grade > results[best_index].breakdown.investment_grade {
                best_index = idx;
            }
        }

        Ok(ScenarioComparison { results, best_index })
    }

    /// Evaluate any number of scenarios in parallel, preserving order
    pub fn run_batch(&self, inputs: &[RoiInput]) -> Vec<RoiResult> {
        log::info!("evaluating {} scenarios", inputs.len());
        inputs.par_iter().map(|input| self.engine.evaluate(input)).collect()
    }

    pub fn engine(&self) -> &RoiEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(rent: f64) -> RoiInput {
        RoiInput {
            purchase_price: 250_000.0,
            down_payment: 50_000.0,
            monthly_rent: rent,
            monthly_expenses: 200.0,
            annual_appreciation: 2.0,
            vacancy_rate: 3.0,
            mortgage_rate: 3.8,
            mortgage_term: 25,
        }
    }

    #[test]
    fn test_compare_keeps_input_order() {
        let runner = ScenarioRunner::new();
        let inputs = [scenario(900.0), scenario(1_800.0), scenario(1_300.0)];
        let comparison = runner.compare_scenarios(&inputs).unwrap();

        assert_eq!(comparison.results.len(), 3);
        assert_eq!(comparison.results[0].breakdown.gross_rental_income, 10_800.0);
        assert_eq!(comparison.results[1].breakdown.gross_rental_income, 21_600.0);
        assert_eq!(comparison.results[2].breakdown.gross_rental_income, 15_600.0);
        assert_eq!(comparison.best_index, 1);
        assert!(comparison.results.iter().all(|r| r.projections.len() == 10));
    }

    #[test]
    fn test_best_index_prefers_first_on_tie() {
        let runner = ScenarioRunner::new();
        let comparison = runner.compare_scenarios(&[scenario(1_000.0), scenario(1_000.0)]).unwrap();
        assert_eq!(comparison.best_index, 0);
    }

    #[test]
    fn test_compare_rejects_bad_counts() {
        let runner = ScenarioRunner::new();
        assert_eq!(
            runner.compare_scenarios(&[scenario(1_000.0)]),
            Err(EngineError::ScenarioCount(1))
        );
        let five = vec![scenario(1_000.0); 5];
        assert_eq!(runner.compare_scenarios(&five), Err(EngineError::ScenarioCount(5)));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<RoiInput> = (0..50).map(|i| scenario(800.0 + 20.0 * i as f64)).collect();

        let parallel = runner.run_batch(&inputs);
        let sequential: Vec<RoiResult> = inputs.iter().map(|i| runner.run(i)).collect();
        assert_eq!(parallel, sequential);
    }
}
