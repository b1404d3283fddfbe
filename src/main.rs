//! Homebuyer Finance CLI
//!
//! Command-line interface for the purchase-cost, ROI and financing calculators

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use homebuyer_finance::{
    financing::{EmploymentStatus, FinancingEngine, FinancingInput, ResidencyStatus, SchufaRating},
    hidden_costs::{HiddenCostConfig, HiddenCostEngine, HiddenCostInput, RenovationLevel},
    roi::{load_scenarios, RoiInput, RoiResult},
    RateTables, ScenarioRunner,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "homebuyer-finance", version, about = "Property purchase calculators for Germany")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding transfer_tax_rates.csv to override the built-in rates
    #[arg(long, global = true)]
    tables_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Itemize purchase side costs
    HiddenCosts {
        #[arg(long)]
        price: f64,
        /// Two-letter state code, e.g. BY
        #[arg(long)]
        state: String,
        #[arg(long, default_value = "apartment")]
        property_type: String,
        #[arg(long)]
        agent: bool,
        /// none, light, medium or full
        #[arg(long, default_value = "none")]
        renovation: RenovationLevel,
        #[arg(long)]
        moving: bool,
    },
    /// Rank all states by side costs
    CompareStates {
        #[arg(long)]
        price: f64,
        #[arg(long)]
        agent: bool,
    },
    /// List transfer-tax rates
    States,
    /// Rental ROI with 10-year projection
    Roi {
        #[arg(long)]
        purchase_price: f64,
        #[arg(long)]
        down_payment: f64,
        #[arg(long)]
        monthly_rent: f64,
        #[arg(long)]
        monthly_expenses: f64,
        /// Percent per year
        #[arg(long, default_value_t = 2.0)]
        appreciation: f64,
        /// Percent
        #[arg(long, default_value_t = 5.0)]
        vacancy: f64,
        /// Annual percent
        #[arg(long)]
        mortgage_rate: f64,
        /// Years
        #[arg(long, default_value_t = 25)]
        mortgage_term: u32,
        /// Write the projection to this CSV file
        #[arg(long)]
        projection_csv: Option<PathBuf>,
    },
    /// Compare 2-4 scenarios from a CSV file
    Compare {
        input: PathBuf,
    },
    /// Evaluate every scenario in a CSV file
    RoiBatch {
        input: PathBuf,
        /// Write one summary row per scenario to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Mortgage eligibility assessment
    Financing {
        /// civil_servant, permanent, fixed_term, self_employed, freelance or other
        #[arg(long)]
        employment: String,
        #[arg(long, default_value_t = 0)]
        years: u32,
        #[arg(long)]
        income: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        down_payment: f64,
        /// excellent, good, satisfactory, adequate, poor or unknown
        #[arg(long, default_value = "unknown")]
        schufa: String,
        /// german_citizen, eu_citizen, permanent_resident, temporary_resident or non_eu
        #[arg(long)]
        residency: String,
    },
}

/// JSON envelope; the timestamp belongs to the report, not the calculation
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    result: &'a T,
}

fn print_json<T: Serialize>(result: &T) -> Result<()> {
    let report = Report {
        generated_at: Utc::now(),
        result,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// One line per scenario in batch output
#[derive(Serialize)]
struct BatchRow<'a> {
    name: &'a str,
    monthly_mortgage_payment: f64,
    annual_cash_flow: f64,
    gross_yield: f64,
    cap_rate: f64,
    cash_on_cash_return: f64,
    investment_grade: f64,
    investment_grade_label: &'static str,
    year_10_equity: f64,
    year_10_total_return: f64,
}

fn load_tables(dir: Option<&Path>) -> Result<RateTables> {
    match dir {
        Some(dir) => RateTables::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display())),
        None => Ok(RateTables::default_rates()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::HiddenCosts { price, state, property_type, agent, renovation, moving } => {
            let engine = HiddenCostEngine::new(load_tables(cli.tables_dir.as_deref())?, HiddenCostConfig::default());
            let input = HiddenCostInput {
                property_price: price,
                state_code: state.to_uppercase(),
                property_type,
                include_agent: agent,
                renovation_level: renovation,
                include_moving: moving,
            };
            input.validate()?;
            let r = engine.calculate(&input)?;

            if cli.json {
                return print_json(&r);
            }
            println!("Side costs for {:.2} EUR in {} ({:.1}% transfer tax)", r.property_price, r.state_name, r.transfer_tax_rate);
            println!("{}", "-".repeat(48));
            println!("{:<28} {:>18.2}", "Transfer tax", r.transfer_tax);
            println!("{:<28} {:>18.2}", "Notary", r.notary_fee);
            println!("{:<28} {:>18.2}", "Land registry", r.land_registry_fee);
            println!("{:<28} {:>18.2}", "Agent commission", r.agent_commission);
            println!("{:<28} {:>18.2}", "Renovation", r.renovation_estimate);
            println!("{:<28} {:>18.2}", "Moving", r.moving_costs);
            println!("{}", "-".repeat(48));
            println!("{:<28} {:>18.2}", "Total side costs", r.total_additional_costs);
            println!("{:<28} {:>17.2}%", "Share of price", r.additional_cost_percent);
            println!("{:<28} {:>18.2}", "Total purchase cost", r.total_purchase_cost);
        }

        Command::CompareStates { price, agent } => {
            let engine = HiddenCostEngine::new(load_tables(cli.tables_dir.as_deref())?, HiddenCostConfig::default());
            let items = engine.compare_states(price, agent);

            if cli.json {
                return print_json(&items);
            }
            println!("{:<4} {:<24} {:>6} {:>14} {:>14}", "Code", "State", "Rate", "Transfer tax", "Total");
            println!("{}", "-".repeat(66));
            for item in &items {
                println!("{:<4} {:<24} {:>5.1}% {:>14.2} {:>14.2}",
                    item.state_code, item.state_name, item.transfer_tax_rate, item.transfer_tax, item.total_cost);
            }
        }

        Command::States => {
            let tables = load_tables(cli.tables_dir.as_deref())?;
            if cli.json {
                return print_json(&tables.states());
            }
            for state in tables.states() {
                println!("{:<4} {:<24} {:>5.1}%", state.code, state.name, state.rate_percent);
            }
        }

        Command::Roi {
            purchase_price, down_payment, monthly_rent, monthly_expenses,
            appreciation, vacancy, mortgage_rate, mortgage_term, projection_csv,
        } => {
            let input = RoiInput {
                purchase_price,
                down_payment,
                monthly_rent,
                monthly_expenses,
                annual_appreciation: appreciation,
                vacancy_rate: vacancy,
                mortgage_rate,
                mortgage_term,
            };
            input.validate()?;
            let result = ScenarioRunner::new().run(&input);

            if let Some(path) = &projection_csv {
                write_projection_csv(path, &result)?;
            }
            if cli.json {
                return print_json(&result);
            }
            print_roi(&result);
            if let Some(path) = &projection_csv {
                println!("\nProjection written to: {}", path.display());
            }
        }

        Command::Compare { input } => {
            let scenarios = load_scenarios(&input)
                .with_context(|| format!("loading scenarios from {}", input.display()))?;
            let inputs: Vec<RoiInput> = scenarios.iter().map(|s| s.input.clone()).collect();
            let comparison = ScenarioRunner::new().compare_scenarios(&inputs)?;

            if cli.json {
                return print_json(&comparison);
            }
            println!("{:<24} {:>12} {:>10} {:>10} {:>7} {:<10}", "Scenario", "Cash flow", "Yield", "Cap rate", "Grade", "");
            println!("{}", "-".repeat(78));
            for (scenario, result) in scenarios.iter().zip(&comparison.results) {
                let b = &result.breakdown;
                println!("{:<24} {:>12.2} {:>9.2}% {:>9.2}% {:>7.1} {:<10}",
                    scenario.name, b.annual_cash_flow, b.gross_yield * 100.0, b.cap_rate * 100.0,
                    b.investment_grade, b.investment_grade_label);
            }
            println!("\nBest scenario: {}", scenarios[comparison.best_index].name);
        }

        Command::RoiBatch { input, output } => {
            let scenarios = load_scenarios(&input)
                .with_context(|| format!("loading scenarios from {}", input.display()))?;
            let inputs: Vec<RoiInput> = scenarios.iter().map(|s| s.input.clone()).collect();
            let results = ScenarioRunner::new().run_batch(&inputs);

            let rows: Vec<BatchRow> = scenarios
                .iter()
                .zip(&results)
                .map(|(scenario, result)| {
                    let last = result.projections.last();
                    BatchRow {
                        name: &scenario.name,
                        monthly_mortgage_payment: result.breakdown.monthly_mortgage_payment,
                        annual_cash_flow: result.breakdown.annual_cash_flow,
                        gross_yield: result.breakdown.gross_yield,
                        cap_rate: result.breakdown.cap_rate,
                        cash_on_cash_return: result.breakdown.cash_on_cash_return,
                        investment_grade: result.breakdown.investment_grade,
                        investment_grade_label: result.breakdown.investment_grade_label.as_str(),
                        year_10_equity: last.map(|p| p.equity).unwrap_or(0.0),
                        year_10_total_return: last.map(|p| p.total_return).unwrap_or(0.0),
                    }
                })
                .collect();

            match &output {
                Some(path) => {
                    let mut writer = csv::Writer::from_path(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    for row in &rows {
                        writer.serialize(row)?;
                    }
                    writer.flush()?;
                    println!("Wrote {} scenarios to {}", rows.len(), path.display());
                }
                None if cli.json => return print_json(&results),
                None => {
                    for row in &rows {
                        println!("{:<24} {:>12.2} {:>5.1} {}", row.name, row.annual_cash_flow,
                            row.investment_grade, row.investment_grade_label);
                    }
                }
            }
        }

        Command::Financing { employment, years, income, debt, down_payment, schufa, residency } => {
            let input = FinancingInput {
                employment_status: EmploymentStatus::parse(&employment),
                employment_years: years,
                monthly_net_income: income,
                monthly_debt: debt,
                available_down_payment: down_payment,
                schufa_rating: SchufaRating::parse(&schufa),
                residency_status: ResidencyStatus::parse(&residency),
            };
            input.validate()?;
            let r = FinancingEngine::default().assess(&input);

            if cli.json {
                return print_json(&r);
            }
            let s = &r.score_breakdown;
            println!("Financing score: {:.1} / 100 ({})", r.total_score, r.likelihood_label);
            println!("  Employment   {:>5.1} / 20", s.employment);
            println!("  Income ratio {:>5.1} / 20", s.income_ratio);
            println!("  Down payment {:>5.1} / 20", s.down_payment);
            println!("  SCHUFA       {:>5.1} / 15", s.schufa);
            println!("  Residency    {:>5.1} / 15", s.residency);
            println!("  Tenure       {:>5.1} / 10", s.years_bonus);
            println!();
            println!("Max loan estimate:        {:.2}", r.max_loan_estimate);
            println!("Recommended down payment: {:.0}%", r.recommended_down_payment_percent);
            println!("Expected rate:            {:.1}% - {:.1}%", r.expected_rate_min, r.expected_rate_max);
            println!("Loan-to-value:            {:.1}%", r.ltv_ratio * 100.0);
            print_list("Strengths", &r.strengths);
            print_list("Improvements", &r.improvements);
            print_list("Documents", &r.document_checklist);
        }
    }

    Ok(())
}

fn print_roi(result: &RoiResult) {
    let b = &result.breakdown;
    println!("Loan amount:           {:>12.2}", b.loan_amount);
    println!("Monthly mortgage:      {:>12.2}", b.monthly_mortgage_payment);
    println!("Gross rental income:   {:>12.2}", b.gross_rental_income);
    println!("Net operating income:  {:>12.2}", b.net_operating_income);
    println!("Annual cash flow:      {:>12.2}", b.annual_cash_flow);
    println!("Gross yield:           {:>11.2}%", b.gross_yield * 100.0);
    println!("Cap rate / net yield:  {:>11.2}%", b.cap_rate * 100.0);
    println!("Cash-on-cash return:   {:>11.2}%", b.cash_on_cash_return * 100.0);
    println!("Investment grade:      {:>12.1} ({})", b.investment_grade, b.investment_grade_label);

    println!("\n{:>4} {:>14} {:>14} {:>14} {:>14} {:>9}",
        "Year", "Value", "Equity", "Cum. CF", "Total return", "Return");
    println!("{}", "-".repeat(74));
    for p in &result.projections {
        println!("{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>8.1}%",
            p.year, p.property_value, p.equity, p.cumulative_cash_flow, p.total_return,
            p.total_return_percent * 100.0);
    }
}

fn write_projection_csv(path: &Path, result: &RoiResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in &result.projections {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}
