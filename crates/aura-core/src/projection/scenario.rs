//! Scenario net-worth model
//!
//! Named growth presets mapped to fixed annual rates, combined into a
//! 30-year net-worth future value: an annuity accumulation of the net
//! monthly surplus plus lump-sum growth of a fixed starting baseline.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::growth::annuity_future_value;

/// Fixed projection horizon in years.
pub const HORIZON_YEARS: u32 = 30;

/// Starting net-worth baseline the lump-sum term grows from.
pub const BASELINE_NET_WORTH: f64 = 1_000_000.0;

/// Named growth scenario with a fixed annual-rate assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Baseline assumption.
    CurrentPath,
    Optimistic,
    SteadyGrowth,
    AggressiveInvestor,
    Chaotic,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::CurrentPath => "Current Path",
            Scenario::Optimistic => "Optimistic",
            Scenario::SteadyGrowth => "Steady Growth",
            Scenario::AggressiveInvestor => "Aggressive Investor",
            Scenario::Chaotic => "Chaotic",
        }
    }

    /// Annual growth rate as a fraction (0.07 = 7%).
    pub fn annual_rate(&self) -> f64 {
        match self {
            Scenario::CurrentPath => 0.07,
            Scenario::Optimistic => 0.10,
            Scenario::SteadyGrowth => 0.05,
            Scenario::AggressiveInvestor => 0.12,
            Scenario::Chaotic => 0.03,
        }
    }

    /// Resolve a display name to a scenario. Unrecognized names fall back
    /// to the baseline rather than erroring; the table is a UI preset list,
    /// not a validation surface.
    pub fn from_name(name: &str) -> Scenario {
        match name {
            "Optimistic" => Scenario::Optimistic,
            "Steady Growth" => Scenario::SteadyGrowth,
            "Aggressive Investor" => Scenario::AggressiveInvestor,
            "Chaotic" => Scenario::Chaotic,
            _ => Scenario::CurrentPath,
        }
    }

    pub fn all() -> &'static [Scenario] {
        &[
            Scenario::CurrentPath,
            Scenario::Optimistic,
            Scenario::SteadyGrowth,
            Scenario::AggressiveInvestor,
            Scenario::Chaotic,
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monthly cash-flow inputs to the scenario model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Monthly savings.
    pub savings: f64,
    /// Secondary/side-hustle monthly income.
    pub side_income: f64,
    /// Monthly debt repayment. Half-weighted in the surplus: repayment is
    /// treated as partially wealth-building, partially consumptive.
    pub debt_repayment: f64,
    pub scenario: Scenario,
}

impl ScenarioInputs {
    /// Net monthly surplus feeding the annuity term.
    pub fn net_monthly_surplus(&self) -> f64 {
        self.savings + self.side_income - 0.5 * self.debt_repayment
    }
}

/// Project net worth over the fixed 30-year horizon.
///
/// Combines a monthly annuity accumulation of the net surplus with the
/// baseline lump sum compounded yearly at the scenario rate.
pub fn net_worth_projection(inputs: &ScenarioInputs) -> f64 {
    let rate = inputs.scenario.annual_rate();
    let months = HORIZON_YEARS * 12;
    let monthly_rate = rate / 12.0;

    annuity_future_value(inputs.net_monthly_surplus(), monthly_rate, months)
        + BASELINE_NET_WORTH * (1.0 + rate).powi(HORIZON_YEARS as i32)
}
