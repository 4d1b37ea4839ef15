//! Demo snapshots for the insight commands
//!
//! The coach needs a financial context to reason about; these are the same
//! canned figures the dashboard mock-up ships with, so the terminal output
//! matches what a first-run user of the app would see.

use aura_core::insights::{FinancialContext, Goal};
use aura_core::projection::budget::BudgetCategory;

/// Dashboard snapshot for the selected timeframe.
pub fn financial_context(timeframe: &str) -> FinancialContext {
    FinancialContext {
        timeframe: timeframe.to_string(),
        balance: 24_562.0,
        income: 1_200.0,
        spending: 850.0,
        top_categories: vec![
            "Dining".to_string(),
            "Transport".to_string(),
            "Shopping".to_string(),
        ],
        recent_spike: "Friday Night +40%".to_string(),
        risk_score: "Low".to_string(),
    }
}

/// The demo savings goals.
pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: 7_500.0,
            current_amount: 7_000.0,
            deadline: "2026-12-31".to_string(),
        },
        Goal {
            id: "2".to_string(),
            name: "New Laptop".to_string(),
            target_amount: 120_000.0,
            current_amount: 45_000.0,
            deadline: "2027-03-01".to_string(),
        },
        Goal {
            id: "3".to_string(),
            name: "Goa Trip".to_string(),
            target_amount: 40_000.0,
            current_amount: 12_000.0,
            deadline: "2026-11-15".to_string(),
        },
    ]
}

/// The demo monthly budget.
pub fn budget() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("Housing", 15_000.0, 15_000.0),
        BudgetCategory::new("Food & Dining", 8_000.0, 6_200.0),
        BudgetCategory::new("Transport", 4_000.0, 2_800.0),
        BudgetCategory::new("Shopping", 5_000.0, 4_100.0),
        BudgetCategory::new("Entertainment", 3_000.0, 1_500.0),
    ]
}
