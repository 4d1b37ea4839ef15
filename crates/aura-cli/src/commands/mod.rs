//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `projections` - Deterministic forecasts (loan, retire, simulate, budget)
//! - `insights` - AI coach commands (insights, forecast, goals, opportunities,
//!   predict, chat)
//! - `demo` - The canned snapshots the insight commands feed the coach

pub mod demo;
pub mod insights;
pub mod projections;

// Re-export command functions for main.rs
pub use insights::*;
pub use projections::*;

/// Format an amount the way the UI renders money, e.g. "Rs 1,23,456" stays
/// out of scope; plain thousands grouping is enough for terminal output.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let negative = whole < 0;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-Rs {}", grouped)
    } else {
        format!("Rs {}", grouped)
    }
}
