//! Projection Engine - deterministic financial forecasts
//!
//! Pure numeric transforms with no I/O, safe to call on every input change:
//!
//! - **Loan amortization** - monthly payment, total cost, total interest
//! - **Compound growth** - retirement/net-worth balance curves
//! - **Scenario model** - named growth presets over a 30-year horizon
//! - **Budget arithmetic** - totals and a priority-ordered status cascade
//!
//! All operations are total over their documented input domain. Out-of-domain
//! input (negative amounts, zero terms used as divisors) is the caller's
//! responsibility to reject before invocation.

pub mod budget;
pub mod growth;
pub mod loan;
pub mod scenario;

pub use budget::{classify_budget, summarize_budget, BudgetCategory, BudgetStatus, BudgetSummary};
pub use growth::{annuity_future_value, contribution_boost, growth_series, GrowthPoint};
pub use loan::{amortize, LoanSchedule};
pub use scenario::{net_worth_projection, Scenario, ScenarioInputs};
