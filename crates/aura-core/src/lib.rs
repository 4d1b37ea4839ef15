//! AURA Core Library
//!
//! Shared functionality for the AURA financial coach:
//! - Projection engine: pure, deterministic forecasts (loan amortization,
//!   compound-growth curves, scenario net-worth modeling, budget arithmetic)
//! - Insight orchestration over a generative-language backend with strict
//!   structured parsing and static fallbacks
//! - Prompt library with embedded templates per call site
//! - Explicit configuration (no ambient credential reads at module load)

pub mod ai;
pub mod config;
pub mod error;
pub mod insights;
pub mod projection;
pub mod prompts;

/// Test utilities including a mock Gemini server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{GeminiBackend, InsightBackend, InsightClient, MockBackend};
pub use config::InsightConfig;
pub use error::{Error, Result};
pub use insights::{
    FinancialContext, Goal, GoalStrategy, IncomeForecast, Insight, InsightKind, InsightService,
    InsightSource, LargeExpense, Milestone, Opportunity, RecommendationTone, SpendingPrediction,
};
pub use projection::{
    budget::{classify_budget, summarize_budget, BudgetCategory, BudgetStatus, BudgetSummary},
    growth::{annuity_future_value, contribution_boost, growth_series, GrowthPoint},
    loan::{amortize, LoanSchedule},
    scenario::{net_worth_projection, Scenario, ScenarioInputs},
};
