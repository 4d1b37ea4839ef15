//! Insight Orchestrator
//!
//! Turns a context snapshot into renderable advisory content, hiding an
//! unreliable generative backend behind a stable contract: every call site
//! resolves to a value of its contracted shape, falling back to a
//! pre-authored catalogue entry on any failure. No error escapes.
//!
//! ## Call sites
//!
//! - **Dashboard insights** - three advisory cards from a financial snapshot
//! - **Income forecast** - structured freelancer income outlook
//! - **Goal strategy** - one acceleration strategy with a milestone
//! - **Opportunities** - side hustles and investments for a search query
//! - **Spending prediction** - upcoming-spend outlook with large expenses
//! - **Chat / simulation tip** - free-text replies, no JSON contract
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aura_core::{InsightConfig, InsightService};
//!
//! let service = InsightService::new(&InsightConfig::from_env());
//! let cards = service.dashboard_insights(&context).await;
//! ```

pub mod fallback;
pub mod service;
pub mod types;

pub use service::InsightService;
pub use types::{
    FinancialContext, ForecastFactor, ForecastRecommendation, Goal, GoalStrategy, IncomeForecast,
    Insight, InsightKind, InsightSource, LargeExpense, Milestone, Opportunity,
    RecommendationTone, SpendingPrediction,
};
