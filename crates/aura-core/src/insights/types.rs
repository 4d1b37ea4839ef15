//! Contracted shapes for insight call sites
//!
//! These are the wire contracts the prompts ask the model to emit, so the
//! serde names mirror the JSON keys (camelCase, and `type` where the
//! contract says `type`). Deserialization into these types is the schema
//! check: a response missing a required field does not parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a dashboard insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Alert,
    Opportunity,
    Tip,
    Warning,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Alert => "alert",
            InsightKind::Opportunity => "opportunity",
            InsightKind::Tip => "tip",
            InsightKind::Warning => "warning",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One short advisory card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

/// Snapshot of the user's finances passed to the dashboard insight call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialContext {
    /// "week" or "month".
    pub timeframe: String,
    pub balance: f64,
    pub income: f64,
    pub spending: f64,
    pub top_categories: Vec<String>,
    pub recent_spike: String,
    pub risk_score: String,
}

/// A savings goal as shown in the goals view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: String,
}

/// Demand/market factor behind an income forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastFactor {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

/// Visual tone of a forecast recommendation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTone {
    #[serde(rename = "green-glow")]
    GreenGlow,
    #[serde(rename = "yellow-glow")]
    YellowGlow,
    #[serde(rename = "red-glow")]
    RedGlow,
}

/// Actionable recommendation attached to an income forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecommendation {
    #[serde(rename = "type")]
    pub tone: RecommendationTone,
    pub icon: String,
    pub title: String,
    pub desc: String,
}

/// Income forecast for a freelancer over a timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeForecast {
    pub forecast_amount: f64,
    pub volatile_period: String,
    pub primary_driver: String,
    pub factors: Vec<ForecastFactor>,
    pub recommendations: Vec<ForecastRecommendation>,
}

/// Concrete next milestone inside a goal strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub desc: String,
}

/// One strategy to accelerate the user's most promising goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStrategy {
    pub title: String,
    /// May carry `<strong>` emphasis; rendered as-is by the UI.
    pub message: String,
    pub milestone: Milestone,
}

/// A side hustle or investment opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub projected_income: String,
    pub effort: String,
    pub skills: String,
    pub roadmap: Vec<String>,
    pub insight: String,
}

/// A predicted large one-off expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeExpense {
    pub date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

/// Spending prediction for an upcoming window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingPrediction {
    pub total: String,
    pub variance: String,
    pub risk: String,
    pub confidence: String,
    pub large_expenses: Vec<LargeExpense>,
    pub forecast: String,
}

/// Where a returned insight value came from. Surfaced to logging only; the
/// rendered content is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSource {
    /// Parsed from a live model response.
    Live,
    /// Pre-authored catalogue value.
    Fallback,
}

impl InsightSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightSource::Live => "live",
            InsightSource::Fallback => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_wire_shape() {
        let insight: Insight = serde_json::from_str(
            r#"{"title": "Spending Alert", "message": "Dining up 20%.", "type": "alert"}"#,
        )
        .unwrap();
        assert_eq!(insight.kind, InsightKind::Alert);

        let back = serde_json::to_value(&insight).unwrap();
        assert_eq!(back["type"], "alert");
    }

    #[test]
    fn test_forecast_camel_case_keys() {
        let json = r#"{
            "forecastAmount": 4250,
            "volatilePeriod": "Oct 24 - Nov 5",
            "primaryDriver": "Seasonal Slowdown",
            "factors": [],
            "recommendations": [{"type": "red-glow", "icon": "X", "title": "Alert", "desc": "Low demand"}]
        }"#;
        let forecast: IncomeForecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.forecast_amount, 4250.0);
        assert_eq!(
            forecast.recommendations[0].tone,
            RecommendationTone::RedGlow
        );
    }

    #[test]
    fn test_missing_required_field_fails() {
        // No "milestone": must be a parse error, not a partial value
        let result: Result<GoalStrategy, _> =
            serde_json::from_str(r#"{"title": "T", "message": "M"}"#);
        assert!(result.is_err());
    }
}
