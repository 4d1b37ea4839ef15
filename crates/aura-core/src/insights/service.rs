//! Insight service - the request/extract/parse/fallback pipeline
//!
//! One generic pipeline serves every structured call site: credential check,
//! prompt render, a single backend call, structured extraction, typed parse.
//! Any failure at any step resolves the call to its fallback catalogue
//! entry. Each invocation issues at most one request; in-flight calls share
//! no mutable state and resolve independently.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::ai::{parse_structured, GeminiBackend, InsightBackend, InsightClient, JsonShape};
use crate::config::InsightConfig;
use crate::error::{Error, Result};
use crate::projection::scenario::Scenario;
use crate::prompts::{PromptId, PromptLibrary};

use super::fallback;
use super::types::{
    FinancialContext, Goal, GoalStrategy, IncomeForecast, Insight, InsightSource, Opportunity,
    SpendingPrediction,
};

/// Orchestrates insight calls against a generative backend.
///
/// Cheap to clone; concurrent calls are independent. Constructed without a
/// usable credential, every call short-circuits to its fallback before
/// touching the network.
#[derive(Clone)]
pub struct InsightService {
    client: Option<InsightClient>,
    prompts: Arc<RwLock<PromptLibrary>>,
}

impl InsightService {
    /// Build a service from an explicit config.
    pub fn new(config: &InsightConfig) -> Self {
        let client = if config.has_credential() {
            GeminiBackend::new(config).ok().map(InsightClient::Gemini)
        } else {
            None
        };
        Self {
            client,
            prompts: Arc::new(RwLock::new(PromptLibrary::new())),
        }
    }

    /// Convenience constructor reading configuration from the environment.
    pub fn from_env() -> Self {
        Self::new(&InsightConfig::from_env())
    }

    /// Build a service around an injected backend (tests, offline dev).
    pub fn with_client(client: InsightClient) -> Self {
        Self {
            client: Some(client),
            prompts: Arc::new(RwLock::new(PromptLibrary::new())),
        }
    }

    /// Whether a backend is configured. False means every call falls back.
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Render the prompt for a call site.
    fn render_prompt(&self, id: PromptId, vars: &HashMap<&str, &str>) -> Result<String> {
        let mut prompts = self
            .prompts
            .write()
            .map_err(|_| Error::Prompt("Failed to acquire prompt library lock".into()))?;
        let template = prompts.get(id)?;
        Ok(template.render_user(vars))
    }

    /// Run the full pipeline for one structured call site.
    async fn try_fetch<T: DeserializeOwned>(
        &self,
        id: PromptId,
        vars: &HashMap<&str, &str>,
        shape: JsonShape,
    ) -> Result<T> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| Error::MissingApiKey("gemini".to_string()))?;

        let prompt = self.render_prompt(id, vars)?;
        let response = client.generate(&prompt).await?;
        parse_structured(&response, shape)
    }

    /// Resolve a structured call site to its contracted value.
    ///
    /// All-or-nothing: any failure substitutes the complete fallback value.
    /// The live/fallback source is surfaced to the logs only.
    async fn fetch_structured<T: DeserializeOwned>(
        &self,
        id: PromptId,
        vars: &HashMap<&str, &str>,
        shape: JsonShape,
        fallback: T,
    ) -> T {
        match self.try_fetch(id, vars, shape).await {
            Ok(value) => {
                debug!(
                    call_site = id.as_str(),
                    source = InsightSource::Live.as_str(),
                    "insight resolved"
                );
                value
            }
            Err(Error::MissingApiKey(_)) => {
                // Anticipated: no credential configured, not an error
                debug!(
                    call_site = id.as_str(),
                    source = InsightSource::Fallback.as_str(),
                    "no credential, using catalogue entry"
                );
                fallback
            }
            Err(e) => {
                warn!(
                    call_site = id.as_str(),
                    source = InsightSource::Fallback.as_str(),
                    error = %e,
                    "insight call failed, using catalogue entry"
                );
                fallback
            }
        }
    }

    /// Resolve a free-text call site. An empty completion is a distinct
    /// degradation from a failed call and carries its own canned reply.
    async fn fetch_text(
        &self,
        id: PromptId,
        vars: &HashMap<&str, &str>,
        no_credential: String,
        empty: String,
        failure: String,
    ) -> String {
        let client = match self.client.as_ref() {
            Some(client) => client,
            None => {
                debug!(
                    call_site = id.as_str(),
                    source = InsightSource::Fallback.as_str(),
                    "no credential, using catalogue entry"
                );
                return no_credential;
            }
        };

        let prompt = match self.render_prompt(id, vars) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(call_site = id.as_str(), error = %e, "prompt render failed");
                return failure;
            }
        };

        match client.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                debug!(
                    call_site = id.as_str(),
                    source = InsightSource::Live.as_str(),
                    "insight resolved"
                );
                text
            }
            Ok(_) => {
                warn!(
                    call_site = id.as_str(),
                    source = InsightSource::Fallback.as_str(),
                    "empty completion, using catalogue entry"
                );
                empty
            }
            Err(e) => {
                warn!(
                    call_site = id.as_str(),
                    source = InsightSource::Fallback.as_str(),
                    error = %e,
                    "insight call failed, using catalogue entry"
                );
                failure
            }
        }
    }

    /// Three advisory cards for the dashboard.
    pub async fn dashboard_insights(&self, context: &FinancialContext) -> Vec<Insight> {
        let context_json =
            serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
        let mut vars = HashMap::new();
        vars.insert("context", context_json.as_str());
        self.fetch_structured(
            PromptId::DashboardInsights,
            &vars,
            JsonShape::Array,
            fallback::insights(),
        )
        .await
    }

    /// Income outlook for a timeframe ("30d"/"90d") and stream filter.
    pub async fn income_forecast(&self, timeframe: &str, stream: &str) -> IncomeForecast {
        let mut vars = HashMap::new();
        vars.insert("timeframe", timeframe);
        vars.insert("stream", stream);
        self.fetch_structured(
            PromptId::IncomeForecast,
            &vars,
            JsonShape::Object,
            fallback::income_forecast(timeframe, stream),
        )
        .await
    }

    /// One strategy to accelerate the most promising goal.
    pub async fn goal_strategy(&self, goals: &[Goal]) -> GoalStrategy {
        let goals_json = serde_json::to_string(goals).unwrap_or_else(|_| "[]".to_string());
        let mut vars = HashMap::new();
        vars.insert("goals", goals_json.as_str());
        self.fetch_structured(
            PromptId::GoalStrategy,
            &vars,
            JsonShape::Object,
            fallback::goal_strategy(),
        )
        .await
    }

    /// Side hustle / investment suggestions for a search query.
    pub async fn opportunities(&self, query: &str) -> Vec<Opportunity> {
        let mut vars = HashMap::new();
        vars.insert("query", query);
        self.fetch_structured(
            PromptId::Opportunities,
            &vars,
            JsonShape::Array,
            fallback::opportunities(query),
        )
        .await
    }

    /// Spending outlook for the next timeframe.
    pub async fn spending_prediction(&self, timeframe: &str) -> SpendingPrediction {
        let mut vars = HashMap::new();
        vars.insert("timeframe", timeframe);
        self.fetch_structured(
            PromptId::SpendingPrediction,
            &vars,
            JsonShape::Object,
            fallback::spending_prediction(timeframe),
        )
        .await
    }

    /// Free-text financial chat.
    pub async fn chat(&self, message: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("message", message);
        self.fetch_text(
            PromptId::Chat,
            &vars,
            fallback::chat_no_credential(),
            fallback::chat_empty(),
            fallback::chat_failure(),
        )
        .await
    }

    /// One-sentence coaching tip for the net-worth simulator.
    pub async fn simulation_tip(
        &self,
        savings: f64,
        side_income: f64,
        debt_repayment: f64,
        scenario: Scenario,
    ) -> String {
        let savings = format!("{:.0}", savings);
        let side_income = format!("{:.0}", side_income);
        let debt_repayment = format!("{:.0}", debt_repayment);
        let mut vars = HashMap::new();
        vars.insert("savings", savings.as_str());
        vars.insert("side_income", side_income.as_str());
        vars.insert("debt_repayment", debt_repayment.as_str());
        vars.insert("scenario", scenario.as_str());
        self.fetch_text(
            PromptId::SimulationTip,
            &vars,
            fallback::simulation_tip(),
            fallback::simulation_tip(),
            fallback::simulation_tip(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockBackend;
    use crate::insights::types::InsightKind;

    fn demo_context() -> FinancialContext {
        FinancialContext {
            timeframe: "week".to_string(),
            balance: 24_562.0,
            income: 1_200.0,
            spending: 850.0,
            top_categories: vec!["Dining".to_string(), "Transport".to_string()],
            recent_spike: "Friday Night +40%".to_string(),
            risk_score: "Low".to_string(),
        }
    }

    fn mock_service(response: &str) -> InsightService {
        InsightService::with_client(InsightClient::Mock(MockBackend::with_response(response)))
    }

    fn offline_service() -> InsightService {
        InsightService::new(&InsightConfig::offline())
    }

    #[tokio::test]
    async fn test_no_credential_resolves_to_fallback() {
        let service = offline_service();
        assert!(!service.is_live());

        let cards = service.dashboard_insights(&demo_context()).await;
        assert_eq!(cards, fallback::insights());

        let forecast = service.income_forecast("30d", "all").await;
        assert_eq!(forecast, fallback::income_forecast("30d", "all"));

        let strategy = service.goal_strategy(&[]).await;
        assert_eq!(strategy, fallback::goal_strategy());

        let prediction = service.spending_prediction("90d").await;
        assert_eq!(prediction, fallback::spending_prediction("90d"));
    }

    #[tokio::test]
    async fn test_no_credential_chat_strings() {
        let service = offline_service();
        assert_eq!(service.chat("hello").await, fallback::chat_no_credential());
        assert_eq!(
            service
                .simulation_tip(10_000.0, 5_000.0, 6_000.0, Scenario::Optimistic)
                .await,
            fallback::simulation_tip()
        );
    }

    #[tokio::test]
    async fn test_offline_opportunities_honor_query() {
        let service = offline_service();
        let hits = service.opportunities("furniture").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Furniture Assembly Pro");
    }

    #[tokio::test]
    async fn test_live_insights_parse_through_fence_and_prose() {
        let response = r#"Sure, here are your insights:
```json
[{"title": "Trim Subscriptions", "message": "Two overlapping streaming plans.", "type": "tip"}]
```
Anything else?"#;
        let service = mock_service(response);
        let cards = service.dashboard_insights(&demo_context()).await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Trim Subscriptions");
        assert_eq!(cards[0].kind, InsightKind::Tip);
    }

    #[tokio::test]
    async fn test_unparsable_response_resolves_to_fallback() {
        let service = mock_service("I'm sorry, I cannot produce JSON today.");
        let cards = service.dashboard_insights(&demo_context()).await;
        assert_eq!(cards, fallback::insights());
    }

    #[tokio::test]
    async fn test_wrong_schema_resolves_to_fallback() {
        // Valid JSON object, but not the goal-strategy contract
        let service = mock_service(r#"{"headline": "x", "body": "y"}"#);
        let strategy = service.goal_strategy(&[]).await;
        assert_eq!(strategy, fallback::goal_strategy());
    }

    #[tokio::test]
    async fn test_backend_failure_resolves_to_fallback() {
        let service =
            InsightService::with_client(InsightClient::Mock(MockBackend::failing()));
        let forecast = service.income_forecast("30d", "all").await;
        assert_eq!(forecast, fallback::income_forecast("30d", "all"));
        assert_eq!(service.chat("hi").await, fallback::chat_failure());
    }

    #[tokio::test]
    async fn test_failed_opportunities_call_still_honors_query() {
        // The fallback list is filtered by the query on every degradation
        // path, not just the no-credential one
        let service =
            InsightService::with_client(InsightClient::Mock(MockBackend::failing()));
        let hits = service.opportunities("furniture").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Furniture Assembly Pro");
    }

    #[tokio::test]
    async fn test_live_chat_returns_completion() {
        let service = mock_service("Index funds are a sound default for long horizons.");
        let reply = service.chat("Where should I start investing?").await;
        assert!(reply.contains("Index funds"));
    }

    #[tokio::test]
    async fn test_empty_chat_completion_gets_its_own_reply() {
        // A blank completion is not a transport failure; the canned copy differs
        let service = mock_service("   ");
        assert_eq!(service.chat("hi").await, fallback::chat_empty());
        assert_ne!(fallback::chat_empty(), fallback::chat_failure());
    }

    #[tokio::test]
    async fn test_live_forecast_object_parses() {
        let response = r#"{
            "forecastAmount": 5100,
            "volatilePeriod": "Dec 1 - Dec 14",
            "primaryDriver": "Holiday Gig Surge",
            "factors": [{"icon": "F", "title": "Demand", "desc": "Seasonal"}],
            "recommendations": [{"type": "green-glow", "icon": "G", "title": "Go", "desc": "Now"}]
        }"#;
        let service = mock_service(response);
        let forecast = service.income_forecast("30d", "all").await;
        assert_eq!(forecast.forecast_amount, 5_100.0);
        assert_eq!(forecast.primary_driver, "Holiday Gig Surge");
    }
}
