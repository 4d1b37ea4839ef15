//! Test utilities for aura-core
//!
//! Provides a mock Gemini server speaking the generateContent wire protocol,
//! usable from integration tests and offline development.

use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock Gemini server for testing and development.
pub struct MockGeminiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockGeminiServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new().route("/v1beta/models/:call", post(handle_generate));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockGeminiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// generateContent endpoint. Sniffs the prompt text to decide which call
/// site is being exercised; the patterns match the prompts/*.md templates.
async fn handle_generate(Json(request): Json<GenerateRequest>) -> Response {
    let prompt = request.prompt_text();

    if prompt.contains("force server error") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock upstream failure").into_response();
    }

    let text = if prompt.contains("Generate 3 short, actionable insights") {
        insights_mock()
    } else if prompt.contains("Predict income for a freelancer") {
        forecast_mock()
    } else if prompt.contains("Analyze these financial goals") {
        goal_strategy_mock()
    } else if prompt.contains("side hustles or specific stock investments") {
        opportunities_mock()
    } else if prompt.contains("Predict future spending") {
        spending_mock()
    } else if prompt.contains("simulating my financial future") {
        "Redirecting half your debt repayment to index funds once the balance clears could add Rs 4 lakh to your 30-year net worth.".to_string()
    } else {
        // Chat and anything unrecognized get a plain completion
        "Based on current trends, index funds remain a solid long-horizon choice.".to_string()
    };

    Json(GenerateResponse::with_text(text)).into_response()
}

fn insights_mock() -> String {
    r#"[
        {"title": "Dining Spike", "message": "Friday dining is up 40% versus your average week.", "type": "alert"},
        {"title": "Idle Balance", "message": "Rs 12,000 of your balance could earn more in a liquid fund.", "type": "opportunity"},
        {"title": "Steady Income", "message": "Income is stable; a 5% savings bump is comfortably affordable.", "type": "tip"}
    ]"#
    .to_string()
}

fn forecast_mock() -> String {
    r#"{
        "forecastAmount": 5100,
        "volatilePeriod": "Dec 1 - Dec 14",
        "primaryDriver": "Holiday Gig Surge",
        "factors": [
            {"icon": "🎄", "title": "Holiday Demand", "desc": "Gig platforms spike through December."},
            {"icon": "🌧️", "title": "Weather", "desc": "Rain boosts delivery volumes."},
            {"icon": "🏙️", "title": "Local Events", "desc": "Two conferences land mid-month."}
        ],
        "recommendations": [
            {"type": "green-glow", "icon": "📍", "title": "Work Weekends", "desc": "Demand peaks Saturday evenings."},
            {"type": "yellow-glow", "icon": "⚠️", "title": "Buffer Rs 200", "desc": "Cover the post-holiday lull."},
            {"type": "red-glow", "icon": "🛑", "title": "Avoid Dec 25-28", "desc": "Historically the lowest-demand window."}
        ]
    }"#
    .to_string()
}

fn goal_strategy_mock() -> String {
    r#"{
        "title": "Accelerate \"New Laptop\"",
        "message": "Routing your side income here would close the gap <strong>6 weeks early</strong>.",
        "milestone": {"title": "Reach Rs 50,000", "desc": "You are 80% of the way there."}
    }"#
    .to_string()
}

fn opportunities_mock() -> String {
    r#"[
        {
            "id": "1",
            "title": "Weekend Tutoring",
            "category": "Education",
            "tags": ["Teaching", "Weekend"],
            "projectedIncome": "Rs 8,000",
            "effort": "Medium",
            "skills": "Subject expertise, Patience",
            "roadmap": ["List on a tutoring platform", "Set hourly rates", "Collect first reviews"],
            "insight": "Exam season drives a demand spike through March."
        }
    ]"#
    .to_string()
}

fn spending_mock() -> String {
    r#"{
        "total": "Rs 26,200",
        "variance": "+7% vs Avg",
        "risk": "Medium",
        "confidence": "91%",
        "largeExpenses": [
            {"date": "12 Nov", "title": "Car Insurance", "type": "Recurring Annual", "amount": "~Rs 6,500"}
        ],
        "forecast": "Expect a mid-November spike from insurance renewal and festival shopping."
    }"#
    .to_string()
}

// Request/Response types for the mock server

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    contents: Vec<RequestContent>,
}

#[derive(Debug, Default, Deserialize)]
struct RequestContent {
    #[serde(default)]
    parts: Vec<RequestPart>,
}

#[derive(Debug, Default, Deserialize)]
struct RequestPart {
    #[serde(default)]
    text: String,
}

impl GenerateRequest {
    fn prompt_text(&self) -> String {
        self.contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Serialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Serialize)]
struct CandidatePart {
    text: String,
}

impl GenerateResponse {
    fn with_text(text: String) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart { text }],
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GeminiBackend, InsightBackend, InsightClient};
    use crate::config::InsightConfig;
    use crate::insights::types::InsightKind;
    use crate::insights::InsightService;

    fn live_service(server: &MockGeminiServer) -> InsightService {
        let config = InsightConfig::new("test-key").with_base_url(server.url());
        let backend = GeminiBackend::new(&config).unwrap();
        InsightService::with_client(InsightClient::Gemini(backend))
    }

    #[tokio::test]
    async fn test_mock_server_insights_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let context = crate::insights::FinancialContext {
            timeframe: "week".to_string(),
            balance: 24_562.0,
            income: 1_200.0,
            spending: 850.0,
            top_categories: vec!["Dining".to_string()],
            recent_spike: "Friday Night +40%".to_string(),
            risk_score: "Low".to_string(),
        };
        let cards = service.dashboard_insights(&context).await;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Dining Spike");
        assert_eq!(cards[0].kind, InsightKind::Alert);
    }

    #[tokio::test]
    async fn test_mock_server_forecast_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let forecast = service.income_forecast("30d", "all").await;
        assert_eq!(forecast.forecast_amount, 5_100.0);
        assert_eq!(forecast.factors.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_server_goal_strategy_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let strategy = service.goal_strategy(&[]).await;
        assert_eq!(strategy.milestone.title, "Reach Rs 50,000");
    }

    #[tokio::test]
    async fn test_mock_server_opportunities_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let hits = service.opportunities("tutoring").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Weekend Tutoring");
    }

    #[tokio::test]
    async fn test_mock_server_spending_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let prediction = service.spending_prediction("30d").await;
        assert_eq!(prediction.risk, "Medium");
        assert_eq!(prediction.large_expenses.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_server_chat_round_trip() {
        let server = MockGeminiServer::start().await;
        let service = live_service(&server);

        let reply = service.chat("Should I buy index funds?").await;
        assert!(reply.contains("index funds"));
    }

    #[tokio::test]
    async fn test_mock_server_error_path_falls_back() {
        let server = MockGeminiServer::start().await;
        let config = InsightConfig::new("test-key").with_base_url(server.url());
        let backend = GeminiBackend::new(&config).unwrap();

        let result = backend.generate("force server error").await;
        assert!(result.is_err());
    }
}
