//! Fallback catalogue
//!
//! Pre-authored values substituted whenever the live pipeline cannot
//! produce a valid result: missing credential, transport failure, or
//! malformed model output. One entry per call site, defined once, never
//! mutated. Users see this content with no visible marker; the source
//! discriminator exists only in the logs.

use super::types::{
    ForecastFactor, ForecastRecommendation, GoalStrategy, IncomeForecast, Insight, InsightKind,
    LargeExpense, Milestone, Opportunity, RecommendationTone, SpendingPrediction,
};

/// Canned dashboard insight cards.
pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Demo Mode".to_string(),
            message: "Add valid API Key to .env to see real AI insights.".to_string(),
            kind: InsightKind::Warning,
        },
        Insight {
            title: "Spending Alert".to_string(),
            message: "Dining out expenses are 20% higher this week.".to_string(),
            kind: InsightKind::Alert,
        },
        Insight {
            title: "Savings Opportunity".to_string(),
            message: "Switching utility providers could save Rs 3,000/mo.".to_string(),
            kind: InsightKind::Opportunity,
        },
    ]
}

/// Canned income forecast. Amounts and periods vary with the timeframe so
/// the demo UI still reacts to the toggle.
pub fn income_forecast(timeframe: &str, stream: &str) -> IncomeForecast {
    let short = timeframe == "30d";
    IncomeForecast {
        forecast_amount: if short { 4_250.0 } else { 12_800.0 },
        volatile_period: if short {
            "Oct 24 - Nov 5".to_string()
        } else {
            "Nov 15 - Dec 10".to_string()
        },
        primary_driver: if stream == "all" {
            "Seasonal Slowdown".to_string()
        } else {
            "Client Project Delay".to_string()
        },
        factors: vec![
            ForecastFactor {
                icon: "📅".to_string(),
                title: "Holiday Demand".to_string(),
                desc: "Increased activity expected around Thanksgiving.".to_string(),
            },
            ForecastFactor {
                icon: "🌧️".to_string(),
                title: "Weather Patterns".to_string(),
                desc: "Rainy forecasts may increase delivery demand.".to_string(),
            },
            ForecastFactor {
                icon: "🏙️".to_string(),
                title: "Local Events".to_string(),
                desc: "Tech Summit in Nov will boost gig work.".to_string(),
            },
        ],
        recommendations: vec![
            ForecastRecommendation {
                tone: RecommendationTone::GreenGlow,
                icon: "📍".to_string(),
                title: "Focus on Delivery Gigs".to_string(),
                desc: "Bad weather forecast for Oct 28-31 will likely boost demand.".to_string(),
            },
            ForecastRecommendation {
                tone: RecommendationTone::YellowGlow,
                icon: "⚠️".to_string(),
                title: "Save an Extra Rs 150".to_string(),
                desc: "Prepare for the expected income dip in early November.".to_string(),
            },
            ForecastRecommendation {
                tone: RecommendationTone::RedGlow,
                icon: "🛑".to_string(),
                title: "Alert: Low Demand Period".to_string(),
                desc: "Consider taking time off or working on other projects Nov 6-12."
                    .to_string(),
            },
        ],
    }
}

/// Canned goal-acceleration strategy.
pub fn goal_strategy() -> GoalStrategy {
    GoalStrategy {
        title: r#"Accelerate "Emergency Fund""#.to_string(),
        message: "Based on your spending habits, if you cut \"Dining Out\" by 15%, you could reach this goal <strong>2 months early</strong>.".to_string(),
        milestone: Milestone {
            title: "Reach Rs 7,000 in Emergency Fund".to_string(),
            desc: "You are only Rs 500 away! Projected to hit this by next Friday.".to_string(),
        },
    }
}

/// Canned opportunity list, filtered by the search query the way the live
/// call would honor it (title substring match; empty query matches all).
pub fn opportunities(query: &str) -> Vec<Opportunity> {
    let all = vec![
        Opportunity {
            id: "1".to_string(),
            title: "Weekend Event Photographer".to_string(),
            category: "Creative".to_string(),
            tags: vec!["Photography".to_string(), "Weekend".to_string()],
            projected_income: "Rs 15,000".to_string(),
            effort: "Medium".to_string(),
            skills: "Photography, Photo Editing".to_string(),
            roadmap: vec![
                "Build Your Portfolio".to_string(),
                "Set Your Pricing".to_string(),
                "Market on Social Media".to_string(),
            ],
            insight: "Our AI notes a 30% increase in demand for event photographers in your area this season.".to_string(),
        },
        Opportunity {
            id: "2".to_string(),
            title: "Furniture Assembly Pro".to_string(),
            category: "Labor".to_string(),
            tags: vec!["Physical".to_string(), "Flexible".to_string()],
            projected_income: "Rs 10,000".to_string(),
            effort: "Low".to_string(),
            skills: "Basic Tools, Assembly".to_string(),
            roadmap: vec![
                "Register on TaskRabbit".to_string(),
                "Get Basic Tools".to_string(),
                "Complete First Task".to_string(),
            ],
            insight: "High demand on weekends. Quick way to start earning.".to_string(),
        },
        Opportunity {
            id: "3".to_string(),
            title: "Invest in Tata Motors".to_string(),
            category: "Investment".to_string(),
            tags: vec!["Stock".to_string(), "Long-term".to_string()],
            projected_income: "+12% Annual".to_string(),
            effort: "Passive".to_string(),
            skills: "Capital, Patience".to_string(),
            roadmap: vec![
                "Open Demat Account".to_string(),
                "Analyze Fundamentals".to_string(),
                "Buy on Dip".to_string(),
            ],
            insight: "EV market share expansion suggests strong future growth potential.".to_string(),
        },
    ];

    if query.is_empty() {
        return all;
    }
    let needle = query.to_lowercase();
    all.into_iter()
        .filter(|o| o.title.to_lowercase().contains(&needle))
        .collect()
}

/// Canned spending prediction, timeframe-sensitive like the forecast.
pub fn spending_prediction(timeframe: &str) -> SpendingPrediction {
    let short = timeframe == "30d";
    SpendingPrediction {
        total: if short {
            "Rs 24,500".to_string()
        } else {
            "Rs 72,000".to_string()
        },
        variance: if short {
            "+5% vs Avg".to_string()
        } else {
            "+2% vs Avg".to_string()
        },
        risk: "Low".to_string(),
        confidence: "94%".to_string(),
        large_expenses: vec![
            LargeExpense {
                date: "12 Nov".to_string(),
                title: "Car Insurance".to_string(),
                kind: "Recurring Annual".to_string(),
                amount: "~Rs 6,500".to_string(),
            },
            LargeExpense {
                date: "18 Nov".to_string(),
                title: "Holiday Shopping".to_string(),
                kind: "Pattern Detected".to_string(),
                amount: "~Rs 3,000".to_string(),
            },
        ],
        forecast: "Based on your social calendar and seasonal trends, expect a spending spike around mid-November.".to_string(),
    }
}

/// Chat reply when no credential is configured.
pub fn chat_no_credential() -> String {
    "I cannot connect to the brain. Please check your GEMINI_API_KEY configuration.".to_string()
}

/// Chat reply when the model responds with an empty completion.
pub fn chat_empty() -> String {
    "I'm having trouble thinking right now.".to_string()
}

/// Chat reply when the live call fails.
pub fn chat_failure() -> String {
    "Sorry, I'm having trouble connecting to the server.".to_string()
}

/// Canned tip for the net-worth simulator.
pub fn simulation_tip() -> String {
    "Increasing your monthly savings by just Rs 2,000 could lead to retiring 2 years earlier in the 'Optimistic' future.".to_string()
}
