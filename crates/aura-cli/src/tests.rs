//! CLI command tests
//!
//! Projection commands are exercised directly; insight commands run against
//! the no-credential path so nothing touches the network.

use crate::commands::{self, demo};

// ========== Projection Command Tests ==========

#[test]
fn test_cmd_loan_ok() {
    assert!(commands::cmd_loan(500_000.0, 8.5, 5, false).is_ok());
    assert!(commands::cmd_loan(500_000.0, 8.5, 5, true).is_ok());
}

#[test]
fn test_cmd_loan_rejects_bad_inputs() {
    assert!(commands::cmd_loan(-1.0, 8.5, 5, false).is_err());
    assert!(commands::cmd_loan(1_000.0, -0.5, 5, false).is_err());
    assert!(commands::cmd_loan(1_000.0, 8.5, 0, false).is_err());
}

#[test]
fn test_cmd_retire_ok() {
    assert!(commands::cmd_retire(25_000.0, 500.0, 7.0, 35, false).is_ok());
    assert!(commands::cmd_retire(0.0, 100.0, 0.0, 1, true).is_ok());
}

#[test]
fn test_cmd_retire_rejects_zero_years() {
    assert!(commands::cmd_retire(25_000.0, 500.0, 7.0, 0, false).is_err());
}

#[tokio::test]
async fn test_cmd_simulate_ok() {
    let result = commands::cmd_simulate(10_000.0, 5_000.0, 6_000.0, "Optimistic", false, false).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cmd_simulate_unknown_scenario_still_projects() {
    // Unrecognized names resolve to the baseline scenario
    std::env::remove_var("GEMINI_API_KEY");
    let result = commands::cmd_simulate(10_000.0, 0.0, 0.0, "Moonshot", true, true).await;
    assert!(result.is_ok());
}

#[test]
fn test_cmd_budget_ok() {
    assert!(commands::cmd_budget(false).is_ok());
    assert!(commands::cmd_budget(true).is_ok());
}

// ========== Insight Command Tests (offline path) ==========

#[tokio::test]
async fn test_cmd_insights_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_insights("week", false).await.is_ok());
    assert!(commands::cmd_insights("month", true).await.is_ok());
}

#[tokio::test]
async fn test_cmd_forecast_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_forecast("30d", "all", false).await.is_ok());
}

#[tokio::test]
async fn test_cmd_goals_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_goals(true).await.is_ok());
}

#[tokio::test]
async fn test_cmd_opportunities_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_opportunities("", false).await.is_ok());
    assert!(commands::cmd_opportunities("tata", false).await.is_ok());
}

#[tokio::test]
async fn test_cmd_predict_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_predict("90d", false).await.is_ok());
}

#[tokio::test]
async fn test_cmd_chat_offline() {
    std::env::remove_var("GEMINI_API_KEY");
    assert!(commands::cmd_chat("Should I buy index funds?", false).await.is_ok());
}

// ========== Demo Data ==========

#[test]
fn test_demo_budget_is_on_track_shaped() {
    let categories = demo::budget();
    assert!(!categories.is_empty());
    // Housing sits exactly at its limit but never over it
    let housing = &categories[0];
    assert_eq!(housing.name, "Housing");
    assert!(housing.spent <= housing.allocated);
}

#[test]
fn test_demo_goals_have_targets() {
    for goal in demo::goals() {
        assert!(goal.target_amount > 0.0);
        assert!(goal.current_amount <= goal.target_amount);
    }
}
