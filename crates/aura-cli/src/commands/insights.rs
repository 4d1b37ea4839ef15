//! AI coach command implementations
//!
//! Each command builds its demo context, hands it to the orchestrator, and
//! prints whatever comes back. The service never errors; a missing key or a
//! failed call degrades to the canned catalogue content.

use anyhow::Result;

use aura_core::InsightService;

use super::{demo, format_amount};

pub async fn cmd_insights(timeframe: &str, json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let context = demo::financial_context(timeframe);
    let cards = service.dashboard_insights(&context).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!();
    println!("✨ Insights ({})", timeframe);
    println!("   ─────────────────────────────────────────");
    for card in &cards {
        println!("   [{}] {}", card.kind, card.title);
        println!("        {}", card.message);
    }
    println!();
    Ok(())
}

pub async fn cmd_forecast(timeframe: &str, stream: &str, json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let forecast = service.income_forecast(timeframe, stream).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    println!();
    println!("📈 Income forecast ({}, stream: {})", timeframe, stream);
    println!("   ─────────────────────────────────────────");
    println!("   Expected income:  {}", format_amount(forecast.forecast_amount));
    println!("   Volatile period:  {}", forecast.volatile_period);
    println!("   Primary driver:   {}", forecast.primary_driver);
    println!();
    for factor in &forecast.factors {
        println!("   {} {} - {}", factor.icon, factor.title, factor.desc);
    }
    println!();
    for rec in &forecast.recommendations {
        println!("   {} {} - {}", rec.icon, rec.title, rec.desc);
    }
    println!();
    Ok(())
}

pub async fn cmd_goals(json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let goals = demo::goals();
    let strategy = service.goal_strategy(&goals).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&strategy)?);
        return Ok(());
    }

    println!();
    println!("🎯 Goals");
    println!("   ─────────────────────────────────────────");
    for goal in &goals {
        let percent = if goal.target_amount > 0.0 {
            goal.current_amount / goal.target_amount * 100.0
        } else {
            0.0
        };
        println!(
            "   {:<16} {} / {} ({:.0}%)",
            goal.name,
            format_amount(goal.current_amount),
            format_amount(goal.target_amount),
            percent
        );
    }
    println!();
    println!("   💡 {}", strategy.title);
    println!("      {}", strip_strong(&strategy.message));
    println!("      Next: {} - {}", strategy.milestone.title, strategy.milestone.desc);
    println!();
    Ok(())
}

pub async fn cmd_opportunities(query: &str, json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let hits = service.opportunities(query).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!();
    if query.is_empty() {
        println!("💼 Opportunities");
    } else {
        println!("💼 Opportunities matching \"{}\"", query);
    }
    println!("   ─────────────────────────────────────────");
    if hits.is_empty() {
        println!("   No matches.");
    }
    for opp in &hits {
        println!(
            "   {} [{}] {} / {} effort",
            opp.title, opp.category, opp.projected_income, opp.effort
        );
        println!("      Skills: {}", opp.skills);
        for (i, step) in opp.roadmap.iter().enumerate() {
            println!("      {}. {}", i + 1, step);
        }
        println!("      {}", opp.insight);
        println!();
    }
    Ok(())
}

pub async fn cmd_predict(timeframe: &str, json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let prediction = service.spending_prediction(timeframe).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    println!();
    println!("🔎 Spending prediction ({})", timeframe);
    println!("   ─────────────────────────────────────────");
    println!("   Predicted total:  {}", prediction.total);
    println!("   Variance:         {}", prediction.variance);
    println!("   Risk:             {}", prediction.risk);
    println!("   Confidence:       {}", prediction.confidence);
    println!();
    for expense in &prediction.large_expenses {
        println!(
            "   {} {} ({}) {}",
            expense.date, expense.title, expense.kind, expense.amount
        );
    }
    println!();
    println!("   {}", prediction.forecast);
    println!();
    Ok(())
}

pub async fn cmd_chat(message: &str, json: bool) -> Result<()> {
    let service = InsightService::from_env();
    let reply = service.chat(message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "reply": reply }))?);
        return Ok(());
    }

    println!();
    println!("🤖 {}", reply);
    println!();
    Ok(())
}

/// The strategy message may carry `<strong>` emphasis for the web UI.
fn strip_strong(message: &str) -> String {
    message.replace("<strong>", "").replace("</strong>", "")
}
