//! Deterministic projection commands (loan, retire, simulate, budget)

use anyhow::Result;

use aura_core::projection::budget::{classify_budget, summarize_budget};
use aura_core::projection::growth::{contribution_boost, growth_series};
use aura_core::projection::loan::amortize;
use aura_core::projection::scenario::{
    net_worth_projection, Scenario, ScenarioInputs, HORIZON_YEARS,
};

use super::{demo, format_amount};

pub fn cmd_loan(principal: f64, rate: f64, years: u32, json: bool) -> Result<()> {
    anyhow::ensure!(principal >= 0.0, "principal must be non-negative");
    anyhow::ensure!(rate >= 0.0, "rate must be non-negative");
    anyhow::ensure!(years > 0, "term must be at least one year");

    let schedule = amortize(principal, rate, years);

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!();
    println!("🏦 Loan: {} at {}% over {} years", format_amount(principal), rate, years);
    println!("   ─────────────────────────────────────────");
    println!("   Monthly payment:  {}", format_amount(schedule.monthly_payment));
    println!("   Total cost:       {}", format_amount(schedule.total_cost));
    println!("   Total interest:   {}", format_amount(schedule.total_interest));
    println!();
    Ok(())
}

pub fn cmd_retire(current: f64, monthly: f64, rate: f64, years: u32, json: bool) -> Result<()> {
    anyhow::ensure!(years > 0, "projection needs at least one year");

    let series = growth_series(current, monthly, rate, years);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    let last = series.last().map(|p| p.balance).unwrap_or(current);
    let boost = contribution_boost(monthly * 0.1, rate, years);

    println!();
    println!("🌴 Retirement projection over {} years", years);
    println!("   ─────────────────────────────────────────");
    println!("   Starting balance:   {}", format_amount(current));
    println!("   Monthly savings:    {}", format_amount(monthly));
    println!("   Expected return:    {}%/yr", rate);
    println!();
    // Sparse sampling keeps the table readable for long horizons
    let step = (years / 10).max(1);
    for point in series.iter().filter(|p| p.period % step == 0 || p.period == years) {
        println!("   Year {:>3}: {}", point.period, format_amount(point.balance));
    }
    println!();
    println!("   Projected balance:  {}", format_amount(last));
    println!(
        "   Tip: saving an extra {} a month could add {} by year {}.",
        format_amount(monthly * 0.1),
        format_amount(boost),
        years
    );
    println!();
    Ok(())
}

pub async fn cmd_simulate(
    savings: f64,
    side_income: f64,
    debt: f64,
    scenario_name: &str,
    tip: bool,
    json: bool,
) -> Result<()> {
    let scenario = Scenario::from_name(scenario_name);
    let inputs = ScenarioInputs {
        savings,
        side_income,
        debt_repayment: debt,
        scenario,
    };
    let projected = net_worth_projection(&inputs);

    if json {
        let out = serde_json::json!({
            "scenario": scenario.as_str(),
            "netMonthlySurplus": inputs.net_monthly_surplus(),
            "horizonYears": HORIZON_YEARS,
            "projectedNetWorth": projected,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("🔮 {} over {} years", scenario, HORIZON_YEARS);
    println!("   ─────────────────────────────────────────");
    println!("   Monthly savings:      {}", format_amount(savings));
    println!("   Side income:          {}", format_amount(side_income));
    println!("   Debt repayment:       {}", format_amount(debt));
    println!("   Net monthly surplus:  {}", format_amount(inputs.net_monthly_surplus()));
    println!();
    println!("   Projected net worth:  {}", format_amount(projected));

    if tip {
        let service = aura_core::InsightService::from_env();
        let advice = service.simulation_tip(savings, side_income, debt, scenario).await;
        println!();
        println!("   💡 {}", advice);
    }
    println!();
    Ok(())
}

pub fn cmd_budget(json: bool) -> Result<()> {
    let categories = demo::budget();
    let summary = summarize_budget(&categories);
    let status = classify_budget(&categories);

    if json {
        let out = serde_json::json!({
            "summary": summary,
            "status": status,
            "message": status.message(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("📒 Monthly budget");
    println!("   ─────────────────────────────────────────");
    for category in &categories {
        println!(
            "   {:<16} {:>12} / {}",
            category.name,
            format_amount(category.spent),
            format_amount(category.allocated)
        );
    }
    println!();
    println!(
        "   Spent {} of {} ({:.0}%)",
        format_amount(summary.total_spent),
        format_amount(summary.total_allocated),
        summary.percent_spent
    );
    println!("   {}", status.message());
    println!();
    Ok(())
}
