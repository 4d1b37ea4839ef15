//! AURA CLI - financial projections and AI insights
//!
//! Usage:
//!   aura loan -p 500000 -r 8.5 -y 5     Amortize a loan
//!   aura retire -m 500 -r 7 -y 35       Project retirement savings
//!   aura simulate --scenario Optimistic  Simulate 30-year net worth
//!   aura insights                        AI insight cards (needs GEMINI_API_KEY)
//!   aura chat "Should I buy gold?"       Ask the AI coach

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Loan {
            principal,
            rate,
            years,
        } => commands::cmd_loan(principal, rate, years, cli.json),
        Commands::Retire {
            current,
            monthly,
            rate,
            years,
        } => commands::cmd_retire(current, monthly, rate, years, cli.json),
        Commands::Simulate {
            savings,
            side_income,
            debt,
            scenario,
            tip,
        } => commands::cmd_simulate(savings, side_income, debt, &scenario, tip, cli.json).await,
        Commands::Budget => commands::cmd_budget(cli.json),
        Commands::Insights { timeframe } => commands::cmd_insights(&timeframe, cli.json).await,
        Commands::Forecast { timeframe, stream } => {
            commands::cmd_forecast(&timeframe, &stream, cli.json).await
        }
        Commands::Goals => commands::cmd_goals(cli.json).await,
        Commands::Opportunities { query } => commands::cmd_opportunities(&query, cli.json).await,
        Commands::Predict { timeframe } => commands::cmd_predict(&timeframe, cli.json).await,
        Commands::Chat { message } => commands::cmd_chat(&message, cli.json).await,
    }
}
