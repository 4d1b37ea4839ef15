//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use clap::{Parser, Subcommand};

/// AURA - AI-assisted financial coach
#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Financial projections and AI insights from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Amortize a loan into a fixed monthly payment
    Loan {
        /// Loan principal
        #[arg(short, long)]
        principal: f64,

        /// Annual interest rate in percent (e.g. 8.5)
        #[arg(short, long)]
        rate: f64,

        /// Term in years
        #[arg(short, long)]
        years: u32,
    },

    /// Project a retirement balance curve
    Retire {
        /// Current savings balance
        #[arg(long, default_value = "25000")]
        current: f64,

        /// Monthly contribution
        #[arg(short, long, default_value = "500")]
        monthly: f64,

        /// Expected annual return in percent
        #[arg(short, long, default_value = "7")]
        rate: f64,

        /// Years until retirement
        #[arg(short, long, default_value = "35")]
        years: u32,
    },

    /// Simulate 30-year net worth under a named scenario
    Simulate {
        /// Monthly savings
        #[arg(short, long, default_value = "10000")]
        savings: f64,

        /// Monthly side-hustle income
        #[arg(long, default_value = "5000")]
        side_income: f64,

        /// Monthly debt repayment
        #[arg(short, long, default_value = "6000")]
        debt: f64,

        /// Scenario name: "Current Path", "Optimistic", "Steady Growth",
        /// "Aggressive Investor", "Chaotic"
        #[arg(long, default_value = "Current Path")]
        scenario: String,

        /// Also ask the AI coach for a tip on these numbers
        #[arg(long)]
        tip: bool,
    },

    /// Summarize and classify the demo budget
    Budget,

    /// Generate dashboard insight cards from the demo snapshot
    Insights {
        /// Snapshot timeframe: week or month
        #[arg(short, long, default_value = "week")]
        timeframe: String,
    },

    /// Forecast freelancer income
    Forecast {
        /// Timeframe: 30d or 90d
        #[arg(short, long, default_value = "30d")]
        timeframe: String,

        /// Income stream filter (e.g. all, delivery, design)
        #[arg(short, long, default_value = "all")]
        stream: String,
    },

    /// Suggest a strategy for the demo savings goals
    Goals,

    /// Search side hustles and investment opportunities
    Opportunities {
        /// Search query (empty lists everything)
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Predict upcoming spending
    Predict {
        /// Timeframe: 30d or 90d
        #[arg(short, long, default_value = "30d")]
        timeframe: String,
    },

    /// Ask the AI coach a question
    Chat {
        /// The question or message
        message: String,
    },
}
