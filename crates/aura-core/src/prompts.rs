//! Prompt library for insight call sites
//!
//! One Markdown template per call site, embedded at compile time. Each
//! template carries YAML frontmatter (id, version) and a `# User` body that
//! states the exact JSON contract the model must honor. Rendering is simple
//! mustache-style `{{var}}` substitution.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default prompts (compiled into binary)
mod defaults {
    pub const DASHBOARD_INSIGHTS: &str = include_str!("../../../prompts/dashboard_insights.md");
    pub const INCOME_FORECAST: &str = include_str!("../../../prompts/income_forecast.md");
    pub const GOAL_STRATEGY: &str = include_str!("../../../prompts/goal_strategy.md");
    pub const OPPORTUNITIES: &str = include_str!("../../../prompts/opportunities.md");
    pub const SPENDING_PREDICTION: &str = include_str!("../../../prompts/spending_prediction.md");
    pub const CHAT: &str = include_str!("../../../prompts/chat.md");
    pub const SIMULATION_TIP: &str = include_str!("../../../prompts/simulation_tip.md");
}

/// Known prompt IDs, one per insight call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptId {
    DashboardInsights,
    IncomeForecast,
    GoalStrategy,
    Opportunities,
    SpendingPrediction,
    Chat,
    SimulationTip,
}

impl PromptId {
    /// Get the string identifier for this prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardInsights => "dashboard_insights",
            Self::IncomeForecast => "income_forecast",
            Self::GoalStrategy => "goal_strategy",
            Self::Opportunities => "opportunities",
            Self::SpendingPrediction => "spending_prediction",
            Self::Chat => "chat",
            Self::SimulationTip => "simulation_tip",
        }
    }

    /// Get all known prompt IDs
    pub fn all() -> &'static [PromptId] {
        &[
            Self::DashboardInsights,
            Self::IncomeForecast,
            Self::GoalStrategy,
            Self::Opportunities,
            Self::SpendingPrediction,
            Self::Chat,
            Self::SimulationTip,
        ]
    }

    fn default_content(&self) -> &'static str {
        match self {
            Self::DashboardInsights => defaults::DASHBOARD_INSIGHTS,
            Self::IncomeForecast => defaults::INCOME_FORECAST,
            Self::GoalStrategy => defaults::GOAL_STRATEGY,
            Self::Opportunities => defaults::OPPORTUNITIES,
            Self::SpendingPrediction => defaults::SPENDING_PREDICTION,
            Self::Chat => defaults::CHAT,
            Self::SimulationTip => defaults::SIMULATION_TIP,
        }
    }
}

/// Prompt frontmatter metadata
#[derive(Debug, Clone, Deserialize)]
pub struct PromptMetadata {
    /// Unique identifier
    pub id: String,
    /// Version number for tracking changes
    pub version: u32,
}

/// A loaded prompt with metadata and content
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Metadata from frontmatter
    pub metadata: PromptMetadata,
    /// The prompt body (frontmatter stripped)
    pub content: String,
}

impl Prompt {
    /// Get the user section of the prompt
    pub fn user_section(&self) -> Option<&str> {
        let start = self.content.find("# User")?;
        let after_header = &self.content[start + "# User".len()..];
        let end = after_header.find("\n# ").unwrap_or(after_header.len());
        Some(after_header[..end].trim())
    }

    /// Render the user section with `{{var}}` substitution.
    pub fn render_user(&self, vars: &HashMap<&str, &str>) -> String {
        let mut result = self
            .user_section()
            .unwrap_or(self.content.as_str())
            .to_string();
        for (key, value) in vars {
            let pattern = format!("{{{{{}}}}}", key);
            result = result.replace(&pattern, value);
        }
        result
    }
}

/// Prompt library caching parsed embedded templates.
#[derive(Default)]
pub struct PromptLibrary {
    cache: HashMap<PromptId, Prompt>,
}

impl PromptLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a prompt by ID, parsing and caching on first use.
    pub fn get(&mut self, id: PromptId) -> Result<&Prompt> {
        if !self.cache.contains_key(&id) {
            let prompt = parse_prompt(id.default_content())?;
            self.cache.insert(id, prompt);
        }
        Ok(self.cache.get(&id).unwrap())
    }
}

/// Parse a prompt file into metadata and body
fn parse_prompt(content: &str) -> Result<Prompt> {
    let content = content.trim();

    if !content.starts_with("---") {
        return Err(Error::Prompt(
            "Prompt must start with YAML frontmatter (---)".into(),
        ));
    }

    let rest = &content[3..];
    let end = rest
        .find("---")
        .ok_or_else(|| Error::Prompt("Prompt frontmatter not closed (missing second ---)".into()))?;

    let frontmatter = rest[..end].trim();
    let body = rest[end + 3..].trim();

    let metadata: PromptMetadata = serde_yaml::from_str(frontmatter)
        .map_err(|e| Error::Prompt(format!("Invalid prompt frontmatter: {}", e)))?;

    Ok(Prompt {
        metadata,
        content: body.to_string(),
    })
}
