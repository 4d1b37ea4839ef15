//! Budget arithmetic and status classification
//!
//! Totals plus a strict priority cascade: exactly one status is active at a
//! time, and an over-budget category always wins over aggregate measures.

use serde::{Deserialize, Serialize};

/// A budget category with its monthly allocation and spend so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    /// Allocated amount, >= 0.
    pub allocated: f64,
    /// Spent amount, >= 0.
    pub spent: f64,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, allocated: f64, spent: f64) -> Self {
        Self {
            name: name.into(),
            allocated,
            spent,
        }
    }
}

/// Aggregate totals over all categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_allocated: f64,
    pub total_spent: f64,
    /// May be negative when spending exceeds allocations.
    pub remaining: f64,
    /// 0 when nothing is allocated.
    pub percent_spent: f64,
}

/// Single active budget status, selected by strict priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BudgetStatus {
    /// The first category (in list order) whose spend exceeds its allocation.
    OverBudget { category: String, overage: f64 },
    /// More than 90% of the total budget is spent.
    NearLimit,
    /// Under budget with money left to spend.
    OnTrack { remaining: f64 },
    /// Exactly at (or summed past) the limit with no single category over.
    LimitReached,
}

impl BudgetStatus {
    /// User-facing message for this status.
    pub fn message(&self) -> String {
        match self {
            BudgetStatus::OverBudget { category, overage } => format!(
                "You've exceeded your {} budget by Rs {:.0}. Consider reducing spending in other categories to balance it out.",
                category, overage
            ),
            BudgetStatus::NearLimit => {
                "You are very close to your total budget limit for the month. Proceed with caution."
                    .to_string()
            }
            BudgetStatus::OnTrack { remaining } => format!(
                "You are on track! You have Rs {:.0} left to spend this month.",
                remaining
            ),
            BudgetStatus::LimitReached => "Budget limit reached.".to_string(),
        }
    }
}

/// Compute aggregate totals.
pub fn summarize_budget(categories: &[BudgetCategory]) -> BudgetSummary {
    let total_allocated: f64 = categories.iter().map(|c| c.allocated).sum();
    let total_spent: f64 = categories.iter().map(|c| c.spent).sum();
    let percent_spent = if total_allocated > 0.0 {
        total_spent / total_allocated * 100.0
    } else {
        0.0
    };
    BudgetSummary {
        total_allocated,
        total_spent,
        remaining: total_allocated - total_spent,
        percent_spent,
    }
}

/// Classify the budget into its single active status.
///
/// Priority order: first over-budget category, then near-limit (> 90%
/// spent), then on-track (remaining > 0), then limit-reached. This is a
/// cascade, not an aggregation.
pub fn classify_budget(categories: &[BudgetCategory]) -> BudgetStatus {
    if let Some(over) = categories.iter().find(|c| c.spent > c.allocated) {
        return BudgetStatus::OverBudget {
            category: over.name.clone(),
            overage: over.spent - over.allocated,
        };
    }

    let summary = summarize_budget(categories);
    if summary.percent_spent > 90.0 {
        BudgetStatus::NearLimit
    } else if summary.remaining > 0.0 {
        BudgetStatus::OnTrack {
            remaining: summary.remaining,
        }
    } else {
        BudgetStatus::LimitReached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals() {
        let categories = vec![
            BudgetCategory::new("Housing", 15_000.0, 15_000.0),
            BudgetCategory::new("Food", 8_000.0, 4_500.0),
        ];
        let summary = summarize_budget(&categories);
        assert_eq!(summary.total_allocated, 23_000.0);
        assert_eq!(summary.total_spent, 19_500.0);
        assert_eq!(summary.remaining, 3_500.0);
        assert!((summary.percent_spent - 84.782_608).abs() < 1e-3);
    }

    #[test]
    fn test_empty_budget_percent_is_zero() {
        let summary = summarize_budget(&[]);
        assert_eq!(summary.percent_spent, 0.0);
        assert_eq!(classify_budget(&[]), BudgetStatus::LimitReached);
    }

    #[test]
    fn test_first_over_budget_category_wins() {
        // Second category has surplus, but the first overage must be reported
        let categories = vec![
            BudgetCategory::new("Dining", 100.0, 150.0),
            BudgetCategory::new("Travel", 50.0, 10.0),
        ];
        let status = classify_budget(&categories);
        assert_eq!(
            status,
            BudgetStatus::OverBudget {
                category: "Dining".to_string(),
                overage: 50.0
            }
        );
    }

    #[test]
    fn test_over_budget_beats_near_limit() {
        let categories = vec![
            BudgetCategory::new("Shopping", 2_000.0, 2_500.0),
            BudgetCategory::new("Transport", 5_000.0, 4_900.0),
        ];
        assert!(matches!(
            classify_budget(&categories),
            BudgetStatus::OverBudget { .. }
        ));
    }

    #[test]
    fn test_near_limit_beats_on_track() {
        // 95% spent, nothing over, positive remaining: near-limit must win
        let categories = vec![BudgetCategory::new("Everything", 10_000.0, 9_500.0)];
        assert_eq!(classify_budget(&categories), BudgetStatus::NearLimit);
    }

    #[test]
    fn test_on_track_reports_remaining() {
        let categories = vec![
            BudgetCategory::new("Housing", 15_000.0, 10_000.0),
            BudgetCategory::new("Food", 5_000.0, 2_000.0),
        ];
        assert_eq!(
            classify_budget(&categories),
            BudgetStatus::OnTrack { remaining: 8_000.0 }
        );
    }

    #[test]
    fn test_exact_limit_reached() {
        let categories = vec![BudgetCategory::new("All", 1_000.0, 1_000.0)];
        // 100% spent is > 90%, so the cascade hits near-limit first
        assert_eq!(classify_budget(&categories), BudgetStatus::NearLimit);

        // Limit-reached needs percent <= 90 with remaining <= 0: only the
        // degenerate zero-allocation case, covered above
    }

    #[test]
    fn test_message_texts() {
        let status = BudgetStatus::OverBudget {
            category: "Shopping".to_string(),
            overage: 500.0,
        };
        assert!(status.message().contains("Shopping"));
        assert!(status.message().contains("Rs 500"));
        assert_eq!(BudgetStatus::LimitReached.message(), "Budget limit reached.");
    }
}
