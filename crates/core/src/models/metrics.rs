use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::debt::Debt;
use super::expense::Expense;

/// How far a budget has been consumed, computed from all expenses in its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    /// Sum of matching expense amounts
    pub spent: f64,

    /// spent / limit × 100, clamped to [0, 100] for progress bars
    pub percentage: f64,

    /// spent / limit × 100, unclamped
    pub raw_percentage: f64,

    /// max(limit − spent, 0)
    pub remaining: f64,

    /// max(spent − limit, 0)
    pub overage: f64,

    /// spent > limit
    pub is_over_budget: bool,

    pub tier: ProgressTier,
}

/// Four-bucket color tier for a budget progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressTier {
    /// Over budget
    Critical,
    /// At least 80% used
    Warning,
    /// At least 60% used
    Caution,
    Nominal,
}

impl std::fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressTier::Critical => write!(f, "critical"),
            ProgressTier::Warning => write!(f, "warning"),
            ProgressTier::Caution => write!(f, "caution"),
            ProgressTier::Nominal => write!(f, "nominal"),
        }
    }
}

/// Repayment status of a debt relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtStatus {
    Paid,
    Overdue,
    DueSoon,
    Pending,
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebtStatus::Paid => write!(f, "paid"),
            DebtStatus::Overdue => write!(f, "overdue"),
            DebtStatus::DueSoon => write!(f, "due-soon"),
            DebtStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Direction indicator for the "budget remaining" dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageTrend {
    /// More than 80% of the ceiling spent this month
    Down,
    /// More than 50%
    Neutral,
    Up,
}

/// Figures shown on the dashboard, computed at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Instant the month filter was evaluated against
    pub as_of: DateTime<Utc>,

    /// Sum of every expense ever recorded
    pub total_expenses: f64,

    /// Sum of expenses dated in the same calendar month and year as `as_of`
    pub monthly_expenses: f64,

    /// Sum of unpaid debts
    pub outstanding_debt: f64,

    /// Sum of every budget limit
    pub total_budget: f64,

    /// total_budget − monthly_expenses (may be negative)
    pub budget_remaining: f64,

    /// monthly_expenses / total_budget × 100, or 0 with no budgets
    pub budget_usage_pct: f64,

    pub trend: UsageTrend,

    /// Newest expenses, most recent first
    pub recent_expenses: Vec<Expense>,
}

/// A budget paired with its computed progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub budget: Budget,
    pub progress: BudgetProgress,
}

/// A debt paired with its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtOverview {
    pub debt: Debt,
    pub status: DebtStatus,
}
