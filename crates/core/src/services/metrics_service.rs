use chrono::{DateTime, Datelike, Utc};

use crate::format::days_until;
use crate::models::budget::Budget;
use crate::models::debt::Debt;
use crate::models::expense::Expense;
use crate::models::metrics::{
    BudgetOverview, BudgetProgress, DashboardSummary, DebtOverview, DebtStatus, ProgressTier,
    UsageTrend,
};
use crate::models::settings::Settings;

use super::search_service::SearchService;

/// Derives dashboard figures from full entity collections.
///
/// Pure business logic over slices: nothing is cached, every call
/// recomputes from the records it is given.
#[derive(Debug, Clone)]
pub struct MetricsService {
    due_soon_days: i64,
    recent_expense_count: usize,
}

impl MetricsService {
    pub fn new(due_soon_days: i64, recent_expense_count: usize) -> Self {
        Self {
            due_soon_days,
            recent_expense_count,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.due_soon_days, settings.recent_expense_count)
    }

    // ── Budgets ─────────────────────────────────────────────────────

    /// Progress of one budget against every expense in its category.
    ///
    /// The budget's period is not applied: a weekly budget is compared
    /// against all-time spend in the category.
    pub fn budget_progress(&self, budget: &Budget, expenses: &[Expense]) -> BudgetProgress {
        let spent: f64 = expenses
            .iter()
            .filter(|e| e.category == budget.category)
            .map(|e| e.amount)
            .sum();

        let raw_percentage = if budget.limit > 0.0 {
            spent / budget.limit * 100.0
        } else if spent > 0.0 {
            100.0
        } else {
            0.0
        };
        let percentage = raw_percentage.clamp(0.0, 100.0);
        let is_over_budget = spent > budget.limit;

        BudgetProgress {
            spent,
            percentage,
            raw_percentage,
            remaining: (budget.limit - spent).max(0.0),
            overage: (spent - budget.limit).max(0.0),
            is_over_budget,
            tier: Self::progress_tier(percentage, is_over_budget),
        }
    }

    /// Over budget wins; otherwise ≥80 warning, ≥60 caution, else nominal.
    pub fn progress_tier(percentage: f64, is_over_budget: bool) -> ProgressTier {
        if is_over_budget {
            ProgressTier::Critical
        } else if percentage >= 80.0 {
            ProgressTier::Warning
        } else if percentage >= 60.0 {
            ProgressTier::Caution
        } else {
            ProgressTier::Nominal
        }
    }

    pub fn budget_overview(&self, budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetOverview> {
        budgets
            .iter()
            .map(|budget| BudgetOverview {
                budget: budget.clone(),
                progress: self.budget_progress(budget, expenses),
            })
            .collect()
    }

    pub fn total_budget(budgets: &[Budget]) -> f64 {
        budgets.iter().map(|b| b.limit).sum()
    }

    // ── Debts ───────────────────────────────────────────────────────

    pub fn debt_status(&self, debt: &Debt, now: DateTime<Utc>) -> DebtStatus {
        if debt.is_paid {
            return DebtStatus::Paid;
        }
        match debt.due_date.map(|due| days_until(due, now)) {
            Some(days) if days < 0 => DebtStatus::Overdue,
            Some(days) if days <= self.due_soon_days => DebtStatus::DueSoon,
            _ => DebtStatus::Pending,
        }
    }

    pub fn debt_overview(&self, debts: &[Debt], now: DateTime<Utc>) -> Vec<DebtOverview> {
        debts
            .iter()
            .map(|debt| DebtOverview {
                debt: debt.clone(),
                status: self.debt_status(debt, now),
            })
            .collect()
    }

    /// Sum of unpaid debts.
    pub fn outstanding_debt(debts: &[Debt]) -> f64 {
        debts.iter().filter(|d| !d.is_paid).map(|d| d.amount).sum()
    }

    // ── Expenses ────────────────────────────────────────────────────

    pub fn total_expenses(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of expenses dated in the same calendar month and year as `now`.
    pub fn monthly_expenses(expenses: &[Expense], now: DateTime<Utc>) -> f64 {
        expenses
            .iter()
            .filter(|e| e.date.month() == now.month() && e.date.year() == now.year())
            .map(|e| e.amount)
            .sum()
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub fn usage_trend(usage_pct: f64) -> UsageTrend {
        if usage_pct > 80.0 {
            UsageTrend::Down
        } else if usage_pct > 50.0 {
            UsageTrend::Neutral
        } else {
            UsageTrend::Up
        }
    }

    pub fn dashboard(
        &self,
        expenses: &[Expense],
        debts: &[Debt],
        budgets: &[Budget],
        now: DateTime<Utc>,
    ) -> DashboardSummary {
        let total_budget = Self::total_budget(budgets);
        let monthly_expenses = Self::monthly_expenses(expenses, now);
        let budget_usage_pct = if total_budget > 0.0 {
            monthly_expenses / total_budget * 100.0
        } else {
            0.0
        };

        DashboardSummary {
            as_of: now,
            total_expenses: Self::total_expenses(expenses),
            monthly_expenses,
            outstanding_debt: Self::outstanding_debt(debts),
            total_budget,
            budget_remaining: total_budget - monthly_expenses,
            budget_usage_pct,
            trend: Self::usage_trend(budget_usage_pct),
            recent_expenses: SearchService::new()
                .recent_expenses(expenses, self.recent_expense_count),
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
