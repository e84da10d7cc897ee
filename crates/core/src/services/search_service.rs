use crate::models::budget::Budget;
use crate::models::category::SpendingCategory;
use crate::models::debt::Debt;
use crate::models::expense::Expense;

/// Paid-state filter for debt listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl PaymentFilter {
    fn matches(&self, debt: &Debt) -> bool {
        match self {
            PaymentFilter::All => true,
            PaymentFilter::Paid => debt.is_paid,
            PaymentFilter::Unpaid => !debt.is_paid,
        }
    }
}

/// Consumer-side filtering over service snapshots.
///
/// Services never filter; list pages narrow what they fetched with these.
/// Every search preserves the input order.
pub struct SearchService;

impl SearchService {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive match on description or category name, optionally
    /// restricted to one category.
    pub fn search_expenses(
        &self,
        expenses: &[Expense],
        term: &str,
        category: Option<SpendingCategory>,
    ) -> Vec<Expense> {
        let q = term.to_lowercase();
        expenses
            .iter()
            .filter(|e| {
                e.description.to_lowercase().contains(&q)
                    || e.category.as_str().to_lowercase().contains(&q)
            })
            .filter(|e| category.as_ref().map_or(true, |c| &e.category == c))
            .cloned()
            .collect()
    }

    /// Case-insensitive match on person name or description.
    pub fn search_debts(&self, debts: &[Debt], term: &str, filter: PaymentFilter) -> Vec<Debt> {
        let q = term.to_lowercase();
        debts
            .iter()
            .filter(|d| {
                d.person_name.to_lowercase().contains(&q)
                    || d.description.to_lowercase().contains(&q)
            })
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    pub fn search_budgets(&self, budgets: &[Budget], term: &str) -> Vec<Budget> {
        let q = term.to_lowercase();
        budgets
            .iter()
            .filter(|b| b.category.as_str().to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    /// The `limit` newest expenses by date.
    pub fn recent_expenses(&self, expenses: &[Expense], limit: usize) -> Vec<Expense> {
        let mut recent = expenses.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }

    /// Categories used by at least one expense, in first-seen order.
    pub fn distinct_categories(&self, expenses: &[Expense]) -> Vec<SpendingCategory> {
        let mut categories = Vec::new();
        for expense in expenses {
            if !categories.contains(&expense.category) {
                categories.push(expense.category.clone());
            }
        }
        categories
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}
