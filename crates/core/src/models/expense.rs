use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::SpendingCategory;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Identifier, unique within the expense collection
    #[serde(rename = "Id")]
    pub id: u32,

    /// Amount spent (always positive)
    pub amount: f64,

    pub category: SpendingCategory,

    pub description: String,

    /// When the expense happened
    pub date: DateTime<Utc>,

    /// When the record was created through the service
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating an expense.
/// The service assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: f64,
    pub category: SpendingCategory,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl NewExpense {
    pub fn new(
        amount: f64,
        category: SpendingCategory,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    pub(crate) fn into_expense(self, id: u32, created_at: DateTime<Utc>) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            created_at,
        }
    }
}

/// Partial update for an expense. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<SpendingCategory>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl ExpensePatch {
    pub(crate) fn apply(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}
