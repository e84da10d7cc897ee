use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::SpendingCategory;

/// Budget period. Stored for display only; utilization does not filter by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Weekly => write!(f, "weekly"),
            BudgetPeriod::Monthly => write!(f, "monthly"),
            BudgetPeriod::Yearly => write!(f, "yearly"),
        }
    }
}

/// Spending ceiling for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(rename = "Id")]
    pub id: u32,

    pub category: SpendingCategory,

    /// Ceiling amount (always positive)
    pub limit: f64,

    pub period: BudgetPeriod,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: SpendingCategory,
    pub limit: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: SpendingCategory, limit: f64, period: BudgetPeriod) -> Self {
        Self {
            category,
            limit,
            period,
        }
    }

    pub(crate) fn into_budget(self, id: u32, created_at: DateTime<Utc>) -> Budget {
        Budget {
            id,
            category: self.category,
            limit: self.limit,
            period: self.period,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetPatch {
    pub category: Option<SpendingCategory>,
    pub limit: Option<f64>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetPatch {
    pub(crate) fn apply(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(period) = self.period {
            budget.period = period;
        }
    }
}
