use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;

/// Tunables for the tracker. Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display currency code. Formatting is fixed to en-US dollars; this is informational.
    pub currency_code: String,

    /// Simulated latency per service call, in milliseconds.
    pub expense_latency_ms: u64,
    pub debt_latency_ms: u64,
    pub budget_latency_ms: u64,
    pub category_latency_ms: u64,

    /// Debts due within this many days (inclusive) are "due soon".
    pub due_soon_days: i64,

    /// How many expenses the dashboard's recent list shows.
    pub recent_expense_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            expense_latency_ms: 300,
            debt_latency_ms: 350,
            budget_latency_ms: 400,
            category_latency_ms: 200,
            due_soon_days: 7,
            recent_expense_count: 5,
        }
    }
}

impl Settings {
    /// Defaults with every latency set to zero (tests, batch tools).
    pub fn instant() -> Self {
        Self {
            expense_latency_ms: 0,
            debt_latency_ms: 0,
            budget_latency_ms: 0,
            category_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Settings(e.to_string()))
    }

    pub fn expense_latency(&self) -> Duration {
        Duration::from_millis(self.expense_latency_ms)
    }

    pub fn debt_latency(&self) -> Duration {
        Duration::from_millis(self.debt_latency_ms)
    }

    pub fn budget_latency(&self) -> Duration {
        Duration::from_millis(self.budget_latency_ms)
    }

    pub fn category_latency(&self) -> Duration {
        Duration::from_millis(self.category_latency_ms)
    }
}
