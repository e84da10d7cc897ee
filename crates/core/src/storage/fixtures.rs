use serde::de::DeserializeOwned;
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::budget::Budget;
use crate::models::category::Category;
use crate::models::debt::Debt;
use crate::models::expense::Expense;

use super::collection::Record;

const EXPENSES_JSON: &str = include_str!("../../fixtures/expenses.json");
const DEBTS_JSON: &str = include_str!("../../fixtures/debts.json");
const BUDGETS_JSON: &str = include_str!("../../fixtures/budgets.json");
const CATEGORIES_JSON: &str = include_str!("../../fixtures/categories.json");

/// Seed records for every collection, read once when the tracker is built.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub expenses: Vec<Expense>,
    pub debts: Vec<Debt>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
}

impl FixtureSet {
    /// The sample data compiled into the crate.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(EXPENSES_JSON, DEBTS_JSON, BUDGETS_JSON, CATEGORIES_JSON)
    }

    /// Parse caller-supplied JSON arrays, one per collection.
    pub fn from_json(
        expenses: &str,
        debts: &str,
        budgets: &str,
        categories: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            expenses: parse_records(expenses)?,
            debts: parse_records(debts)?,
            budgets: parse_records(budgets)?,
            categories: parse_records(categories)?,
        })
    }
}

fn parse_records<T: Record + DeserializeOwned>(json: &str) -> Result<Vec<T>, CoreError> {
    let records: Vec<T> = serde_json::from_str(json)
        .map_err(|e| CoreError::Fixture(format!("{} records: {e}", T::ENTITY)))?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.id())) {
        return Err(CoreError::Fixture(format!(
            "{} records: duplicate id {}",
            T::ENTITY,
            dup.id()
        )));
    }

    Ok(records)
}
