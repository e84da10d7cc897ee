use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::expense::{Expense, ExpensePatch, NewExpense};
use crate::storage::repository::Repository;

use super::traits::EntityService;

/// Sole owner of the expense collection. Lists newest `date` first.
#[derive(Debug)]
pub struct ExpenseService {
    repository: Repository<Expense>,
}

impl ExpenseService {
    pub fn new(expenses: Vec<Expense>, latency: Duration) -> Self {
        Self {
            repository: Repository::new(expenses, latency),
        }
    }

    pub async fn count(&self) -> usize {
        self.repository.count().await
    }
}

#[async_trait]
impl EntityService for ExpenseService {
    type Record = Expense;
    type Draft = NewExpense;
    type Patch = ExpensePatch;

    async fn list(&self) -> Vec<Expense> {
        self.repository.newest_first().await
    }

    async fn get_by_id(&self, id: u32) -> Result<Expense, CoreError> {
        self.repository.get(id).await
    }

    async fn create(&self, draft: NewExpense) -> Expense {
        let created_at = Utc::now();
        self.repository
            .insert_with(move |id| draft.into_expense(id, created_at))
            .await
    }

    async fn update(&self, id: u32, patch: ExpensePatch) -> Result<Expense, CoreError> {
        self.repository
            .update_with(id, move |expense| patch.apply(expense))
            .await
    }

    async fn delete(&self, id: u32) -> Result<(), CoreError> {
        self.repository.remove(id).await
    }
}
