use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::budget::{Budget, BudgetPatch, NewBudget};
use crate::storage::repository::Repository;

use super::traits::EntityService;

#[derive(Debug)]
pub struct BudgetService {
    repository: Repository<Budget>,
}

impl BudgetService {
    pub fn new(budgets: Vec<Budget>, latency: Duration) -> Self {
        Self {
            repository: Repository::new(budgets, latency),
        }
    }

    pub async fn count(&self) -> usize {
        self.repository.count().await
    }
}

#[async_trait]
impl EntityService for BudgetService {
    type Record = Budget;
    type Draft = NewBudget;
    type Patch = BudgetPatch;

    async fn list(&self) -> Vec<Budget> {
        self.repository.newest_first().await
    }

    async fn get_by_id(&self, id: u32) -> Result<Budget, CoreError> {
        self.repository.get(id).await
    }

    async fn create(&self, draft: NewBudget) -> Budget {
        let created_at = Utc::now();
        self.repository
            .insert_with(move |id| draft.into_budget(id, created_at))
            .await
    }

    async fn update(&self, id: u32, patch: BudgetPatch) -> Result<Budget, CoreError> {
        self.repository
            .update_with(id, move |budget| patch.apply(budget))
            .await
    }

    async fn delete(&self, id: u32) -> Result<(), CoreError> {
        self.repository.remove(id).await
    }
}
