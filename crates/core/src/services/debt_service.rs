use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::debt::{Debt, DebtPatch, NewDebt};
use crate::storage::repository::Repository;

use super::traits::EntityService;

/// Sole owner of the debt collection. Lists newest `created_at` first.
#[derive(Debug)]
pub struct DebtService {
    repository: Repository<Debt>,
}

impl DebtService {
    pub fn new(debts: Vec<Debt>, latency: Duration) -> Self {
        Self {
            repository: Repository::new(debts, latency),
        }
    }

    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    /// Flag a debt as settled, leaving every other field untouched.
    pub async fn mark_paid(&self, id: u32) -> Result<Debt, CoreError> {
        self.update(id, DebtPatch::mark_paid()).await
    }
}

#[async_trait]
impl EntityService for DebtService {
    type Record = Debt;
    type Draft = NewDebt;
    type Patch = DebtPatch;

    async fn list(&self) -> Vec<Debt> {
        self.repository.newest_first().await
    }

    async fn get_by_id(&self, id: u32) -> Result<Debt, CoreError> {
        self.repository.get(id).await
    }

    /// The stored debt is always unpaid.
    async fn create(&self, draft: NewDebt) -> Debt {
        let created_at = Utc::now();
        self.repository
            .insert_with(move |id| draft.into_debt(id, created_at))
            .await
    }

    async fn update(&self, id: u32, patch: DebtPatch) -> Result<Debt, CoreError> {
        self.repository
            .update_with(id, move |debt| patch.apply(debt))
            .await
    }

    async fn delete(&self, id: u32) -> Result<(), CoreError> {
        self.repository.remove(id).await
    }
}
