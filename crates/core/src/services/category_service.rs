use std::time::Duration;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::storage::repository::Repository;

/// Read-only access to the category reference data.
#[derive(Debug)]
pub struct CategoryService {
    repository: Repository<Category>,
}

impl CategoryService {
    pub fn new(categories: Vec<Category>, latency: Duration) -> Self {
        Self {
            repository: Repository::new(categories, latency),
        }
    }

    /// All categories in fixture order.
    pub async fn list(&self) -> Vec<Category> {
        self.repository.all().await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Category, CoreError> {
        self.repository.get(id).await
    }
}
