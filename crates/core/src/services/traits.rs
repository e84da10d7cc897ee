use async_trait::async_trait;

use crate::errors::CoreError;

/// Uniform CRUD contract shared by the expense, debt and budget services.
///
/// Every call resolves after the service's simulated latency. Records are
/// always returned as clones; nothing a caller does to them reaches the
/// service's own collection. The only failure is [`CoreError::NotFound`].
#[async_trait]
pub trait EntityService: Send + Sync {
    /// The stored record type.
    type Record: Send;
    /// Caller-supplied fields for `create`.
    type Draft: Send;
    /// Partial update for `update`; unset fields keep their value.
    type Patch: Send;

    /// All records, newest first by the entity's designated timestamp.
    async fn list(&self) -> Vec<Self::Record>;

    async fn get_by_id(&self, id: u32) -> Result<Self::Record, CoreError>;

    /// Store a new record under a fresh id and creation timestamp.
    /// Performs no validation.
    async fn create(&self, draft: Self::Draft) -> Self::Record;

    async fn update(&self, id: u32, patch: Self::Patch) -> Result<Self::Record, CoreError>;

    async fn delete(&self, id: u32) -> Result<(), CoreError>;
}
