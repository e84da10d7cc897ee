use std::time::Duration;
use tokio::sync::RwLock;

use crate::errors::CoreError;

use super::collection::{Collection, Record, Timestamped};

/// Owns one [`Collection`] behind an async lock and delays every call by a
/// fixed latency, emulating a remote API.
///
/// The lock is only taken after the delay and is released before the call
/// returns, so each operation is a single uninterrupted step.
#[derive(Debug)]
pub struct Repository<T> {
    records: RwLock<Collection<T>>,
    latency: Duration,
}

impl<T: Record + Send + Sync> Repository<T> {
    pub fn new(records: Vec<T>, latency: Duration) -> Self {
        Self {
            records: RwLock::new(Collection::new(records)),
            latency,
        }
    }

    /// Current record count. Does not wait out the latency.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clones of every record in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.simulate_latency().await;
        let records = self.records.read().await.snapshot();
        tracing::debug!(entity = T::ENTITY, count = records.len(), "listed records");
        records
    }

    pub async fn get(&self, id: u32) -> Result<T, CoreError> {
        self.simulate_latency().await;
        let result = self.records.read().await.get(id);
        log_outcome(&result, "get", id);
        result
    }

    /// Append a record built under the next free id.
    pub async fn insert_with(&self, build: impl FnOnce(u32) -> T + Send) -> T {
        self.simulate_latency().await;
        let record = self.records.write().await.insert_with(build);
        tracing::info!(entity = T::ENTITY, id = record.id(), "created record");
        record
    }

    pub async fn update_with(
        &self,
        id: u32,
        change: impl FnOnce(&mut T) + Send,
    ) -> Result<T, CoreError> {
        self.simulate_latency().await;
        let result = self.records.write().await.update_with(id, change);
        log_outcome(&result, "update", id);
        result
    }

    pub async fn remove(&self, id: u32) -> Result<(), CoreError> {
        self.simulate_latency().await;
        let result = self.records.write().await.remove(id);
        log_outcome(&result, "delete", id);
        result.map(|_| ())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl<T: Timestamped + Send + Sync> Repository<T> {
    /// Clones sorted by the record's timestamp, newest first.
    pub async fn newest_first(&self) -> Vec<T> {
        self.simulate_latency().await;
        let records = self.records.read().await.sorted_newest_first();
        tracing::debug!(entity = T::ENTITY, count = records.len(), "listed records");
        records
    }
}

fn log_outcome<T: Record>(result: &Result<T, CoreError>, op: &'static str, id: u32) {
    match result {
        Ok(_) if op == "get" => tracing::debug!(entity = T::ENTITY, id, "fetched record"),
        Ok(_) => tracing::info!(entity = T::ENTITY, id, op, "mutated record"),
        Err(e) => tracing::warn!(entity = T::ENTITY, id, op, error = %e, "record lookup failed"),
    }
}
