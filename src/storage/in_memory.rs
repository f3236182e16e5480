//! In-memory record store shared by the request handlers

use crate::core::error::{ApiError, ApiResult};
use crate::core::store::{Record, Records};
use std::sync::{Arc, RwLock};

/// In-memory store for one resource collection
///
/// Cloning is cheap and every clone sees the same collection. A request runs
/// its whole lookup/validate/mutate sequence inside one [`read`](Self::read)
/// or [`write`](Self::write) call, which serializes writers per collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Records<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, in the given order
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(Records::from(records))),
        }
    }

    /// Run `f` with shared access to the collection
    pub fn read<R>(&self, f: impl FnOnce(&Records<T>) -> ApiResult<R>) -> ApiResult<R> {
        let records = self.records.read().map_err(|e| {
            tracing::warn!(kind = T::KIND, "store lock poisoned: {}", e);
            ApiError::Internal(format!("Failed to acquire read lock: {}", e))
        })?;

        f(&records)
    }

    /// Run `f` with exclusive access to the collection
    pub fn write<R>(&self, f: impl FnOnce(&mut Records<T>) -> ApiResult<R>) -> ApiResult<R> {
        let mut records = self.records.write().map_err(|e| {
            tracing::warn!(kind = T::KIND, "store lock poisoned: {}", e);
            ApiError::Internal(format!("Failed to acquire write lock: {}", e))
        })?;

        f(&mut records)
    }

    /// Snapshot of every record, in stored order
    pub fn snapshot(&self) -> ApiResult<Vec<T>> {
        self.read(|records| Ok(records.list().to_vec()))
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
