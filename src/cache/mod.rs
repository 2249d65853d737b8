//! In-memory memoization for rarely changing JIRA lookups.
//!
//! Each [`JiraClient`](crate::JiraClient) owns one [`ResponseCache`]. Entries
//! are filled on the first successful request and kept for the lifetime of
//! the client; there is no expiry and no invalidation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::trace;

/// A single lazily filled value.
///
/// The lock is held while filling, so concurrent callers wait for the first
/// fill instead of issuing a duplicate request. A failed fill leaves the
/// cell empty.
#[derive(Debug, Default)]
pub struct Memo<T> {
    slot: Mutex<Option<T>>,
}

impl<T: Clone> Memo<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, or run `fill` and cache its result.
    pub fn get_or_try_fill<E, F>(&self, fill: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.lock();
        if let Some(value) = slot.as_ref() {
            trace!("Cache hit");
            return Ok(value.clone());
        }

        trace!("Cache miss");
        let value = fill()?;
        *slot = Some(value.clone());
        Ok(value)
    }

    /// Get the cached value without filling.
    pub fn peek(&self) -> Option<T> {
        self.lock().clone()
    }

    /// Check whether a value has been cached.
    pub fn is_filled(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        // A panic inside `fill` never writes a partial value, so the data is intact.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The cached endpoints of one client.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Assignable users. Keyed by nothing: the first project queried wins.
    pub assignable_users: Memo<Value>,
    /// All visible projects.
    pub projects: Memo<Value>,
    /// All issue types.
    pub issue_types: Memo<Value>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            assignable_users: Memo::new(),
            projects: Memo::new(),
            issue_types: Memo::new(),
        }
    }
}
