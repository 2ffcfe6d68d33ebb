//! Process health status store.
//!
//! A single `HealthStore` is created by the composition root and handed to
//! the HTTP handler and to whatever monitors update health. Both fields live
//! behind one reader/writer lock so a snapshot never pairs the status of one
//! write with the reason of another.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// Binary health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    #[default]
    Up,
    Down,
}

impl HealthStatus {
    /// Wire representation used in both plain text and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Up => "UP",
            HealthStatus::Down => "DOWN",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consistent `(status, reason)` pair.
///
/// The reason is free text. It is normally only set while `Down`, but a
/// reason written with [`HealthStore::set_reason`] while `Up` is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthState {
    pub status: HealthStatus,
    pub reason: String,
}

/// Shared, lock-protected health state.
///
/// Cloning is cheap and every clone observes the same state.
#[derive(Debug, Clone, Default)]
pub struct HealthStore {
    inner: Arc<RwLock<HealthState>>,
}

impl HealthStore {
    /// Creates a store that starts `Up` with an empty reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the process healthy and clears any reason.
    pub fn set_healthy(&self) {
        let mut state = self.write();
        let previous = state.status;
        state.status = HealthStatus::Up;
        state.reason.clear();
        drop(state);

        if previous != HealthStatus::Up {
            tracing::info!(%previous, status = %HealthStatus::Up, "Health status changed");
        }
    }

    /// Marks the process unhealthy. An empty reason is accepted.
    pub fn set_unhealthy(&self, reason: impl Into<String>) {
        let reason = reason.into();
        let mut state = self.write();
        let previous = state.status;
        state.status = HealthStatus::Down;
        state.reason.clone_from(&reason);
        drop(state);

        if previous != HealthStatus::Down {
            tracing::info!(%previous, status = %HealthStatus::Down, %reason, "Health status changed");
        } else {
            tracing::debug!(%reason, "Health reason updated");
        }
    }

    /// Sets the status alone. The reason is left untouched, so a `Down` set
    /// this way reports whatever reason was stored last (possibly empty).
    pub fn set_status(&self, status: HealthStatus) {
        let previous = std::mem::replace(&mut self.write().status, status);
        if previous != status {
            tracing::info!(%previous, %status, "Health status changed");
        }
    }

    /// Sets the reason alone, regardless of the current status.
    pub fn set_reason(&self, reason: impl Into<String>) {
        self.write().reason = reason.into();
    }

    pub fn status(&self) -> HealthStatus {
        self.read().status
    }

    pub fn reason(&self) -> String {
        self.read().reason.clone()
    }

    /// Reads status and reason under a single lock acquisition.
    pub fn snapshot(&self) -> HealthState {
        self.read().clone()
    }

    // A panic while holding the guard cannot leave the two fields in a torn
    // state (each write is a plain assignment), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HealthState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HealthState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
