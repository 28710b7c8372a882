use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::app::AppCore;
use crate::session::SessionBackend;

/// Shared handle to the core for async contexts.
///
/// The core itself is synchronous and single-writer; the only concurrent
/// party is the market ticker task racing user-triggered commands for the
/// lock. Each command runs to completion under the write guard, so every
/// store operation stays atomic with respect to all others.
pub struct SharedCore<S: SessionBackend> {
    inner: Arc<RwLock<AppCore<S>>>,
}

impl<S: SessionBackend> SharedCore<S> {
    pub fn new(core: AppCore<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(core)),
        }
    }

    /// Cheap handle clone for sharing across tasks
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Shared read access to snapshots
    pub async fn read(&self) -> RwLockReadGuard<'_, AppCore<S>> {
        self.inner.read().await
    }

    /// Exclusive access for commands
    pub async fn write(&self) -> RwLockWriteGuard<'_, AppCore<S>> {
        self.inner.write().await
    }
}

impl<S: SessionBackend> Clone for SharedCore<S> {
    fn clone(&self) -> Self {
        self.clone_handle()
    }
}
