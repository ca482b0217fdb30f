// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared, thread-safe access to a [`Store`].

use std::sync::{Arc, PoisonError, RwLock};

use crate::snapshot::StoreSnapshot;
use crate::store::Store;

/// Cloneable handle to one store.
///
/// Writers are serialized, so every mutation stays atomic when several
/// threads or tasks share the store. A panic while holding the lock does
/// not wedge the handle; the store is used as it was left.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.read(Store::snapshot)
    }
}

impl From<Store> for StoreHandle {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
