//! Shared handle over a draft store backend

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{DraftStore, DraftStoreError, MemoryDraftStore};

/// Cloneable, single-threaded handle to one draft store
///
/// Every editor controller in a host holds a clone; keys keep them apart.
/// Backend failures are logged and handed back as [`DraftStoreError`], and a
/// re-entrant call reports [`DraftStoreError::Busy`] instead of panicking.
#[derive(Clone)]
pub struct DraftStoreAdapter {
    backend: Rc<RefCell<Box<dyn DraftStore>>>,
}

impl DraftStoreAdapter {
    pub fn new(store: impl DraftStore + 'static) -> Self {
        Self {
            backend: Rc::new(RefCell::new(Box::new(store))),
        }
    }

    /// Adapter over a fresh [`MemoryDraftStore`]
    pub fn in_memory() -> Self {
        Self::new(MemoryDraftStore::new())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        self.backend
            .try_borrow()
            .map_err(|_| DraftStoreError::Busy)
            .and_then(|backend| backend.get(key))
            .inspect_err(|e| tracing::warn!(key, error = %e, "Failed to read draft"))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        let mut backend = self
            .backend
            .try_borrow_mut()
            .map_err(|_| DraftStoreError::Busy)?;
        backend
            .set(key, value)
            .inspect(|_| tracing::debug!(key, bytes = value.len(), "Draft stored"))
            .inspect_err(|e| tracing::warn!(key, error = %e, "Failed to store draft"))
    }

    pub fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        let mut backend = self
            .backend
            .try_borrow_mut()
            .map_err(|_| DraftStoreError::Busy)?;
        backend
            .remove(key)
            .inspect(|_| tracing::debug!(key, "Draft removed"))
            .inspect_err(|e| tracing::warn!(key, error = %e, "Failed to remove draft"))
    }

    pub fn keys(&self) -> Result<Vec<String>, DraftStoreError> {
        let backend = self.backend.try_borrow().map_err(|_| DraftStoreError::Busy)?;
        backend.keys()
    }

    /// Whether two adapters point at the same backend
    pub fn same_store(&self, other: &DraftStoreAdapter) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl fmt::Debug for DraftStoreAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftStoreAdapter")
            .field("handles", &Rc::strong_count(&self.backend))
            .finish()
    }
}
