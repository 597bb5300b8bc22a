//! In-process draft store

use std::collections::BTreeMap;

use super::{DraftStore, DraftStoreError};

/// Draft store that lives as long as the process
///
/// Survives remounts of an editor but not a restart. An optional byte quota
/// mimics the capacity limit of browser origin storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    drafts: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys plus values to `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            drafts: BTreeMap::new(),
            quota: Some(bytes),
        }
    }

    /// Total bytes used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.drafts.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        Ok(self.drafts.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        if let Some(limit) = self.quota {
            let replaced = self.drafts.get(key).map_or(0, |old| key.len() + old.len());
            let after = self.used_bytes() - replaced + key.len() + value.len();
            if after > limit {
                return Err(DraftStoreError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }
        self.drafts.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DraftStoreError> {
        self.drafts.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, DraftStoreError> {
        Ok(self.drafts.keys().cloned().collect())
    }
}
