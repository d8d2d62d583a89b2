//! In-memory persistence slot.

use super::PersistenceSlot;
use crate::error::{StorageError, StorageResult};

/// Persistence slot held in process memory.
///
/// Behaves like a browser `localStorage` entry: an optional byte quota caps
/// the size of the stored value.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
    quota: Option<usize>,
}

impl MemorySlot {
    /// Create an empty slot without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            value: Some(contents.into()),
            quota: None,
        }
    }

    /// Limit the slot to `bytes` bytes.
    #[must_use]
    pub const fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Get the stored value.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        if let Some(quota) = self.quota
            && contents.len() > quota
        {
            return Err(StorageError::QuotaExceeded {
                needed: contents.len(),
                quota,
            });
        }
        self.value = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_empty() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);
        assert!(slot.contents().is_none());
    }

    #[test]
    fn test_write_replaces_value() {
        let mut slot = MemorySlot::with_contents("[]");
        slot.write("[1]").unwrap();
        slot.write("[2]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_quota_rejects_large_value() {
        let mut slot = MemorySlot::with_contents("old").with_quota(4);
        let err = slot.write("too long").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 8,
                quota: 4
            }
        ));
        assert_eq!(slot.contents(), Some("old"));
    }

    #[test]
    fn test_quota_allows_exact_fit() {
        let mut slot = MemorySlot::new().with_quota(4);
        slot.write("abcd").unwrap();
        assert_eq!(slot.contents(), Some("abcd"));
    }
}
