//! In-memory identity store for tests and single-process setups.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use shared_types::{CardId, RoleSet};

use crate::ports::{IdentityStore, IdentityStoreError};

/// Shared in-memory store; clones see the same sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    sets: Arc<Mutex<HashMap<RoleSet, Vec<CardId>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding for tests.
    pub fn with_member(self, set: RoleSet, id: CardId) -> Self {
        self.sets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .entry(set)
            .or_default()
            .push(id);
        self
    }

    /// Makes subsequent writes fail, to exercise store-failure paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), IdentityStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(IdentityStoreError::new("simulated write failure"));
        }
        Ok(())
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn scan(&self, set: RoleSet) -> Result<Vec<CardId>, IdentityStoreError> {
        Ok(self
            .sets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&set)
            .cloned()
            .unwrap_or_default())
    }

    fn append(&self, set: RoleSet, id: &CardId) -> Result<(), IdentityStoreError> {
        self.check_writable()?;
        self.sets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .entry(set)
            .or_default()
            .push(id.clone());
        Ok(())
    }

    fn rewrite(&self, set: RoleSet, ids: &[CardId]) -> Result<(), IdentityStoreError> {
        self.check_writable()?;
        self.sets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(set, ids.to_vec());
        Ok(())
    }
}
