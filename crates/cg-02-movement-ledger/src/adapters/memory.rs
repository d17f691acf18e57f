//! In-memory ledger store for tests and single-process setups.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{LedgerStore, LedgerStoreError, LineStream};

/// Shared in-memory store; clones see the same line sequence.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    lines: Arc<Mutex<Vec<String>>>,
    fail_appends: Arc<AtomicBool>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored lines, for assertions.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Makes subsequent appends fail, to exercise store-failure paths.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }
}

impl LedgerStore for MemoryLedger {
    fn append_line(&self, line: &str) -> Result<(), LedgerStoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(LedgerStoreError::new("simulated append failure"));
        }
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }

    fn scan_lines(&self) -> Result<LineStream<'_>, LedgerStoreError> {
        Ok(Box::new(self.lines().into_iter()))
    }
}
