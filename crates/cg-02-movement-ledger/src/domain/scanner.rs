//! Ledger replay.

use shared_types::{parse_line, MovementRecord};
use tracing::warn;

use super::errors::LedgerError;
use crate::ports::LedgerStore;

/// Result of one full replay of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerScan {
    /// Parsed records in write order.
    pub records: Vec<MovementRecord>,
    /// Lines that failed to parse and were skipped.
    pub skipped: usize,
}

/// Replays the store into parsed records.
///
/// Blank lines are ignored; malformed lines are counted and logged but
/// never abort the scan.
pub struct LedgerScanner<L: LedgerStore> {
    store: L,
}

impl<L: LedgerStore> LedgerScanner<L> {
    pub fn new(store: L) -> Self {
        Self { store }
    }

    pub fn scan(&self) -> Result<LedgerScan, LedgerError> {
        let mut scan = LedgerScan::default();
        for line in self.store.scan_lines()? {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Ok(record) => scan.records.push(record),
                Err(err) => {
                    scan.skipped += 1;
                    warn!(%err, %line, "skipping malformed ledger line");
                }
            }
        }
        Ok(scan)
    }
}
