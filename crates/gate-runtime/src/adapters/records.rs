//! Record source adapter over the ledger scanner.

use cg_02_movement_ledger::{LedgerScanner, LedgerStore};
use cg_04_analytics::{RecordScan, RecordSource, SourceError};

/// Replays the ledger for the analytics engine.
pub struct ScannerSource<L: LedgerStore> {
    scanner: LedgerScanner<L>,
}

impl<L: LedgerStore> ScannerSource<L> {
    pub fn new(scanner: LedgerScanner<L>) -> Self {
        Self { scanner }
    }
}

impl<L: LedgerStore> RecordSource for ScannerSource<L> {
    fn scan_records(&self) -> Result<RecordScan, SourceError> {
        let scan = self.scanner.scan().map_err(|err| SourceError {
            message: err.to_string(),
        })?;
        Ok(RecordScan {
            records: scan.records,
            skipped: scan.skipped,
        })
    }
}
