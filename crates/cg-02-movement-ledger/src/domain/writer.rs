//! Durable record appends.

use shared_types::{format_line, MovementRecord};
use tracing::info;

use super::errors::LedgerError;
use crate::ports::LedgerStore;

/// Formats records into canonical lines and appends them durably.
pub struct LedgerWriter<L: LedgerStore> {
    store: L,
}

impl<L: LedgerStore> LedgerWriter<L> {
    pub fn new(store: L) -> Self {
        Self { store }
    }

    /// Appends one record; `Ok` means the record is durable.
    pub fn append(&self, record: &MovementRecord) -> Result<(), LedgerError> {
        self.store.append_line(&format_line(record))?;
        info!(
            custodian = %record.custodian,
            visitor = %record.visitor,
            movement = ?record.movement,
            "movement recorded"
        );
        Ok(())
    }
}
