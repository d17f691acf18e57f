//! Movement sink adapter over the ledger writer.

use cg_02_movement_ledger::{LedgerStore, LedgerWriter};
use cg_03_pairing::{MovementSink, SinkError};
use shared_types::MovementRecord;

/// Appends completed pairings to the movement ledger.
pub struct LedgerSink<L: LedgerStore> {
    writer: LedgerWriter<L>,
}

impl<L: LedgerStore> LedgerSink<L> {
    pub fn new(writer: LedgerWriter<L>) -> Self {
        Self { writer }
    }
}

impl<L: LedgerStore> MovementSink for LedgerSink<L> {
    fn append(&self, record: &MovementRecord) -> Result<(), SinkError> {
        self.writer.append(record).map_err(|err| SinkError {
            message: err.to_string(),
        })
    }
}
