//! Outbound (driven) ports for the Analytics subsystem.

use shared_types::{ClockReading, ClockUnavailable, MovementRecord};

/// Ledger source failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub message: String,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record source failure: {}", self.message)
    }
}

impl std::error::Error for SourceError {}

/// One full replay of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordScan {
    /// Parsed records in write order.
    pub records: Vec<MovementRecord>,
    /// Malformed lines skipped during the scan.
    pub skipped: usize,
}

/// Replays the ledger into parsed records.
pub trait RecordSource: Send + Sync {
    fn scan_records(&self) -> Result<RecordScan, SourceError>;
}

/// Wall clock provider; one reading stays stable for an entire scan.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<ClockReading, ClockUnavailable>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn scan_records(&self) -> Result<RecordScan, SourceError> {
        (**self).scan_records()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Result<ClockReading, ClockUnavailable> {
        (**self).now()
    }
}
