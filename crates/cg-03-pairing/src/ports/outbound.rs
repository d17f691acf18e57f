//! Outbound (driven) ports for the Pairing subsystem.
//!
//! These traits define the dependencies the pairing service needs:
//! role lookups, the ledger sink, the wall clock, and the operator
//! indicator.

use shared_types::{CardId, ClockReading, ClockUnavailable, MovementRecord, RoleProfile};

/// Role lookup failure (registry backend unavailable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryError {
    pub message: String,
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "role directory failure: {}", self.message)
    }
}

impl std::error::Error for DirectoryError {}

/// Ledger append failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    pub message: String,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement sink failure: {}", self.message)
    }
}

impl std::error::Error for SinkError {}

/// Resolves the membership profile of a tapped identifier.
pub trait RoleDirectory: Send + Sync {
    fn roles(&self, id: &CardId) -> Result<RoleProfile, DirectoryError>;
}

/// Receives the movement record of a completed pairing.
///
/// `Ok` means the record is durable.
pub trait MovementSink: Send + Sync {
    fn append(&self, record: &MovementRecord) -> Result<(), SinkError>;
}

/// Wall clock provider.
///
/// Callers fall back to [`ClockReading::unavailable`] on error instead of
/// failing the transaction.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<ClockReading, ClockUnavailable>;
}

/// Operator feedback signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// First tap accepted, awaiting the second.
    Pending,
    Success,
    Failure,
}

/// Indicator sink for operator feedback (LEDs, console, ...).
pub trait SignalSink: Send + Sync {
    fn signal(&self, signal: Signal);
}

// Shared references delegate, so one backend can serve several owners.

impl<T: RoleDirectory + ?Sized> RoleDirectory for &T {
    fn roles(&self, id: &CardId) -> Result<RoleProfile, DirectoryError> {
        (**self).roles(id)
    }
}

impl<T: MovementSink + ?Sized> MovementSink for &T {
    fn append(&self, record: &MovementRecord) -> Result<(), SinkError> {
        (**self).append(record)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Result<ClockReading, ClockUnavailable> {
        (**self).now()
    }
}

impl<T: SignalSink + ?Sized> SignalSink for &T {
    fn signal(&self, signal: Signal) {
        (**self).signal(signal)
    }
}
