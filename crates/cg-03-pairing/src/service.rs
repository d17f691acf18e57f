//! Pairing service: the machine composed with its outbound ports.
//!
//! The service is the sole writer of new ledger records. It resolves the
//! tapper's roles, drives the machine, stamps and persists authorized
//! passages, and emits operator signals.

use shared_types::{CardId, ClockReading, MovementRecord};
use tracing::{error, info, warn};

use crate::domain::{PairingMachine, PairingState, PassageMode, PairingFault, Transition};
use crate::ports::{Clock, MovementSink, RoleDirectory, Signal, SignalSink};

/// Outcome of one tap as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapResult {
    /// Reads suspended or no mode armed.
    Ignored,
    /// First tap accepted.
    Pending { mode: PassageMode },
    /// Pairing completed and the record is durable.
    Completed { record: MovementRecord },
    /// Pairing completed but the ledger append failed. The append is
    /// at-most-once: the record is reported, never retried.
    StoreFailed {
        record: MovementRecord,
        message: String,
    },
    /// Terminal pairing fault.
    Rejected { fault: PairingFault },
    /// The role lookup failed; the transaction was aborted terminally.
    DirectoryFailed { message: String },
}

/// Drives the pairing machine against its collaborators.
pub struct PairingService<D, M, C, S>
where
    D: RoleDirectory,
    M: MovementSink,
    C: Clock,
    S: SignalSink,
{
    machine: PairingMachine,
    directory: D,
    sink: M,
    clock: C,
    signals: S,
}

impl<D, M, C, S> PairingService<D, M, C, S>
where
    D: RoleDirectory,
    M: MovementSink,
    C: Clock,
    S: SignalSink,
{
    pub fn new(directory: D, sink: M, clock: C, signals: S) -> Self {
        Self {
            machine: PairingMachine::new(),
            directory,
            sink,
            clock,
            signals,
        }
    }

    /// Current session state, for status reporting.
    pub fn state(&self) -> &PairingState {
        self.machine.state()
    }

    pub fn reads_enabled(&self) -> bool {
        self.machine.reads_enabled()
    }

    /// Arms a mode, clearing any pending first tap.
    pub fn arm(&mut self, mode: PassageMode) {
        self.machine.arm(mode);
        info!(%mode, "pairing armed");
    }

    /// Fully clears the session back to idle.
    pub fn disarm(&mut self) {
        self.machine.disarm();
        info!("pairing disarmed");
    }

    /// Processes one dequeued tap.
    pub fn handle_tap(&mut self, id: &CardId) -> TapResult {
        if !self.machine.accepts_taps() {
            return TapResult::Ignored;
        }

        let roles = match self.directory.roles(id) {
            Ok(roles) => roles,
            Err(err) => {
                // Undecidable tap: terminate the transaction like a fault.
                self.machine.abort_transaction();
                self.signals.signal(Signal::Failure);
                error!(%id, %err, "role lookup failed; transaction aborted");
                return TapResult::DirectoryFailed {
                    message: err.message,
                };
            }
        };

        match self.machine.on_tap(id, roles) {
            Transition::Ignored => TapResult::Ignored,
            Transition::Pending { mode } => {
                self.signals.signal(Signal::Pending);
                info!(%id, %mode, "first tap accepted");
                TapResult::Pending { mode }
            }
            Transition::Rejected { fault } => {
                self.signals.signal(Signal::Failure);
                warn!(%id, %fault, "pairing rejected");
                TapResult::Rejected { fault }
            }
            Transition::Authorized {
                custodian,
                visitor,
                movement,
            } => {
                let reading = self.clock.now().unwrap_or_else(|err| {
                    warn!(%err, "stamping with sentinel values");
                    ClockReading::unavailable()
                });
                let record = MovementRecord {
                    custodian,
                    visitor,
                    movement,
                    stamp: reading.stamp,
                };
                match self.sink.append(&record) {
                    Ok(()) => {
                        self.signals.signal(Signal::Success);
                        info!(
                            custodian = %record.custodian,
                            visitor = %record.visitor,
                            "pairing completed"
                        );
                        TapResult::Completed { record }
                    }
                    Err(err) => {
                        self.signals.signal(Signal::Failure);
                        error!(%err, "pairing completed but append failed");
                        TapResult::StoreFailed {
                            record,
                            message: err.message,
                        }
                    }
                }
            }
        }
    }
}
