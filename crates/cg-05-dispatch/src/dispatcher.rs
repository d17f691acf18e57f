//! The single consumer driving the pairing core.
//!
//! Exactly one dispatcher task exists per gate. It owns the pairing
//! service and the registry's write path, and multiplexes between the
//! tap stream and the control channel, so overlapping tap sequences and
//! mutating commands can never race each other.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cg_01_identity_registry::{AddOutcome, IdentityStore, Registry, RemoveOutcome};
use cg_03_pairing::{
    Clock, MovementSink, PairingService, PassageMode, RoleDirectory, Signal, SignalSink,
};
use shared_types::{CardId, RoleSet};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::commands::{Command, CommandResponse, ControlRequest, ResponsePayload};
use crate::queue::TapStream;

/// Buffered control requests before senders are backpressured.
pub const CONTROL_CHANNEL_CAPACITY: usize = 16;

/// Creates the mutating-command channel into the dispatcher.
pub fn control_channel() -> (mpsc::Sender<ControlRequest>, mpsc::Receiver<ControlRequest>) {
    mpsc::channel(CONTROL_CHANNEL_CAPACITY)
}

/// What the next tap means to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderMode {
    /// Taps drive the pairing machine.
    Pairing,
    /// The next tap is registered into this set.
    Register(RoleSet),
}

/// The dispatcher: pairing service plus registry writes on one task.
pub struct Dispatcher<D, M, C, S, I>
where
    D: RoleDirectory,
    M: MovementSink,
    C: Clock,
    S: SignalSink,
    I: IdentityStore,
{
    service: PairingService<D, M, C, S>,
    registry: Registry<I>,
    signals: S,
    taps: TapStream,
    control: mpsc::Receiver<ControlRequest>,
    reader_mode: ReaderMode,
    dropped: Arc<AtomicU64>,
}

impl<D, M, C, S, I> Dispatcher<D, M, C, S, I>
where
    D: RoleDirectory,
    M: MovementSink,
    C: Clock,
    S: SignalSink,
    I: IdentityStore,
{
    pub fn new(
        service: PairingService<D, M, C, S>,
        registry: Registry<I>,
        signals: S,
        taps: TapStream,
        control: mpsc::Receiver<ControlRequest>,
        dropped: Arc<AtomicU64>,
    ) -> Self {
        Self {
            service,
            registry,
            signals,
            taps,
            control,
            reader_mode: ReaderMode::Pairing,
            dropped,
        }
    }

    /// Runs until the tap feed and control channel are both gone.
    ///
    /// The blocking dequeue here is the task's only suspension point; it
    /// is cancelled only by process shutdown.
    pub async fn run(mut self) {
        info!("dispatcher started");
        loop {
            tokio::select! {
                request = self.control.recv() => match request {
                    Some(request) => self.handle_control(request),
                    None => {
                        info!("control channel closed; dispatcher stopping");
                        break;
                    }
                },
                tap = self.taps.recv() => match tap {
                    Some(tap) => self.handle_tap(tap),
                    None => {
                        info!("tap feed closed; dispatcher stopping");
                        break;
                    }
                },
            }
        }
    }

    fn handle_control(&mut self, request: ControlRequest) {
        let response = self.execute(request.correlation_id, request.command);
        if request.respond_to.send(response).is_err() {
            warn!("control requester went away before the response");
        }
    }

    fn execute(&mut self, correlation_id: Uuid, command: Command) -> CommandResponse {
        match command {
            Command::StartEntryMode => self.arm(correlation_id, PassageMode::Entry),
            Command::StartExitMode => self.arm(correlation_id, PassageMode::Exit),
            Command::RegisterStart { set } => {
                self.service.disarm();
                self.reader_mode = ReaderMode::Register(set);
                info!(%set, "registration armed");
                CommandResponse::ok(correlation_id, ResponsePayload::RegistrationArmed { set })
            }
            Command::Delete { id } => self.delete(correlation_id, &id),
            Command::GetStatus => CommandResponse::ok(
                correlation_id,
                ResponsePayload::Status {
                    mode: self.mode_label(),
                    reads_enabled: self.service.reads_enabled(),
                    dropped_taps: self.dropped.load(Ordering::SeqCst),
                },
            ),
            Command::GetLateArrivals
            | Command::GetInside
            | Command::GetWeeklyAttendance { .. }
            | Command::ListMembers { .. } => CommandResponse::fault(
                correlation_id,
                "read-only query; served by the command client",
            ),
        }
    }

    fn arm(&mut self, correlation_id: Uuid, mode: PassageMode) -> CommandResponse {
        self.reader_mode = ReaderMode::Pairing;
        self.service.arm(mode);
        CommandResponse::ok(
            correlation_id,
            ResponsePayload::Armed {
                mode: mode.to_string(),
            },
        )
    }

    fn delete(&mut self, correlation_id: Uuid, raw_id: &str) -> CommandResponse {
        let id = match CardId::parse(raw_id) {
            Ok(id) => id,
            Err(err) => return CommandResponse::fault(correlation_id, err.to_string()),
        };
        match self.registry.remove(&id) {
            Ok(RemoveOutcome::Removed(set)) => {
                CommandResponse::ok(correlation_id, ResponsePayload::Deleted { set })
            }
            Ok(RemoveOutcome::NotFound) => {
                CommandResponse::ok(correlation_id, ResponsePayload::NotFound)
            }
            Err(err) => CommandResponse::fault(correlation_id, err.to_string()),
        }
    }

    fn handle_tap(&mut self, tap: CardId) {
        match self.reader_mode {
            ReaderMode::Pairing => {
                let result = self.service.handle_tap(&tap);
                debug!(?result, "tap dispatched");
            }
            ReaderMode::Register(set) => {
                // Single-shot: registration disarms like any terminal
                // outcome, reads stay suspended until the next command.
                self.reader_mode = ReaderMode::Pairing;
                match self.registry.add(set, &tap) {
                    Ok(AddOutcome::Added) => {
                        self.signals.signal(Signal::Success);
                        info!(%set, id = %tap, "tap registered");
                    }
                    Ok(AddOutcome::AlreadyExists) => {
                        self.signals.signal(Signal::Failure);
                        warn!(%set, id = %tap, "tap already registered");
                    }
                    Err(err) => {
                        self.signals.signal(Signal::Failure);
                        error!(%set, id = %tap, %err, "registration failed");
                    }
                }
            }
        }
    }

    fn mode_label(&self) -> String {
        match self.reader_mode {
            ReaderMode::Register(set) => format!("register/{set}"),
            ReaderMode::Pairing => self.service.state().label().to_string(),
        }
    }
}
