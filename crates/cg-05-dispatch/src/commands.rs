//! Decoded command intents and their responses.
//!
//! The transport that carries these (serial console, MQTT, HTTP, ...) is
//! out of scope; whatever it is, it hands the core already-decoded
//! [`Command`] values and receives [`CommandResponse`] events.

use serde::{Deserialize, Serialize};
use shared_types::{CardId, InsideEntry, LateArrival, RoleSet};
use tokio::sync::oneshot;
use uuid::Uuid;

/// A decoded command intent.
///
/// Identifier arguments arrive as raw strings and are normalized by the
/// handler, exactly like identifiers read from a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    StartEntryMode,
    StartExitMode,
    /// Arm single-tap registration: the next tap is added to `set`.
    RegisterStart { set: RoleSet },
    /// Remove an identifier from the first set that contains it.
    Delete { id: String },
    GetLateArrivals,
    GetInside,
    GetWeeklyAttendance { id: String },
    ListMembers { set: RoleSet },
    GetStatus,
}

/// Whether the command executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

/// Result payload of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// A pairing mode was armed.
    Armed { mode: String },
    /// Single-tap registration was armed for a set.
    RegistrationArmed { set: RoleSet },
    Deleted { set: RoleSet },
    NotFound,
    Members { set: RoleSet, ids: Vec<CardId> },
    LateArrivals { entries: Vec<LateArrival> },
    Inside { entries: Vec<InsideEntry> },
    WeeklyAttendance {
        id: CardId,
        /// Portuguese weekday names, Monday first.
        weekdays: Vec<String>,
    },
    Status {
        /// Reader mode label, e.g. `entry/awaiting-second`.
        mode: String,
        reads_enabled: bool,
        dropped_taps: u64,
    },
    Fault { message: String },
}

/// Response event for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub correlation_id: Uuid,
    pub status: CommandStatus,
    pub result: ResponsePayload,
}

impl CommandResponse {
    pub fn ok(correlation_id: Uuid, result: ResponsePayload) -> Self {
        Self {
            correlation_id,
            status: CommandStatus::Ok,
            result,
        }
    }

    pub fn fault(correlation_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            correlation_id,
            status: CommandStatus::Error,
            result: ResponsePayload::Fault {
                message: message.into(),
            },
        }
    }
}

/// One in-flight mutating command, completed through a oneshot.
#[derive(Debug)]
pub struct ControlRequest {
    pub correlation_id: Uuid,
    pub command: Command,
    pub respond_to: oneshot::Sender<CommandResponse>,
}
