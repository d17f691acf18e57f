//! Command client.
//!
//! Lives on the control task. Read-only queries (analytics, registry
//! listings) are answered directly — safe against the single writer
//! because the storage is append-only and readers use independent
//! handles. Every mutating intent is forwarded into the dispatcher task
//! and awaited through a oneshot.

use cg_01_identity_registry::{IdentityStore, Registry};
use cg_04_analytics::{AnalyticsEngine, Clock, RecordSource};
use cg_05_dispatch::commands::{Command, CommandResponse, ControlRequest, ResponsePayload};
use shared_types::CardId;
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

pub struct CommandClient<R, C, I>
where
    R: RecordSource,
    C: Clock,
    I: IdentityStore,
{
    control: mpsc::Sender<ControlRequest>,
    engine: AnalyticsEngine<R, C>,
    registry: Registry<I>,
}

impl<R, C, I> CommandClient<R, C, I>
where
    R: RecordSource,
    C: Clock,
    I: IdentityStore,
{
    pub fn new(
        control: mpsc::Sender<ControlRequest>,
        engine: AnalyticsEngine<R, C>,
        registry: Registry<I>,
    ) -> Self {
        Self {
            control,
            engine,
            registry,
        }
    }

    /// Executes one decoded command and produces its response event.
    pub async fn execute(&self, command: Command) -> CommandResponse {
        let correlation_id = Uuid::new_v4();
        match command {
            Command::GetLateArrivals => match self.engine.late_arrivals() {
                Ok(entries) => CommandResponse::ok(
                    correlation_id,
                    ResponsePayload::LateArrivals { entries },
                ),
                Err(err) => CommandResponse::fault(correlation_id, err.to_string()),
            },
            Command::GetInside => match self.engine.inside() {
                Ok(entries) => {
                    CommandResponse::ok(correlation_id, ResponsePayload::Inside { entries })
                }
                Err(err) => CommandResponse::fault(correlation_id, err.to_string()),
            },
            Command::GetWeeklyAttendance { id } => {
                let id = match CardId::parse(&id) {
                    Ok(id) => id,
                    Err(err) => {
                        return CommandResponse::fault(correlation_id, err.to_string())
                    }
                };
                match self.engine.weekly_attendance(&id) {
                    Ok(weekdays) => CommandResponse::ok(
                        correlation_id,
                        ResponsePayload::WeeklyAttendance {
                            id,
                            weekdays: weekdays
                                .into_iter()
                                .map(|day| day.display_name().to_string())
                                .collect(),
                        },
                    ),
                    Err(err) => CommandResponse::fault(correlation_id, err.to_string()),
                }
            }
            Command::ListMembers { set } => match self.registry.members(set) {
                Ok(ids) => CommandResponse::ok(
                    correlation_id,
                    ResponsePayload::Members { set, ids },
                ),
                Err(err) => CommandResponse::fault(correlation_id, err.to_string()),
            },
            // Everything that mutates runs on the dispatcher task.
            Command::StartEntryMode
            | Command::StartExitMode
            | Command::RegisterStart { .. }
            | Command::Delete { .. }
            | Command::GetStatus => self.forward(correlation_id, command).await,
        }
    }

    async fn forward(&self, correlation_id: Uuid, command: Command) -> CommandResponse {
        let (respond_to, response) = oneshot::channel();
        let request = ControlRequest {
            correlation_id,
            command,
            respond_to,
        };
        if self.control.send(request).await.is_err() {
            return CommandResponse::fault(correlation_id, "dispatcher unavailable");
        }
        match response.await {
            Ok(response) => response,
            Err(_) => CommandResponse::fault(correlation_id, "dispatcher dropped the request"),
        }
    }
}
