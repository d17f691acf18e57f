//! End-to-end node flows: commands through the client, taps through the
//! queue, state on real files.

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use cg_05_dispatch::commands::{Command, CommandResponse, CommandStatus, ResponsePayload};
    use gate_runtime::{GateConfig, GateNode};
    use shared_types::{CardId, RoleSet};

    const VISITOR: &str = "04a1b2c3";
    const CUSTODIAN: &str = "99ffeeaa";

    fn id(s: &str) -> CardId {
        CardId::parse(s).unwrap()
    }

    fn config(dir: &Path) -> GateConfig {
        let mut config = GateConfig::default();
        config.storage.data_dir = dir.to_path_buf();
        config
    }

    fn seed_registry(dir: &Path) {
        std::fs::write(dir.join("usuarios.txt"), format!("{VISITOR}\n")).unwrap();
        std::fs::write(dir.join("funcionarios.txt"), format!("{CUSTODIAN}\n")).unwrap();
    }

    /// Polls an async condition until it holds or a second passes.
    macro_rules! eventually {
        ($cond:expr) => {{
            let mut ok = false;
            for _ in 0..100 {
                if $cond {
                    ok = true;
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            assert!(ok, "condition not reached: {}", stringify!($cond));
        }};
    }

    async fn status_of(node: &GateNode) -> (String, bool, u64) {
        let response = node.client().execute(Command::GetStatus).await;
        match response.result {
            ResponsePayload::Status {
                mode,
                reads_enabled,
                dropped_taps,
            } => (mode, reads_enabled, dropped_taps),
            other => panic!("expected status payload, got {other:?}"),
        }
    }

    fn assert_ok(response: &CommandResponse) {
        assert_eq!(response.status, CommandStatus::Ok, "{:?}", response.result);
    }

    #[tokio::test]
    async fn entry_flow_writes_the_ledger_and_feeds_inside_view() {
        let dir = tempfile::tempdir().unwrap();
        seed_registry(dir.path());
        let node = GateNode::start(&config(dir.path())).unwrap();

        let response = node.client().execute(Command::StartEntryMode).await;
        assert_ok(&response);
        assert_eq!(
            response.result,
            ResponsePayload::Armed {
                mode: "entry".to_string()
            }
        );

        node.offer_tap(id(VISITOR)).await;
        node.offer_tap(id(CUSTODIAN)).await;

        let ledger_path = dir.path().join("movimentos.txt");
        eventually!(std::fs::read_to_string(&ledger_path)
            .map(|s| s.lines().count() == 1)
            .unwrap_or(false));
        let line = std::fs::read_to_string(&ledger_path).unwrap();
        assert!(line.contains("-99ffeeaa- recebeu -04a1b2c3- às -"));

        // Terminal outcome suspends reads.
        let (_, reads_enabled, _) = status_of(&node).await;
        assert!(!reads_enabled);

        // The record is stamped "today", so the inside view sees it.
        let response = node.client().execute(Command::GetInside).await;
        match response.result {
            ResponsePayload::Inside { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].visitor, id(VISITOR));
                assert_eq!(entries[0].multiplicity, 1);
            }
            other => panic!("expected inside payload, got {other:?}"),
        }

        node.shutdown().await;
    }

    #[tokio::test]
    async fn wrong_first_tap_leaves_no_record() {
        let dir = tempfile::tempdir().unwrap();
        seed_registry(dir.path());
        let node = GateNode::start(&config(dir.path())).unwrap();

        assert_ok(&node.client().execute(Command::StartEntryMode).await);
        node.offer_tap(id(CUSTODIAN)).await;

        // Wait for the terminal failure to land.
        eventually!(!status_of(&node).await.1);
        assert!(!dir.path().join("movimentos.txt").exists());

        node.shutdown().await;
    }

    #[tokio::test]
    async fn registration_is_single_shot_and_duplicate_proof() {
        let dir = tempfile::tempdir().unwrap();
        let node = GateNode::start(&config(dir.path())).unwrap();

        let response = node
            .client()
            .execute(Command::RegisterStart {
                set: RoleSet::Visitors,
            })
            .await;
        assert_eq!(
            response.result,
            ResponsePayload::RegistrationArmed {
                set: RoleSet::Visitors
            }
        );
        assert_eq!(status_of(&node).await.0, "register/visitors");

        node.offer_tap(id("0011")).await;
        eventually!(status_of(&node).await.0 == "idle");

        let response = node
            .client()
            .execute(Command::ListMembers {
                set: RoleSet::Visitors,
            })
            .await;
        assert_eq!(
            response.result,
            ResponsePayload::Members {
                set: RoleSet::Visitors,
                ids: vec![id("0011")],
            }
        );

        // Re-registering the same tag changes nothing.
        node.client()
            .execute(Command::RegisterStart {
                set: RoleSet::Visitors,
            })
            .await;
        node.offer_tap(id("0011")).await;
        eventually!(status_of(&node).await.0 == "idle");
        let response = node
            .client()
            .execute(Command::ListMembers {
                set: RoleSet::Visitors,
            })
            .await;
        assert_eq!(
            response.result,
            ResponsePayload::Members {
                set: RoleSet::Visitors,
                ids: vec![id("0011")],
            }
        );

        node.shutdown().await;
    }

    #[tokio::test]
    async fn delete_removes_first_match_then_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        seed_registry(dir.path());
        let node = GateNode::start(&config(dir.path())).unwrap();

        let response = node
            .client()
            .execute(Command::Delete {
                id: VISITOR.to_string(),
            })
            .await;
        assert_eq!(
            response.result,
            ResponsePayload::Deleted {
                set: RoleSet::Visitors
            }
        );

        let response = node
            .client()
            .execute(Command::ListMembers {
                set: RoleSet::Visitors,
            })
            .await;
        assert_eq!(
            response.result,
            ResponsePayload::Members {
                set: RoleSet::Visitors,
                ids: vec![],
            }
        );

        let response = node
            .client()
            .execute(Command::Delete {
                id: VISITOR.to_string(),
            })
            .await;
        assert_eq!(response.result, ResponsePayload::NotFound);

        node.shutdown().await;
    }

    #[tokio::test]
    async fn weekly_attendance_query_executes_against_live_files() {
        let dir = tempfile::tempdir().unwrap();
        seed_registry(dir.path());
        let node = GateNode::start(&config(dir.path())).unwrap();

        // No records yet: the view is empty but well-formed.
        let response = node
            .client()
            .execute(Command::GetWeeklyAttendance {
                id: VISITOR.to_string(),
            })
            .await;
        assert_ok(&response);
        match response.result {
            ResponsePayload::WeeklyAttendance { id: who, weekdays } => {
                assert_eq!(who, id(VISITOR));
                assert!(weekdays.is_empty());
            }
            other => panic!("expected weekly attendance payload, got {other:?}"),
        }

        node.shutdown().await;
    }
}
