//! Two-tap pairing transactions against real registry and ledger
//! adapters, with a frozen clock so ledger lines are exact.

#[cfg(test)]
mod tests {
    use cg_01_identity_registry::{MemoryIdentityStore, Registry};
    use cg_02_movement_ledger::{LedgerWriter, MemoryLedger};
    use cg_03_pairing::{
        Clock, PairingFault, PairingService, PairingState, PassageMode, Role, Signal,
        SignalSink, TapResult,
    };
    use gate_runtime::adapters::{LedgerSink, RegistryDirectory};
    use shared_types::{CardId, ClockReading, ClockUnavailable, RoleSet, Stamp, Weekday};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const VISITOR: &str = "04a1b2c3";
    const CUSTODIAN: &str = "99ffeeaa";

    fn id(s: &str) -> CardId {
        CardId::parse(s).unwrap()
    }

    /// Clock pinned to a Wednesday morning.
    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> Result<ClockReading, ClockUnavailable> {
            Ok(ClockReading::new(
                Stamp::new("05/08/2026", "07:58:21"),
                Weekday::Wednesday,
            ))
        }
    }

    struct NullSignals;

    impl SignalSink for NullSignals {
        fn signal(&self, _signal: Signal) {}
    }

    fn seeded_store() -> MemoryIdentityStore {
        MemoryIdentityStore::new()
            .with_member(RoleSet::Visitors, id(VISITOR))
            .with_member(RoleSet::Custodians, id(CUSTODIAN))
    }

    fn service(
        store: MemoryIdentityStore,
        ledger: MemoryLedger,
    ) -> PairingService<
        RegistryDirectory<MemoryIdentityStore>,
        LedgerSink<MemoryLedger>,
        FrozenClock,
        NullSignals,
    > {
        PairingService::new(
            RegistryDirectory::new(Registry::new(store)),
            LedgerSink::new(LedgerWriter::new(ledger)),
            FrozenClock,
            NullSignals,
        )
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    /// Empty ledger, one visitor and one custodian registered. The entry
    /// pair appends exactly one record with the canonical line shape.
    #[test]
    fn scenario_a_entry_pair_appends_exact_line() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Entry);
        let first = service.handle_tap(&id(VISITOR));
        assert_eq!(
            first,
            TapResult::Pending {
                mode: PassageMode::Entry
            }
        );
        // Phase advanced, nothing written yet.
        assert!(matches!(
            service.state(),
            PairingState::AwaitingSecond { .. }
        ));
        assert!(ledger.lines().is_empty());

        let second = service.handle_tap(&id(CUSTODIAN));
        assert!(matches!(second, TapResult::Completed { .. }));
        assert_eq!(
            ledger.lines(),
            vec!["-99ffeeaa- recebeu -04a1b2c3- às -07:58:21- do dia -05/08/2026-"]
        );
        // Back to AwaitingFirst with reads suspended.
        assert_eq!(
            *service.state(),
            PairingState::AwaitingFirst {
                mode: PassageMode::Entry
            }
        );
        assert!(!service.reads_enabled());
    }

    /// Custodian tapped where a visitor was expected: WrongRole, nothing
    /// appended, reads suspended.
    #[test]
    fn scenario_b_wrong_first_role_fails_entry() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Entry);
        let result = service.handle_tap(&id(CUSTODIAN));
        assert_eq!(
            result,
            TapResult::Rejected {
                fault: PairingFault::WrongRole {
                    required: Role::Visitor
                }
            }
        );
        assert!(ledger.lines().is_empty());
        assert!(!service.reads_enabled());
    }

    #[test]
    fn exit_pair_reverses_roles_and_verb() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Exit);
        service.handle_tap(&id(CUSTODIAN));
        service.handle_tap(&id(VISITOR));

        assert_eq!(
            ledger.lines(),
            vec!["-99ffeeaa- liberou -04a1b2c3- às -07:58:21- do dia -05/08/2026-"]
        );
    }

    #[test]
    fn exit_mode_rejects_visitor_first() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Exit);
        let result = service.handle_tap(&id(VISITOR));
        assert_eq!(
            result,
            TapResult::Rejected {
                fault: PairingFault::WrongRole {
                    required: Role::Custodian
                }
            }
        );
        assert!(ledger.lines().is_empty());
    }

    #[test]
    fn double_tap_is_self_pair_without_a_record() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Entry);
        service.handle_tap(&id(VISITOR));
        let result = service.handle_tap(&id(VISITOR));
        assert_eq!(
            result,
            TapResult::Rejected {
                fault: PairingFault::SelfPair
            }
        );
        assert!(ledger.lines().is_empty());
    }

    #[test]
    fn cross_registered_identifier_fails_both_modes_at_any_phase() {
        let store = seeded_store().with_member(RoleSet::Custodians, id(VISITOR));
        let ledger = MemoryLedger::new();
        let mut service = service(store, ledger.clone());

        // First phase of Entry.
        service.arm(PassageMode::Entry);
        assert_eq!(
            service.handle_tap(&id(VISITOR)),
            TapResult::Rejected {
                fault: PairingFault::CrossRegistered
            }
        );

        // Second phase of Exit.
        service.arm(PassageMode::Exit);
        service.handle_tap(&id(CUSTODIAN));
        assert_eq!(
            service.handle_tap(&id(VISITOR)),
            TapResult::Rejected {
                fault: PairingFault::CrossRegistered
            }
        );
        assert!(ledger.lines().is_empty());
    }

    #[test]
    fn completed_entry_suspends_reads_until_rearm() {
        let ledger = MemoryLedger::new();
        let mut service = service(seeded_store(), ledger.clone());

        service.arm(PassageMode::Entry);
        service.handle_tap(&id(VISITOR));
        service.handle_tap(&id(CUSTODIAN));
        assert_eq!(service.handle_tap(&id(VISITOR)), TapResult::Ignored);
        assert_eq!(ledger.lines().len(), 1);

        service.arm(PassageMode::Entry);
        service.handle_tap(&id(VISITOR));
        service.handle_tap(&id(CUSTODIAN));
        assert_eq!(ledger.lines().len(), 2);
    }
}
