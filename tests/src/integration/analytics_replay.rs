//! Analytics queries replayed from a ledger shared with the writer.

#[cfg(test)]
mod tests {
    use cg_02_movement_ledger::{LedgerScanner, LedgerStore, LedgerWriter, MemoryLedger};
    use cg_04_analytics::{AnalyticsEngine, Clock};
    use gate_runtime::adapters::ScannerSource;
    use shared_types::{
        CardId, ClockReading, ClockUnavailable, Movement, MovementRecord, Stamp, Weekday,
    };

    const TODAY: &str = "05/08/2026"; // a Wednesday

    fn id(s: &str) -> CardId {
        CardId::parse(s).unwrap()
    }

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> Result<ClockReading, ClockUnavailable> {
            Ok(ClockReading::new(
                Stamp::new(TODAY, "18:00:00"),
                Weekday::Wednesday,
            ))
        }
    }

    fn engine(
        ledger: MemoryLedger,
    ) -> AnalyticsEngine<ScannerSource<MemoryLedger>, FrozenClock> {
        AnalyticsEngine::new(ScannerSource::new(LedgerScanner::new(ledger)), FrozenClock)
    }

    fn append(ledger: &MemoryLedger, visitor: &str, movement: Movement, date: &str, time: &str) {
        let writer = LedgerWriter::new(ledger.clone());
        writer
            .append(&MovementRecord {
                custodian: id("99ffeeaa"),
                visitor: id(visitor),
                movement,
                stamp: Stamp::new(date, time),
            })
            .unwrap();
    }

    #[test]
    fn late_arrivals_follow_first_entry_and_are_idempotent() {
        let ledger = MemoryLedger::new();
        append(&ledger, "04a1b2c3", Movement::Entry, TODAY, "08:20:00");
        append(&ledger, "04a1b2c3", Movement::Entry, TODAY, "07:00:00");
        append(&ledger, "deadbeef", Movement::Entry, TODAY, "08:10:00");
        let engine = engine(ledger);

        let first = engine.late_arrivals().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].visitor, id("04a1b2c3"));
        assert_eq!(first[0].first_entry, "08:20:00");

        // Unchanged ledger and clock give the identical view.
        assert_eq!(engine.late_arrivals().unwrap(), first);
    }

    #[test]
    fn inside_nets_entries_against_exits() {
        let ledger = MemoryLedger::new();
        // k entries, k exits: not inside.
        append(&ledger, "04a1b2c3", Movement::Entry, TODAY, "08:00:00");
        append(&ledger, "04a1b2c3", Movement::Exit, TODAY, "12:00:00");
        append(&ledger, "04a1b2c3", Movement::Entry, TODAY, "13:00:00");
        append(&ledger, "04a1b2c3", Movement::Exit, TODAY, "17:00:00");
        // k entries, k-1 exits: inside with multiplicity 1.
        append(&ledger, "deadbeef", Movement::Entry, TODAY, "08:00:00");
        append(&ledger, "deadbeef", Movement::Exit, TODAY, "12:00:00");
        append(&ledger, "deadbeef", Movement::Entry, TODAY, "13:00:00");
        let engine = engine(ledger);

        let view = engine.inside().unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].visitor, id("deadbeef"));
        assert_eq!(view[0].multiplicity, 1);
    }

    #[test]
    fn weekly_attendance_is_distinct_weekdays_of_the_current_week() {
        let ledger = MemoryLedger::new();
        // Three records on the same Monday count as one weekday.
        append(&ledger, "04a1b2c3", Movement::Entry, "03/08/2026", "08:00:00");
        append(&ledger, "04a1b2c3", Movement::Exit, "03/08/2026", "12:00:00");
        append(&ledger, "04a1b2c3", Movement::Entry, "03/08/2026", "13:00:00");
        // A record from the previous week is out of span.
        append(&ledger, "04a1b2c3", Movement::Entry, "28/07/2026", "08:00:00");
        let engine = engine(ledger);

        let days = engine.weekly_attendance(&id("04a1b2c3")).unwrap();
        assert_eq!(days, vec![Weekday::Monday]);

        // The custodian side of the records counts too.
        let days = engine.weekly_attendance(&id("99ffeeaa")).unwrap();
        assert_eq!(days, vec![Weekday::Monday]);
    }

    #[test]
    fn malformed_lines_are_invisible_to_every_query() {
        let ledger = MemoryLedger::new();
        append(&ledger, "04a1b2c3", Movement::Entry, TODAY, "09:00:00");
        ledger.append_line("corrupted").unwrap();
        ledger
            .append_line("-aa- recebeu -bb- às -indisponivel- do dia -indisponivel-")
            .unwrap();
        let engine = engine(ledger);

        let late = engine.late_arrivals().unwrap();
        assert_eq!(late.len(), 1);
        let inside = engine.inside().unwrap();
        assert_eq!(inside.len(), 1);
    }
}
