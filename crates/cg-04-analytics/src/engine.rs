//! Analytics engine: the queries composed with their ports.

use shared_types::{CardId, ClockReading, InsideEntry, LateArrival, MovementRecord, Weekday};
use tracing::warn;

use crate::domain::{
    inside, late_arrivals, parse_date, weekly_attendance, AnalyticsError, DEFAULT_LATE_CUTOFF,
};
use crate::ports::{Clock, RecordSource};

/// Serves the three replay queries against one ledger source and one
/// clock. Every call replays the full ledger; nothing is cached.
pub struct AnalyticsEngine<R, C>
where
    R: RecordSource,
    C: Clock,
{
    source: R,
    clock: C,
    late_cutoff: String,
}

impl<R, C> AnalyticsEngine<R, C>
where
    R: RecordSource,
    C: Clock,
{
    pub fn new(source: R, clock: C) -> Self {
        Self::with_cutoff(source, clock, DEFAULT_LATE_CUTOFF)
    }

    pub fn with_cutoff(source: R, clock: C, late_cutoff: impl Into<String>) -> Self {
        Self {
            source,
            clock,
            late_cutoff: late_cutoff.into(),
        }
    }

    pub fn late_cutoff(&self) -> &str {
        &self.late_cutoff
    }

    /// Replays the ledger and takes the one clock reading the whole
    /// query will use. A failed clock degrades to the sentinel reading,
    /// which matches no ledger date, so date-filtered queries come back
    /// empty instead of failing.
    fn replay(&self) -> Result<(Vec<MovementRecord>, ClockReading), AnalyticsError> {
        let scan = self.source.scan_records()?;
        if scan.skipped > 0 {
            warn!(skipped = scan.skipped, "ledger scan skipped malformed lines");
        }
        let reading = self.clock.now().unwrap_or_else(|err| {
            warn!(%err, "analytics running against unavailable clock");
            ClockReading::unavailable()
        });
        Ok((scan.records, reading))
    }

    pub fn late_arrivals(&self) -> Result<Vec<LateArrival>, AnalyticsError> {
        let (records, reading) = self.replay()?;
        Ok(late_arrivals(
            &records,
            &reading.stamp.date,
            &self.late_cutoff,
        ))
    }

    pub fn inside(&self) -> Result<Vec<InsideEntry>, AnalyticsError> {
        let (records, reading) = self.replay()?;
        Ok(inside(&records, &reading.stamp.date))
    }

    pub fn weekly_attendance(&self, id: &CardId) -> Result<Vec<Weekday>, AnalyticsError> {
        let (records, reading) = self.replay()?;
        let Some(today) = parse_date(&reading.stamp.date) else {
            warn!("weekly attendance has no usable reference date");
            return Ok(Vec::new());
        };
        Ok(weekly_attendance(&records, id, today).into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::mocks::{FixedClock, StaticSource};
    use shared_types::{Movement, Stamp};

    fn id(s: &str) -> CardId {
        CardId::parse(s).unwrap()
    }

    fn record(visitor: &str, movement: Movement, date: &str, time: &str) -> MovementRecord {
        MovementRecord {
            custodian: id("99ffeeaa"),
            visitor: id(visitor),
            movement,
            stamp: Stamp::new(date, time),
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new("05/08/2026", "10:00:00", shared_types::Weekday::Wednesday)
    }

    #[test]
    fn late_arrivals_is_idempotent_for_a_stable_ledger_and_clock() {
        let source = StaticSource {
            records: vec![
                record("04a1b2c3", Movement::Entry, "05/08/2026", "08:30:00"),
                record("deadbeef", Movement::Entry, "05/08/2026", "07:59:59"),
            ],
            skipped: 0,
        };
        let engine = AnalyticsEngine::new(&source, clock());

        let first = engine.late_arrivals().unwrap();
        let second = engine.late_arrivals().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].visitor, id("04a1b2c3"));
    }

    #[test]
    fn inside_counts_only_today() {
        let source = StaticSource {
            records: vec![
                record("04a1b2c3", Movement::Entry, "05/08/2026", "08:00:00"),
                record("04a1b2c3", Movement::Entry, "04/08/2026", "08:00:00"),
            ],
            skipped: 0,
        };
        let engine = AnalyticsEngine::new(&source, clock());

        let view = engine.inside().unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].multiplicity, 1);
    }

    #[test]
    fn weekly_attendance_sorted_and_distinct() {
        let source = StaticSource {
            records: vec![
                record("04a1b2c3", Movement::Entry, "05/08/2026", "08:00:00"),
                record("04a1b2c3", Movement::Entry, "03/08/2026", "08:00:00"),
                record("04a1b2c3", Movement::Exit, "03/08/2026", "12:00:00"),
            ],
            skipped: 0,
        };
        let engine = AnalyticsEngine::new(&source, clock());

        let days = engine.weekly_attendance(&id("04a1b2c3")).unwrap();
        assert_eq!(
            days,
            vec![shared_types::Weekday::Monday, shared_types::Weekday::Wednesday]
        );
    }

    #[test]
    fn unavailable_clock_degrades_to_empty_views() {
        let source = StaticSource {
            records: vec![record("04a1b2c3", Movement::Entry, "05/08/2026", "09:00:00")],
            skipped: 0,
        };
        let clock = clock();
        clock.set_fail(true);
        let engine = AnalyticsEngine::new(&source, &clock);

        assert!(engine.late_arrivals().unwrap().is_empty());
        assert!(engine.inside().unwrap().is_empty());
        assert!(engine.weekly_attendance(&id("04a1b2c3")).unwrap().is_empty());
    }

    #[test]
    fn custom_cutoff_is_honored() {
        let source = StaticSource {
            records: vec![record("04a1b2c3", Movement::Entry, "05/08/2026", "07:30:00")],
            skipped: 0,
        };
        let engine = AnalyticsEngine::with_cutoff(&source, clock(), "07:00:00");
        assert_eq!(engine.late_arrivals().unwrap().len(), 1);
    }
}
