//! The three replay queries, as pure functions over parsed records.
//!
//! Record order matters: append order defines chronological order, so
//! "first Entry of the day" means the first one encountered in a scan.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use shared_types::{CardId, InsideEntry, LateArrival, Movement, MovementRecord, Weekday};

use super::calendar::{parse_date, weekday_of, WorkWeek};

/// First Entry strictly after this time counts as late.
pub const DEFAULT_LATE_CUTOFF: &str = "08:15:00";

/// Visitors whose first Entry of `today` came strictly after `cutoff`.
///
/// Both times are fixed-width zero-padded `HH:MM:SS`, so the lexicographic
/// comparison is chronological. Subsequent same-day entries are ignored.
pub fn late_arrivals(
    records: &[MovementRecord],
    today: &str,
    cutoff: &str,
) -> Vec<LateArrival> {
    let mut first_entries: BTreeMap<&CardId, &str> = BTreeMap::new();
    for record in records {
        if record.movement == Movement::Entry && record.stamp.date == today {
            first_entries
                .entry(&record.visitor)
                .or_insert(&record.stamp.time);
        }
    }

    first_entries
        .into_iter()
        .filter(|(_, time)| *time > cutoff)
        .map(|(visitor, time)| LateArrival {
            visitor: visitor.clone(),
            first_entry: time.to_string(),
        })
        .collect()
}

/// Visitors currently inside, with multiplicity.
///
/// Per visitor: today's Entry count minus Exit count, floored at zero.
/// An Exit with no outstanding Entry never drives the count negative.
pub fn inside(records: &[MovementRecord], today: &str) -> Vec<InsideEntry> {
    let mut tallies: BTreeMap<&CardId, (u32, u32)> = BTreeMap::new();
    for record in records {
        if record.stamp.date != today {
            continue;
        }
        let tally = tallies.entry(&record.visitor).or_default();
        match record.movement {
            Movement::Entry => tally.0 += 1,
            Movement::Exit => tally.1 += 1,
        }
    }

    tallies
        .into_iter()
        .filter_map(|(visitor, (entries, exits))| {
            let net = entries.saturating_sub(exits);
            (net > 0).then(|| InsideEntry {
                visitor: visitor.clone(),
                multiplicity: net,
            })
        })
        .collect()
}

/// Distinct weekdays of the Monday–Friday span containing `today` on
/// which `id` appears as custodian or visitor.
pub fn weekly_attendance(
    records: &[MovementRecord],
    id: &CardId,
    today: NaiveDate,
) -> BTreeSet<Weekday> {
    let week = WorkWeek::containing(today);
    let mut weekdays = BTreeSet::new();
    for record in records {
        if record.custodian != *id && record.visitor != *id {
            continue;
        }
        let Some(date) = parse_date(&record.stamp.date) else {
            continue;
        };
        if week.contains(date) {
            weekdays.insert(weekday_of(date));
        }
    }
    weekdays
}
