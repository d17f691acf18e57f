//! Calendar helpers over the ledger's `DD/MM/YYYY` date strings.

use chrono::{Datelike, Days, NaiveDate};
use shared_types::Weekday;

/// Parses a ledger date field. Sentinel or malformed dates yield `None`
/// and are ignored by date-filtered queries.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

pub fn weekday_of(date: NaiveDate) -> Weekday {
    match date.weekday() {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}

/// The Monday–Friday span containing a reference date.
///
/// A weekend reference date maps to the span that began on the preceding
/// Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWeek {
    monday: NaiveDate,
    friday: NaiveDate,
}

impl WorkWeek {
    pub fn containing(date: NaiveDate) -> Self {
        let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
        Self {
            monday,
            friday: monday + Days::new(4),
        }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn friday(&self) -> NaiveDate {
        self.friday
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.friday
    }
}
