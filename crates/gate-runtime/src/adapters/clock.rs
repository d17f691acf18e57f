//! System clock adapter over the local wall clock.

use chrono::{DateTime, Datelike, Local};
use shared_types::{ClockReading, ClockUnavailable, Stamp, Weekday};

/// Clock provider backed by `chrono::Local`.
///
/// Serves both the pairing service (record stamping) and the analytics
/// engine (one stable reading per scan).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    fn reading(&self) -> ClockReading {
        let now: DateTime<Local> = Local::now();
        ClockReading::new(
            Stamp::new(
                now.format("%d/%m/%Y").to_string(),
                now.format("%H:%M:%S").to_string(),
            ),
            map_weekday(now.weekday()),
        )
    }
}

impl cg_03_pairing::Clock for SystemClock {
    fn now(&self) -> Result<ClockReading, ClockUnavailable> {
        Ok(self.reading())
    }
}

impl cg_04_analytics::Clock for SystemClock {
    fn now(&self) -> Result<ClockReading, ClockUnavailable> {
        Ok(self.reading())
    }
}

fn map_weekday(weekday: chrono::Weekday) -> Weekday {
    match weekday {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}
