//! # Analytics Subsystem
//!
//! Read-only attendance queries computed by replaying the movement
//! ledger. No auxiliary indices exist: every query is a pure O(N) scan,
//! reproducible given the same ledger content and the same clock reading.
//!
//! ## Queries
//!
//! - **Late arrivals**: visitors whose *first* Entry of the day came
//!   strictly after the cutoff time.
//! - **Inside**: visitors currently inside, with multiplicity — the day's
//!   Entry count minus Exit count, floored at zero.
//! - **Weekly attendance**: the distinct weekdays of the current
//!   Monday–Friday span on which an identifier appears.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! - `domain/` — the pure query functions and calendar helpers
//! - `ports/` — outbound traits: `RecordSource`, `Clock`
//! - `engine` — [`engine::AnalyticsEngine`] composing both ports

pub mod domain;
pub mod engine;
pub mod ports;

pub use domain::{
    inside, late_arrivals, weekly_attendance, AnalyticsError, WorkWeek, DEFAULT_LATE_CUTOFF,
};
pub use engine::AnalyticsEngine;
pub use ports::{Clock, RecordScan, RecordSource, SourceError};
