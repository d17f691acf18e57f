//! Ports for the Analytics subsystem.

pub mod outbound;

pub use outbound::{Clock, RecordScan, RecordSource, SourceError};
