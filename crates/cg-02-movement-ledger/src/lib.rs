//! # Movement Ledger Subsystem
//!
//! Durable append-only sequence of movement records — the sole source of
//! truth for all attendance analytics.
//!
//! ## Invariants
//!
//! - An append does not return success until the record is durable.
//! - Records are never reordered or rewritten; append order defines
//!   chronological order.
//! - Malformed lines are skipped during scans and counted as a
//!   data-quality warning; they never abort a scan.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! - `domain/` — [`LedgerWriter`] (format + durable append) and
//!   [`LedgerScanner`] (replay with malformed-line accounting)
//! - `ports/` — the outbound `LedgerStore` trait
//! - `adapters/` — file-backed and in-memory store implementations

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FileLedger, MemoryLedger};
pub use domain::{LedgerError, LedgerScan, LedgerScanner, LedgerWriter};
pub use ports::{LedgerStore, LedgerStoreError, LineStream};
