//! Ports for the Movement Ledger subsystem.

pub mod outbound;

pub use outbound::{LedgerStore, LedgerStoreError, LineStream};
