//! Domain layer of the Movement Ledger subsystem.

pub mod errors;
pub mod scanner;
pub mod writer;

pub use errors::LedgerError;
pub use scanner::{LedgerScan, LedgerScanner};
pub use writer::LedgerWriter;
