//! Store adapters for the Movement Ledger subsystem.

pub mod file;
pub mod memory;

pub use file::FileLedger;
pub use memory::MemoryLedger;
