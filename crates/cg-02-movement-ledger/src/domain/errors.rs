//! Movement Ledger error types.

use crate::ports::LedgerStoreError;

/// Ledger error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The backend store failed to read or write.
    Store { message: String },
}

impl From<LedgerStoreError> for LedgerError {
    fn from(err: LedgerStoreError) -> Self {
        Self::Store {
            message: err.message,
        }
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store { message } => write!(f, "ledger store failure: {message}"),
        }
    }
}

impl std::error::Error for LedgerError {}
