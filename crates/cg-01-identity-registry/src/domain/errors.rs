//! Identity Registry error types.

use crate::ports::IdentityStoreError;

/// Registry error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The backend store failed to read or write.
    Store { message: String },
}

impl From<IdentityStoreError> for RegistryError {
    fn from(err: IdentityStoreError) -> Self {
        Self::Store {
            message: err.message,
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store { message } => write!(f, "registry store failure: {message}"),
        }
    }
}

impl std::error::Error for RegistryError {}
