//! Outbound (driven) ports for the Identity Registry subsystem.

use shared_types::{CardId, RoleSet};

/// Backend store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityStoreError {
    pub message: String,
}

impl IdentityStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for IdentityStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "identity store failure: {}", self.message)
    }
}

impl std::error::Error for IdentityStoreError {}

/// Durable backend for one membership set per role.
///
/// Deletion is implemented by `rewrite`: the caller writes the full set
/// back without the removed entry, and the adapter replaces the stored
/// sequence atomically.
pub trait IdentityStore: Send + Sync {
    /// Returns the identifiers of one set in stored order.
    fn scan(&self, set: RoleSet) -> Result<Vec<CardId>, IdentityStoreError>;

    /// Appends one identifier to a set, durable before returning.
    fn append(&self, set: RoleSet, id: &CardId) -> Result<(), IdentityStoreError>;

    /// Replaces the full contents of a set, durable before returning.
    fn rewrite(&self, set: RoleSet, ids: &[CardId]) -> Result<(), IdentityStoreError>;
}
