//! Membership operations over a durable identity store.

use shared_types::{CardId, RoleProfile, RoleSet};
use tracing::info;

use super::errors::RegistryError;
use crate::ports::IdentityStore;

/// Outcome of an add operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Outcome of a remove operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Removed from this set. An identifier present in both sets is only
    /// ever removed from the first match.
    Removed(RoleSet),
    NotFound,
}

/// The identity registry: two membership sets over one backend store.
///
/// Holds no in-memory state; every operation goes straight to the store,
/// so a mutation is visible to the next check as soon as it returns.
pub struct Registry<S: IdentityStore> {
    store: S,
}

impl<S: IdentityStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Checks whether an identifier belongs to one set.
    pub fn is_member(&self, set: RoleSet, id: &CardId) -> Result<bool, RegistryError> {
        Ok(self.store.scan(set)?.contains(id))
    }

    /// Looks the identifier up in both sets.
    ///
    /// A profile with both flags set is a configuration error the caller
    /// must reject; the registry only reports it.
    pub fn roles(&self, id: &CardId) -> Result<RoleProfile, RegistryError> {
        Ok(RoleProfile {
            is_visitor: self.is_member(RoleSet::Visitors, id)?,
            is_custodian: self.is_member(RoleSet::Custodians, id)?,
        })
    }

    /// Adds an identifier to a set unless it is already present there.
    pub fn add(&self, set: RoleSet, id: &CardId) -> Result<AddOutcome, RegistryError> {
        if self.is_member(set, id)? {
            return Ok(AddOutcome::AlreadyExists);
        }
        self.store.append(set, id)?;
        info!(set = %set, id = %id, "identifier registered");
        Ok(AddOutcome::Added)
    }

    /// Removes an identifier, searching Visitors first, then Custodians.
    ///
    /// Deletion rewrites the matching set without the removed entry,
    /// leaving the other lines untouched.
    pub fn remove(&self, id: &CardId) -> Result<RemoveOutcome, RegistryError> {
        for set in [RoleSet::Visitors, RoleSet::Custodians] {
            let members = self.store.scan(set)?;
            if members.contains(id) {
                let remaining: Vec<CardId> =
                    members.into_iter().filter(|m| m != id).collect();
                self.store.rewrite(set, &remaining)?;
                info!(set = %set, id = %id, "identifier removed");
                return Ok(RemoveOutcome::Removed(set));
            }
        }
        Ok(RemoveOutcome::NotFound)
    }

    /// Lists the identifiers of one set in stored order.
    pub fn members(&self, set: RoleSet) -> Result<Vec<CardId>, RegistryError> {
        Ok(self.store.scan(set)?)
    }
}
