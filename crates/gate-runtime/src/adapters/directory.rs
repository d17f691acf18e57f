//! Role directory adapter over the identity registry.

use cg_01_identity_registry::{IdentityStore, Registry};
use cg_03_pairing::{DirectoryError, RoleDirectory};
use shared_types::{CardId, RoleProfile};

/// Resolves role profiles through a registry instance.
pub struct RegistryDirectory<I: IdentityStore> {
    registry: Registry<I>,
}

impl<I: IdentityStore> RegistryDirectory<I> {
    pub fn new(registry: Registry<I>) -> Self {
        Self { registry }
    }
}

impl<I: IdentityStore> RoleDirectory for RegistryDirectory<I> {
    fn roles(&self, id: &CardId) -> Result<RoleProfile, DirectoryError> {
        self.registry.roles(id).map_err(|err| DirectoryError {
            message: err.to_string(),
        })
    }
}
