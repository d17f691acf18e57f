//! Ports for the Identity Registry subsystem.

pub mod outbound;

pub use outbound::{IdentityStore, IdentityStoreError};
