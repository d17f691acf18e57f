//! # Identity Registry Subsystem
//!
//! Maintains the two disjoint membership sets (Visitors, Custodians) keyed
//! by normalized card identifier.
//!
//! ## Invariants
//!
//! - Every mutation is immediately durable through the [`IdentityStore`]
//!   port; there is no batching or caching layer, so membership checks
//!   re-scan the backend each time.
//! - An identifier *should* belong to at most one set. Simultaneous
//!   membership is a detected configuration error surfaced through
//!   [`domain::Registry::roles`]; the registry never resolves it silently.
//! - Removal searches Visitors first, then Custodians, and removes from
//!   the first match only.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! - `domain/` — registry operations and error types
//! - `ports/` — the outbound `IdentityStore` trait
//! - `adapters/` — file-backed and in-memory store implementations

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FileIdentityStore, MemoryIdentityStore};
pub use domain::{AddOutcome, Registry, RegistryError, RemoveOutcome};
pub use ports::{IdentityStore, IdentityStoreError};
