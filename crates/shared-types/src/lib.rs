//! # Shared Types Crate
//!
//! Core entities and the ledger line codec shared by every Custodia
//! subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-subsystem types are defined here.
//! - **Normalized identifiers**: a [`CardId`] can only be built through
//!   normalization, so equality is always plain string equality.
//! - **Wire contract in one place**: the textual movement-ledger line format
//!   is a compatibility contract consumed by the ledger store, the pairing
//!   service, and the analytics engine, so its codec lives here next to the
//!   record type it encodes.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod views;

pub use codec::{format_line, parse_line, MalformedLine};
pub use entities::*;
pub use errors::*;
pub use views::*;
