//! # Custodia Test Suite
//!
//! Unified test crate with cross-subsystem integration flows:
//!
//! ```text
//! tests/src/integration/
//! ├── pairing_flows.rs    # Two-tap transactions against real adapters
//! ├── analytics_replay.rs # Queries replayed from a shared ledger
//! └── dispatch_flows.rs   # End-to-end node: commands, taps, files
//! ```
//!
//! Run with `cargo test -p custodia-tests`.

#![allow(dead_code)]

pub mod integration;
