//! # Custodia Gate Runtime
//!
//! Wires the subsystem crates into a running gate node:
//!
//! - `config` — node configuration with environment overrides
//! - `adapters/` — port implementations binding subsystems to concrete
//!   backends (files, system clock, tracing indicator)
//! - `client` — the command client: read-only queries answered directly,
//!   mutating intents forwarded to the dispatcher task
//! - `node` — assembly and lifecycle of one gate node

pub mod adapters;
pub mod client;
pub mod config;
pub mod node;

pub use client::CommandClient;
pub use config::{ConfigError, GateConfig};
pub use node::GateNode;
