//! # Pairing Subsystem
//!
//! The two-phase card-pairing authorization core. A transaction is two
//! asynchronous taps: for Entry, a visitor followed by a custodian; for
//! Exit, a custodian followed by a visitor. Only a completed pair
//! produces a movement record, and the [`service::PairingService`] is the
//! sole writer of new ledger records.
//!
//! ## State Machine
//!
//! ```text
//! [Idle] ──arm(mode)──→ [AwaitingFirst] ──valid first tap──→ [AwaitingSecond]
//!                             ↑                                    │
//!                             └──── any terminal outcome ──────────┘
//!                                   (success or failure; reads stay
//!                                    suspended until the next arm)
//! ```
//!
//! ## Domain Invariants
//!
//! - An identifier present in both membership sets is rejected with
//!   `CrossRegistered` at any phase; it is never treated as merely
//!   unregistered.
//! - The same identifier can never complete both taps (`SelfPair`).
//! - Every terminal outcome suspends tap processing until an explicit
//!   re-arm; there is no automatic retry of a failed phase.
//! - A ledger write failure after a successful pairing is reported but
//!   neither crashes the process nor re-queues the tap: appends are
//!   at-most-once.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! - `domain/` — the pure [`domain::PairingMachine`] and fault taxonomy
//! - `ports/` — outbound traits: `RoleDirectory`, `MovementSink`,
//!   `Clock`, `SignalSink`
//! - `service` — [`service::PairingService`] composing machine and ports

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    PairingFault, PairingMachine, PairingState, PassageMode, Role, Transition,
};
pub use ports::{Clock, DirectoryError, MovementSink, RoleDirectory, Signal, SignalSink, SinkError};
pub use service::{PairingService, TapResult};
