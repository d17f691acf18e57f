//! Domain layer of the Pairing subsystem.

pub mod faults;
pub mod machine;

pub use faults::PairingFault;
pub use machine::{PairingMachine, PairingState, PassageMode, Role, Transition};
