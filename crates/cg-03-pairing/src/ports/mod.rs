//! Ports for the Pairing subsystem.

pub mod outbound;

pub use outbound::{
    Clock, DirectoryError, MovementSink, RoleDirectory, Signal, SignalSink, SinkError,
};
