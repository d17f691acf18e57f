//! Cross-subsystem integration flows.

pub mod analytics_replay;
pub mod dispatch_flows;
pub mod pairing_flows;
