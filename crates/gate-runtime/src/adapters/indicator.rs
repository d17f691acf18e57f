//! Indicator adapter logging operator signals.
//!
//! Stands in for the LED driver of the physical gate: every signal the
//! core emits becomes a structured log line.

use cg_03_pairing::{Signal, SignalSink};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingIndicator;

impl SignalSink for TracingIndicator {
    fn signal(&self, signal: Signal) {
        match signal {
            Signal::Pending => info!(indicator = "pending", "awaiting second tap"),
            Signal::Success => info!(indicator = "success", "transaction authorized"),
            Signal::Failure => info!(indicator = "failure", "transaction refused"),
        }
    }
}
