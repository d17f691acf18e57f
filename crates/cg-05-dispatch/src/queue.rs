//! Bounded tap queue.
//!
//! One producer (the hardware poll loop) and exactly one consumer (the
//! dispatcher). The queue holds normalized identifiers only; on overflow
//! the tap is dropped and accounted, never retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shared_types::CardId;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{SendTimeoutError, TrySendError};
use tracing::warn;

/// Default queue depth; taps beyond it are dropped.
pub const TAP_QUEUE_CAPACITY: usize = 8;

/// Whether an offered tap was enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    Accepted,
    /// Queue full (or consumer gone); the tap was discarded.
    Dropped,
}

/// Producer handle.
#[derive(Debug, Clone)]
pub struct TapFeed {
    tx: mpsc::Sender<CardId>,
    dropped: Arc<AtomicU64>,
}

impl TapFeed {
    /// Offers a tap without blocking.
    pub fn offer(&self, id: CardId) -> OfferOutcome {
        match self.tx.try_send(id) {
            Ok(()) => OfferOutcome::Accepted,
            Err(TrySendError::Full(id)) => self.drop_tap(&id, "queue full"),
            Err(TrySendError::Closed(id)) => self.drop_tap(&id, "consumer gone"),
        }
    }

    /// Offers a tap, waiting at most `timeout` for a free slot.
    pub async fn offer_timeout(&self, id: CardId, timeout: Duration) -> OfferOutcome {
        match self.tx.send_timeout(id, timeout).await {
            Ok(()) => OfferOutcome::Accepted,
            Err(SendTimeoutError::Timeout(id)) => self.drop_tap(&id, "queue full"),
            Err(SendTimeoutError::Closed(id)) => self.drop_tap(&id, "consumer gone"),
        }
    }

    /// Taps dropped so far.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Shared handle to the drop counter, for status reporting.
    pub fn drop_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.dropped)
    }

    fn drop_tap(&self, id: &CardId, reason: &'static str) -> OfferOutcome {
        self.dropped.fetch_add(1, Ordering::SeqCst);
        warn!(%id, reason, "tap dropped");
        OfferOutcome::Dropped
    }
}

/// Consumer handle; owned by the dispatcher alone.
#[derive(Debug)]
pub struct TapStream {
    rx: mpsc::Receiver<CardId>,
}

impl TapStream {
    /// Waits for the next tap; `None` once every producer is gone.
    pub async fn recv(&mut self) -> Option<CardId> {
        self.rx.recv().await
    }
}

/// Creates the queue at the default capacity.
pub fn tap_queue() -> (TapFeed, TapStream) {
    tap_queue_with_capacity(TAP_QUEUE_CAPACITY)
}

pub fn tap_queue_with_capacity(capacity: usize) -> (TapFeed, TapStream) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        TapFeed {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
        },
        TapStream { rx },
    )
}
