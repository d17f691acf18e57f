//! Gate node assembly.
//!
//! One node = file-backed stores + system clock + tracing indicator,
//! wired into the pairing service, one dispatcher task, and a command
//! client. Taps enter through [`GateNode::offer_tap`]; commands through
//! [`GateNode::client`].

use std::time::Duration;

use cg_01_identity_registry::{FileIdentityStore, Registry};
use cg_02_movement_ledger::{FileLedger, LedgerScanner, LedgerWriter};
use cg_03_pairing::PairingService;
use cg_04_analytics::AnalyticsEngine;
use cg_05_dispatch::dispatcher::{control_channel, Dispatcher};
use cg_05_dispatch::queue::{tap_queue_with_capacity, OfferOutcome, TapFeed};
use shared_types::CardId;
use tokio::task::JoinHandle;
use tracing::info;

use crate::adapters::{
    LedgerSink, RegistryDirectory, ScannerSource, SystemClock, TracingIndicator,
};
use crate::client::CommandClient;
use crate::config::GateConfig;

type NodeClient = CommandClient<ScannerSource<FileLedger>, SystemClock, FileIdentityStore>;

/// A running gate node.
pub struct GateNode {
    feed: TapFeed,
    client: NodeClient,
    dispatcher: JoinHandle<()>,
    offer_timeout: Duration,
}

impl GateNode {
    /// Builds the adapters and spawns the dispatcher task.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(config: &GateConfig) -> std::io::Result<Self> {
        std::fs::create_dir_all(&config.storage.data_dir)?;

        let identity_store = FileIdentityStore::new(
            config.storage.visitors_file(),
            config.storage.custodians_file(),
        );
        let ledger = FileLedger::new(config.storage.ledger_file());

        let service = PairingService::new(
            RegistryDirectory::new(Registry::new(identity_store.clone())),
            LedgerSink::new(LedgerWriter::new(ledger.clone())),
            SystemClock,
            TracingIndicator,
        );

        let (feed, taps) = tap_queue_with_capacity(config.queue.capacity);
        let (control_tx, control_rx) = control_channel();

        let dispatcher = Dispatcher::new(
            service,
            Registry::new(identity_store.clone()),
            TracingIndicator,
            taps,
            control_rx,
            feed.drop_counter(),
        );
        let dispatcher = tokio::spawn(dispatcher.run());

        let engine = AnalyticsEngine::with_cutoff(
            ScannerSource::new(LedgerScanner::new(ledger)),
            SystemClock,
            config.analytics.late_cutoff.clone(),
        );
        let client = CommandClient::new(control_tx, engine, Registry::new(identity_store));

        info!(data_dir = %config.storage.data_dir.display(), "gate node started");
        Ok(Self {
            feed,
            client,
            dispatcher,
            offer_timeout: Duration::from_millis(config.queue.offer_timeout_ms),
        })
    }

    /// Offers one tap from the poll loop, waiting at most the configured
    /// timeout for a queue slot.
    pub async fn offer_tap(&self, id: CardId) -> OfferOutcome {
        self.feed.offer_timeout(id, self.offer_timeout).await
    }

    pub fn tap_feed(&self) -> &TapFeed {
        &self.feed
    }

    pub fn client(&self) -> &NodeClient {
        &self.client
    }

    /// Closes the node's channels and waits for the dispatcher to drain.
    pub async fn shutdown(self) {
        let Self {
            feed,
            client,
            dispatcher,
            ..
        } = self;
        drop(feed);
        drop(client);
        let _ = dispatcher.await;
        info!("gate node stopped");
    }
}
