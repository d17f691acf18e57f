//! # Custodia Gate Node
//!
//! Binary entry point. Wires the subsystems per the configuration and
//! serves a line-delimited JSON console on stdin/stdout — the
//! development stand-in for the hardware tap feed and the remote command
//! transport, both of which live outside the core:
//!
//! ```text
//! {"kind":"tap","uid":"04A1B2C3"}
//! {"kind":"command","command":{"op":"start_entry_mode"}}
//! {"kind":"command","command":{"op":"get_inside"}}
//! ```
//!
//! Every command line produces one JSON response line on stdout.

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cg_05_dispatch::commands::Command;
use cg_05_dispatch::queue::OfferOutcome;
use gate_runtime::{GateConfig, GateNode};
use shared_types::CardId;

/// One console input line.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ConsoleInput {
    /// A tap as the poll loop would deliver it.
    Tap { uid: String },
    /// A decoded command intent.
    Command { command: Command },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GateConfig::from_env();
    config.validate().context("invalid configuration")?;
    info!(
        data_dir = %config.storage.data_dir.display(),
        queue_capacity = config.queue.capacity,
        late_cutoff = %config.analytics.late_cutoff,
        "starting gate node"
    );

    let node = GateNode::start(&config).context("failed to start gate node")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("console read failed")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ConsoleInput>(line) {
            Ok(ConsoleInput::Tap { uid }) => match CardId::parse(&uid) {
                Ok(id) => {
                    if node.offer_tap(id).await == OfferOutcome::Dropped {
                        warn!("tap not enqueued");
                    }
                }
                Err(err) => warn!(%err, %uid, "unreadable tap"),
            },
            Ok(ConsoleInput::Command { command }) => {
                let response = node.client().execute(command).await;
                println!(
                    "{}",
                    serde_json::to_string(&response).context("response encoding failed")?
                );
            }
            Err(err) => warn!(%err, line, "unreadable console input"),
        }
    }

    node.shutdown().await;
    Ok(())
}
