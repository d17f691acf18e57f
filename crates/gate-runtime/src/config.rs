//! Node configuration.
//!
//! Plain structs with defaults, overridable through `CUSTODIA_*`
//! environment variables. Registry and ledger file names match the
//! layout of existing installations so old data keeps working.

use std::path::PathBuf;

use cg_04_analytics::DEFAULT_LATE_CUTOFF;
use cg_05_dispatch::queue::TAP_QUEUE_CAPACITY;
use shared_types::codec::is_valid_time;
use tracing::warn;

/// Complete gate node configuration.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub storage: StorageConfig,
    pub queue: QueueConfig,
    pub analytics: AnalyticsConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            queue: QueueConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl GateConfig {
    /// Defaults overridden by `CUSTODIA_*` environment variables.
    ///
    /// Unparseable values are logged and ignored rather than fatal.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("CUSTODIA_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("CUSTODIA_QUEUE_CAPACITY") {
            match raw.parse::<usize>() {
                Ok(capacity) => config.queue.capacity = capacity,
                Err(_) => warn!(%raw, "ignoring invalid CUSTODIA_QUEUE_CAPACITY"),
            }
        }
        if let Ok(raw) = std::env::var("CUSTODIA_OFFER_TIMEOUT_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.queue.offer_timeout_ms = ms,
                Err(_) => warn!(%raw, "ignoring invalid CUSTODIA_OFFER_TIMEOUT_MS"),
            }
        }
        if let Ok(cutoff) = std::env::var("CUSTODIA_LATE_CUTOFF") {
            config.analytics.late_cutoff = cutoff;
        }

        config
    }

    /// Validates the configuration before the node starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if !is_valid_time(&self.analytics.late_cutoff) {
            return Err(ConfigError::InvalidLateCutoff {
                value: self.analytics.late_cutoff.clone(),
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroQueueCapacity,
    /// Late cutoff must be a fixed-width `HH:MM:SS` time.
    InvalidLateCutoff { value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroQueueCapacity => write!(f, "tap queue capacity must be at least 1"),
            Self::InvalidLateCutoff { value } => {
                write!(f, "late cutoff {value:?} is not an HH:MM:SS time")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Storage locations.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the registry files and the movement ledger.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl StorageConfig {
    pub fn visitors_file(&self) -> PathBuf {
        self.data_dir.join("usuarios.txt")
    }

    pub fn custodians_file(&self) -> PathBuf {
        self.data_dir.join("funcionarios.txt")
    }

    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir.join("movimentos.txt")
    }
}

/// Tap queue behavior.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    pub capacity: usize,
    /// How long the producer waits for a free slot before dropping.
    pub offer_timeout_ms: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: TAP_QUEUE_CAPACITY,
            offer_timeout_ms: 50,
        }
    }
}

/// Analytics parameters.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// First Entry strictly after this time counts as late.
    pub late_cutoff: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            late_cutoff: DEFAULT_LATE_CUTOFF.to_string(),
        }
    }
}
