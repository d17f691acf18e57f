//! Outbound (driven) ports for the Movement Ledger subsystem.

/// Backend store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStoreError {
    pub message: String,
}

impl LedgerStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LedgerStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ledger store failure: {}", self.message)
    }
}

impl std::error::Error for LedgerStoreError {}

/// Lazy sequence of ledger lines in write order.
pub type LineStream<'a> = Box<dyn Iterator<Item = String> + Send + 'a>;

/// Durable append-only line storage.
pub trait LedgerStore: Send + Sync {
    /// Appends one line; must not return `Ok` before the line is durable.
    fn append_line(&self, line: &str) -> Result<(), LedgerStoreError>;

    /// Streams stored lines in write order.
    fn scan_lines(&self) -> Result<LineStream<'_>, LedgerStoreError>;
}
