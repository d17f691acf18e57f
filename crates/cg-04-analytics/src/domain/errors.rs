//! Analytics error types.

use crate::ports::SourceError;

/// Analytics error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The ledger source failed to scan.
    Source { message: String },
}

impl From<SourceError> for AnalyticsError {
    fn from(err: SourceError) -> Self {
        Self::Source {
            message: err.message,
        }
    }
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source { message } => write!(f, "ledger source failure: {message}"),
        }
    }
}

impl std::error::Error for AnalyticsError {}
