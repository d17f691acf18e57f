//! Derived analytics views.
//!
//! These are never persisted: every query recomputes them by replaying the
//! movement ledger against one stable clock reading.

use serde::{Deserialize, Serialize};

use crate::entities::CardId;

/// One visitor whose first entry of the day came after the cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateArrival {
    pub visitor: CardId,
    /// Time of the day's first Entry record, `HH:MM:SS`.
    pub first_entry: String,
}

/// One visitor currently inside, with multiplicity.
///
/// Multiplicity is the day's Entry count minus Exit count, floored at
/// zero; only positive multiplicities appear in a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsideEntry {
    pub visitor: CardId,
    pub multiplicity: u32,
}
