//! # Core Domain Entities
//!
//! Defines the entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `CardId`, `RoleSet`, `RoleProfile`
//! - **Movement**: `Movement`, `MovementRecord`, `Stamp`
//! - **Calendar**: `Weekday`, `ClockReading`

use serde::{Deserialize, Serialize};

use crate::errors::InvalidCardId;

/// Sentinel written into a [`Stamp`] when the wall clock is unavailable.
///
/// The token is letters-only, so it can never collide with the `-`
/// delimiter of the ledger line format. A record stamped with it fails to
/// parse on later scans and is therefore invisible to analytics.
pub const UNAVAILABLE_STAMP: &str = "indisponivel";

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A normalized card identifier read from an RFID tag.
///
/// Always lowercase hexadecimal; the sole key for registry and ledger
/// lookups. The hex-only alphabet guarantees the identifier can never
/// contain the `-` delimiter of the ledger line format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Normalizes and validates a raw identifier string.
    ///
    /// Normalization is trim + ASCII lowercase; validation requires a
    /// non-empty string of hex digits.
    pub fn parse(raw: &str) -> Result<Self, InvalidCardId> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(InvalidCardId::Empty);
        }
        if let Some(offender) = normalized.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(InvalidCardId::NonHexCharacter(offender));
        }
        Ok(Self(normalized))
    }

    /// Builds an identifier from the raw tag bytes reported by the reader.
    pub fn from_tag_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The normalized identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two disjoint membership sets of the identity registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSet {
    /// Visitors require an accompanying custodian to pass the gate.
    Visitors,
    /// Custodians are authorized to accompany a visitor through the gate.
    Custodians,
}

impl std::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitors => f.write_str("visitors"),
            Self::Custodians => f.write_str("custodians"),
        }
    }
}

/// Membership of one identifier across both sets.
///
/// Simultaneous membership is a configuration error detected by the
/// pairing machine, never silently resolved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleProfile {
    pub is_visitor: bool,
    pub is_custodian: bool,
}

impl RoleProfile {
    pub fn cross_registered(&self) -> bool {
        self.is_visitor && self.is_custodian
    }

    pub fn unregistered(&self) -> bool {
        !self.is_visitor && !self.is_custodian
    }

    pub fn visitor_only(&self) -> bool {
        self.is_visitor && !self.is_custodian
    }

    pub fn custodian_only(&self) -> bool {
        self.is_custodian && !self.is_visitor
    }
}

// =============================================================================
// CLUSTER B: MOVEMENT
// =============================================================================

/// Direction of an authorized passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Entry,
    Exit,
}

/// Wall-clock date and time carried by a movement record.
///
/// `date` is `DD/MM/YYYY`, `time` is `HH:MM:SS`; both fixed-width and
/// zero-padded, so lexicographic comparison of two times of the same day
/// matches chronological order. Either field may instead hold the
/// [`UNAVAILABLE_STAMP`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub date: String,
    pub time: String,
}

impl Stamp {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// The fallback stamp used when the clock provider fails.
    pub fn unavailable() -> Self {
        Self {
            date: UNAVAILABLE_STAMP.to_string(),
            time: UNAVAILABLE_STAMP.to_string(),
        }
    }
}

/// One authorized passage, immutable once appended to the ledger.
///
/// Append order defines chronological order; records are never reordered
/// or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub custodian: CardId,
    pub visitor: CardId,
    pub movement: Movement,
    pub stamp: Stamp,
}

// =============================================================================
// CLUSTER C: CALENDAR
// =============================================================================

/// Day of week with the Portuguese display names used by the reports,
/// matching the ledger's Portuguese wire vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monday => "segunda-feira",
            Self::Tuesday => "terça-feira",
            Self::Wednesday => "quarta-feira",
            Self::Thursday => "quinta-feira",
            Self::Friday => "sexta-feira",
            Self::Saturday => "sábado",
            Self::Sunday => "domingo",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One reading of the wall clock, stable for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub stamp: Stamp,
    /// `None` when the reading is the unavailable-clock fallback.
    pub weekday: Option<Weekday>,
}

impl ClockReading {
    pub fn new(stamp: Stamp, weekday: Weekday) -> Self {
        Self {
            stamp,
            weekday: Some(weekday),
        }
    }

    /// The sentinel reading used when the clock provider fails.
    pub fn unavailable() -> Self {
        Self {
            stamp: Stamp::unavailable(),
            weekday: None,
        }
    }
}
