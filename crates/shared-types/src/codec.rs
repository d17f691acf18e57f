//! # Movement Ledger Line Codec
//!
//! Textual parse/format rules for one ledger record. The shape is a
//! compatibility contract with existing logs and is bit-exact:
//!
//! ```text
//! -{custodianId}- {recebeu|liberou} -{visitorId}- às -{HH:MM:SS}- do dia -{DD/MM/AAAA}-
//! ```
//!
//! `recebeu` encodes Entry, `liberou` encodes Exit. The `-` delimiter is
//! guaranteed not to collide with field content: identifiers are hex-only,
//! times use `:`, dates use `/`, and the unavailable-clock sentinel is
//! letters-only. Splitting on `-` therefore recovers the fields exactly.

use crate::entities::{CardId, Movement, MovementRecord, Stamp};

const ENTRY_VERB: &str = "recebeu";
const EXIT_VERB: &str = "liberou";

/// Why a ledger line failed to parse.
///
/// Malformed lines are skipped during scans and surfaced only as a
/// data-quality warning; they never abort a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLine {
    /// The line does not have the nine `-`-delimited segments.
    WrongShape,
    /// The movement verb is neither `recebeu` nor `liberou`.
    UnknownVerb,
    /// The fixed filler text around the fields does not match.
    BadFiller,
    /// An identifier field is not lowercase hex.
    BadIdentifier,
    /// The time field is not `HH:MM:SS`.
    BadTime,
    /// The date field is not `DD/MM/YYYY`.
    BadDate,
}

impl std::fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::WrongShape => "wrong segment shape",
            Self::UnknownVerb => "unknown movement verb",
            Self::BadFiller => "unexpected filler text",
            Self::BadIdentifier => "invalid identifier field",
            Self::BadTime => "invalid time field",
            Self::BadDate => "invalid date field",
        };
        write!(f, "malformed ledger line: {reason}")
    }
}

impl std::error::Error for MalformedLine {}

/// Formats one record into its canonical ledger line (without newline).
pub fn format_line(record: &MovementRecord) -> String {
    let verb = match record.movement {
        Movement::Entry => ENTRY_VERB,
        Movement::Exit => EXIT_VERB,
    };
    format!(
        "-{}- {} -{}- às -{}- do dia -{}-",
        record.custodian, verb, record.visitor, record.stamp.time, record.stamp.date
    )
}

/// Parses one ledger line into a record.
pub fn parse_line(line: &str) -> Result<MovementRecord, MalformedLine> {
    let parts: Vec<&str> = line.trim().split('-').collect();
    if parts.len() != 9 || !parts[0].is_empty() || !parts[8].is_empty() {
        return Err(MalformedLine::WrongShape);
    }

    let movement = match parts[2] {
        " recebeu " => Movement::Entry,
        " liberou " => Movement::Exit,
        _ => return Err(MalformedLine::UnknownVerb),
    };
    if parts[4] != " às " || parts[6] != " do dia " {
        return Err(MalformedLine::BadFiller);
    }

    let custodian = parse_identifier(parts[1])?;
    let visitor = parse_identifier(parts[3])?;
    let time = parts[5];
    let date = parts[7];
    if !is_valid_time(time) {
        return Err(MalformedLine::BadTime);
    }
    if !is_valid_date(date) {
        return Err(MalformedLine::BadDate);
    }

    Ok(MovementRecord {
        custodian,
        visitor,
        movement,
        stamp: Stamp::new(date, time),
    })
}

fn parse_identifier(field: &str) -> Result<CardId, MalformedLine> {
    // No re-normalization on the read path: an uppercase or padded field
    // was not written by this codec.
    let id = CardId::parse(field).map_err(|_| MalformedLine::BadIdentifier)?;
    if id.as_str() != field {
        return Err(MalformedLine::BadIdentifier);
    }
    Ok(id)
}

/// `HH:MM:SS`, fixed width, zero padded.
pub fn is_valid_time(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| b[i].is_ascii_digit())
}

/// `DD/MM/YYYY`, fixed width, zero padded.
pub fn is_valid_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && [0, 1, 3, 4, 6, 7, 8, 9].iter().all(|&i| b[i].is_ascii_digit())
}
