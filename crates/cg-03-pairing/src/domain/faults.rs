//! Pairing fault taxonomy.

use super::machine::Role;

/// Why a tap terminated the current transaction.
///
/// Every fault is terminal: the session returns to `AwaitingFirst` and
/// tap processing stays suspended until the next explicit arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingFault {
    /// The identifier belongs to neither membership set.
    NotRegistered,
    /// Configuration error: the identifier is present in both membership
    /// sets. Rejected at any phase, distinct from `NotRegistered`.
    CrossRegistered,
    /// Registered, but not in the role this phase requires.
    WrongRole { required: Role },
    /// The same identifier was used for both taps of one transaction.
    SelfPair,
}

impl std::fmt::Display for PairingFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "identifier is not registered"),
            Self::CrossRegistered => {
                write!(f, "identifier is present in both membership sets")
            }
            Self::WrongRole { required } => {
                write!(f, "wrong role for this phase (expected {required})")
            }
            Self::SelfPair => write!(f, "same identifier used for both taps"),
        }
    }
}

impl std::error::Error for PairingFault {}
