//! The pairing state machine.
//!
//! Pure domain: no I/O, no clock. The machine consumes a tap together
//! with the tapper's resolved role profile and returns a [`Transition`];
//! the service layer performs the resulting effects.

use shared_types::{CardId, Movement, RoleProfile};

use super::faults::PairingFault;

/// Direction a session authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageMode {
    Entry,
    Exit,
}

impl PassageMode {
    /// Role required from the first tap: the accompanied party.
    ///
    /// Entry starts with the visitor arriving at the gate; Exit starts
    /// with the custodian releasing them.
    pub fn first_role(&self) -> Role {
        match self {
            Self::Entry => Role::Visitor,
            Self::Exit => Role::Custodian,
        }
    }

    /// Role required from the second, completing tap.
    pub fn second_role(&self) -> Role {
        match self {
            Self::Entry => Role::Custodian,
            Self::Exit => Role::Visitor,
        }
    }

    pub fn movement(&self) -> Movement {
        match self {
            Self::Entry => Movement::Entry,
            Self::Exit => Movement::Exit,
        }
    }
}

impl std::fmt::Display for PassageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Membership role a phase requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Visitor,
    Custodian,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitor => f.write_str("visitor"),
            Self::Custodian => f.write_str("custodian"),
        }
    }
}

/// Session state, one explicit tagged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingState {
    /// No mode armed; taps are ignored.
    Idle,
    /// Armed, waiting for the transaction's first tap.
    AwaitingFirst { mode: PassageMode },
    /// First tap accepted, waiting for the completing tap.
    AwaitingSecond { mode: PassageMode, pending: CardId },
}

impl PairingState {
    /// Short label for status reporting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingFirst { mode: PassageMode::Entry } => "entry/awaiting-first",
            Self::AwaitingFirst { mode: PassageMode::Exit } => "exit/awaiting-first",
            Self::AwaitingSecond { mode: PassageMode::Entry, .. } => {
                "entry/awaiting-second"
            }
            Self::AwaitingSecond { mode: PassageMode::Exit, .. } => {
                "exit/awaiting-second"
            }
        }
    }
}

/// Result of feeding one tap to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Reads are suspended or no mode is armed; the tap had no effect.
    Ignored,
    /// First tap accepted; the session now awaits the completing tap.
    Pending { mode: PassageMode },
    /// Transaction completed; the caller must persist exactly one record.
    Authorized {
        custodian: CardId,
        visitor: CardId,
        movement: Movement,
    },
    /// Transaction failed terminally.
    Rejected { fault: PairingFault },
}

/// The per-session pairing machine.
///
/// Terminal outcomes (success and failure alike) return the phase to
/// `AwaitingFirst` but suspend tap processing; only [`PairingMachine::arm`]
/// re-enables reads, and arming always clears any pending identifier.
#[derive(Debug)]
pub struct PairingMachine {
    state: PairingState,
    reads_enabled: bool,
}

impl Default for PairingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingMachine {
    pub fn new() -> Self {
        Self {
            state: PairingState::Idle,
            reads_enabled: false,
        }
    }

    pub fn state(&self) -> &PairingState {
        &self.state
    }

    pub fn reads_enabled(&self) -> bool {
        self.reads_enabled
    }

    /// True when the next tap would be processed rather than ignored.
    pub fn accepts_taps(&self) -> bool {
        self.reads_enabled && !matches!(self.state, PairingState::Idle)
    }

    /// Arms a mode: enters `AwaitingFirst`, enables reads, clears pending.
    pub fn arm(&mut self, mode: PassageMode) {
        self.state = PairingState::AwaitingFirst { mode };
        self.reads_enabled = true;
    }

    /// Fully clears the session back to `Idle`.
    pub fn disarm(&mut self) {
        self.state = PairingState::Idle;
        self.reads_enabled = false;
    }

    /// Terminates the in-flight transaction without an outcome, used when
    /// an external failure (e.g. a registry read error) makes the tap
    /// undecidable. Same terminal discipline as a fault: phase back to
    /// `AwaitingFirst`, reads suspended.
    pub fn abort_transaction(&mut self) {
        match &self.state {
            PairingState::Idle => {}
            PairingState::AwaitingFirst { mode }
            | PairingState::AwaitingSecond { mode, .. } => {
                let mode = *mode;
                self.terminal(mode);
            }
        }
    }

    /// Feeds one tap with its resolved role profile.
    pub fn on_tap(&mut self, id: &CardId, roles: RoleProfile) -> Transition {
        if !self.reads_enabled {
            return Transition::Ignored;
        }
        match std::mem::replace(&mut self.state, PairingState::Idle) {
            PairingState::Idle => Transition::Ignored,
            PairingState::AwaitingFirst { mode } => {
                if let Err(fault) = Self::admit(id, roles, mode.first_role(), None) {
                    self.terminal(mode);
                    return Transition::Rejected { fault };
                }
                self.state = PairingState::AwaitingSecond {
                    mode,
                    pending: id.clone(),
                };
                Transition::Pending { mode }
            }
            PairingState::AwaitingSecond { mode, pending } => {
                if let Err(fault) =
                    Self::admit(id, roles, mode.second_role(), Some(&pending))
                {
                    self.terminal(mode);
                    return Transition::Rejected { fault };
                }
                let (custodian, visitor) = match mode {
                    PassageMode::Entry => (id.clone(), pending),
                    PassageMode::Exit => (pending, id.clone()),
                };
                self.terminal(mode);
                Transition::Authorized {
                    custodian,
                    visitor,
                    movement: mode.movement(),
                }
            }
        }
    }

    fn terminal(&mut self, mode: PassageMode) {
        self.state = PairingState::AwaitingFirst { mode };
        self.reads_enabled = false;
    }

    /// Fault precedence: CrossRegistered, then SelfPair, then
    /// NotRegistered, then WrongRole.
    fn admit(
        id: &CardId,
        roles: RoleProfile,
        required: Role,
        pending: Option<&CardId>,
    ) -> Result<(), PairingFault> {
        if roles.cross_registered() {
            return Err(PairingFault::CrossRegistered);
        }
        if pending == Some(id) {
            return Err(PairingFault::SelfPair);
        }
        if roles.unregistered() {
            return Err(PairingFault::NotRegistered);
        }
        let matches_role = match required {
            Role::Visitor => roles.is_visitor,
            Role::Custodian => roles.is_custodian,
        };
        if !matches_role {
            return Err(PairingFault::WrongRole { required });
        }
        Ok(())
    }
}
