//! Outcome types for placement requests.
//!
//! A placement never raises. It either lands on the board or is
//! turned away with a reason, and in the latter case the game state
//! is untouched.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// Why a placement request was turned away.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum RejectReason {
    /// The index is not a board cell (0-8).
    #[display("Index {_0} is outside the board (0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Position),

    /// The game has already ended.
    #[display("Game is already over ({_0})")]
    GameOver(#[error(not(source))] GameStatus),
}

/// Result of a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed.
    Applied {
        /// Where the mark landed.
        position: Position,
        /// Who placed it.
        player: Player,
        /// Status after the termination check.
        status: GameStatus,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl Placement {
    /// Returns true if the mark was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Placement::Applied { .. })
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            Placement::Rejected(reason) => Some(*reason),
            Placement::Applied { .. } => None,
        }
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<GameStatus, RejectReason> {
        match self {
            Placement::Applied { status, .. } => Ok(status),
            Placement::Rejected(reason) => Err(reason),
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Applied {
                position, player, ..
            } => write!(f, "{} -> {}", player, position.label()),
            Placement::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}
