//! Pure tic-tac-toe game logic.
//!
//! The engine owns one explicit [`GameState`] per [`Game`] and exposes two
//! mutations: [`Game::place`] and [`Game::reset`]. Invalid placements are
//! no-ops, reported as [`Placement::Rejected`] so callers can tell the
//! difference without the engine ever raising.
//!
//! ```
//! use xo_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.place(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Placement, RejectReason};
pub use contracts::{Contract, PlaceContract};
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    MonotonicBoardInvariant, StatusConsistentInvariant,
};
pub use position::Position;
pub use rules::WinningLine;
pub use snapshot::Snapshot;
pub use types::{Board, GameState, GameStatus, Player, Square};
