//! Contract-based validation for placements.
//!
//! Contracts formalize the Hoare-style reasoning `{P} place {Q}`:
//! preconditions decide whether a placement is accepted at all,
//! postconditions confirm the engine left a consistent state behind.

use super::action::RejectReason;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{GameState, GameStatus, Position, Square};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Value produced by a satisfied precondition.
    type Accepted;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Accepted, RejectReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not ended.
pub struct GameRunning;

impl GameRunning {
    /// Rejects with `GameOver` once the status is terminal.
    pub fn check(state: &GameState) -> Result<(), RejectReason> {
        match state.status() {
            GameStatus::InProgress => Ok(()),
            status => Err(RejectReason::GameOver(status)),
        }
    }
}

/// Precondition: the index names a board cell.
pub struct InRange;

impl InRange {
    /// Converts the index, rejecting anything outside 0-8.
    pub fn check(index: usize) -> Result<Position, RejectReason> {
        Position::from_index(index).ok_or(RejectReason::OutOfRange(index))
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with `Occupied` if the square already holds a mark.
    pub fn check(state: &GameState, pos: Position) -> Result<(), RejectReason> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(RejectReason::Occupied(pos))
        }
    }
}

/// Contract for `place(index)`.
///
/// Preconditions, in order:
/// - game is still running
/// - index is on the board
/// - square is empty
///
/// Postconditions:
/// - exactly one previously empty square changed, the rest are untouched
/// - all game invariants hold
pub struct PlaceContract;

impl Contract<GameState, usize> for PlaceContract {
    type Accepted = Position;

    #[instrument(skip(state))]
    fn pre(state: &GameState, index: &usize) -> Result<Position, RejectReason> {
        GameRunning::check(state)?;
        let pos = InRange::check(*index)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<_> = Position::ALL
            .iter()
            .filter(|pos| before.board().get(**pos) != after.board().get(**pos))
            .collect();
        let single_fill = match changed.as_slice() {
            [pos] => before.board().get(**pos) == Square::Empty,
            _ => false,
        };
        if !single_fill || after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "Placement fills exactly one empty square",
            ));
        }

        if let Err(mut found) = GameInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
