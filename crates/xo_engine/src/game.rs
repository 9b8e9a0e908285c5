//! The tic-tac-toe game engine.

use super::action::Placement;
use super::contracts::{Contract, PlaceContract};
use super::rules::{self, WinningLine};
use super::snapshot::Snapshot;
use super::types::{Board, GameState, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns exactly one [`GameState`] and is the only way to change it.
/// Independent games are independent `Game` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Builds a game by placing each index in order.
    ///
    /// Rejected placements are skipped, exactly as `place` would.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for index in indices {
            game.place(index);
        }
        game
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Empty positions, or none at all once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status() {
            GameStatus::Won(_) => rules::winning_line(self.board()),
            _ => None,
        }
    }

    /// Status bar text for the current state.
    pub fn status_line(&self) -> String {
        self.state.status_line()
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Accepted only while the game is in progress and the cell is empty.
    /// Anything else is a no-op reported as [`Placement::Rejected`]; the
    /// state is left exactly as it was.
    ///
    /// After a mark lands, lines are checked first, then a full board.
    /// The turn passes to the opponent only if neither ended the game.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place(&mut self, index: usize) -> Placement {
        let position = match PlaceContract::pre(&self.state, &index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Placement rejected");
                return Placement::Rejected(reason);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player();
        self.state.mark(position);

        let status = evaluate(self.state.board(), player);
        match status {
            GameStatus::InProgress => self.state.flip_turn(),
            terminal => {
                self.state.set_status(terminal);
                info!(status = %terminal, moves = self.state.history().len(), "Game over");
            }
        }
        debug!(%position, %status, "Placement applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = PlaceContract::post(&before, &self.state) {
            tracing::error!(?violations, "Placement broke game invariants");
            debug_assert!(violations.is_empty(), "invariant violation: {violations:?}");
        }

        Placement::Applied {
            position,
            player,
            status,
        }
    }

    /// Places the current player's mark at a typed position.
    pub fn place_at(&mut self, position: Position) -> Placement {
        self.place(position.to_index())
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.state.status(), "Game reset");
        self.state = GameState::new();
    }
}

/// Termination evaluation after `mover` placed a mark.
fn evaluate(board: &Board, mover: Player) -> GameStatus {
    if rules::check_winner(board).is_some() {
        GameStatus::Won(mover)
    } else if rules::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
