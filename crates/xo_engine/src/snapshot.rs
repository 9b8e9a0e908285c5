//! Serializable view of a game for presentation layers.

use super::game::Game;
use super::rules::WinningLine;
use super::types::{GameStatus, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to render one frame.
///
/// Taken after every `place` or `reset`; it owns its data and does not
/// borrow the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Squares in row-major order (0-8).
    pub cells: [Square; 9],
    /// Game status.
    pub status: GameStatus,
    /// Player to move (or the winner, once won).
    pub current_player: Player,
    /// Positions played, in order.
    pub history: Vec<Position>,
    /// The completed line, if the game was won.
    pub winning_line: Option<WinningLine>,
    /// Status bar text.
    pub status_line: String,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            cells: *game.board().squares(),
            status: game.status(),
            current_player: game.current_player(),
            history: game.state().history().to_vec(),
            winning_line: game.winning_line(),
            status_line: game.status_line(),
        }
    }
}
