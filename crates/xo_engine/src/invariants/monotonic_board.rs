//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Player, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history with alternating players from X must place
/// each mark on an empty square and reproduce the board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for pos in state.history() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, GameStatus, Position};

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_replayed_game_holds() {
        let game = Game::replay([0, 4, 2, 6]);
        assert!(MonotonicBoardInvariant::holds(game.state()));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let game = Game::replay([4]);
        let mut board = game.board().clone();
        board.set(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(
            board,
            Player::O,
            GameStatus::InProgress,
            game.state().history().to_vec(),
        );
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_history_violates() {
        let game = Game::replay([4, 0]);
        let state = GameState::from_parts(
            game.board().clone(),
            Player::X,
            GameStatus::InProgress,
            vec![Position::Center, Position::Center],
        );
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
