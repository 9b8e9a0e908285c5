//! Status consistency invariant: the recorded status matches the board.

use super::super::rules::{check_winner, is_full};
use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: status agrees with the rules applied to the board.
///
/// - `Won(p)` requires a line owned by `p`, and `p` is the player who
///   moved last (the turn does not flip on a winning move).
/// - `Draw` requires a full board with no line.
/// - `InProgress` requires neither, and the player to move is X exactly
///   when both sides have the same number of marks.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let status = state.status();
        if check_winner(board) != status.winner() {
            return false;
        }

        let x_to_move = board.count(Player::X) == board.count(Player::O);
        match status {
            GameStatus::Won(player) => state.current_player() == player,
            GameStatus::Draw => is_full(board),
            GameStatus::InProgress => {
                !is_full(board) && (state.current_player() == Player::X) == x_to_move
            }
        }
    }

    fn description() -> &'static str {
        "Status and turn agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Position, Square};

    #[test]
    fn test_holds_through_a_won_game() {
        let mut game = Game::new();
        for index in [0, 4, 1, 5, 2] {
            game.place(index);
            assert!(StatusConsistentInvariant::holds(game.state()));
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [Position::Center, Position::BottomLeft] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let state = GameState::from_parts(board, Player::O, GameStatus::InProgress, Vec::new());
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_win_credited_to_wrong_player_violates() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [Position::Center, Position::BottomLeft] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let state = GameState::from_parts(board, Player::O, GameStatus::Won(Player::O), Vec::new());
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let state = GameState::from_parts(
            Board::new(),
            Player::O,
            GameStatus::InProgress,
            Vec::new(),
        );
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
