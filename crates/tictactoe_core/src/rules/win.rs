//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first line holding three identical marks.
///
/// Returns the owning player together with the line, so callers can
/// highlight it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal_reports_line() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Player::X,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&p| (p, Player::O)).collect();
            let board = board_with(&marks);
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }
}
