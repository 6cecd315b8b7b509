//! Text rendering for the console game.
//!
//! Everything here returns a `String` so output stays testable; only
//! [`clear`] talks to the terminal.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tictactoe_core::{Board, Player, Position, RoundStatus, Score, Square};

const RULE: &str = "==============================";
const INDENT: &str = "     ";

/// Clears the terminal and homes the cursor.
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Title block with the running score.
pub fn header(score: &Score) -> String {
    format!(
        "\n{RULE}\n         TIC-TAC-TOE\n{RULE}\nPlayer X Score: {} | Player O Score: {} | Draws: {}\n{RULE}\n",
        score.wins(Player::X),
        score.wins(Player::O),
        score.draws()
    )
}

fn grid<F: Fn(Position) -> String>(cell: F) -> String {
    let mut out = String::new();
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        let line: Vec<String> = cells.iter().map(|&pos| cell(pos)).collect();
        out.push_str(INDENT);
        out.push_str(&line.join(" | "));
        out.push('\n');
        if row < 2 {
            out.push_str(INDENT);
            out.push_str("---------\n");
        }
    }
    out
}

/// The board as a 3x3 grid with separators. Empty squares are blank.
pub fn board(board: &Board) -> String {
    grid(|pos| match board.get(pos) {
        Square::Empty => " ".to_string(),
        Square::Occupied(player) => player.to_string(),
    })
}

/// How to play, including the numbered position guide.
pub fn instructions() -> String {
    format!(
        "Game Instructions:\n\
         * Player X goes first\n\
         * Enter a number (1-9) to place your mark\n\
         * Get three in a row to win!\n\
         * Board positions:\n{}",
        grid(|pos| pos.number().to_string())
    )
}

/// Prompt for the current player's move.
pub fn move_prompt(player: Player) -> String {
    format!("Player {player}, enter your move (1-9): ")
}

/// Prompt after a round ends.
pub fn continue_prompt() -> &'static str {
    "\nWould you like to play again? (y/n): "
}

/// Announcement for a finished round. `line` is the winning line, if any.
pub fn outcome(status: RoundStatus, line: Option<[Position; 3]>) -> String {
    match (status, line) {
        (RoundStatus::Won(player), Some([a, b, c])) => format!(
            "\nPlayer {player} wins! (line {}-{}-{})",
            a.number(),
            b.number(),
            c.number()
        ),
        (RoundStatus::Won(player), None) => format!("\nPlayer {player} wins!"),
        (RoundStatus::Draw, _) => "\nIt's a draw!".to_string(),
        (RoundStatus::Active, _) => String::new(),
    }
}

/// Cumulative scores after a round.
pub fn final_scores(score: &Score) -> String {
    format!("\nFinal Scores - {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_grid() {
        let row = format!("{INDENT}  |   |  \n");
        let sep = format!("{INDENT}---------\n");
        let expected = [&row, &sep, &row, &sep, &row].map(String::as_str).concat();
        assert_eq!(board(&Board::new()), expected);
    }

    #[test]
    fn test_marks_rendered() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::X);
        squares[4] = Square::Occupied(Player::O);
        let text = board(&Board::from_squares(squares));
        let first = text.lines().next().unwrap();
        assert_eq!(first, "     X |   |  ");
        assert!(text.lines().nth(2).unwrap().contains("| O |"));
    }

    #[test]
    fn test_instructions_show_numbers() {
        let text = instructions();
        assert!(text.contains("     1 | 2 | 3"));
        assert!(text.contains("     7 | 8 | 9"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome(
                RoundStatus::Won(Player::O),
                Some([Position::TopLeft, Position::Center, Position::BottomRight])
            ),
            "\nPlayer O wins! (line 1-5-9)"
        );
        assert_eq!(outcome(RoundStatus::Draw, None), "\nIt's a draw!");
    }

    #[test]
    fn test_header_reports_scores() {
        let mut score = Score::default();
        score.record_win(Player::O);
        assert!(header(&score).contains("Player X Score: 0 | Player O Score: 1 | Draws: 0"));
    }
}
