//! Validation of raw player input.
//!
//! Input arrives as a line of text. Parsing never mutates anything: a
//! rejected line yields an [`InputError`] whose message is shown to the
//! player before prompting again.

use super::{Board, Position};
use derive_more::{Display, Error};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Tokens that end the session from the move prompt (case-insensitive).
pub const QUIT_TOKENS: [&str; 3] = ["quit", "exit", "q"];

const YES_TOKENS: [&str; 2] = ["y", "yes"];
const NO_TOKENS: [&str; 2] = ["n", "no"];

/// A successfully parsed move-prompt answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Place the current player's mark here.
    Place(Position),
    /// The player asked to leave.
    Quit,
}

/// Rejected input. Every variant is recoverable by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line is not a number.
    #[display("Please enter a valid number.")]
    Malformed,

    /// The number is outside 1-9.
    #[display("Please enter a number between 1 and 9.")]
    OutOfRange(#[error(not(source))] i64),

    /// The square is already marked.
    #[display("That position is already taken! Try again.")]
    Occupied(#[error(not(source))] Position),

    /// A play-again answer that is neither yes nor no.
    #[display("Please enter 'y' or 'n'.")]
    UnrecognizedResponse,
}

fn is_any(input: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| input.eq_ignore_ascii_case(t))
}

/// Parses a move-prompt line against the current board.
///
/// Accepts a quit token or a 1-based position (1-9) naming an empty square.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<MoveInput, InputError> {
    let input = input.trim();
    if is_any(input, &QUIT_TOKENS) {
        return Ok(MoveInput::Quit);
    }

    // Integers too wide for i64 are still integers, just out of range.
    let number = match input.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(InputError::Malformed),
        },
    };
    let pos = Position::from_number(number).ok_or(InputError::OutOfRange(number))?;
    if !board.is_empty(pos) {
        debug!(%pos, "Rejected move onto occupied square");
        return Err(InputError::Occupied(pos));
    }

    Ok(MoveInput::Place(pos))
}

/// Parses a play-again answer: `y`/`yes` is true, `n`/`no` is false.
#[instrument]
pub fn parse_continue(input: &str) -> Result<bool, InputError> {
    let input = input.trim();
    if is_any(input, &YES_TOKENS) {
        Ok(true)
    } else if is_any(input, &NO_TOKENS) {
        Ok(false)
    } else {
        Err(InputError::UnrecognizedResponse)
    }
}
