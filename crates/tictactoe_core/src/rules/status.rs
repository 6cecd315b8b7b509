//! Round status evaluation: win, draw or still in play.

use super::super::{Board, RoundStatus};
use super::{check_winner, is_full};
use tracing::instrument;

/// Evaluates a board to exactly one [`RoundStatus`].
///
/// A winning line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundStatus {
    if let Some(winner) = check_winner(board) {
        RoundStatus::Won(winner)
    } else if is_full(board) {
        RoundStatus::Draw
    } else {
        RoundStatus::Active
    }
}
