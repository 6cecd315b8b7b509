//! Mark balance: X moves first, so X has as many marks as O or one more.

use super::super::{Player, Round};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Round> for MarkBalanceInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
