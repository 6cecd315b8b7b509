//! Move count: every accepted move placed exactly one mark.

use super::super::Round;
use super::Invariant;

/// Invariant: marks on the board equal moves made, and never exceed nine.
pub struct MoveCountInvariant;

impl Invariant<Round> for MoveCountInvariant {
    fn holds(round: &Round) -> bool {
        round.board().marks() == round.moves() && round.moves() <= 9
    }

    fn description() -> &'static str {
        "Marks placed equal moves made (at most nine)"
    }
}
