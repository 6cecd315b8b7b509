//! Board invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every move.
//! The round controller checks them in debug builds; tests check them
//! directly.

mod mark_balance;
mod move_count;

pub use mark_balance::MarkBalanceInvariant;
pub use move_count::MoveCountInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (MarkBalanceInvariant, MoveCountInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Round, Score};

    #[test]
    fn test_invariant_set_holds_for_new_round() {
        assert!(RoundInvariants::check_all(&Round::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut round = Round::new();
        let mut score = Score::default();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            round.play(pos, &mut score).unwrap();
        }
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("something broke");
        assert_eq!(violation.to_string(), "Invariant violated: something broke");
    }
}
