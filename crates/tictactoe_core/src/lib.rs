//! Pure tic-tac-toe game logic.
//!
//! No I/O happens here. The crate provides the board, move validation for
//! raw text input, win/draw evaluation, the round controller and the
//! session score.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{parse_move, MoveInput, Round, RoundStatus, Score};
//!
//! let mut round = Round::new();
//! let mut score = Score::default();
//!
//! for line in ["1", "4", "2", "5", "3"] {
//!     if let Ok(MoveInput::Place(pos)) = parse_move(line, round.board()) {
//!         round.play(pos, &mut score).unwrap();
//!     }
//! }
//!
//! assert_eq!(round.status(), RoundStatus::Won(tictactoe_core::Player::X));
//! assert_eq!(*score.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod input;
mod invariants;
mod position;
mod round;
mod rules;
mod score;
mod types;

pub use input::{InputError, MoveInput, QUIT_TOKENS, parse_continue, parse_move};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, MoveCountInvariant,
    RoundInvariants,
};
pub use position::Position;
pub use round::{MoveError, Round};
pub use rules::{LINES, check_winner, evaluate, is_full, winning_line};
pub use score::Score;
pub use types::{Board, Player, RoundStatus, Square};
