//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the round controller and tests can compose them freely.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::evaluate;
pub use win::{LINES, check_winner, winning_line};
