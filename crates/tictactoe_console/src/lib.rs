//! Two-player console tic-tac-toe.
//!
//! Wires the pure game logic from `tictactoe_core` to a line-based console:
//! rendering, prompting and a session loop that keeps score across rounds.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{Session, SessionConfig, SessionEnd};
//!
//! let script = "1\n4\n2\n5\n3\nn\n";
//! let mut session = Session::new(Cursor::new(script), Vec::new(), SessionConfig::plain());
//!
//! assert_eq!(session.run().unwrap(), SessionEnd::Declined);
//! assert_eq!(*session.score().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod render;
mod session;

pub use config::SessionConfig;
pub use session::{Session, SessionEnd, SessionError};
