//! Round controller: turn order, move application and scoring.

use super::invariants::{InvariantSet, RoundInvariants};
use super::rules;
use super::{Board, Player, Position, RoundStatus, Score, Square};
use derive_more::{Display, Error};
use tracing::{debug, error, info, instrument};

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The round has already been won or drawn.
    #[display("Round is already over")]
    RoundOver,
}

/// One round of play, from an empty board to a win or draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    current: Player,
    status: RoundStatus,
    moves: usize,
}

impl Round {
    /// Starts a round on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: RoundStatus::Active,
            moves: 0,
        }
    }

    /// Builds a round around an arbitrary board, deriving the rest of the
    /// state from its marks.
    #[cfg(test)]
    pub(crate) fn from_board(board: Board) -> Self {
        let moves = board.marks();
        let current = if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        };
        let status = rules::evaluate(&board);
        Self {
            board,
            current,
            status,
            moves,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of moves applied so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On a win the winner's count in `score` goes up by one; a draw is
    /// tallied as a draw; otherwise the turn passes to the opponent. Nothing
    /// changes when an error is returned.
    #[instrument(skip(self, score), fields(player = %self.current))]
    pub fn play(&mut self, pos: Position, score: &mut Score) -> Result<RoundStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::RoundOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current;
        self.board.set(pos, Square::Occupied(player));
        self.moves += 1;
        debug!(%pos, moves = self.moves, "Move applied");

        self.status = rules::evaluate(&self.board);
        if self.status.is_terminal() {
            info!(
                status = %self.status,
                moves = self.moves,
                board = %self.board,
                "Round over"
            );
            score.record(self.status);
        } else {
            self.current = player.opponent();
        }

        if cfg!(debug_assertions)
            && let Err(violations) = RoundInvariants::check_all(self)
        {
            for violation in &violations {
                error!(%violation, "Round invariant failed");
            }
            debug_assert!(violations.is_empty(), "round invariants violated");
        }

        Ok(self.status)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
