//! Session score: wins per player and drawn rounds.

use super::{Player, RoundStatus};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cumulative results for one session.
///
/// Owned by the session and passed into each round by reference. Only
/// terminal outcomes change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds ending with a full board and no line.
    draws: u32,
}

impl Score {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Adds one drawn round.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Records a terminal round status. `Active` is ignored.
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won(player) => self.record_win(player),
            RoundStatus::Draw => self.record_draw(),
            RoundStatus::Active => {}
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player X: {} | Player O: {} | Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_touches_only_winner() {
        let mut score = Score::default();
        score.record_win(Player::O);
        assert_eq!(score.wins(Player::O), 1);
        assert_eq!(score.wins(Player::X), 0);
        assert_eq!(*score.draws(), 0);
    }

    #[test]
    fn test_record_ignores_active() {
        let mut score = Score::default();
        score.record(RoundStatus::Active);
        assert_eq!(score, Score::default());
        score.record(RoundStatus::Draw);
        score.record(RoundStatus::Won(Player::X));
        assert_eq!(score.rounds(), 2);
    }

    #[test]
    fn test_display() {
        let mut score = Score::default();
        score.record_win(Player::X);
        assert_eq!(score.to_string(), "Player X: 1 | Player O: 0 | Draws: 0");
    }
}
