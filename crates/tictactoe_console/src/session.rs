//! Session loop: repeated rounds over a line-based console.
//!
//! The session is generic over its input and output so the binary can wire
//! it to stdin/stdout while tests drive it from an in-memory script.

use crate::config::SessionConfig;
use crate::render;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictactoe_core::{MoveInput, Round, Score, parse_continue, parse_move, winning_line};
use tracing::{debug, info, instrument, warn};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player typed a quit token during a round.
    Quit,
    /// The players answered no to playing again.
    Declined,
    /// Input reached end-of-file.
    InputClosed,
}

/// Failure to talk to the console.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
}

enum RoundEnd {
    Finished,
    Left(SessionEnd),
}

/// A console session: owns the score across rounds.
#[derive(Debug, derive_new::new)]
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    #[new(default)]
    score: Score,
    #[new(default)]
    rounds_started: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Cumulative score so far.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays rounds until the players quit, decline to continue, or input
    /// runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        info!("Session started");
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(self.output, "Type 'quit' at any time to exit the game.")?;

        let end = loop {
            if let RoundEnd::Left(end) = self.play_round()? {
                writeln!(self.output, "\nThanks for playing!")?;
                break end;
            }

            match self.ask_continue()? {
                Some(true) => continue,
                Some(false) => {
                    writeln!(self.output, "\nThanks for playing! Goodbye!")?;
                    break SessionEnd::Declined;
                }
                None => {
                    writeln!(self.output, "\nThanks for playing!")?;
                    break SessionEnd::InputClosed;
                }
            }
        };

        self.output.flush()?;
        info!(
            ?end,
            score = %serde_json::to_string(&self.score).unwrap_or_default(),
            "Session finished"
        );
        Ok(end)
    }

    /// Plays one round from an empty board. Leaving mid-round records
    /// nothing.
    fn play_round(&mut self) -> Result<RoundEnd, SessionError> {
        self.rounds_started += 1;
        info!(round = self.rounds_started, "Round started");

        let mut round = Round::new();
        self.draw(&round, true)?;

        while !round.status().is_terminal() {
            let Some(line) = self.prompt(&render::move_prompt(round.current_player()))? else {
                return Ok(RoundEnd::Left(SessionEnd::InputClosed));
            };

            let pos = match parse_move(&line, round.board()) {
                Ok(MoveInput::Place(pos)) => pos,
                Ok(MoveInput::Quit) => {
                    info!(round = self.rounds_started, "Round abandoned");
                    return Ok(RoundEnd::Left(SessionEnd::Quit));
                }
                Err(e) => {
                    debug!(input = %line.trim(), error = %e, "Rejected move input");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if let Err(e) = round.play(pos, &mut self.score) {
                // The validator already filtered occupied squares.
                warn!(error = %e, "Move refused by round");
                writeln!(self.output, "{e}")?;
                continue;
            }
            self.draw(&round, false)?;
        }

        info!(round = self.rounds_started, status = %round.status(), "Round finished");
        let line = winning_line(round.board()).map(|(_, line)| line);
        writeln!(self.output, "{}", render::outcome(round.status(), line))?;
        writeln!(self.output, "{}", render::final_scores(&self.score))?;
        Ok(RoundEnd::Finished)
    }

    /// Asks whether to play again until the answer is yes or no. `None`
    /// means input ended.
    fn ask_continue(&mut self) -> Result<Option<bool>, SessionError> {
        loop {
            let Some(line) = self.prompt(render::continue_prompt())? else {
                return Ok(None);
            };
            match parse_continue(&line) {
                Ok(answer) => return Ok(Some(answer)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn draw(&mut self, round: &Round, with_instructions: bool) -> Result<(), SessionError> {
        if *self.config.clear_screen() {
            render::clear(&mut self.output)?;
        }
        write!(self.output, "{}", render::header(&self.score))?;
        writeln!(self.output)?;
        write!(self.output, "{}", render::board(round.board()))?;
        writeln!(self.output)?;
        if with_instructions && *self.config.show_instructions() {
            write!(self.output, "{}", render::instructions())?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Writes `text` and reads one line. `None` on end-of-file.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
