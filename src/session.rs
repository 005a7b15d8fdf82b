//! Plain-text turn loop: shows the board, asks each seat for a token in
//! turn and re-prompts the same seat until its move is accepted.

use std::io::Write;

use tracing::{info, warn};

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{GameOutcome, GameState};

pub struct Session<W: Write> {
    state: GameState,
    seats: [Box<dyn Agent>; 2],
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(seats: [Box<dyn Agent>; 2], out: W) -> Self {
        Session {
            state: GameState::new(),
            seats,
            out,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the game ends and return the outcome.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        let mut turn = 0;
        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            writeln!(self.out, "{}", self.state.render())?;
            self.play_turn(turn % 2)?;
            turn += 1;
        };

        match outcome {
            GameOutcome::Draw => writeln!(self.out, "The game was a draw.")?,
            GameOutcome::Winner(marker) => writeln!(self.out, "The winner is {marker}!")?,
        }
        writeln!(self.out, "{}", self.state.render())?;
        info!(?outcome, turns = turn, "game finished");

        Ok(outcome)
    }

    fn play_turn(&mut self, seat: usize) -> Result<(), SessionError> {
        let agent = &mut self.seats[seat];
        loop {
            write!(self.out, "{}", agent.prompt())?;
            self.out.flush()?;

            let token = agent.generate_move(&self.state)?;
            match self.state.commit_move(&token, agent.marker()) {
                Ok(_) => return Ok(()),
                Err(err) => {
                    warn!(
                        marker = %agent.marker().symbol(),
                        token = err.token(),
                        %err,
                        "move rejected"
                    );
                    writeln!(self.out, "{err}")?;
                }
            }
        }
    }
}
