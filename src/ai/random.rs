use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use super::agent::Agent;
use crate::error::AgentError;
use crate::game::{GameState, Marker};

/// A computer player that picks uniformly among its legal moves, vetoes
/// included.
pub struct RandomAgent {
    marker: Marker,
    rng: StdRng,
    think_delay: Duration,
}

impl RandomAgent {
    pub fn new(marker: Marker) -> Self {
        RandomAgent {
            marker,
            rng: StdRng::from_os_rng(),
            think_delay: Duration::ZERO,
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn with_seed(marker: Marker, seed: u64) -> Self {
        RandomAgent {
            marker,
            rng: StdRng::seed_from_u64(seed),
            think_delay: Duration::ZERO,
        }
    }

    /// Pause before each move so a watching human can follow along.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

impl Agent for RandomAgent {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn name(&self) -> &str {
        "Computer"
    }

    fn prompt(&self) -> String {
        format!("Computer ({}) is thinking...\n", self.marker.symbol())
    }

    fn generate_move(&mut self, state: &GameState) -> Result<String, AgentError> {
        if !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }

        let moves = state.legal_moves(self.marker);
        if moves.is_empty() {
            return Err(AgentError::NoLegalMove(self.marker));
        }
        let idx = self.rng.random_range(0..moves.len());
        let mv = moves
            .iter()
            .nth(idx)
            .ok_or(AgentError::NoLegalMove(self.marker))?;

        debug!(marker = %self.marker.symbol(), token = %mv, "computer picked move");
        Ok(mv.to_string())
    }
}
