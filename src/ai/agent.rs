use crate::error::AgentError;
use crate::game::{GameState, Marker};

/// A source of move tokens for one seat. Human and computer players are
/// interchangeable; the game never knows which one produced a token.
pub trait Agent {
    /// The marker this agent plays with.
    fn marker(&self) -> Marker;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Text shown before asking for a move.
    fn prompt(&self) -> String {
        format!("{} ({}) enter a move: ", self.name(), self.marker().symbol())
    }

    /// Produce the next raw move token. The token is not validated here.
    fn generate_move(&mut self, state: &GameState) -> Result<String, AgentError>;
}
