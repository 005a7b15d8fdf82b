use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;

use super::agent::Agent;
use crate::error::AgentError;
use crate::game::{GameState, Marker};

/// Input shared by every human seat at one terminal.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// A player typing tokens, one per line.
pub struct HumanAgent<R: BufRead> {
    marker: Marker,
    input: SharedInput<R>,
}

impl<R: BufRead> HumanAgent<R> {
    pub fn new(marker: Marker, input: SharedInput<R>) -> Self {
        HumanAgent { marker, input }
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn name(&self) -> &str {
        "Player"
    }

    fn generate_move(&mut self, _state: &GameState) -> Result<String, AgentError> {
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Err(AgentError::InputClosed(self.marker));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_trimmed_token_per_line() {
        let input = Rc::new(RefCell::new(Cursor::new("d4\n  v2 \r\n")));
        let mut agent = HumanAgent::new(Marker::new('A').unwrap(), input);
        let state = GameState::new();

        assert_eq!(agent.generate_move(&state).unwrap(), "d4");
        assert_eq!(agent.generate_move(&state).unwrap(), "v2");
        assert!(matches!(
            agent.generate_move(&state),
            Err(AgentError::InputClosed(_))
        ));
    }

    #[test]
    fn test_seats_share_one_input() {
        let input = Rc::new(RefCell::new(Cursor::new("d1\nd2\n")));
        let mut first = HumanAgent::new(Marker::new('A').unwrap(), Rc::clone(&input));
        let mut second = HumanAgent::new(Marker::new('B').unwrap(), input);
        let state = GameState::new();

        assert_eq!(first.generate_move(&state).unwrap(), "d1");
        assert_eq!(second.generate_move(&state).unwrap(), "d2");
    }

    #[test]
    fn test_human_prompt() {
        let input = Rc::new(RefCell::new(Cursor::new("")));
        let agent = HumanAgent::new(Marker::new('A').unwrap(), input);
        assert_eq!(agent.prompt(), "Player (A) enter a move: ");
    }
}
