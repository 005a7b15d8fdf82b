//! Core game logic: the 7x5 grid, move parsing and legality, the veto
//! capability rule, line scanning and the game state machine.

mod action;
mod board;
mod player;
mod rules;
pub mod scanner;
mod state;

pub use action::{legal_moves, Action, LegalMoves, Move};
pub use board::{Board, Cell, DropError, COLS, ROWS};
pub use player::{Marker, MarkerPool, MARKER_LETTERS};
pub use rules::can_veto;
pub use scanner::{longest_run, WIN_LENGTH};
pub use state::{GameOutcome, GameState, MoveHistory, VetoState};
