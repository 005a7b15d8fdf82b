//! Move sources for each seat: a human typing tokens, or a computer picking
//! any legal move.

mod agent;
mod human;
mod random;

pub use agent::Agent;
pub use human::{HumanAgent, SharedInput};
pub use random::RandomAgent;
