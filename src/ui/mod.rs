//! Terminal UI: a full-screen view of one game with keyboard controls and
//! automatic computer seats.

mod app;
mod game_view;

pub use app::App;
