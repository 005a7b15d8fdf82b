//! # Veto Connect Four
//!
//! Connect Four on a fixed 7x5 grid with one extra action: a player may veto
//! a column, filling its empty cells with a blocking marker until the
//! opponent has moved.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: grid, move parsing, veto lifecycle, win detection
//! - [`ai`]: Move sources: human input and a random computer player
//! - [`session`]: Plain-text turn loop
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
