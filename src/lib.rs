//! # Connect Four
//!
//! A two-player Connect Four engine. The core tracks a 6×7 drop board and
//! each player's placed pieces, and decides after every move whether it
//! completed a run of four. Front ends only pick columns and draw the board.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, coordinates, piece sets, turn controller
//! - [`ui`] — Terminal UI and plain line-based prompt
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
