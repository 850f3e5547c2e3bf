//! # Drop Four
//!
//! Two-player Connect Four for the terminal. The board size is chosen when a
//! round starts (classic 6x7 up to 6x21); pieces drop to the lowest free row
//! of their column, and the first four-in-a-row wins, along any of the three
//! axes.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity placement, win detection, session state machine
//! - [`ui`] — Terminal UI: board-size menu and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
