//! Core Connect Four game logic: board representation, gravity placement,
//! win detection, and the turn state machine. No I/O happens here; a
//! presentation layer drives a [`GameSession`] between prompts.

mod board;
mod piece;
mod session;
mod win;

pub use board::Board;
pub use piece::Piece;
pub use session::{GameSession, GameStatus, MoveError, Placement};
pub use win::{check_win, WIN_LENGTH};
