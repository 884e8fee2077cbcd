//! Implementation of the chess rules: board geometry, piece movement, check
//! detection and the game that ties them together.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod core;
pub mod game;
pub mod movegen;
pub mod rules;
