//! Rules engine for standard chess. It keeps track of the board and the side
//! to move, lists legal moves, detects check and applies moves given in text
//! form (`"e2 e4"`).
//!
//! Castling, en passant, promotion, checkmate and stalemate detection are not
//! supported.
//!
//! ```
//! use chessrules::{Game, Piece, PieceKind, Player, Square};
//!
//! let mut game = Game::new();
//! game.place_pieces([
//!     (Square::D1, Piece::new(Player::White, PieceKind::King)),
//!     (Square::C1, Piece::new(Player::Black, PieceKind::Queen)),
//!     (Square::D2, Piece::new(Player::Black, PieceKind::Bishop)),
//! ]);
//! assert!(game.is_in_check());
//! assert_eq!(game.legal_move_strings(), vec!["d1 e2"]);
//! ```

pub mod chess;

pub use chess::core::{Move, Piece, PieceKind, Player, Square};
pub use chess::game::Game;
pub use chess::rules::{Legality, Rules};
