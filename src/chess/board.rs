//! Square-centric board representation: every square maps to the piece that
//! stands on it, if any. The board is [`Copy`], so "what if" boards used by
//! the check analysis are plain value copies of the real one.

use std::fmt;

use itertools::Itertools;

use crate::chess::core::{
    Move,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
};

/// Snapshot of the pieces on the board. A square holds at most one piece, and
/// empty squares hold nothing.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

// Standard order of the pieces on the backrank from the A file to the H file.
const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the standard starting position with 16 pieces for each
    /// player.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for player in [Player::White, Player::Black] {
            // The first BOARD_WIDTH squares are A1..H1, one for each file.
            for (file, kind) in Square::iter().map(Square::file).zip(BACKRANK) {
                let _ = board.place(
                    Square::new(file, Rank::backrank(player)),
                    Piece::new(player, kind),
                );
                let _ = board.place(
                    Square::new(file, Rank::pawns_starting(player)),
                    Piece::new(player, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Returns the piece standing on the square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Puts the piece on the square and returns the piece that was standing
    /// there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square as usize].replace(piece)
    }

    /// Clears the square and returns the piece that was standing there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Moves the piece from `m.from()` to `m.to()` and returns the captured
    /// piece, if any. The source square must be occupied: moving "nothing"
    /// leaves the board untouched.
    pub fn relocate(&mut self, m: Move) -> Option<Piece> {
        debug_assert!(self.at(m.from()).is_some(), "no piece to move in {m}");
        let piece = self.remove(m.from())?;
        self.place(m.to(), piece)
    }

    /// Returns a copy of the board with the move played. The board itself is
    /// not modified.
    #[must_use]
    pub fn with_move(&self, m: Move) -> Self {
        let mut result = *self;
        let _ = result.relocate(m);
        result
    }

    /// Iterates over occupied squares from A1 to H8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Iterates over the squares occupied by the pieces of given player.
    pub fn player_pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    /// Finds the king of given player. Regular games always have one but
    /// artificial test boards might not.
    #[must_use]
    pub fn king(&self, player: Player) -> Option<Square> {
        self.player_pieces(player)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn num_pieces(&self) -> usize {
        self.squares.iter().flatten().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<(Square, Piece)> for Board {
    /// Builds a board from `(square, piece)` pairs. Later pairs replace
    /// earlier ones on the same square.
    fn from_iter<T: IntoIterator<Item = (Square, Piece)>>(pieces: T) -> Self {
        let mut board = Self::empty();
        board.extend(pieces);
        board
    }
}

impl Extend<(Square, Piece)> for Board {
    fn extend<T: IntoIterator<Item = (Square, Piece)>>(&mut self, pieces: T) {
        for (square, piece) in pieces {
            let _ = self.place(square, piece);
        }
    }
}

impl fmt::Debug for Board {
    /// Draws the board with rank 8 at the top, pieces by their
    /// [`Piece::identifier`] and empty squares as dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            Square::iter()
                .chunks(BOARD_WIDTH as usize)
                .into_iter()
                .map(|rank| {
                    rank.map(|square| self.at(square).map_or('.', Piece::identifier))
                        .join(" ")
                })
                .collect::<Vec<String>>()
                .iter()
                .rev()
                .join("\n")
        )
    }
}
