//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;
use std::ops::Not;
use std::str::FromStr;

use anyhow::{bail, Context};
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Relocation of a piece from one square to another. This is the only input
/// that can mutate [`crate::chess::game::Game`] state.
///
/// Moves do not carry any metadata: captures are implied by the occupant of
/// the target square, and promotions, castling and en passant are not part of
/// this rule set.
///
/// The textual representation is two squares separated by a single space:
///
/// ```
/// use chessrules::chess::core::{Move, Square};
///
/// let m = Move::new(Square::E2, Square::E4);
/// assert_eq!(m.to_string(), "e2 e4");
/// assert_eq!(Move::try_from("e2 e4").unwrap(), m);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Square the piece leaves.
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Square the piece lands on, capturing whatever was there.
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    /// Parses a move in `"<from> <to>"` format, e.g. `"a2 a4"`.
    ///
    /// # Errors
    ///
    /// If the input is not exactly two squares separated by exactly one
    /// space.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let Some((from, to)) = input.split(' ').collect_tuple() else {
            bail!("move should be two squares separated by a space, got '{input}'");
        };
        Ok(Self::new(
            Square::try_from(from).with_context(|| format!("parsing move '{input}'"))?,
            Square::try_from(to).with_context(|| format!("parsing move '{input}'"))?,
        ))
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Returns the coordinate shifted by `offset` if it stays within
/// `0..BOARD_WIDTH`.
fn shift_coordinate(coordinate: u8, offset: i8) -> Option<u8> {
    let shifted = i16::from(coordinate) + i16::from(offset);
    u8::try_from(shifted)
        .ok()
        .filter(|shifted| *shifted < BOARD_WIDTH)
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use chessrules::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use chessrules::chess::core::Square;
/// use std::mem;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Iterates over all squares from A1 to H8.
    pub fn iter() -> impl Iterator<Item = Self> {
        // Indices within 0..BOARD_SIZE are always valid squares.
        (0..BOARD_SIZE).map(|index| unsafe { mem::transmute::<u8, Self>(index) })
    }

    /// Returns true if shifting the square by given number of files and ranks
    /// stays within the board.
    #[must_use]
    pub fn is_reachable(self, file_offset: i8, rank_offset: i8) -> bool {
        self.checked_offset(file_offset, rank_offset).is_some()
    }

    /// Shifts the square by given number of files and ranks.
    ///
    /// # Errors
    ///
    /// If the resulting square would be off the board. Callers that are
    /// exploring the board should use [`Square::checked_offset`] instead.
    pub fn offset(self, file_offset: i8, rank_offset: i8) -> anyhow::Result<Self> {
        Ok(Self::new(
            self.file().shift(file_offset)?,
            self.rank().shift(rank_offset)?,
        ))
    }

    /// Same as [`Square::offset`] but returns [`None`] for the squares off the
    /// board. This is what movement rules use: they never leave the board.
    #[must_use]
    pub fn checked_offset(self, file_offset: i8, rank_offset: i8) -> Option<Self> {
        let file = shift_coordinate(self.file() as u8, file_offset)?;
        let rank = shift_coordinate(self.rank() as u8, rank_offset)?;
        Some(unsafe { mem::transmute::<u8, Self>(file + rank * BOARD_WIDTH) })
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        // Exclusive range patterns are not allowed:
        // https://github.com/rust-lang/rust/issues/37854
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            );
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Moves the file by `offset` columns (positive is towards [`File::H`]).
    ///
    /// # Errors
    ///
    /// If the resulting column is off the board.
    pub fn shift(self, offset: i8) -> anyhow::Result<Self> {
        match shift_coordinate(self as u8, offset) {
            Some(column) => Self::try_from(column),
            None => bail!("moving {offset} files from '{self}' leaves the board"),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// Moves the rank by `offset` rows (positive is towards [`Rank::Eight`]).
    ///
    /// # Errors
    ///
    /// If the resulting row is off the board.
    pub fn shift(self, offset: i8) -> anyhow::Result<Self> {
        match shift_coordinate(self as u8, offset) {
            Some(row) => Self::try_from(row),
            None => bail!("moving {offset} ranks from '{self}' leaves the board"),
        }
    }

    pub(super) const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    pub(super) const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank direction of pawn pushes: the offsets in movement tables are
    /// written from White's perspective and multiplied by this.
    pub(super) const fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King = 1,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
// Single push, double push, capture towards A file, capture towards H file.
const PAWN_STEPS: [(i8, i8); 4] = [(0, 1), (0, 2), (-1, 1), (1, 1)];

impl PieceKind {
    /// (file, rank) offsets of a single step or ray direction. For pawns, the
    /// offsets are given from White's perspective.
    #[must_use]
    pub const fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            Self::King | Self::Queen => &ALL_DIRECTIONS,
            Self::Rook => &ORTHOGONAL,
            Self::Bishop => &DIAGONAL,
            Self::Knight => &KNIGHT_JUMPS,
            Self::Pawn => &PAWN_STEPS,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }

    /// Sliding pieces repeat their offsets along the ray until they hit a
    /// piece or the edge of the board.
    #[must_use]
    pub const fn slides(self) -> bool {
        matches!(self, Self::Queen | Self::Rook | Self::Bishop)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Represents a specific piece owned by a player. The piece does not know
/// where it stands: its square is the key it is stored under in
/// [`crate::chess::board::Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Character used to draw the piece on a text board: White pieces are
    /// lowercase and Black pieces are uppercase.
    #[must_use]
    pub const fn identifier(self) -> char {
        match self.owner {
            Player::White => self.kind.symbol(),
            Player::Black => self.kind.symbol().to_ascii_uppercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Inverse of [`Piece::identifier`].
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_lowercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"kqrbnpKQRBNP\", got '{symbol}'"),
        };
        Ok(Self::new(owner, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.identifier())
    }
}

#[cfg(test)]
mod test {
    use std::mem::size_of;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('0'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            vec![
                Rank::One,
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
            ]
        );
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| Rank::try_from(idx).ok())
                .count(),
            8
        );
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '9'")]
    fn rank_from_incorrect_char() {
        let _ = Rank::try_from('9').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn rank_from_incorrect_char_zero() {
        let _ = Rank::try_from('0').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within 0..BOARD_WIDTH, got 8")]
    fn rank_from_incorrect_index() {
        let _ = Rank::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn file() {
        assert_eq!(
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
            vec![
                File::A,
                File::B,
                File::C,
                File::D,
                File::E,
                File::F,
                File::G,
                File::H,
            ]
        );
        assert!(File::try_from('A').is_err());
        assert!(File::try_from('`').is_err());
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn file_from_incorrect_char() {
        let _ = File::try_from('i').unwrap();
    }

    #[test]
    #[should_panic(expected = "file should be within 0..BOARD_WIDTH, got 8")]
    fn file_from_incorrect_index() {
        let _ = File::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn square() {
        let squares: Vec<_> = [
            0u8,
            BOARD_SIZE - 1,
            BOARD_WIDTH - 1,
            BOARD_WIDTH,
            BOARD_WIDTH * 2 + 5,
            BOARD_SIZE,
        ]
        .iter()
        .filter_map(|square| Square::try_from(*square).ok())
        .collect();
        assert_eq!(
            squares,
            vec![Square::A1, Square::H8, Square::H1, Square::A2, Square::F3]
        );
        let squares: Vec<_> = [
            (File::B, Rank::Three),
            (File::F, Rank::Five),
            (File::H, Rank::Eight),
            (File::E, Rank::Four),
        ]
        .iter()
        .map(|(file, rank)| Square::new(*file, *rank))
        .collect();
        assert_eq!(
            squares,
            vec![Square::B3, Square::F5, Square::H8, Square::E4]
        );
    }

    #[test]
    fn all_squares_round_trip() {
        let mut count = 0;
        for file in 'a'..='h' {
            for rank in '1'..='8' {
                let text = format!("{file}{rank}");
                let square = Square::try_from(text.as_str()).unwrap();
                assert_eq!(square.file(), File::try_from(file).unwrap());
                assert_eq!(square.rank(), Rank::try_from(rank).unwrap());
                assert_eq!(square.to_string(), text);
                count += 1;
            }
        }
        assert_eq!(count, BOARD_SIZE);
        assert_eq!(Square::iter().count(), BOARD_SIZE as usize);
        assert_eq!(Square::iter().last(), Some(Square::H8));
    }

    #[test]
    fn square_from_incorrect_text() {
        for input in ["i1", "a9", "a0", "A1", "a", "a10", "", "1a", "é1"] {
            assert!(Square::try_from(input).is_err(), "{input}");
        }
    }

    #[test]
    #[should_panic(expected = "square index should be in 0..BOARD_SIZE, got 64")]
    fn square_from_incorrect_index() {
        let _ = Square::try_from(BOARD_SIZE).unwrap();
    }

    #[test]
    fn primitive_size() {
        assert_eq!(size_of::<Square>(), 1);
        assert_eq!(size_of::<PieceKind>(), size_of::<Option<PieceKind>>());
        assert_eq!(size_of::<Piece>(), size_of::<Option<Piece>>());
    }

    #[test]
    fn within_board_offset() {
        let square = Square::E4;
        assert_eq!(square.checked_offset(-1, 0), Some(Square::D4));
        assert_eq!(square.checked_offset(0, 1), Some(Square::E5));
        assert_eq!(square.checked_offset(3, 4), Some(Square::H8));
        assert_eq!(square.checked_offset(-4, -3), Some(Square::A1));
        assert_eq!(square.offset(1, -1).unwrap(), Square::F3);
        assert!(square.is_reachable(-4, 4));
    }

    #[test]
    fn off_board_offset() {
        assert!(!Square::A1.is_reachable(-1, 0));
        assert!(!Square::A1.is_reachable(0, -1));
        assert!(!Square::H8.is_reachable(1, 1));
        assert!(!Square::E4.is_reachable(0, 5));
        assert!(!Square::E4.is_reachable(i8::MAX, 0));
        assert!(!Square::E4.is_reachable(0, i8::MIN));
        assert_eq!(Square::H6.checked_offset(1, 0), None);
    }

    #[test]
    #[should_panic(expected = "moving -1 files from 'a' leaves the board")]
    fn shift_file_off_board() {
        let _ = Square::A5.offset(-1, 0).unwrap();
    }

    #[test]
    #[should_panic(expected = "moving 2 ranks from '7' leaves the board")]
    fn shift_rank_off_board() {
        let _ = Square::C7.offset(0, 2).unwrap();
    }

    #[test]
    fn file_and_rank_shift() {
        assert_eq!(File::A.shift(7).unwrap(), File::H);
        assert_eq!(File::D.shift(-3).unwrap(), File::A);
        assert!(File::H.shift(1).is_err());
        assert_eq!(Rank::One.shift(7).unwrap(), Rank::Eight);
        assert!(Rank::One.shift(-1).is_err());
    }

    #[test]
    fn opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!!Player::Black, Player::Black);
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Move::try_from("a2 a4").unwrap(),
            Move::new(Square::A2, Square::A4)
        );
        assert_eq!(
            "h7 g8".parse::<Move>().unwrap(),
            Move::new(Square::H7, Square::G8)
        );
        assert_eq!(Move::new(Square::B1, Square::C3).to_string(), "b1 c3");
    }

    #[test]
    fn parse_malformed_move() {
        for input in [
            "", "blah", "2 a5", "a2a4", "a2  a4", "a2 a4 ", " a2 a4", "a2-a4", "a2 a9", "A2 A4",
            "a2 a4 a6",
        ] {
            assert!(Move::try_from(input).is_err(), "{input}");
        }
    }

    #[test]
    fn piece_identifiers() {
        let white_king = Piece::new(Player::White, PieceKind::King);
        let black_knight = Piece::new(Player::Black, PieceKind::Knight);
        assert_eq!(white_king.identifier(), 'k');
        assert_eq!(black_knight.identifier(), 'N');
        assert_eq!(black_knight.to_string(), "N");
        for symbol in "kqrbnpKQRBNP".chars() {
            assert_eq!(Piece::try_from(symbol).unwrap().identifier(), symbol);
        }
        assert!(Piece::try_from('x').is_err());
    }

    #[test]
    fn movement_tables() {
        assert!(PieceKind::Queen.slides());
        assert!(PieceKind::Rook.slides());
        assert!(PieceKind::Bishop.slides());
        assert!(!PieceKind::King.slides());
        assert!(!PieceKind::Knight.slides());
        assert!(!PieceKind::Pawn.slides());
        assert_eq!(PieceKind::Knight.offsets().len(), 8);
        assert_eq!(PieceKind::Pawn.offsets().len(), 4);
        assert_eq!(PieceKind::Rook.offsets().len(), 4);
    }
}
