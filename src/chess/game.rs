//! [`Game`] owns the authoritative board and the side to move. It is the only
//! place where the real board changes: movement rules and the check analysis
//! work on borrowed boards or on their copies.

use itertools::Itertools;
use log::debug;

use crate::chess::attacks;
use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, Player, Square};
use crate::chess::movegen;
use crate::chess::rules::{Legality, Rules};

/// State of a single game: the board, whose turn it is and the rules both
/// players follow.
///
/// A new game starts with an empty board and White to move, [`Game::reset`]
/// sets up the standard starting position.
///
/// ```
/// use chessrules::Game;
///
/// let mut game = Game::new();
/// game.reset();
/// assert_eq!(game.legal_moves().len(), 20);
/// assert!(game.apply_move("e2 e4"));
/// assert!(!game.apply_move("e4 e5"));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    rules: Rules,
}

impl Game {
    /// Creates a game with the default [`Rules`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::White,
            rules,
        }
    }

    /// Puts all pieces to their starting squares and gives the move to
    /// White. Anything that was on the board before is removed.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.current_player = Player::White;
        debug!("Game reset to the starting position");
    }

    /// Loads an arbitrary arrangement of pieces on top of the current board.
    /// Pieces replace whatever stood on their squares, other squares stay as
    /// they are. Nothing is validated: boards without kings or with pawns on
    /// the backrank are accepted.
    pub fn place_pieces(&mut self, pieces: impl IntoIterator<Item = (Square, Piece)>) {
        self.board.extend(pieces);
        debug!("Placed pieces, {} on the board now", self.board.num_pieces());
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Returns the piece standing on the square.
    #[must_use]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.at(square)
    }

    /// Same as [`Game::piece_at`] for squares in text form (e.g. "e2").
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a square.
    pub fn piece_at_str(&self, square: &str) -> anyhow::Result<Option<Piece>> {
        Ok(self.piece_at(Square::try_from(square)?))
    }

    /// The player who makes the next move.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn opponent(&self) -> Player {
        self.current_player.opponent()
    }

    /// Passes the turn without moving. Useful for setting up positions where
    /// Black is to move.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Returns true if the king of the current player is attacked.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        attacks::is_in_check(self.current_player, &self.board, self.rules)
    }

    /// Computes the moves the current player is allowed to make. Each move
    /// appears once; the order follows the board (A1 to H8) and the movement
    /// tables and carries no meaning.
    ///
    /// With [`Legality::KingSafety`] a player in check can only move the
    /// king. With [`Legality::Full`] any move that does not leave the king
    /// attacked is allowed.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = movegen::generate_moves(self.current_player, &self.board, self.rules);
        match self.rules.legality {
            Legality::KingSafety => {
                if let Some(king) = self.board.king(self.current_player) {
                    if self.is_in_check() {
                        moves.retain(|m| m.from() == king);
                    }
                }
            },
            Legality::Full => {
                moves.retain(|m| !attacks::leaves_king_attacked(*m, &self.board, self.rules));
            },
        }
        moves
    }

    /// Legal moves in their text form ("from to"), sorted.
    #[must_use]
    pub fn legal_move_strings(&self) -> Vec<String> {
        self.legal_moves()
            .iter()
            .map(Move::to_string)
            .sorted()
            .collect()
    }

    /// Parses the move ("e2 e4") and plays it if it is legal. Returns false
    /// and leaves the game untouched if the text is not a move or the move is
    /// not allowed.
    pub fn apply_move(&mut self, input: &str) -> bool {
        match Move::try_from(input) {
            Ok(m) => self.make_move(m),
            Err(e) => {
                debug!("Rejected move {input:?}: {e:#}");
                false
            },
        }
    }

    /// Plays the move if it is legal: the piece leaves its square, captures
    /// whatever stands on the target square and the turn passes to the
    /// opponent. Returns false and leaves the game untouched otherwise.
    pub fn make_move(&mut self, m: Move) -> bool {
        if !self.legal_moves().contains(&m) {
            debug!("Rejected illegal move {m} for {}", self.current_player);
            return false;
        }
        match self.board.relocate(m) {
            Some(captured) => debug!("{}: {m} captures {captured}", self.current_player),
            None => debug!("{}: {m}", self.current_player),
        }
        self.switch_player();
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::PieceKind;

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Player::White, kind)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(Player::Black, kind)
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.opponent(), Player::Black);
        assert_eq!(game.board().num_pieces(), 0);
        assert_eq!(game.rules(), Rules::default());
        assert!(game.legal_moves().is_empty());
        assert!(!game.is_in_check());
    }

    #[test]
    fn reset_clears_the_board() {
        let mut game = Game::new();
        game.place_pieces([(Square::E4, black(PieceKind::Queen))]);
        game.switch_player();
        game.reset();
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.piece_at(Square::E4), None);
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn piece_at_str() {
        let mut game = Game::new();
        game.reset();
        assert_eq!(game.piece_at_str("e1").unwrap(), Some(white(PieceKind::King)));
        assert_eq!(game.piece_at_str("e4").unwrap(), None);
        assert!(game.piece_at_str("e9").is_err());
        assert!(game.piece_at_str("").is_err());
    }

    #[test]
    fn in_check_only_king_moves() {
        let mut game = Game::new();
        game.place_pieces([
            (Square::D1, white(PieceKind::King)),
            (Square::C1, black(PieceKind::Queen)),
            (Square::D2, black(PieceKind::Bishop)),
            (Square::H2, white(PieceKind::Rook)),
        ]);
        assert!(game.is_in_check());
        assert_eq!(game.legal_move_strings(), vec!["d1 e2"]);
    }

    #[test]
    fn full_legality_allows_captures_of_checker() {
        let mut game = Game::with_rules(Rules::new().with_legality(Legality::Full));
        game.place_pieces([
            (Square::D1, white(PieceKind::King)),
            (Square::C1, black(PieceKind::Queen)),
            (Square::D2, black(PieceKind::Bishop)),
            (Square::C8, white(PieceKind::Rook)),
        ]);
        assert!(game.is_in_check());
        // The rook captures the queen, other rook moves do not resolve the
        // check.
        assert_eq!(game.legal_move_strings(), vec!["c8 c1", "d1 e2"]);
    }

    #[test]
    fn apply_move_flips_player() {
        let mut game = Game::new();
        game.reset();
        assert!(game.apply_move("g1 f3"));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.piece_at(Square::G1), None);
        assert_eq!(game.piece_at(Square::F3), Some(white(PieceKind::Knight)));
        assert!(!game.apply_move("f3 g5"));
        assert!(game.apply_move("e7 e5"));
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut game = Game::new();
        game.reset();
        for input in ["e2 e5", "e7 e5", "e2e4", "e2 e4 ", "z2 e4", "", "e1 e2"] {
            assert!(!game.apply_move(input), "{input:?} should be rejected");
        }
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn no_king_no_check() {
        let mut game = Game::new();
        game.place_pieces([
            (Square::A2, white(PieceKind::Pawn)),
            (Square::A4, black(PieceKind::Rook)),
        ]);
        assert!(!game.is_in_check());
        assert_eq!(game.legal_move_strings(), vec!["a2 a3"]);
        game.switch_player();
        assert_eq!(
            game.legal_move_strings(),
            vec![
                "a4 a2", "a4 a3", "a4 a5", "a4 a6", "a4 a7", "a4 a8", "a4 b4", "a4 c4", "a4 d4",
                "a4 e4", "a4 f4", "a4 g4", "a4 h4"
            ]
        );
    }
}
