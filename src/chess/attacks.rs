//! Check detection. A square is attacked by a player if any of their pieces
//! could move there on the given board. All "what if" questions (would the
//! king be safe on that square? would this move expose the king?) are
//! answered on copies of the board, the board that is passed in is never
//! modified.

use log::trace;

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Move, PieceKind, Player, Square};
use crate::chess::movegen;
use crate::chess::rules::Rules;

/// Returns the union of squares the pieces of `attacker` can move to. The
/// attacker's king is not restricted by its own safety: the question is only
/// whether a square can be reached.
#[must_use]
pub fn attacked_squares(attacker: Player, board: &Board, rules: Rules) -> Bitboard {
    board
        .player_pieces(attacker)
        .flat_map(|(square, piece)| movegen::reachable_squares(square, piece, board, rules))
        .collect()
}

/// Returns true if `square` is in the [`attacked_squares`] of `attacker`.
#[must_use]
pub fn is_attacked(square: Square, attacker: Player, board: &Board, rules: Rules) -> bool {
    attacked_squares(attacker, board, rules).contains(square)
}

/// Returns true if the king of `player` is attacked. Boards without the king
/// of `player` are never in check.
#[must_use]
pub fn is_in_check(player: Player, board: &Board, rules: Rules) -> bool {
    let Some(king) = board.king(player) else {
        return false;
    };
    let in_check = is_attacked(king, player.opponent(), board, rules);
    trace!("{player} king on {king} in check: {in_check}");
    in_check
}

/// Plays the move on a copy of the board and checks whether the mover's king
/// is attacked afterwards.
///
/// When the king itself moves, it is removed from its original square: this
/// matters because the king might have been blocking the ray of the piece
/// attacking its new square.
#[must_use]
pub fn leaves_king_attacked(m: Move, board: &Board, rules: Rules) -> bool {
    let Some(mover) = board.at(m.from()) else {
        return false;
    };
    let hypothetical = board.with_move(m);
    let king = if mover.kind == PieceKind::King {
        Some(m.to())
    } else {
        hypothetical.king(mover.owner)
    };
    king.is_some_and(|king| is_attacked(king, mover.owner.opponent(), &hypothetical, rules))
}
