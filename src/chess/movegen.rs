//! Movement rules of each [`PieceKind`]. The rules are pure functions of the
//! piece's square and the board: they never modify the board, and they never
//! leave it (every offset is bounds-checked before the target square is
//! constructed).
//!
//! There are two shapes of movement:
//!
//! - Stepping pieces ([`PieceKind::King`], [`PieceKind::Knight`] and the
//!   [`PieceKind::Pawn`]) try each of their offsets exactly once.
//! - Sliding pieces ([`PieceKind::Bishop`], [`PieceKind::Rook`] and
//!   [`PieceKind::Queen`]) repeat each direction until they run into a piece
//!   or the edge of the board. An enemy piece can be captured, an ally blocks
//!   the ray.

use arrayvec::ArrayVec;

use crate::chess::attacks;
use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, PieceKind, Player, Rank, Square};
use crate::chess::rules::Rules;

/// A queen in the center of an empty board reaches 27 squares, no piece can
/// reach more.
pub const MAX_TARGETS: usize = 27;

/// Squares a single piece can move to.
pub type Targets = ArrayVec<Square, MAX_TARGETS>;

/// Returns the squares the piece standing on `square` can move to. For the
/// king, the squares where it would be attacked are excluded: it is the only
/// piece that can not simply follow its movement pattern.
#[must_use]
pub fn candidate_moves(square: Square, piece: Piece, board: &Board, rules: Rules) -> Targets {
    let mut targets = reachable_squares(square, piece, board, rules);
    if piece.kind == PieceKind::King {
        targets.retain(|target| {
            !attacks::leaves_king_attacked(Move::new(square, *target), board, rules)
        });
    }
    targets
}

/// Returns the squares the piece standing on `square` could move to ignoring
/// the safety of its own king. This is also the set of squares the piece
/// attacks (except for pawns, which push straight ahead but only capture
/// diagonally).
#[must_use]
pub fn reachable_squares(square: Square, piece: Piece, board: &Board, rules: Rules) -> Targets {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(square, piece.owner, board, rules),
        kind if kind.slides() => slide_targets(square, piece, board),
        _ => step_targets(square, piece, board),
    }
}

/// Collects [`candidate_moves`] of all pieces owned by `player`. No piece
/// except the king is checked for exposing its own king.
#[must_use]
pub fn generate_moves(player: Player, board: &Board, rules: Rules) -> Vec<Move> {
    // The average branching factor for chess is 35.
    let mut moves = Vec::with_capacity(48);
    for (square, piece) in board.player_pieces(player) {
        moves.extend(
            candidate_moves(square, piece, board, rules)
                .into_iter()
                .map(|target| Move::new(square, target)),
        );
    }
    moves
}

fn is_ally(occupant: Option<Piece>, owner: Player) -> bool {
    occupant.is_some_and(|piece| piece.owner == owner)
}

fn is_enemy(occupant: Option<Piece>, owner: Player) -> bool {
    occupant.is_some_and(|piece| piece.owner != owner)
}

fn step_targets(square: Square, piece: Piece, board: &Board) -> Targets {
    piece
        .kind
        .offsets()
        .iter()
        .filter_map(|&(file_offset, rank_offset)| square.checked_offset(file_offset, rank_offset))
        .filter(|target| !is_ally(board.at(*target), piece.owner))
        .collect()
}

fn slide_targets(square: Square, piece: Piece, board: &Board) -> Targets {
    let mut targets = Targets::new();
    for &(file_step, rank_step) in piece.kind.offsets() {
        let mut current = square;
        while let Some(next) = current.checked_offset(file_step, rank_step) {
            match board.at(next) {
                None => targets.push(next),
                Some(occupant) => {
                    if occupant.owner != piece.owner {
                        targets.push(next);
                    }
                    break;
                },
            }
            current = next;
        }
    }
    targets
}

/// Pawn offsets are written from White's perspective and mirrored for Black.
/// Each offset is checked on its own: the double push only looks at the
/// target square unless [`Rules::clear_double_push`] is set.
fn pawn_targets(square: Square, owner: Player, board: &Board, rules: Rules) -> Targets {
    let forward = owner.forward();
    let on_starting_rank = square.rank() == Rank::pawns_starting(owner);
    let mut targets = Targets::new();
    for &(file_offset, rank_offset) in PieceKind::Pawn.offsets() {
        let double_push = rank_offset == 2;
        if double_push && !on_starting_rank {
            continue;
        }
        let Some(target) = square.checked_offset(file_offset * forward, rank_offset * forward)
        else {
            continue;
        };
        let occupant = board.at(target);
        let allowed = if file_offset == 0 {
            occupant.is_none()
                && !(double_push
                    && rules.clear_double_push
                    && square
                        .checked_offset(0, forward)
                        .is_some_and(|passed| board.at(passed).is_some()))
        } else {
            is_enemy(occupant, owner)
        };
        if allowed {
            targets.push(target);
        }
    }
    targets
}
