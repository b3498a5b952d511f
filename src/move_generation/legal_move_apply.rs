//! Move execution.
//!
//! Produces the successor `GameState` for a move, including the side effects
//! of en passant, double advances, promotion, castling and castling-rights
//! bookkeeping. The input state is never modified.
//!
//! Callers must pass a move already confirmed legal. An illegal move yields
//! some successor state without validation.

use log::trace;
use rand::Rng;

use crate::game_state::chess_rules::{
    back_rank_row, promotion_row, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Piece, PieceKind, Player, Role, Square};
use crate::game_state::game_state::GameState;
use crate::roles::role_assignment::choose_promotion_kind;

/// Successor state plus a description of what the move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub game_state: GameState,
    /// Piece that left the origin square, as it was before any promotion.
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    /// Kind chosen for a promoting piece. This is the only promotion choice
    /// made for the move; callers should display it rather than re-roll.
    pub promoted_to: Option<PieceKind>,
    pub castled: bool,
    pub en_passant_capture: bool,
}

/// True when the piece on `from` moves by the pawn role and `to` is its
/// promotion row.
pub fn is_promotion_move(game_state: &GameState, from: Square, to: Square) -> bool {
    game_state.board.piece_at(from).is_some_and(|piece| {
        game_state.roles.role_of(piece.kind) == Role::Pawn && to.row() == promotion_row(piece.player)
    })
}

/// Applies a move, drawing the promotion kind from `rng` when one is needed.
pub fn apply_move<R: Rng + ?Sized>(
    game_state: &GameState,
    from: Square,
    to: Square,
    rng: &mut R,
) -> AppliedMove {
    let promotion_kind = if is_promotion_move(game_state, from, to) {
        choose_promotion_kind(rng)
    } else {
        PieceKind::Queen
    };
    apply_move_with_promotion(game_state, from, to, promotion_kind)
}

/// Applies a move with a fixed promotion kind. `promotion_kind` is ignored
/// unless the move promotes.
pub fn apply_move_with_promotion(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion_kind: PieceKind,
) -> AppliedMove {
    let mut next = *game_state;
    next.en_passant_target = None;

    let Some(piece) = next.board.take(from) else {
        next.side_to_move = game_state.side_to_move.opposite();
        return AppliedMove {
            game_state: next,
            moved: None,
            captured: None,
            promoted_to: None,
            castled: false,
            en_passant_capture: false,
        };
    };

    let player = piece.player;
    let role = game_state.roles.role_of(piece.kind);
    let mut captured = next.board.piece_at(to);
    let mut en_passant_capture = false;
    let mut promoted_to = None;
    let mut castled = false;

    if role == Role::Pawn {
        if to.col() != from.col() && captured.is_none() && game_state.en_passant_target == Some(to) {
            if let Some(victim) = Square::new(from.row(), to.col()) {
                captured = next.board.take(victim);
                en_passant_capture = true;
                trace!("en passant capture on {victim}");
            }
        }
        if from.row().abs_diff(to.row()) == 2 {
            next.en_passant_target = Square::new((from.row() + to.row()) / 2, from.col());
        }
    }

    let placed = if role == Role::Pawn && to.row() == promotion_row(player) {
        promoted_to = Some(promotion_kind);
        trace!("{player} promotes on {to} to {promotion_kind:?}");
        Piece::new(promotion_kind, player)
    } else {
        piece
    };
    next.board.set(to, Some(placed));

    if role == Role::King && from.col().abs_diff(to.col()) == 2 {
        let (rook_col, rook_target_col) = if to.col() > from.col() {
            (KING_SIDE_ROOK_COL, to.col() - 1)
        } else {
            (QUEEN_SIDE_ROOK_COL, to.col() + 1)
        };
        if let (Some(rook_from), Some(rook_to)) =
            (Square::new(to.row(), rook_col), Square::new(to.row(), rook_target_col))
        {
            let rook = next.board.take(rook_from);
            next.board.set(rook_to, rook);
            castled = true;
            trace!("{player} castles, rook {rook_from} -> {rook_to}");
        }
    }

    update_castling_rights(&mut next, player, role, from, to);
    next.side_to_move = player.opposite();

    AppliedMove {
        game_state: next,
        moved: Some(piece),
        captured,
        promoted_to,
        castled,
        en_passant_capture,
    }
}

fn update_castling_rights(next: &mut GameState, mover: Player, role: Role, from: Square, to: Square) {
    match role {
        Role::King => next.castling_rights.clear_all(mover),
        Role::Rook if from.col() == QUEEN_SIDE_ROOK_COL => {
            next.castling_rights.clear_queen_side(mover)
        }
        Role::Rook if from.col() == KING_SIDE_ROOK_COL => next.castling_rights.clear_king_side(mover),
        _ => {}
    }

    // Any move off or onto a rook's home corner ends castling on that side.
    for player in Player::ALL {
        let row = back_rank_row(player);
        for square in [from, to] {
            if square.row() != row {
                continue;
            }
            if square.col() == QUEEN_SIDE_ROOK_COL {
                next.castling_rights.clear_queen_side(player);
            } else if square.col() == KING_SIDE_ROOK_COL {
                next.castling_rights.clear_king_side(player);
            }
        }
    }
}
