//! Pawn-role move generation.
//!
//! Applies to whatever piece currently carries the pawn role, so the start
//! row and direction come from the owner, not from the piece's kind.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{en_passant_capture_row, pawn_direction, pawn_start_row};
use crate::game_state::chess_types::{Player, Square};

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    player: Player,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let direction = pawn_direction(player);

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);
            if from.row() == pawn_start_row(player) {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(piece) if piece.player != player => out.push(target),
            Some(_) => {}
            None => {
                if en_passant_target == Some(target) && from.row() == en_passant_capture_row(player)
                {
                    out.push(target);
                }
            }
        }
    }
}
