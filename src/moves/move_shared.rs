//! Helpers shared by the per-role generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Square};

/// Builds a table of destination masks for a fixed set of step offsets.
pub const fn step_table(steps: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i8;
        let col = (index % 8) as i8;
        let mut mask = 0u64;
        let mut i = 0usize;
        while i < steps.len() {
            let r = row + steps[i].0;
            let c = col + steps[i].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                mask |= 1u64 << (r as u32 * 8 + c as u32);
            }
            i += 1;
        }
        table[index] = mask;
        index += 1;
    }

    table
}

/// True when `player` may land on `target`: empty or held by the opponent.
#[inline]
pub fn can_enter(board: &Board, target: Square, player: Player) -> bool {
    match board.piece_at(target) {
        None => true,
        Some(piece) => piece.player != player,
    }
}

/// Pushes every square of `mask` that `player` may enter.
pub fn push_step_targets(board: &Board, mut mask: u64, player: Player, out: &mut Vec<Square>) {
    while mask != 0 {
        if let Some(target) = Square::from_index(mask.trailing_zeros() as u8) {
            if can_enter(board, target, player) {
                out.push(target);
            }
        }
        mask &= mask - 1;
    }
}

/// Slides from `from` along `(d_row, d_col)` until the edge or a blocker.
/// An opposing blocker is included as a capture; a friendly one is not.
pub fn push_ray(
    board: &Board,
    from: Square,
    player: Player,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(square) = cursor {
        match board.piece_at(square) {
            None => out.push(square),
            Some(piece) => {
                if piece.player != player {
                    out.push(square);
                }
                return;
            }
        }
        cursor = square.offset(d_row, d_col);
    }
}
