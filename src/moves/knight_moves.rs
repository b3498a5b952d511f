use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Square};
use crate::moves::move_shared::{push_step_targets, step_table};

pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KNIGHT_TARGETS: [u64; 64] = step_table(&KNIGHT_STEPS);

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square.index()]
}

pub fn generate_knight_moves(board: &Board, from: Square, player: Player, out: &mut Vec<Square>) {
    push_step_targets(board, knight_targets(from), player, out);
}
