use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Square};
use crate::moves::move_shared::push_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(board: &Board, from: Square, player: Player, out: &mut Vec<Square>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        push_ray(board, from, player, d_row, d_col, out);
    }
}
