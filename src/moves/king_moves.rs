use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank_row, KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL,
};
use crate::game_state::chess_types::{CastlingSides, PieceKind, Player, Square};
use crate::moves::move_shared::{push_step_targets, step_table};

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = step_table(&KING_STEPS);

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square.index()]
}

/// Adjacent steps plus castling hops. Castling needs the right, empty squares
/// between king and rook, the king on its home square and the rook still in
/// its corner. Attacked transit squares are not checked.
pub fn generate_king_moves(
    board: &Board,
    from: Square,
    player: Player,
    castling: CastlingSides,
    out: &mut Vec<Square>,
) {
    push_step_targets(board, king_targets(from), player, out);

    let home_row = back_rank_row(player);
    if from.row() != home_row || from.col() != KING_HOME_COL {
        return;
    }

    if castling.king_side
        && path_clear(board, home_row, KING_HOME_COL + 1..KING_SIDE_ROOK_COL)
        && rook_in_corner(board, home_row, KING_SIDE_ROOK_COL, player)
    {
        if let Some(target) = from.offset(0, 2) {
            out.push(target);
        }
    }

    if castling.queen_side
        && path_clear(board, home_row, QUEEN_SIDE_ROOK_COL + 1..KING_HOME_COL)
        && rook_in_corner(board, home_row, QUEEN_SIDE_ROOK_COL, player)
    {
        if let Some(target) = from.offset(0, -2) {
            out.push(target);
        }
    }
}

fn path_clear(board: &Board, row: u8, cols: std::ops::Range<u8>) -> bool {
    cols.filter_map(|col| Square::new(row, col))
        .all(|square| board.is_empty(square))
}

fn rook_in_corner(board: &Board, row: u8, col: u8, player: Player) -> bool {
    Square::new(row, col)
        .and_then(|square| board.piece_at(square))
        .is_some_and(|piece| piece.kind == PieceKind::Rook && piece.player == player)
}
