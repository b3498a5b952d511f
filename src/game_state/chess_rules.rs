//! Canonical rule constants: starting layout, pawn geometry, castling squares
//! and the promotion pool.

use crate::game_state::chess_types::{PieceKind, Player};

/// Back-rank ordering from column 0 to column 7 for both players.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a promoting piece may become.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

pub const KING_HOME_COL: u8 = 4;
pub const KING_SIDE_ROOK_COL: u8 = 7;
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn back_rank_row(player: Player) -> u8 {
    match player {
        Player::White => 7,
        Player::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(player: Player) -> u8 {
    match player {
        Player::White => 6,
        Player::Black => 1,
    }
}

/// Row delta of a single pawn-role advance.
#[inline]
pub const fn pawn_direction(player: Player) -> i8 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

/// Row on which a pawn-role piece promotes.
#[inline]
pub const fn promotion_row(player: Player) -> u8 {
    back_rank_row(player.opposite())
}

/// Row a pawn-role piece must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_row(player: Player) -> u8 {
    match player {
        Player::White => 3,
        Player::Black => 4,
    }
}
