//! Aggregate position state passed to every rules query.
//!
//! `GameState` bundles the board with the auxiliary state the rules need:
//! the side to move, the game's role table, castling rights and the en
//! passant target. It is `Copy`, so probing a move never disturbs the caller's
//! value.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Player, Square};
use crate::roles::role_map::RoleMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Player,
    pub roles: RoleMap,
    pub castling_rights: CastlingRights,
    /// Square a pawn-role piece would land on when capturing en passant.
    pub en_passant_target: Option<Square>,
}

impl GameState {
    /// Starting position with the given role table.
    pub fn new_game(roles: RoleMap) -> Self {
        Self {
            board: Board::new_game(),
            side_to_move: Player::White,
            roles,
            castling_rights: CastlingRights::full(),
            en_passant_target: None,
        }
    }

    /// Arbitrary position with no castling rights and no en passant target.
    pub fn from_board(board: Board, side_to_move: Player, roles: RoleMap) -> Self {
        Self {
            board,
            side_to_move,
            roles,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    pub fn with_castling_rights(mut self, castling_rights: CastlingRights) -> Self {
        self.castling_rights = castling_rights;
        self
    }

    pub fn with_en_passant_target(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }
}
