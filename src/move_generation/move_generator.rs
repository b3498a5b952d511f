//! Role dispatch for move generation.
//!
//! A piece's moves are produced by the generator of its *role*, looked up in
//! the game's [`RoleMap`](crate::roles::role_map::RoleMap), never by its kind.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingSides, Piece, Role, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Whether generated moves are filtered for the mover's own king safety.
///
/// Check detection must use `Pseudo`: filtering the attacker's moves would
/// require asking whether *their* king is safe, which asks for our moves, and
/// so on without end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Legal,
    Pseudo,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square>;
}

/// Destinations consistent with role and occupancy only.
pub struct PseudoMoveGenerator;

/// Destinations that also leave the mover's king out of check.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        pseudo_moves(game_state, from)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        legal_moves(game_state, from)
    }
}

pub fn generate_moves(game_state: &GameState, from: Square, mode: GenerationMode) -> Vec<Square> {
    match mode {
        GenerationMode::Pseudo => pseudo_moves(game_state, from),
        GenerationMode::Legal => legal_moves(game_state, from),
    }
}

/// Pseudo-legal destinations for the piece on `from`; empty for an empty square.
pub fn pseudo_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    generate_role_moves(
        &game_state.board,
        from,
        piece,
        game_state.roles.role_of(piece.kind),
        game_state.en_passant_target,
        game_state.castling_rights.for_player(piece.player),
        &mut out,
    );
    out
}

pub fn generate_role_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    role: Role,
    en_passant_target: Option<Square>,
    castling: CastlingSides,
    out: &mut Vec<Square>,
) {
    let player = piece.player;
    match role {
        Role::Pawn => generate_pawn_moves(board, from, player, en_passant_target, out),
        Role::Knight => generate_knight_moves(board, from, player, out),
        Role::Bishop => generate_bishop_moves(board, from, player, out),
        Role::Rook => generate_rook_moves(board, from, player, out),
        Role::Queen => generate_queen_moves(board, from, player, out),
        Role::King => generate_king_moves(board, from, player, castling, out),
    }
}
