//! Terminal-oriented Unicode board renderer.
//!
//! Pieces are drawn by the role they move with, since that is what a player
//! needs to see. Row 0 (black's back rank) is printed first.

use crate::game_state::chess_types::{PieceKind, Player, Role, Square};
use crate::game_state::game_state::GameState;
use crate::roles::role_map::RoleMap;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|square| game_state.board.piece_at(square));
            match piece {
                Some(piece) => out.push(role_to_unicode(
                    piece.player,
                    game_state.roles.role_of(piece.kind),
                )),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str(&format!("{} to move", game_state.side_to_move));

    out
}

/// One `kind -> role` line per shuffled kind.
pub fn render_role_map(roles: &RoleMap) -> String {
    PieceKind::ALL
        .iter()
        .filter(|&&kind| kind != PieceKind::King)
        .map(|&kind| format!("{kind:?} moves as {:?}", roles.role_of(kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn role_to_unicode(player: Player, role: Role) -> char {
    match (player, role) {
        (Player::White, Role::Pawn) => '♙',
        (Player::White, Role::Knight) => '♘',
        (Player::White, Role::Bishop) => '♗',
        (Player::White, Role::Rook) => '♖',
        (Player::White, Role::Queen) => '♕',
        (Player::White, Role::King) => '♔',
        (Player::Black, Role::Pawn) => '♟',
        (Player::Black, Role::Knight) => '♞',
        (Player::Black, Role::Bishop) => '♝',
        (Player::Black, Role::Rook) => '♜',
        (Player::Black, Role::Queen) => '♛',
        (Player::Black, Role::King) => '♚',
    }
}
