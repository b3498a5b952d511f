use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{generate_moves, GenerationMode};
use crate::roles::role_map::RoleMap;

/// Pieces of `attacker` whose pseudo-legal moves reach `square`.
///
/// The attacker's moves come from a view of the board with no castling rights
/// and no en passant target: neither move can capture a piece standing on its
/// landing square.
fn attacking_pieces<'a>(
    board: &'a Board,
    square: Square,
    attacker: Player,
    roles: &RoleMap,
) -> impl Iterator<Item = Square> + 'a {
    let attack_view = GameState::from_board(*board, attacker, *roles);
    board
        .pieces_of(attacker)
        .map(|(from, _)| from)
        .filter(move |&from| generate_moves(&attack_view, from, GenerationMode::Pseudo).contains(&square))
}

/// True if any piece of `attacker` could move onto `square`, ignoring the
/// attacker's own king safety.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Player, roles: &RoleMap) -> bool {
    attacking_pieces(board, square, attacker, roles).next().is_some()
}

/// Squares of `attacker`'s pieces that currently attack `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker: Player, roles: &RoleMap) -> Vec<Square> {
    attacking_pieces(board, square, attacker, roles).collect()
}

/// True if `player`'s king is attacked. A board without that king is never
/// in check.
pub fn is_check(board: &Board, player: Player, roles: &RoleMap) -> bool {
    let Some(king) = board.find_king(player) else {
        return false;
    };
    is_square_attacked(board, king, player.opposite(), roles)
}
