//! Legality filtering and game-end detection.
//!
//! Takes the pseudo-legal destinations of a piece, simulates each one with the
//! executor and drops those that leave the mover's own king attacked. This is
//! the single source of truth for "is this move allowed".

use crate::game_state::chess_types::{PieceKind, Player, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_with_promotion;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::move_generator::pseudo_moves;

/// Outcome for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { in_check: bool },
    Checkmate { winner: Player },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Legal destinations for the piece on `from`, whoever owns it. Empty for an
/// empty square.
pub fn legal_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = pseudo_moves(game_state, from);
    moves.retain(|&to| {
        // Which kind a promotion yields cannot change the opponent's attacks.
        let next = apply_move_with_promotion(game_state, from, to, PieceKind::Queen);
        !is_check(&next.game_state.board, piece.player, &game_state.roles)
    });
    moves
}

/// True if `player` owns the piece on `from` and may move it to `to`.
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square, player: Player) -> bool {
    match game_state.board.piece_at(from) {
        Some(piece) if piece.player == player => legal_moves(game_state, from).contains(&to),
        _ => false,
    }
}

/// Every legal `(from, to)` pair for `player`.
pub fn all_legal_moves(game_state: &GameState, player: Player) -> Vec<(Square, Square)> {
    game_state
        .board
        .pieces_of(player)
        .flat_map(|(from, _)| legal_moves(game_state, from).into_iter().map(move |to| (from, to)))
        .collect()
}

pub fn has_any_legal_move(game_state: &GameState, player: Player) -> bool {
    game_state
        .board
        .pieces_of(player)
        .any(|(from, _)| !legal_moves(game_state, from).is_empty())
}

pub fn is_checkmate(game_state: &GameState, player: Player) -> bool {
    is_check(&game_state.board, player, &game_state.roles) && !has_any_legal_move(game_state, player)
}

pub fn is_stalemate(game_state: &GameState, player: Player) -> bool {
    !is_check(&game_state.board, player, &game_state.roles) && !has_any_legal_move(game_state, player)
}

/// Status for the side to move in `game_state`.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let player = game_state.side_to_move;
    let in_check = is_check(&game_state.board, player, &game_state.roles);
    if has_any_legal_move(game_state, player) {
        GameStatus::InProgress { in_check }
    } else if in_check {
        GameStatus::Checkmate {
            winner: player.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastlingRights, Piece, Role};
    use crate::move_generation::move_generator::{generate_moves, GenerationMode};
    use crate::roles::role_assignment::assign_roles;
    use crate::roles::role_map::RoleMap;
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    fn play(state: &GameState, moves: &[((u8, u8), (u8, u8))]) -> GameState {
        let mut state = *state;
        for &((fr, fc), (tr, tc)) in moves {
            let (from, to) = (sq(fr, fc), sq(tr, tc));
            assert!(
                is_legal_move(&state, from, to, state.side_to_move),
                "{from} -> {to} should be legal"
            );
            state = apply_move_with_promotion(&state, from, to, PieceKind::Queen).game_state;
        }
        state
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let state = GameState::new_game(RoleMap::standard());
        assert_eq!(all_legal_moves(&state, Player::White).len(), 20);
        assert_eq!(all_legal_moves(&state, Player::Black).len(), 20);
        assert_eq!(game_status(&state), GameStatus::InProgress { in_check: false });
    }

    #[test]
    fn lone_rook_in_corner_has_fourteen_legal_moves() {
        let board = Board::empty()
            .with_piece(sq(0, 0), Piece::new(PieceKind::Rook, Player::White));
        let state = GameState::from_board(board, Player::White, RoleMap::standard());
        assert_eq!(legal_moves(&state, sq(0, 0)).len(), 14);
    }

    #[test]
    fn is_legal_move_rejects_empty_and_opponent_squares() {
        let state = GameState::new_game(RoleMap::standard());
        assert!(!is_legal_move(&state, sq(4, 4), sq(3, 4), Player::White));
        assert!(!is_legal_move(&state, sq(1, 4), sq(2, 4), Player::White));
        assert!(is_legal_move(&state, sq(1, 4), sq(2, 4), Player::Black));
        assert!(!is_legal_move(&state, sq(6, 4), sq(3, 4), Player::White));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let start = GameState::new_game(RoleMap::standard());
        // f3, e5, g4, Qh4#
        let end = play(
            &start,
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
        );

        assert!(is_check(&end.board, Player::White, &end.roles));
        assert!(!has_any_legal_move(&end, Player::White));
        assert!(is_checkmate(&end, Player::White));
        assert!(!is_stalemate(&end, Player::White));
        assert_eq!(game_status(&end), GameStatus::Checkmate { winner: Player::Black });
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let board = Board::empty()
            .with_piece(sq(0, 0), Piece::new(PieceKind::King, Player::Black))
            .with_piece(sq(2, 1), Piece::new(PieceKind::Queen, Player::White))
            .with_piece(sq(7, 7), Piece::new(PieceKind::King, Player::White));
        let state = GameState::from_board(board, Player::Black, RoleMap::standard());

        assert!(is_stalemate(&state, Player::Black));
        assert!(!is_checkmate(&state, Player::Black));
        assert_eq!(game_status(&state), GameStatus::Stalemate);
        assert!(game_status(&state).is_over());
    }

    #[test]
    fn en_passant_only_on_the_immediate_reply() {
        let start = GameState::new_game(RoleMap::standard());
        // e4, a6, e5, d5 -> exd6 available now.
        let state = play(
            &start,
            &[((6, 4), (4, 4)), ((1, 0), (2, 0)), ((4, 4), (3, 4)), ((1, 3), (3, 3))],
        );
        assert_eq!(state.en_passant_target, Some(sq(2, 3)));
        assert!(is_legal_move(&state, sq(3, 4), sq(2, 3), Player::White));

        // A waiting move by each side forfeits the capture.
        let later = play(&state, &[((7, 6), (5, 5)), ((2, 0), (3, 0))]);
        assert_eq!(later.en_passant_target, None);
        assert!(!is_legal_move(&later, sq(3, 4), sq(2, 3), Player::White));
    }

    #[test]
    fn castling_rights_never_return() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Player::White))
            .with_piece(sq(7, 7), Piece::new(PieceKind::Rook, Player::White))
            .with_piece(sq(0, 0), Piece::new(PieceKind::King, Player::Black));
        let state = GameState::from_board(board, Player::White, RoleMap::standard())
            .with_castling_rights(CastlingRights::full());
        assert!(is_legal_move(&state, sq(7, 4), sq(7, 6), Player::White));

        // Rook steps out and back; the king-side right stays gone.
        let state = play(&state, &[((7, 7), (6, 7)), ((0, 0), (0, 1)), ((6, 7), (7, 7)), ((0, 1), (0, 0))]);
        assert_eq!(state.board.piece_at(sq(7, 7)), Some(Piece::new(PieceKind::Rook, Player::White)));
        assert!(!is_legal_move(&state, sq(7, 4), sq(7, 6), Player::White));
    }

    #[test]
    fn king_return_does_not_restore_castling() {
        // The rooks move as knights here; castling still needs the nominal rook.
        let roles = RoleMap::try_from_roles([
            Role::Pawn,
            Role::Bishop,
            Role::Queen,
            Role::Knight,
            Role::Rook,
        ])
        .expect("valid permutation");
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Player::White))
            .with_piece(sq(7, 7), Piece::new(PieceKind::Rook, Player::White))
            .with_piece(sq(7, 0), Piece::new(PieceKind::Rook, Player::White))
            .with_piece(sq(0, 0), Piece::new(PieceKind::King, Player::Black));
        let state = GameState::from_board(board, Player::White, roles)
            .with_castling_rights(CastlingRights::full());
        assert!(is_legal_move(&state, sq(7, 4), sq(7, 6), Player::White));
        assert!(is_legal_move(&state, sq(7, 4), sq(7, 2), Player::White));

        let state = play(&state, &[((7, 4), (6, 4)), ((0, 0), (0, 1)), ((6, 4), (7, 4)), ((0, 1), (0, 0))]);
        assert_eq!(state.board, board);
        assert!(!is_legal_move(&state, sq(7, 4), sq(7, 6), Player::White));
        assert!(!is_legal_move(&state, sq(7, 4), sq(7, 2), Player::White));
        let white = state.castling_rights.for_player(Player::White);
        assert!(!white.king_side && !white.queen_side);
    }

    #[test]
    fn reverse_move_legality_depends_only_on_board_and_rights() {
        // Bishops move as knights: both sides hop out and back, and the game
        // is exactly where it started.
        let roles = RoleMap::try_from_roles([
            Role::Pawn,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
            Role::Queen,
        ])
        .expect("valid permutation");
        let start = GameState::new_game(roles);
        let out = play(&start, &[((7, 2), (5, 1)), ((0, 2), (2, 1))]);
        assert_eq!(out.en_passant_target, None);
        assert_eq!(out.castling_rights, CastlingRights::full());
        let back = play(&out, &[((5, 1), (7, 2)), ((2, 1), (0, 2))]);
        assert_eq!(back, start);

        // Random shuffled games: a quiet move by a symmetric role can always be
        // taken back, a pawn-role move never can, and only the en passant
        // target and the shrinking castling rights carry over.
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let roles = assign_roles(&mut rng);
            let mut state = GameState::new_game(roles);

            for _ in 0..80 {
                let mover = state.side_to_move;
                let moves = all_legal_moves(&state, mover);
                let Some(&(from, to)) = moves.choose(&mut rng) else {
                    break;
                };
                let role = state
                    .board
                    .piece_at(from)
                    .map(|piece| roles.role_of(piece.kind))
                    .expect("legal move starts on a piece");
                let applied = apply_move_with_promotion(&state, from, to, PieceKind::Queen);
                let next = applied.game_state;

                let double_step = role == Role::Pawn && from.row().abs_diff(to.row()) == 2;
                assert_eq!(next.en_passant_target.is_some(), double_step, "{from} -> {to}");
                for player in Player::ALL {
                    let was = state.castling_rights.for_player(player);
                    let now = next.castling_rights.for_player(player);
                    assert!(was.king_side || !now.king_side);
                    assert!(was.queen_side || !now.queen_side);
                }

                let quiet = applied.captured.is_none() && !applied.castled && applied.promoted_to.is_none();
                if quiet && role == Role::Pawn {
                    assert!(!is_legal_move(&next, to, from, mover), "pawn role {to} -> {from} reversed");
                } else if quiet && !is_check(&state.board, mover, &roles) {
                    assert!(is_legal_move(&next, to, from, mover), "{to} -> {from} should undo {from} -> {to}");
                    let undone = apply_move_with_promotion(&next, to, from, PieceKind::Queen);
                    assert_eq!(undone.game_state.board, state.board);
                }

                state = next;
            }
        }
    }

    #[test]
    fn moves_into_check_are_filtered() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Player::White))
            .with_piece(sq(0, 3), Piece::new(PieceKind::Rook, Player::Black))
            .with_piece(sq(0, 7), Piece::new(PieceKind::King, Player::Black));
        let state = GameState::from_board(board, Player::White, RoleMap::standard());
        let moves = legal_moves(&state, sq(7, 4));
        assert!(moves.iter().all(|s| s.col() != 3));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn generate_moves_modes_agree_without_pins() {
        let state = GameState::new_game(RoleMap::standard());
        for (from, _) in state.board.pieces_of(Player::White) {
            assert_eq!(
                generate_moves(&state, from, GenerationMode::Pseudo),
                generate_moves(&state, from, GenerationMode::Legal)
            );
        }
    }
}
